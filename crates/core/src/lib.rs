//! Domain types and pure catalog logic for the Rick and Morty API browser.
//!
//! This crate has no I/O and no internal dependencies: entity records,
//! the multi-field filter predicate, pagination state, and route parsing
//! live here so they can be shared by any front end (CLI, future TUI,
//! tests) without dragging in an HTTP stack.

pub mod entity;
pub mod filter;
pub mod page;
pub mod route;
