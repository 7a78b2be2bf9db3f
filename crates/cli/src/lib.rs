//! Terminal front end for the Rick and Morty catalog.
//!
//! Views own fetched state and a stale-response guard; rendering is a pure
//! function of (view state, theme). The binary parses a route path plus
//! search/filter flags, dispatches to the matching view, and prints its
//! rendered output.

pub mod args;
pub mod config;
pub mod render;
pub mod router;
pub mod theme;
pub mod views;
