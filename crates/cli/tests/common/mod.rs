//! Shared helpers for view tests: a local stub API server and JSON
//! fixtures matching the remote API's shapes.

use std::sync::{Arc, Mutex};

use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Records the path of every request the stub server handles.
#[derive(Clone, Default)]
pub struct Recorder {
    paths: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn record(&self, path: impl Into<String>) {
        self.paths.lock().unwrap().push(path.into());
    }

    pub fn hits(&self) -> usize {
        self.paths.lock().unwrap().len()
    }

    pub fn hits_with_prefix(&self, prefix: &str) -> usize {
        self.paths
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.starts_with(prefix))
            .count()
    }
}

/// Bind an ephemeral local port, returning the listener and the base URL.
/// Binding before building the router lets fixtures embed related-resource
/// URLs that point back at the stub.
pub async fn bind() -> (TcpListener, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    (listener, base)
}

/// Serve the stub router in the background.
pub fn serve(listener: TcpListener, router: Router) {
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
}

/// A character payload with explicit status and episode URLs.
pub fn character_json(id: u32, name: &str, status: &str, episodes: &[String]) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
        "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": episodes,
        "url": format!("https://rickandmortyapi.com/api/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

/// An episode payload in the remote API's documented shape.
pub fn episode_json(id: u32, code: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Episode {id}"),
        "air_date": "December 2, 2013",
        "episode": code,
        "characters": ["https://rickandmortyapi.com/api/character/1"],
        "url": format!("https://rickandmortyapi.com/api/episode/{id}"),
        "created": "2017-11-10T12:56:33.798Z"
    })
}

/// A location payload with explicit resident URLs.
pub fn location_json(id: u32, name: &str, residents: &[String]) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": "Planet",
        "dimension": "Dimension C-137",
        "residents": residents,
        "url": format!("https://rickandmortyapi.com/api/location/{id}"),
        "created": "2017-11-10T12:42:04.162Z"
    })
}

/// Wrap results in the collection envelope `{ info, results }`.
pub fn paged(pages: u32, results: Vec<Value>) -> Value {
    json!({
        "info": {
            "count": results.len(),
            "pages": pages,
            "next": null,
            "prev": null
        },
        "results": results
    })
}
