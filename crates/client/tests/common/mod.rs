//! Shared helpers for client integration tests: a local stub API server
//! built with axum, plus JSON fixtures matching the remote API's shapes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Router;
use serde_json::{json, Value};

/// One request seen by the stub server.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
}

/// Records every request the stub server handles.
#[derive(Clone, Default)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl Recorder {
    pub fn record(&self, path: impl Into<String>, query: HashMap<String, String>) {
        self.requests.lock().unwrap().push(RecordedRequest {
            path: path.into(),
            query,
        });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Bind the stub router on an ephemeral local port and serve it in the
/// background. Returns the base URL to point an `ApiClient` at.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A character payload in the remote API's documented shape.
pub fn character_json(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
        "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": [
            "https://rickandmortyapi.com/api/episode/1",
            "https://rickandmortyapi.com/api/episode/2"
        ],
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

/// A location payload in the remote API's documented shape.
pub fn location_json(id: u32, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "type": "Planet",
        "dimension": "Dimension C-137",
        "residents": ["https://rickandmortyapi.com/api/character/1"],
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
