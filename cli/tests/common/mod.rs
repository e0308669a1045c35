//! Common test utilities and fixtures
//!
//! Provides an in-process mock of the three Figma API endpoints the exporter
//! uses, served by axum on an ephemeral port.

#![allow(dead_code)]

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use serde_json::{Value, json};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const TOKEN: &str = "test-token";
pub const FILE: &str = "FILE123";
pub const PAGE: &str = "0:1";

pub const ICON_SVG: &str = r##"<svg width="24" height="24" viewBox="0 0 24 24" fill="none" xmlns="http://www.w3.org/2000/svg"><path d="M12 2L2 22h20z" fill="#F24E1E"/></svg>"##;

struct MockState {
    base: String,
    document: Value,
    tree_status: Option<StatusCode>,
    image_error: Option<String>,
    missing_urls: HashSet<String>,
    svgs: HashMap<String, String>,
    delays: HashMap<String, u64>,
    requests: Mutex<Vec<String>>,
}

/// Builder for a mock Figma server
#[derive(Default)]
pub struct MockFigmaBuilder {
    document: Value,
    tree_status: Option<StatusCode>,
    image_error: Option<String>,
    missing_urls: HashSet<String>,
    svgs: HashMap<String, String>,
    delays: HashMap<String, u64>,
}

impl MockFigmaBuilder {
    /// Serve a document whose page `0:1` has the given children
    pub fn page(mut self, children: Value) -> Self {
        self.document = document(children);
        self
    }

    pub fn tree_status(mut self, status: StatusCode) -> Self {
        self.tree_status = Some(status);
        self
    }

    pub fn image_error(mut self, message: &str) -> Self {
        self.image_error = Some(message.to_string());
        self
    }

    /// Return `null` as the render URL for `id`
    pub fn missing_url(mut self, id: &str) -> Self {
        self.missing_urls.insert(id.to_string());
        self
    }

    pub fn svg(mut self, id: &str, svg: &str) -> Self {
        self.svgs.insert(id.to_string(), svg.to_string());
        self
    }

    /// Delay the SVG download of `id`
    pub fn delay(mut self, id: &str, millis: u64) -> Self {
        self.delays.insert(id.to_string(), millis);
        self
    }

    pub async fn start(self) -> MockFigma {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let base = format!("http://{}", listener.local_addr().unwrap());

        let state = Arc::new(MockState {
            base: base.clone(),
            document: self.document,
            tree_status: self.tree_status,
            image_error: self.image_error,
            missing_urls: self.missing_urls,
            svgs: self.svgs,
            delays: self.delays,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/files/{file}", get(files))
            .route("/v1/images/{file}", get(images))
            .route("/svg/{id}", get(svg))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        MockFigma { base, state }
    }
}

pub struct MockFigma {
    pub base: String,
    state: Arc<MockState>,
}

impl MockFigma {
    pub fn builder() -> MockFigmaBuilder {
        MockFigmaBuilder::default()
    }

    /// Request paths received so far, in arrival order
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }
}

/// Wrap page children in a document with a cover page and the target page
pub fn document(children: Value) -> Value {
    json!({
        "id": "0:0",
        "name": "Document",
        "type": "DOCUMENT",
        "children": [
            { "id": "0:2", "name": "Cover", "type": "CANVAS", "children": [] },
            { "id": PAGE, "name": "Icons", "type": "CANVAS", "children": children }
        ]
    })
}

pub fn component(id: &str, name: &str) -> Value {
    json!({ "id": id, "name": name, "type": "COMPONENT", "children": [
        { "id": format!("{}-v", id), "name": "Vector", "type": "VECTOR" }
    ] })
}

pub fn component_set(id: &str, name: &str, children: Value) -> Value {
    json!({ "id": id, "name": name, "type": "COMPONENT_SET", "children": children })
}

pub fn frame(id: &str, children: Value) -> Value {
    json!({ "id": id, "name": "Frame", "type": "FRAME", "children": children })
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("x-figma-token")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == TOKEN)
}

async fn files(
    State(state): State<Arc<MockState>>,
    Path(file): Path<String>,
    headers: HeaderMap,
) -> Response {
    state.requests.lock().unwrap().push(format!("/v1/files/{}", file));

    if let Some(status) = state.tree_status {
        return status.into_response();
    }
    if !authorized(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }
    if file != FILE {
        return StatusCode::NOT_FOUND.into_response();
    }

    axum::Json(json!({ "name": "Design System", "document": state.document })).into_response()
}

async fn images(
    State(state): State<Arc<MockState>>,
    Path(file): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    state.requests.lock().unwrap().push(format!("/v1/images/{}", file));

    if !authorized(&headers) {
        return StatusCode::FORBIDDEN.into_response();
    }
    if query.get("format").map(String::as_str) != Some("svg") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if let Some(message) = &state.image_error {
        return axum::Json(json!({ "err": message, "images": {} })).into_response();
    }

    let images: serde_json::Map<String, Value> = query
        .get("ids")
        .map(|ids| ids.split(',').collect::<Vec<_>>())
        .unwrap_or_default()
        .into_iter()
        .map(|id| {
            let url = if state.missing_urls.contains(id) {
                Value::Null
            } else {
                Value::String(format!("{}/svg/{}", state.base, id))
            };
            (id.to_string(), url)
        })
        .collect();

    axum::Json(json!({ "err": null, "images": images })).into_response()
}

/// Stands in for the pre-signed render host, which must never see the token
async fn svg(
    State(state): State<Arc<MockState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if headers.contains_key("x-figma-token") {
        return StatusCode::BAD_REQUEST.into_response();
    }
    if let Some(millis) = state.delays.get(&id) {
        tokio::time::sleep(Duration::from_millis(*millis)).await;
    }
    state.requests.lock().unwrap().push(format!("/svg/{}", id));

    state
        .svgs
        .get(&id)
        .cloned()
        .unwrap_or_else(|| ICON_SVG.to_string())
        .into_response()
}
