use axum::{
    extract::{Path, Query},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// A form or query field, as echoed back by `/form` and `/query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub value: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/hello", get(hello))
        .route("/echo", post(echo))
        .route("/form", post(form))
        .route("/query", get(query))
        .route("/status/{code}", get(status))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn hello() -> ([(header::HeaderName, &'static str); 1], &'static str) {
    ([(header::CONTENT_TYPE, "text/plain")], "hello")
}

/// Returns the raw request body, and the Content-Type it arrived with in
/// `x-received-content-type`.
async fn echo(headers: HeaderMap, body: String) -> ([(&'static str, String); 1], String) {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    ([("x-received-content-type", content_type)], body)
}

async fn form(Form(pairs): Form<Vec<(String, String)>>) -> Json<Vec<Field>> {
    Json(to_fields(pairs))
}

async fn query(Query(pairs): Query<Vec<(String, String)>>) -> Json<Vec<Field>> {
    Json(to_fields(pairs))
}

async fn status(Path(code): Path<u16>) -> Result<StatusCode, StatusCode> {
    StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)
}

fn to_fields(pairs: Vec<(String, String)>) -> Vec<Field> {
    pairs
        .into_iter()
        .map(|(name, value)| Field { name, value })
        .collect()
}
