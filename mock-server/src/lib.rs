use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub use axum::http::StatusCode as Status;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
    pub image: String,
}

/// What `GET /users/{id}` answers for one id.
#[derive(Clone, Debug)]
pub enum Fixture {
    /// 200 with the user as JSON.
    User(User),
    /// The bare status code with an empty body.
    Status(StatusCode),
    /// 200 with this body verbatim, labelled as JSON.
    Raw(String),
}

pub type Db = Arc<HashMap<String, Fixture>>;

pub fn jane_doe() -> User {
    User {
        id: 2,
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        age: 28,
        email: "jane@x.com".to_string(),
        image: "http://x/img.png".to_string(),
    }
}

pub fn default_fixtures() -> HashMap<String, Fixture> {
    HashMap::from([("2".to_string(), Fixture::User(jane_doe()))])
}

pub fn app() -> Router {
    app_with(default_fixtures())
}

pub fn app_with(fixtures: HashMap<String, Fixture>) -> Router {
    let db: Db = Arc::new(fixtures);
    Router::new()
        .route("/users/{id}", get(get_user))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(
    listener: TcpListener,
    fixtures: HashMap<String, Fixture>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(fixtures)).await
}

async fn get_user(State(db): State<Db>, Path(id): Path<String>) -> Response {
    match db.get(&id) {
        Some(Fixture::User(user)) => Json(user.clone()).into_response(),
        Some(Fixture::Status(status)) => (*status).into_response(),
        Some(Fixture::Raw(body)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "message": format!("User with id '{id}' not found") })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_to_camel_case_json() {
        let json = serde_json::to_value(jane_doe()).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["lastName"], "Doe");
        assert_eq!(json["email"], "jane@x.com");
        assert_eq!(json["image"], "http://x/img.png");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn default_fixtures_hold_user_two() {
        let fixtures = default_fixtures();
        assert_eq!(fixtures.len(), 1);
        assert!(matches!(fixtures.get("2"), Some(Fixture::User(u)) if u.first_name == "Jane"));
    }
}
