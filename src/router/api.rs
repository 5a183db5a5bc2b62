use crate::model::{StoreError, User, UserDraft, UserId, UserPatch, UserStore};
use axum::{
    Json, Router,
    extract::{FromRef, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match self {
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::EmailTaken => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

/// The REST endpoints, mounted under `/api` by [`super::new`].
pub fn routes<S>() -> Router<S>
where
    UserStore: FromRef<S>,
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "API is running successfully".to_string(),
        timestamp: Utc::now(),
    })
}

async fn list_users(State(store): State<UserStore>) -> Json<Vec<User>> {
    Json(store.list().await)
}

async fn create_user(
    State(store): State<UserStore>,
    Json(draft): Json<UserDraft>,
) -> Result<Json<User>, StoreError> {
    let user = store.create(draft).await?;
    tracing::info!(id = user.id, "created user");
    Ok(Json(user))
}

async fn get_user(
    State(store): State<UserStore>,
    Path(id): Path<UserId>,
) -> Result<Json<User>, StoreError> {
    Ok(Json(store.get(id).await?))
}

async fn update_user(
    State(store): State<UserStore>,
    Path(id): Path<UserId>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<User>, StoreError> {
    let user = store.update(id, patch).await?;
    tracing::info!(id, "updated user");
    Ok(Json(user))
}

async fn delete_user(
    State(store): State<UserStore>,
    Path(id): Path<UserId>,
) -> Result<impl IntoResponse, StoreError> {
    store.delete(id).await?;
    tracing::info!(id, "deleted user");
    Ok(Json(json!({ "message": "User deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{self, Body};
    use axum::http::{Method, Request, header};
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        routes().with_state(UserStore::default())
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    fn empty_request(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request")
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let (status, body) = send(&app(), empty_request(Method::GET, "/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn create_then_list() {
        let app = app();
        let (status, created) = send(
            &app,
            json_request(
                Method::POST,
                "/users",
                json!({ "name": "Ada", "email": "ada@example.com" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(created["id"], 1);
        assert_eq!(created["name"], "Ada");

        let (status, listed) = send(&app, empty_request(Method::GET, "/users")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().map(Vec::len), Some(1));
        assert_eq!(listed[0]["email"], "ada@example.com");
    }

    #[tokio::test]
    async fn duplicate_email_is_bad_request() {
        let app = app();
        let body = json!({ "name": "Ada", "email": "ada@example.com" });
        send(&app, json_request(Method::POST, "/users", body.clone())).await;
        let (status, error) = send(&app, json_request(Method::POST, "/users", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["detail"], "Email already registered");
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let (status, _) = send(
            &app(),
            json_request(Method::POST, "/users", json!({ "name": "Ada" })),
        )
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn update_and_delete() {
        let app = app();
        send(
            &app,
            json_request(
                Method::POST,
                "/users",
                json!({ "name": "Ada", "email": "ada@example.com" }),
            ),
        )
        .await;

        let (status, updated) = send(
            &app,
            json_request(Method::PUT, "/users/1", json!({ "name": "Ada Lovelace" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Ada Lovelace");
        assert_eq!(updated["email"], "ada@example.com");

        let (status, body) = send(&app, empty_request(Method::DELETE, "/users/1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "User deleted successfully");

        let (status, error) = send(&app, empty_request(Method::GET, "/users/1")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error["detail"], "User not found");
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let app = app();
        let (status, error) = send(
            &app,
            json_request(
                Method::PUT,
                "/users/7",
                json!({ "name": "x", "email": "x@example.com" }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error["detail"], "User not found");

        let (status, _) = send(&app, empty_request(Method::DELETE, "/users/7")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
