use crate::model::{Error, ErrorBody, HealthStatus, User, UserDraft, UserId};
use gloo::net::http::{Request, Response};
use http::StatusCode;

/// The REST contract the user list is kept in sync with.
///
/// Futures returned here are not `Send`, the browser runs them on its single
/// event loop.
#[allow(async_fn_in_trait)]
pub trait UserApi {
    async fn health(&self) -> Result<HealthStatus, Error>;
    async fn list_users(&self) -> Result<Vec<User>, Error>;
    async fn create_user(&self, user: &UserDraft) -> Result<User, Error>;
    async fn update_user(&self, id: UserId, user: &UserDraft) -> Result<User, Error>;
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}

/// [`UserApi`] over the browser `fetch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn user_url(&self, id: UserId) -> String {
        self.url(&format!("/users/{}", id))
    }
}

/// Turns a non 2xx response into [`Error::Status`], picking up `detail` from
/// the body when there is one.
async fn ensure_success(response: Response) -> Result<Response, Error> {
    if response.ok() {
        return Ok(response);
    }
    let status =
        StatusCode::from_u16(response.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let detail = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(ErrorBody::into_detail);
    Err(Error::Status { status, detail })
}

impl UserApi for HttpApi {
    async fn health(&self) -> Result<HealthStatus, Error> {
        let response = Request::get(&self.url("/health")).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let response = Request::get(&self.url("/users")).send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn create_user(&self, user: &UserDraft) -> Result<User, Error> {
        let response = Request::post(&self.url("/users"))
            .json(user)?
            .send()
            .await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn update_user(&self, id: UserId, user: &UserDraft) -> Result<User, Error> {
        let response = Request::put(&self.user_url(id)).json(user)?.send().await?;
        let response = ensure_success(response).await?;
        Ok(response.json().await?)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let response = Request::delete(&self.user_url(id)).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}
