use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::credentials::Credentials;

mod error;
pub mod schema;

pub use self::error::{AuthError, ClientError};
use self::schema::{AuthResponse, AuthenticationRequestBody, PatchOperation};

const AUTHENTICATION_PATH: &str = "/api/User/Authentication";
const CREATE_FOOD_PATH: &str = "/api/Food/Create";
const EDIT_FOOD_PATH: &str = "/api/Food/Edit";
const ALL_FOODS_PATH: &str = "/api/Food/All";
const DELETE_FOOD_PATH: &str = "/api/Food/Delete";

/// Status and raw body of a service reply.
///
/// The body is kept as text so callers can assert on payloads that do not
/// match the shape they expected.
#[derive(Debug, Clone)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: String,
}

impl ApiReply {
    /// Never logs the body: authentication replies carry the access token.
    async fn read(response: reqwest::Response) -> Result<Self, ClientError> {
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, "received reply");
        Ok(Self { status, body })
    }

    async fn read_logged(response: reqwest::Response) -> Result<Self, ClientError> {
        let reply = Self::read(response).await?;
        tracing::debug!(body = %reply.body, "reply body");
        Ok(reply)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

fn with_tracing(client: reqwest::Client) -> ClientWithMiddleware {
    ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .build()
}

fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Anonymous client, only able to exchange credentials for a session.
#[derive(Clone)]
pub struct FoodyClient {
    http_client: ClientWithMiddleware,
    base_url: String,
}

impl FoodyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: with_tracing(reqwest::Client::new()),
            base_url: base_url.into(),
        }
    }

    #[tracing::instrument(name = "Authenticate", skip(self, credentials), fields(username = %credentials.username))]
    pub async fn authenticate(
        &self,
        credentials: &Credentials,
    ) -> Result<FoodySession, AuthError> {
        let body = AuthenticationRequestBody {
            user_name: &credentials.username,
            password: credentials.password.expose_secret(),
        };

        let response = self
            .http_client
            .post(endpoint(&self.base_url, AUTHENTICATION_PATH))
            .json(&body)
            .send()
            .await
            .map_err(ClientError::from)?;
        let reply = ApiReply::read(response).await?;

        if reply.status != StatusCode::OK {
            return Err(AuthError::UnexpectedResponse {
                status: reply.status,
                body: reply.body,
            });
        }

        let token = reply
            .json::<AuthResponse>()?
            .access_token
            .filter(|token| !token.trim().is_empty())
            .ok_or(AuthError::BlankToken)?;

        tracing::info!("obtained access token");
        Ok(FoodySession::new(&self.base_url, Secret::new(token))?)
    }
}

/// Client whose every request carries `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct FoodySession {
    http_client: ClientWithMiddleware,
    base_url: String,
}

impl FoodySession {
    pub fn new(base_url: &str, token: Secret<String>) -> Result<Self, ClientError> {
        let mut authorization =
            HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);

        let client = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http_client: with_tracing(client),
            base_url: base_url.to_owned(),
        })
    }

    /// Accepts any body so callers can send payloads a valid food cannot express.
    #[tracing::instrument(name = "Create food", skip(self, body))]
    pub async fn create_food<B>(&self, body: &B) -> Result<ApiReply, ClientError>
    where
        B: Serialize + ?Sized,
    {
        let response = self
            .http_client
            .post(endpoint(&self.base_url, CREATE_FOOD_PATH))
            .json(body)
            .send()
            .await?;

        ApiReply::read_logged(response).await
    }

    #[tracing::instrument(name = "Edit food", skip(self, operations))]
    pub async fn edit_food(
        &self,
        food_id: &str,
        operations: &[PatchOperation],
    ) -> Result<ApiReply, ClientError> {
        let response = self
            .http_client
            .patch(endpoint(&self.base_url, &format!("{EDIT_FOOD_PATH}/{food_id}")))
            .json(operations)
            .send()
            .await?;

        ApiReply::read_logged(response).await
    }

    #[tracing::instrument(name = "List foods", skip(self))]
    pub async fn all_foods(&self) -> Result<ApiReply, ClientError> {
        let response = self
            .http_client
            .get(endpoint(&self.base_url, ALL_FOODS_PATH))
            .send()
            .await?;

        ApiReply::read_logged(response).await
    }

    #[tracing::instrument(name = "Delete food", skip(self))]
    pub async fn delete_food(&self, food_id: &str) -> Result<ApiReply, ClientError> {
        let response = self
            .http_client
            .delete(endpoint(&self.base_url, &format!("{DELETE_FOOD_PATH}/{food_id}")))
            .send()
            .await?;

        ApiReply::read_logged(response).await
    }
}
