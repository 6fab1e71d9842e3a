//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{LoginRequest, LoginResponse};
use shared::models::{Room, RoomStatus, RoomStatusChange, Stay, StayCreate};

/// Error body shape used by the backend: `{"detail": "..."}`
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    detail: String,
}

/// Backend API surface consumed by the front desk.
///
/// This is the transport seam: production code uses [`HttpApi`], tests
/// substitute a recording mock.
#[async_trait]
pub trait Api: Send + Sync {
    /// `GET habitaciones/` - the full room directory
    async fn list_rooms(&self) -> ClientResult<Vec<Room>>;

    /// `GET habitaciones/{id}`
    async fn get_room(&self, id: i64) -> ClientResult<Room>;

    /// `PUT habitaciones/{id}/estado` - request a status transition
    async fn set_room_status(&self, id: i64, status: RoomStatus) -> ClientResult<Room>;

    /// `GET habitaciones/{id}/hospedaje-activo` - current stay for an occupied room
    async fn active_stay(&self, room_id: i64) -> ClientResult<Stay>;

    /// `POST hospedajes/` - create a stay record
    async fn create_stay(&self, stay: &StayCreate) -> ClientResult<Stay>;

    /// `POST hospedajes/{id}/checkout` - close a stay
    async fn checkout_stay(&self, stay_id: i64) -> ClientResult<Stay>;
}

/// HTTP client for making network requests to the hotel backend
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpApi {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request without body
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.post(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.put(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Non-2xx bodies carry `{"detail": "..."}`; the detail message is
    /// surfaced verbatim so the operator sees what the server said.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|b| b.detail)
                .unwrap_or(text);

            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::CONFLICT => Err(ClientError::Conflict(message)),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(message))
                }
                _ => Err(ClientError::Server(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Auth API ==========

    /// Login with email and password; stores the issued token
    pub async fn login(&mut self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.post("auth/login", &request).await?;
        self.token = Some(response.token.clone());
        Ok(response)
    }

    /// Logout and drop the local token
    pub async fn logout(&mut self) -> ClientResult<()> {
        // Token is dropped locally even if the server call fails;
        // a dead token is worthless either way.
        let result = self.post_empty::<serde_json::Value>("auth/logout").await;
        self.token = None;
        result.map(|_| ())
    }
}

#[async_trait]
impl Api for HttpApi {
    async fn list_rooms(&self) -> ClientResult<Vec<Room>> {
        self.get("habitaciones/").await
    }

    async fn get_room(&self, id: i64) -> ClientResult<Room> {
        self.get(&format!("habitaciones/{}", id)).await
    }

    async fn set_room_status(&self, id: i64, status: RoomStatus) -> ClientResult<Room> {
        let body = RoomStatusChange { status };
        self.put(&format!("habitaciones/{}/estado", id), &body).await
    }

    async fn active_stay(&self, room_id: i64) -> ClientResult<Stay> {
        self.get(&format!("habitaciones/{}/hospedaje-activo", room_id))
            .await
    }

    async fn create_stay(&self, stay: &StayCreate) -> ClientResult<Stay> {
        self.post("hospedajes/", stay).await
    }

    async fn checkout_stay(&self, stay_id: i64) -> ClientResult<Stay> {
        self.post_empty(&format!("hospedajes/{}/checkout", stay_id))
            .await
    }
}
