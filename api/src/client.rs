//! # REST client
//!
//! [`Client`] is a thin typed layer over [`reqwest`] that every view talks
//! through. It owns two pieces of shared state, both behind `Arc` so clones
//! handed to different components stay in sync:
//!
//! - the bearer token, attached as `Authorization: Bearer <token>` to every
//!   request while present;
//! - the `on_unauthorized` handler, invoked once per 401 response.
//!
//! ## The 401 contract
//!
//! Any 401, on any endpoint, means the session is gone. The client clears its
//! own token, fires the handler (the UI installs one that wipes the persisted
//! session and sends the operator back to the login screen), and returns
//! [`ApiError::Unauthorized`]. There is no refresh, no retry.
//!
//! Other non-2xx responses become [`ApiError::Status`] with the message dug
//! out of the body, which is what ends up in an error toast.

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{
    DashboardSummary, Deal, LoginRequest, LoginResponse, Schedule, ScheduleInput, ScraperJob,
    ScraperSource, TelegramSettings, UserInfo, WhatsAppSettings,
};

type UnauthorizedHandler = Box<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    token: Arc<Mutex<Option<String>>>,
    on_unauthorized: Arc<Mutex<Option<UnauthorizedHandler>>>,
}

impl Client {
    /// `base_url` includes the version prefix, e.g. `https://host/api/v1`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: Arc::new(Mutex::new(None)),
            on_unauthorized: Arc::new(Mutex::new(None)),
        }
    }

    pub fn set_token(&self, token: Option<String>) {
        *self.token.lock().unwrap() = token;
    }

    pub fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    /// Install the handler run on every 401. Replaces any previous handler.
    pub fn on_unauthorized(&self, handler: impl Fn() + Send + Sync + 'static) {
        *self.on_unauthorized.lock().unwrap() = Some(Box::new(handler));
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token and send, translating 401/non-2xx into errors.
    async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let request = match self.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!("got 401, dropping session");
            self.set_token(None);
            if let Some(handler) = self.on_unauthorized.lock().unwrap().as_ref() {
                handler();
            }
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            let code = status.as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(code, &body));
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.get(self.url(path))).await?;
        Self::decode(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.post(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    async fn put_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(self.http.put(self.url(path)).json(body)).await?;
        Self::decode(response).await
    }

    /// POST with no request body, response decoded.
    async fn post_decoded<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.http.post(self.url(path))).await?;
        Self::decode(response).await
    }

    /// POST with no request body, response body ignored.
    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.post(self.url(path))).await?;
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(path))).await?;
        Ok(())
    }

    // --- auth ---

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post_json("/auth/login", &body).await
    }

    pub async fn current_user(&self) -> Result<UserInfo, ApiError> {
        self.get_json("/auth/me").await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty("/auth/logout").await
    }

    // --- dashboard ---

    pub async fn dashboard_summary(&self) -> Result<DashboardSummary, ApiError> {
        self.get_json("/dashboard/summary").await
    }

    pub async fn recent_deals(&self, limit: usize) -> Result<Vec<Deal>, ApiError> {
        self.get_json(&format!("/deals/recent?limit={limit}")).await
    }

    // --- scrapers ---

    pub async fn scraper_sources(&self) -> Result<Vec<ScraperSource>, ApiError> {
        self.get_json("/scrapers/sources").await
    }

    pub async fn run_scraper(&self, source_id: &str) -> Result<ScraperJob, ApiError> {
        self.post_decoded(&format!("/scrapers/{source_id}/run")).await
    }

    pub async fn scraper_jobs(&self, limit: usize) -> Result<Vec<ScraperJob>, ApiError> {
        self.get_json(&format!("/scrapers/jobs?limit={limit}")).await
    }

    // --- schedules ---

    pub async fn schedules(&self) -> Result<Vec<Schedule>, ApiError> {
        self.get_json("/schedules").await
    }

    pub async fn create_schedule(&self, input: &ScheduleInput) -> Result<Schedule, ApiError> {
        self.post_json("/schedules", input).await
    }

    pub async fn update_schedule(
        &self,
        id: &str,
        input: &ScheduleInput,
    ) -> Result<Schedule, ApiError> {
        self.put_json(&format!("/schedules/{id}"), input).await
    }

    pub async fn delete_schedule(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/schedules/{id}")).await
    }

    pub async fn toggle_schedule(&self, id: &str) -> Result<Schedule, ApiError> {
        self.post_decoded(&format!("/schedules/{id}/toggle")).await
    }

    // --- integrations ---

    pub async fn telegram_settings(&self) -> Result<TelegramSettings, ApiError> {
        self.get_json("/integrations/telegram").await
    }

    pub async fn save_telegram_settings(
        &self,
        settings: &TelegramSettings,
    ) -> Result<TelegramSettings, ApiError> {
        self.put_json("/integrations/telegram", settings).await
    }

    pub async fn send_telegram_test(&self) -> Result<(), ApiError> {
        self.post_empty("/integrations/telegram/test").await
    }

    pub async fn whatsapp_settings(&self) -> Result<WhatsAppSettings, ApiError> {
        self.get_json("/integrations/whatsapp").await
    }

    pub async fn save_whatsapp_settings(
        &self,
        settings: &WhatsAppSettings,
    ) -> Result<WhatsAppSettings, ApiError> {
        self.put_json("/integrations/whatsapp", settings).await
    }

    pub async fn send_whatsapp_test(&self) -> Result<(), ApiError> {
        self.post_empty("/integrations/whatsapp/test").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = Client::new("http://localhost:8800/api/v1/");
        assert_eq!(client.url("/schedules"), "http://localhost:8800/api/v1/schedules");
    }

    #[test]
    fn clones_share_the_token() {
        let client = Client::new("http://localhost:8800/api/v1");
        let clone = client.clone();
        client.set_token(Some("t-1".into()));
        assert_eq!(clone.token().as_deref(), Some("t-1"));
        clone.set_token(None);
        assert_eq!(client.token(), None);
    }
}
