use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

use crate::auth::session::SessionStore;
use crate::config::ApiConfig;
use crate::errors::{AppError, GENERIC_REQUEST_FAILURE};
use crate::routes::{Navigator, Surface};
use crate::{log_debug, log_error, log_warn};

/// Gateway ke backend BossUp.
///
/// Semua request didekorasi `Content-Type: application/json` dan, kalau ada
/// token di SessionStore, `Authorization: Bearer <token>`. Response 401
/// ditangani di sini (sesi dianggap expired): store dibersihkan, redirect ke
/// Login, dan pemanggil menerima `Ok(None)` — bukan error.
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Bangun client dengan timeout dari konfigurasi.
    pub fn new(
        config: &ApiConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            navigator,
        })
    }

    /// SessionStore yang dipakai client ini.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Navigator untuk redirect dari operasi level atas (mis. logout).
    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }

    /// Eksekusi satu request.
    ///
    /// `Ok(Some(T))` = sukses; `Ok(None)` = sesi expired di tengah jalan
    /// (401, sudah di-handle); `Err` = TransportFailure / RequestFailure.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<serde_json::Value>,
        extra_headers: &[(&str, &str)],
    ) -> Result<Option<T>, AppError> {
        let url = format!("{}{}", self.base_url, path);
        let trace_id = uuid::Uuid::new_v4().to_string();

        let mut req = self
            .http
            .request(method.clone(), &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if !query.is_empty() {
            req = req.query(query);
        }

        for (name, value) in extra_headers {
            req = req.header(*name, *value);
        }

        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }

        if let Some(ref b) = body {
            req = req.json(b);
        }

        log_debug!(
            "API",
            "Sending request",
            serde_json::json!({
                "method": method.as_str(),
                "path": path,
                "trace_id": trace_id
            })
        );

        // Kegagalan transport (DNS, koneksi, timeout) langsung propagate
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            log_warn!("API", "Got 401, session treated as expired");
            if let Err(e) = self.session.clear() {
                log_error!("SESSION", "Failed to clear session after 401", String::from(e));
            }
            self.navigator.go_to(Surface::Login);
            return Ok(None);
        }

        if !status.is_success() {
            let payload = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);

            let message = match payload.get("detail") {
                Some(serde_json::Value::String(s)) => s.clone(),
                Some(serde_json::Value::Null) | None => GENERIC_REQUEST_FAILURE.to_string(),
                // FastAPI kadang kirim detail berupa array validasi
                Some(other) => other.to_string(),
            };

            log_warn!("API", &format!("Request failed: {} {} -> {}", method, path, status));
            return Err(AppError::Request(message));
        }

        let parsed: T = response
            .json()
            .await
            .map_err(|e| AppError::Request(format!("Failed to parse server response: {}", e)))?;

        Ok(Some(parsed))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, AppError> {
        self.request(Method::GET, path, &[], None, &[]).await
    }

    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Option<T>, AppError> {
        self.request(Method::GET, path, query, None, &[]).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<Option<T>, AppError> {
        self.request(Method::POST, path, &[], Some(body), &[]).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<Option<T>, AppError> {
        self.request(Method::PUT, path, &[], Some(body), &[]).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::routes::RecordingNavigator;
    use tempfile::TempDir;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub(crate) struct TestHarness {
        pub client: ApiClient,
        pub session: Arc<SessionStore>,
        pub navigator: Arc<RecordingNavigator>,
        _dir: TempDir,
    }

    pub(crate) fn harness(base_url: &str) -> TestHarness {
        let dir = tempfile::tempdir().unwrap();
        let session = Arc::new(SessionStore::open(&dir.path().join("session.json")));
        let navigator = Arc::new(RecordingNavigator::new());
        let config = ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 5,
        };
        let client = ApiClient::new(&config, session.clone(), navigator.clone()).unwrap();
        TestHarness { client, session, navigator, _dir: dir }
    }

    #[tokio::test]
    async fn success_returns_parsed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        let h = harness(&server.uri());
        let result: Option<serde_json::Value> = h.client.get("/ping").await.unwrap();
        assert_eq!(result.unwrap()["ok"], true);
        assert!(h.navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn bearer_token_is_attached_when_present() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/secure"))
            .and(header("authorization", "Bearer tok-abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let h = harness(&server.uri());
        h.session.set_token("tok-abc").unwrap();
        let result: Option<serde_json::Value> = h.client.get("/secure").await.unwrap();
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn unauthorized_clears_session_and_redirects() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/campaigns/my"))
            .respond_with(ResponseTemplate::new(401).set_body_json(
                serde_json::json!({"detail": "Token expired"}),
            ))
            .mount(&server)
            .await;

        let h = harness(&server.uri());
        h.session.set_token("stale").unwrap();

        let result: Result<Option<serde_json::Value>, AppError> =
            h.client.get("/campaigns/my").await;

        // Sentinel "no result", bukan error
        assert!(matches!(result, Ok(None)));
        assert!(!h.session.is_authenticated());
        assert_eq!(h.navigator.last(), Some(Surface::Login));
    }

    #[tokio::test]
    async fn failure_uses_server_detail_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/campaigns/nope"))
            .respond_with(ResponseTemplate::new(404).set_body_json(
                serde_json::json!({"detail": "Campaign not found"}),
            ))
            .mount(&server)
            .await;

        let h = harness(&server.uri());
        let err = h
            .client
            .get::<serde_json::Value>("/campaigns/nope")
            .await
            .unwrap_err();

        match err {
            AppError::Request(msg) => assert_eq!(msg, "Campaign not found"),
            other => panic!("expected Request, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn failure_without_detail_uses_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payments/initiate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let h = harness(&server.uri());
        let err = h
            .client
            .post::<serde_json::Value>("/payments/initiate", serde_json::json!({}))
            .await
            .unwrap_err();

        match err {
            AppError::Request(msg) => assert_eq!(msg, GENERIC_REQUEST_FAILURE),
            other => panic!("expected Request, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn query_params_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/campaigns"))
            .and(query_param("status", "LIVE"))
            .and(query_param("country", "KE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                serde_json::json!({"campaigns": [], "total": 0}),
            ))
            .expect(1)
            .mount(&server)
            .await;

        let h = harness(&server.uri());
        let result: Option<serde_json::Value> = h
            .client
            .get_with_query(
                "/campaigns",
                &[("status", "LIVE".to_string()), ("country", "KE".to_string())],
            )
            .await
            .unwrap();
        assert!(result.is_some());
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        // Port yang tidak listen
        let h = harness("http://127.0.0.1:9");
        let err = h.client.get::<serde_json::Value>("/ping").await.unwrap_err();
        assert!(matches!(err, AppError::Transport(_)));
    }
}
