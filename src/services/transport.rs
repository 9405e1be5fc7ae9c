// ============================================================================
// TRANSPORT - SOLO HTTP (gloo-net), sin política de errores
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, RequestCredentials};

use crate::config::AppConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Petición saliente (path relativo a la URL base)
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            ..Self::get(path)
        }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Respuesta cruda: status + cuerpo en texto
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Envío de peticiones. `Err` = no hubo respuesta (red, timeout, CORS...).
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String>;
}

/// Transporte del navegador basado en `fetch`
pub struct GlooTransport {
    base_url: String,
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(base_url: &str, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_ms,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.api_base_url(), config.request_timeout_ms)
    }
}

#[async_trait(?Send)]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, String> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
        }
        .credentials(RequestCredentials::Include);

        if !request.query.is_empty() {
            builder = builder.query(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        // Timeout: abortar el fetch cuando vence el Timeout
        let controller = AbortController::new()
            .map_err(|e| format!("AbortController error: {:?}", e))?;
        let signal = controller.signal();
        builder = builder.abort_signal(Some(&signal));
        let timeout = Timeout::new(self.timeout_ms, move || controller.abort());

        let built = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(|e| format!("Request build error: {}", e))?;

        let result = built.send().await;
        drop(timeout);

        let response = result.map_err(|e| {
            log::warn!("⚠️ [HTTP] {} sin respuesta: {}", request.path, e);
            format!("Network error: {}", e)
        })?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        log::debug!("🌐 [HTTP] {:?} {} → {}", request.method, request.path, status);

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builders() {
        let req = ApiRequest::post("/api/candidates/x/unlock")
            .with_header("Cookie", "hr_auth=abc")
            .with_query(vec![("page".into(), "2".into())]);
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.header("cookie"), Some("hr_auth=abc"));
        assert_eq!(req.query.len(), 1);
        assert!(req.body.is_none());
    }

    #[test]
    fn test_success_range() {
        assert!(ApiResponse { status: 200, body: String::new() }.is_success());
        assert!(ApiResponse { status: 204, body: String::new() }.is_success());
        assert!(!ApiResponse { status: 302, body: String::new() }.is_success());
        assert!(!ApiResponse { status: 401, body: String::new() }.is_success());
    }
}
