// ============================================================================
// API CLIENT - Gateway único hacia el backend
// ============================================================================
// Saliente: adjunta el token `hr_auth` si existe.
// Entrante: 401 → borra token + /unauthorized; 403 → /waiting-approval o
// /forbidden. El error SIEMPRE se devuelve al llamador después de navegar.
// 402/409 (unlock) los decide la página, no el gateway.
// ============================================================================

use std::rc::Rc;

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config::CONFIG;
use crate::models::{
    ApiErrorBody, AuditLogResponse, CandidateContact, CandidateDetail, CandidateListParams,
    CandidateListResponse, LoginResponse, MeResponse, TelegramAuthData,
};
use crate::router::Route;
use crate::services::credentials::{CredentialStore, LocalStorageCredentials};
use crate::services::navigation::{BrowserNavigator, Navigator};
use crate::services::transport::{ApiRequest, ApiResponse, GlooTransport, Transport};
use crate::utils::constants::{AUTH_COOKIE_NAME, PENDING_APPROVAL_CODE};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No hubo respuesta (red, timeout, CORS)
    #[error("Network error: {0}")]
    Transport(String),
    #[error("HTTP {status}: {}", .code.as_deref().unwrap_or("unknown_error"))]
    Status { status: u16, code: Option<String> },
    #[error("Parse error: {0}")]
    Decode(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Código `error` del cuerpo JSON
    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Status { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Mensaje para el usuario: código del backend o el texto por defecto de la página
    pub fn user_message(&self, default: &str) -> String {
        self.code().unwrap_or(default).to_string()
    }

    /// El gateway ya navegó por este error (401/403)
    pub fn was_redirected(&self) -> bool {
        match self {
            ApiError::Status { status, code } => redirect_for(*status, code.as_deref()).is_some(),
            _ => false,
        }
    }
}

/// Redirección global decidida por el gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRedirect {
    pub route: Route,
    pub clear_credential: bool,
}

/// Política de errores globales: solo 401 y 403
pub fn redirect_for(status: u16, code: Option<&str>) -> Option<ErrorRedirect> {
    match status {
        401 => Some(ErrorRedirect {
            route: Route::Unauthorized,
            clear_credential: true,
        }),
        403 if code == Some(PENDING_APPROVAL_CODE) => Some(ErrorRedirect {
            route: Route::WaitingApproval,
            clear_credential: false,
        }),
        403 => Some(ErrorRedirect {
            route: Route::Forbidden,
            clear_credential: false,
        }),
        _ => None,
    }
}

/// Cliente API. Los clones comparten transporte, credenciales y navegador.
#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn Transport>,
    credentials: Rc<dyn CredentialStore>,
    navigator: Rc<dyn Navigator>,
}

impl ApiClient {
    pub fn new(
        transport: Rc<dyn Transport>,
        credentials: Rc<dyn CredentialStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            transport,
            credentials,
            navigator,
        }
    }

    /// Cliente configurado para el navegador (fetch + localStorage + history)
    pub fn browser() -> Self {
        Self::new(
            Rc::new(GlooTransport::from_config(&CONFIG)),
            Rc::new(LocalStorageCredentials),
            Rc::new(BrowserNavigator),
        )
    }

    pub fn navigator(&self) -> Rc<dyn Navigator> {
        self.navigator.clone()
    }

    pub fn credentials(&self) -> Rc<dyn CredentialStore> {
        self.credentials.clone()
    }

    /// Enviar una petición aplicando token + política de errores
    pub async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let request = match self.credentials.token() {
            Some(token) => {
                request.with_header("Cookie", &format!("{}={}", AUTH_COOKIE_NAME, token))
            }
            None => request,
        };
        let path = request.path.clone();

        // Sin respuesta: se propaga tal cual, sin política
        let response = self
            .transport
            .send(request)
            .await
            .map_err(ApiError::Transport)?;

        if response.is_success() {
            return Ok(response);
        }

        let code = serde_json::from_str::<ApiErrorBody>(&response.body)
            .ok()
            .and_then(|b| b.error);
        log::warn!(
            "⚠️ [API] {} → HTTP {} ({})",
            path,
            response.status,
            code.as_deref().unwrap_or("-")
        );

        if let Some(redirect) = redirect_for(response.status, code.as_deref()) {
            self.apply_redirect(&redirect);
        }

        Err(ApiError::Status {
            status: response.status,
            code,
        })
    }

    fn apply_redirect(&self, redirect: &ErrorRedirect) {
        if redirect.clear_credential {
            self.credentials.clear_token();
        }
        self.navigator.navigate(&redirect.route);
    }

    async fn execute_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        serde_json::from_str::<T>(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Login con el payload del Telegram Web App
    pub async fn telegram_login(&self, data: &TelegramAuthData) -> Result<LoginResponse, ApiError> {
        log::info!("🔐 [API] Login Telegram para id={}", data.id);
        let body =
            serde_json::to_value(data).map_err(|e| ApiError::Serialization(e.to_string()))?;
        self.execute_json(ApiRequest::post("/auth/telegram/login").with_json(body))
            .await
    }

    /// Perfil, empresa y cuota del usuario actual
    pub async fn get_me(&self) -> Result<MeResponse, ApiError> {
        self.execute_json(ApiRequest::get("/api/me")).await
    }

    pub async fn list_candidates(
        &self,
        params: &CandidateListParams,
    ) -> Result<CandidateListResponse, ApiError> {
        self.execute_json(ApiRequest::get("/api/candidates").with_query(params.to_query()))
            .await
    }

    pub async fn get_candidate(&self, slug: &str) -> Result<CandidateDetail, ApiError> {
        self.execute_json(ApiRequest::get(format!("/api/candidates/{}", urlencoding::encode(slug))))
            .await
    }

    /// Desbloquear contacto (consume cuota). Puede fallar con 402/409.
    pub async fn unlock_candidate(&self, slug: &str) -> Result<CandidateContact, ApiError> {
        log::info!("🔓 [API] Desbloqueando contacto de {}", slug);
        self.execute_json(ApiRequest::post(format!(
            "/api/candidates/{}/unlock",
            urlencoding::encode(slug)
        )))
            .await
    }

    pub async fn get_audit_logs(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<AuditLogResponse, ApiError> {
        let query = vec![
            ("page".to_string(), page.to_string()),
            ("page_size".to_string(), page_size.to_string()),
        ];
        self.execute_json(ApiRequest::get("/api/audit-logs").with_query(query))
            .await
    }
}
