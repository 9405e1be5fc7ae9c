// ============================================================================
// ROUTER - Rutas de la aplicación (path + query)
// ============================================================================

/// Motivo de la redirección a la página de cuota
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuotaReason {
    Exceeded,
    NotConfigured,
}

impl QuotaReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuotaReason::Exceeded => "exceeded",
            QuotaReason::NotConfigured => "not_configured",
        }
    }

    /// Cualquier valor distinto de `not_configured` se muestra como cuota agotada
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("not_configured") => QuotaReason::NotConfigured,
            _ => QuotaReason::Exceeded,
        }
    }
}

pub const DEFAULT_QUOTA_RETURN: &str = "/candidates";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Login,
    Candidates,
    CandidateDetail(String),
    Account,
    AuditLogs,
    Quota { reason: QuotaReason, return_to: String },
    WaitingApproval,
    Unauthorized,
    Forbidden,
    NotFound,
}

impl Route {
    /// Construir ruta desde `location.pathname` + `location.search`
    pub fn parse(path: &str, query: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Login,
            ["candidates"] => Route::Candidates,
            ["candidates", slug] => Route::CandidateDetail(decode_segment(slug)),
            ["account"] => Route::Account,
            ["audit-logs"] => Route::AuditLogs,
            ["waiting-approval"] => Route::WaitingApproval,
            ["unauthorized"] => Route::Unauthorized,
            ["forbidden"] => Route::Forbidden,
            ["quota"] => {
                let reason = QuotaReason::parse(query_param(query, "reason").as_deref());
                let return_to = query_param(query, "return")
                    .filter(|r| r.starts_with('/') && !r.starts_with("//"))
                    .unwrap_or_else(|| DEFAULT_QUOTA_RETURN.to_string());
                Route::Quota { reason, return_to }
            }
            _ => Route::NotFound,
        }
    }

    /// Path completo (con query si aplica)
    pub fn to_path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Candidates => "/candidates".to_string(),
            Route::CandidateDetail(slug) => format!("/candidates/{}", urlencoding::encode(slug)),
            Route::Account => "/account".to_string(),
            Route::AuditLogs => "/audit-logs".to_string(),
            Route::Quota { reason, return_to } => {
                format!(
                    "/quota?reason={}&return={}",
                    reason.as_str(),
                    urlencoding::encode(return_to)
                )
            }
            Route::WaitingApproval => "/waiting-approval".to_string(),
            Route::Unauthorized => "/unauthorized".to_string(),
            Route::Forbidden => "/forbidden".to_string(),
            Route::NotFound => "/not-found".to_string(),
        }
    }

    /// Páginas que requieren sesión en memoria
    pub fn requires_session(&self) -> bool {
        matches!(
            self,
            Route::Candidates | Route::CandidateDetail(_) | Route::AuditLogs
        )
    }
}

/// Valor de un parámetro de query (`?a=1&b=2`), decodificado
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| decode_query_value(k) == key)
        .map(|(_, v)| decode_query_value(v))
}

/// En query strings `+` es un espacio
fn decode_query_value(value: &str) -> String {
    decode_segment(&value.replace('+', " "))
}

fn decode_segment(value: &str) -> String {
    match urlencoding::decode(value) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => String::from_utf8_lossy(&urlencoding::decode_binary(value.as_bytes())).into_owned(),
    }
}
