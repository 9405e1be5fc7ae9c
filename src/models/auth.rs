use serde::{Deserialize, Serialize};

/// Payload de identidad del Telegram Web App
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TelegramAuthData {
    pub id: i64,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub auth_date: i64,
    pub hash: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub status: String,
}

/// Cuerpo de error del backend: `{"error": "pending_approval"}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
