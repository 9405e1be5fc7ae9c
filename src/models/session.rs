// ============================================================================
// SESSION - Usuario HR autenticado (solo en memoria)
// ============================================================================

use serde::{Deserialize, Serialize};

/// Estado de la cuenta HR tal como lo devuelve el backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Pending,
    Blocked,
}

impl UserStatus {
    /// Parsear el status del API. Cualquier valor desconocido se trata como
    /// `Blocked` para no conceder acceso por error.
    pub fn from_api(status: &str) -> Self {
        match status.trim().to_ascii_lowercase().as_str() {
            "active" => UserStatus::Active,
            "pending" => UserStatus::Pending,
            _ => UserStatus::Blocked,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Pending => "pending",
            UserStatus::Blocked => "blocked",
        }
    }
}

/// Sesión del usuario actual
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: i64,
    pub company_id: i64,
    pub status: UserStatus,
    pub role: String,
}

impl Session {
    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_api() {
        assert_eq!(UserStatus::from_api("active"), UserStatus::Active);
        assert_eq!(UserStatus::from_api(" Pending "), UserStatus::Pending);
        assert_eq!(UserStatus::from_api("blocked"), UserStatus::Blocked);
        assert_eq!(UserStatus::from_api("whatever"), UserStatus::Blocked);
    }
}
