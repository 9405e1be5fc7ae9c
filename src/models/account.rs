use serde::{Deserialize, Serialize};

use crate::models::session::{Session, UserStatus};

/// Respuesta de `GET /api/me`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct MeResponse {
    #[serde(default)]
    pub user: MeUser,
    #[serde(default)]
    pub company: MeCompany,
    #[serde(default)]
    pub quota: QuotaInfo,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct MeUser {
    pub id: i64,
    pub company_id: i64,
    pub status: String,
    pub role: String,
    pub display_name: String,
    pub tg_username: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct MeCompany {
    pub id: i64,
    pub name: String,
    pub status: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct QuotaInfo {
    pub configured: bool,
    pub unlock_quota_total: i64,
    pub unlock_quota_used: i64,
    pub unlock_quota_remaining: i64,
    pub period_start: String,
    pub period_end: String,
}

impl QuotaInfo {
    /// Porcentaje de uso para la barra de progreso (0..=100)
    pub fn usage_percent(&self) -> f64 {
        if self.unlock_quota_total <= 0 {
            return 0.0;
        }
        let percent = self.unlock_quota_used as f64 / self.unlock_quota_total as f64 * 100.0;
        percent.clamp(0.0, 100.0)
    }
}

impl MeResponse {
    /// Sesión derivada del perfil
    pub fn to_session(&self) -> Session {
        Session {
            user_id: self.user.id,
            company_id: self.user.company_id,
            status: UserStatus::from_api(&self.user.status),
            role: self.user.role.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quota(total: i64, used: i64) -> QuotaInfo {
        QuotaInfo {
            configured: true,
            unlock_quota_total: total,
            unlock_quota_used: used,
            unlock_quota_remaining: (total - used).max(0),
            ..Default::default()
        }
    }

    #[test]
    fn test_usage_percent() {
        assert_eq!(quota(0, 0).usage_percent(), 0.0);
        assert_eq!(quota(10, 5).usage_percent(), 50.0);
        assert_eq!(quota(10, 25).usage_percent(), 100.0);
    }

    #[test]
    fn test_me_to_session() {
        let json = r#"{
            "user": {"id": 7, "company_id": 3, "status": "pending", "role": "recruiter",
                     "display_name": "Bob", "tg_username": "bob"},
            "company": {"id": 3, "name": "Acme", "status": "active"},
            "quota": {"configured": false}
        }"#;
        let me: MeResponse = serde_json::from_str(json).unwrap();
        let session = me.to_session();
        assert_eq!(session.user_id, 7);
        assert_eq!(session.company_id, 3);
        assert_eq!(session.status, UserStatus::Pending);
        assert_eq!(session.role, "recruiter");
        assert!(!me.quota.configured);
    }
}
