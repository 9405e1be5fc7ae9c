// ============================================================================
// LOGIN VIEWMODEL - Login con Telegram y cierre de sesión
// ============================================================================
// Devuelve valores; la vista muestra las notificaciones.
// ============================================================================

use crate::models::{Session, TelegramAuthData, UserStatus};
use crate::router::Route;
use crate::services::ApiClient;
use crate::state::SessionStore;

pub const LOGIN_FAILED: &str = "登录失败";
pub const LOGIN_RETRY: &str = "登录失败，请重试";

/// Rol asignado por el backend a todo usuario HR
const DEFAULT_ROLE: &str = "recruiter";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Active,
    PendingApproval,
}

impl LoginOutcome {
    pub fn route(&self) -> Route {
        match self {
            LoginOutcome::Active => Route::Candidates,
            LoginOutcome::PendingApproval => Route::WaitingApproval,
        }
    }
}

pub struct LoginViewModel {
    api: ApiClient,
    session: SessionStore,
}

impl LoginViewModel {
    pub fn new(api: ApiClient, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// Login: guarda la sesión y navega según el estado de la cuenta
    pub async fn login(&self, data: &TelegramAuthData) -> Result<LoginOutcome, String> {
        log::info!("🔐 [LOGIN] Iniciando login Telegram...");

        let response = self
            .api
            .telegram_login(data)
            .await
            .map_err(|e| e.user_message(LOGIN_RETRY))?;

        if !response.success {
            log::warn!("⚠️ [LOGIN] Backend rechazó el login");
            return Err(LOGIN_FAILED.to_string());
        }

        let status = UserStatus::from_api(&response.status);
        // company_id llega después con /api/me
        self.session.set_current(Session {
            user_id: response.user_id,
            company_id: 0,
            status,
            role: DEFAULT_ROLE.to_string(),
        });

        let outcome = match status {
            UserStatus::Pending => LoginOutcome::PendingApproval,
            _ => LoginOutcome::Active,
        };
        log::info!("✅ [LOGIN] user={} → {:?}", response.user_id, outcome);
        self.api.navigator().navigate(&outcome.route());
        Ok(outcome)
    }

    /// Cerrar sesión: limpia sesión + token y vuelve al login
    pub fn sign_out(&self) {
        self.session.logout();
        self.api.credentials().clear_token();
        self.api.navigator().navigate(&Route::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::{Harness, MemoryCredentials};
    use crate::services::CredentialStore;
    use futures::executor::block_on;

    fn payload() -> TelegramAuthData {
        TelegramAuthData {
            id: 7,
            first_name: "Mei".into(),
            last_name: None,
            username: None,
            photo_url: None,
            auth_date: 1_700_000_000,
            hash: "h".into(),
        }
    }

    #[test]
    fn test_active_login_goes_to_candidates() {
        let h = Harness::new();
        h.transport
            .respond(200, r#"{"success": true, "user_id": 12, "status": "active"}"#);
        let store = SessionStore::new();
        let vm = LoginViewModel::new(h.api.clone(), store.clone());

        let outcome = block_on(vm.login(&payload())).unwrap();

        assert_eq!(outcome, LoginOutcome::Active);
        let session = store.get_current().unwrap();
        assert_eq!(session.user_id, 12);
        assert_eq!(session.company_id, 0);
        assert_eq!(session.role, "recruiter");
        assert_eq!(h.navigator.visited(), vec![Route::Candidates]);
    }

    #[test]
    fn test_pending_login_goes_to_waiting_approval() {
        let h = Harness::new();
        h.transport
            .respond(200, r#"{"success": true, "user_id": 3, "status": "pending"}"#);
        let store = SessionStore::new();
        let vm = LoginViewModel::new(h.api.clone(), store.clone());

        let outcome = block_on(vm.login(&payload())).unwrap();

        assert_eq!(outcome, LoginOutcome::PendingApproval);
        assert_eq!(store.get_current().unwrap().status, UserStatus::Pending);
        assert!(!store.is_logged_in());
        assert_eq!(h.navigator.visited(), vec![Route::WaitingApproval]);
    }

    #[test]
    fn test_unsuccessful_login_keeps_session_empty() {
        let h = Harness::new();
        h.transport.respond(200, r#"{"success": false}"#);
        let store = SessionStore::new();
        let vm = LoginViewModel::new(h.api.clone(), store.clone());

        assert_eq!(block_on(vm.login(&payload())), Err(LOGIN_FAILED.to_string()));
        assert!(store.get_current().is_none());
        assert!(h.navigator.visited().is_empty());
    }

    #[test]
    fn test_login_error_uses_backend_code() {
        let h = Harness::new();
        h.transport.respond(400, r#"{"error": "invalid_hash"}"#);
        h.transport.fail("offline");
        let vm = LoginViewModel::new(h.api.clone(), SessionStore::new());

        assert_eq!(block_on(vm.login(&payload())), Err("invalid_hash".to_string()));
        assert_eq!(block_on(vm.login(&payload())), Err(LOGIN_RETRY.to_string()));
    }

    #[test]
    fn test_sign_out_clears_everything() {
        let h = Harness::with_credentials(MemoryCredentials::with_token("t"));
        let store = SessionStore::new();
        store.set_current(Session {
            user_id: 1,
            company_id: 2,
            status: UserStatus::Active,
            role: "recruiter".into(),
        });
        let vm = LoginViewModel::new(h.api.clone(), store.clone());

        vm.sign_out();

        assert!(store.get_current().is_none());
        assert_eq!(h.credentials.token(), None);
        assert_eq!(h.navigator.visited(), vec![Route::Login]);
    }
}
