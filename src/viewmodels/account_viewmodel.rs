// ============================================================================
// ACCOUNT VIEWMODEL - Perfil, empresa y cuota (/api/me)
// ============================================================================

use crate::models::MeResponse;
use crate::router::Route;
use crate::services::ApiClient;
use crate::state::SessionStore;

pub const ACCOUNT_FAILED: &str = "获取账号信息失败";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccountState {
    pub data: Option<MeResponse>,
    pub loading: bool,
}

pub struct AccountViewModel {
    api: ApiClient,
    session: SessionStore,
}

impl AccountViewModel {
    pub fn new(api: ApiClient, session: SessionStore) -> Self {
        Self { api, session }
    }

    /// Refrescar la sesión con el perfil del backend.
    /// En error vuelve al login salvo que el gateway ya haya navegado.
    pub async fn load(&self) -> Result<MeResponse, String> {
        match self.api.get_me().await {
            Ok(me) => {
                self.session.set_current(me.to_session());
                Ok(me)
            }
            Err(e) => {
                log::error!("❌ [ACCOUNT] {}", e);
                if !e.was_redirected() {
                    self.api.navigator().navigate(&Route::Login);
                }
                Err(e.user_message(ACCOUNT_FAILED))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserStatus;
    use crate::services::testing::Harness;
    use futures::executor::block_on;

    #[test]
    fn test_load_refreshes_session() {
        let h = Harness::new();
        h.transport.respond(
            200,
            r#"{"user": {"id": 9, "company_id": 4, "status": "active", "role": "admin"},
                "company": {"id": 4, "name": "Acme", "status": "active"},
                "quota": {"configured": true, "unlock_quota_total": 10, "unlock_quota_used": 3}}"#,
        );
        let store = SessionStore::new();
        let vm = AccountViewModel::new(h.api.clone(), store.clone());

        let me = block_on(vm.load()).unwrap();

        assert_eq!(me.company.name, "Acme");
        let session = store.get_current().unwrap();
        assert_eq!(session.company_id, 4);
        assert_eq!(session.status, UserStatus::Active);
        assert_eq!(session.role, "admin");
        assert!(h.navigator.visited().is_empty());
    }

    #[test]
    fn test_load_error_goes_to_login() {
        let h = Harness::new();
        h.transport.fail("network down");
        let store = SessionStore::new();
        let vm = AccountViewModel::new(h.api.clone(), store.clone());

        assert_eq!(block_on(vm.load()), Err(ACCOUNT_FAILED.to_string()));
        assert!(store.get_current().is_none());
        assert_eq!(h.navigator.visited(), vec![Route::Login]);
    }

    #[test]
    fn test_load_403_pending_only_gateway_navigates() {
        let h = Harness::new();
        h.transport.respond(403, r#"{"error": "pending_approval"}"#);
        let vm = AccountViewModel::new(h.api.clone(), SessionStore::new());

        assert_eq!(block_on(vm.load()), Err("pending_approval".to_string()));
        assert_eq!(h.navigator.visited(), vec![Route::WaitingApproval]);
    }
}
