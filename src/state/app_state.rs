// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Ruta actual, sesión, gateway y estado de cada página. Sin DOM: app.rs
// se suscribe a los cambios y re-renderiza.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Session;
use crate::router::Route;
use crate::services::ApiClient;
use crate::state::reactivity::{Subscribers, Subscription};
use crate::state::session_state::SessionStore;
use crate::viewmodels::{AccountState, AuditLogsState, CandidateDetailState, CandidatesPageState};

/// Redirección de guardas de página según la sesión en memoria
pub fn guard_redirect(route: &Route, session: Option<&Session>) -> Option<Route> {
    match (route, session) {
        (route, None) if route.requires_session() => Some(Route::Login),
        (Route::WaitingApproval, Some(s)) if s.is_active() => Some(Route::Candidates),
        _ => None,
    }
}

#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub api: ApiClient,
    pub route: Rc<RefCell<Route>>,

    // Estado por página
    pub candidates: Rc<RefCell<CandidatesPageState>>,
    pub detail: Rc<RefCell<CandidateDetailState>>,
    pub account: Rc<RefCell<AccountState>>,
    pub audit: Rc<RefCell<AuditLogsState>>,
    /// Login con Telegram en curso
    pub logging_in: Rc<RefCell<bool>>,

    change_subscribers: Subscribers,
}

impl AppState {
    pub fn new(api: ApiClient, initial_route: Route) -> Self {
        Self {
            session: SessionStore::new(),
            api,
            route: Rc::new(RefCell::new(initial_route)),
            candidates: Rc::new(RefCell::new(CandidatesPageState::default())),
            detail: Rc::new(RefCell::new(CandidateDetailState::default())),
            account: Rc::new(RefCell::new(AccountState::default())),
            audit: Rc::new(RefCell::new(AuditLogsState::default())),
            logging_in: Rc::new(RefCell::new(false)),
            change_subscribers: Subscribers::new(),
        }
    }

    pub fn current_route(&self) -> Route {
        self.route.borrow().clone()
    }

    /// Cambiar de ruta. Devuelve `true` si la ruta es distinta.
    pub fn set_route(&self, route: Route) -> bool {
        let changed = *self.route.borrow() != route;
        if changed {
            log::info!("🧭 [STATE] Ruta: {}", route.to_path());
            *self.route.borrow_mut() = route;
        }
        changed
    }

    /// La página sigue montada (para descartar respuestas tardías)
    pub fn is_on(&self, route: &Route) -> bool {
        *self.route.borrow() == *route
    }

    /// Guarda de la ruta actual
    pub fn guard_current(&self) -> Option<Route> {
        guard_redirect(&self.current_route(), self.session.get_current().as_ref())
    }

    /// Resetear el estado de la página al entrar en ella
    pub fn reset_page(&self, route: &Route) {
        match route {
            Route::Candidates => {
                // Filtros y página se conservan al volver del detalle
                let mut page = self.candidates.borrow_mut();
                page.loading = false;
            }
            Route::CandidateDetail(slug) => {
                *self.detail.borrow_mut() = CandidateDetailState::for_slug(slug);
            }
            Route::Account => {
                *self.account.borrow_mut() = AccountState::default();
            }
            Route::AuditLogs => {
                let mut audit = self.audit.borrow_mut();
                audit.items.clear();
                audit.loading = false;
            }
            _ => {}
        }
    }

    /// Suscribirse a cambios de estado de UI
    pub fn subscribe_to_changes<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.subscribe(callback)
    }

    pub fn notify_subscribers(&self) {
        self.change_subscribers.notify();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserStatus;
    use crate::services::testing::Harness;
    use std::cell::Cell;

    fn session(status: UserStatus) -> Session {
        Session {
            user_id: 1,
            company_id: 1,
            status,
            role: "recruiter".into(),
        }
    }

    #[test]
    fn test_guards() {
        let active = session(UserStatus::Active);
        let pending = session(UserStatus::Pending);

        assert_eq!(guard_redirect(&Route::Candidates, None), Some(Route::Login));
        assert_eq!(
            guard_redirect(&Route::CandidateDetail("a".into()), None),
            Some(Route::Login)
        );
        assert_eq!(guard_redirect(&Route::AuditLogs, None), Some(Route::Login));
        assert_eq!(guard_redirect(&Route::Account, None), None);
        assert_eq!(guard_redirect(&Route::Candidates, Some(&pending)), None);
        assert_eq!(
            guard_redirect(&Route::WaitingApproval, Some(&active)),
            Some(Route::Candidates)
        );
        assert_eq!(guard_redirect(&Route::WaitingApproval, Some(&pending)), None);
        assert_eq!(guard_redirect(&Route::WaitingApproval, None), None);
    }

    #[test]
    fn test_set_route_reports_change() {
        let h = Harness::new();
        let state = AppState::new(h.api.clone(), Route::Login);

        assert!(!state.set_route(Route::Login));
        assert!(state.set_route(Route::Candidates));
        assert!(state.is_on(&Route::Candidates));
        assert!(!state.is_on(&Route::Login));
    }

    #[test]
    fn test_reset_detail_page() {
        let h = Harness::new();
        let state = AppState::new(h.api.clone(), Route::Login);
        state.detail.borrow_mut().unlocking = true;

        state.reset_page(&Route::CandidateDetail("bob".into()));

        let detail = state.detail.borrow();
        assert_eq!(detail.slug, "bob");
        assert!(!detail.unlocking);
        assert!(detail.detail.is_none());
    }

    #[test]
    fn test_change_subscribers() {
        let h = Harness::new();
        let state = AppState::new(h.api.clone(), Route::Login);
        let count = Rc::new(Cell::new(0));
        let sub = {
            let count = count.clone();
            state.subscribe_to_changes(move || count.set(count.get() + 1))
        };

        state.notify_subscribers();
        sub.unsubscribe();
        state.notify_subscribers();

        assert_eq!(count.get(), 1);
    }
}
