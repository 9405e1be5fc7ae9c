// ============================================================================
// SESSION STATE - Store del usuario autenticado
// ============================================================================
// Instancia inyectada (no singleton). Dos estados: sin sesión / con sesión.
// `logout()` nunca navega: quien lo llama decide a dónde ir.
// ============================================================================

use crate::models::session::Session;
use crate::state::reactivity::{ReactiveState, Subscription};

/// Store de sesión. Los clones comparten la misma sesión y subscribers.
#[derive(Clone)]
pub struct SessionStore {
    current: ReactiveState<Option<Session>>,
}

impl SessionStore {
    /// Crear store vacío (no autenticado)
    pub fn new() -> Self {
        Self {
            current: ReactiveState::new(None),
        }
    }

    /// Sesión actual, `None` si no hay usuario autenticado
    pub fn get_current(&self) -> Option<Session> {
        self.current.get()
    }

    /// Reemplazar la sesión y notificar (siempre, aunque no cambie)
    pub fn set_current(&self, session: Session) {
        log::info!(
            "👤 [SESSION] Sesión establecida: user={} company={} status={}",
            session.user_id,
            session.company_id,
            session.status.as_str()
        );
        self.current.set(Some(session));
    }

    /// Limpiar la sesión y notificar
    pub fn logout(&self) {
        log::info!("🚪 [SESSION] Sesión cerrada");
        self.current.set(None);
    }

    /// Suscribirse a cambios de sesión
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.current.subscribe(callback)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.get().is_some()
    }

    /// Hay sesión y la cuenta está activa
    pub fn is_logged_in(&self) -> bool {
        self.current.get().map(|s| s.is_active()).unwrap_or(false)
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::UserStatus;
    use std::cell::Cell;
    use std::rc::Rc;

    fn session(user_id: i64, status: UserStatus) -> Session {
        Session {
            user_id,
            company_id: 1,
            status,
            role: "recruiter".to_string(),
        }
    }

    #[test]
    fn test_starts_unauthenticated() {
        let store = SessionStore::new();
        assert!(store.get_current().is_none());
        assert!(!store.is_authenticated());
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_last_mutation_wins() {
        let store = SessionStore::new();

        store.set_current(session(1, UserStatus::Pending));
        store.set_current(session(2, UserStatus::Active));
        assert_eq!(store.get_current(), Some(session(2, UserStatus::Active)));

        store.logout();
        assert_eq!(store.get_current(), None);

        store.set_current(session(3, UserStatus::Blocked));
        assert_eq!(store.get_current(), Some(session(3, UserStatus::Blocked)));
        assert!(store.is_authenticated());
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_each_mutation_notifies_once() {
        let store = SessionStore::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));

        let sub_first = {
            let first = first.clone();
            store.subscribe(move || first.set(first.get() + 1))
        };
        let _sub_second = {
            let second = second.clone();
            store.subscribe(move || second.set(second.get() + 1))
        };

        store.set_current(session(1, UserStatus::Active));
        // Mismo valor: vuelve a notificar
        store.set_current(session(1, UserStatus::Active));
        store.logout();
        assert_eq!(first.get(), 3);
        assert_eq!(second.get(), 3);

        sub_first.unsubscribe();
        store.set_current(session(1, UserStatus::Active));
        store.logout();
        assert_eq!(first.get(), 3);
        assert_eq!(second.get(), 5);
    }

    #[test]
    fn test_subscriber_reads_new_value() {
        let store = SessionStore::new();
        let seen = Rc::new(Cell::new(None::<i64>));
        {
            let store_in = store.clone();
            let seen = seen.clone();
            store.subscribe(move || seen.set(store_in.get_current().map(|s| s.user_id)));
        }

        store.set_current(session(42, UserStatus::Active));
        assert_eq!(seen.get(), Some(42));
        store.logout();
        assert_eq!(seen.get(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let store = SessionStore::new();
        let view_binding = store.clone();
        store.set_current(session(9, UserStatus::Active));
        assert_eq!(view_binding.get_current().map(|s| s.user_id), Some(9));
        assert!(view_binding.is_logged_in());
    }
}
