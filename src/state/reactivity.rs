// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================
// Notificación síncrona, en orden de registro. El registro se copia antes de
// notificar: un callback puede suscribir o desuscribir sin pánico de RefCell.
// Un callback desuscrito a mitad de notificación ya no se llama.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Callback = Rc<dyn Fn()>;
type Registry = RefCell<Vec<(u64, Callback)>>;

/// Lista de subscribers compartida entre clones
#[derive(Clone, Default)]
pub struct Subscribers {
    registry: Rc<Registry>,
    next_id: Rc<Cell<u64>>,
}

/// Handle devuelto por `subscribe`. `unsubscribe()` retira el callback.
/// Soltar el handle NO desuscribe.
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.registry.borrow_mut().push((id, Rc::new(callback)));
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Notificar a todos los subscribers
    pub fn notify(&self) {
        let snapshot: Vec<(u64, Callback)> = self
            .registry
            .borrow()
            .iter()
            .map(|(id, cb)| (*id, cb.clone()))
            .collect();
        for (id, callback) in snapshot {
            // Desuscrito por un callback anterior de esta misma notificación
            if !self.is_registered(id) {
                continue;
            }
            callback();
        }
    }

    fn is_registered(&self, id: u64) -> bool {
        self.registry.borrow().iter().any(|(registered, _)| *registered == id)
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Estado reactivo con sistema de notificaciones
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Subscribers,
}

impl<T: Clone> ReactiveState<T> {
    /// Crear nuevo estado reactivo
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Subscribers::new(),
        }
    }

    /// Copia del valor actual
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Establecer nuevo valor y notificar subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Actualizar valor usando closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&self) {
        self.subscribers.notify();
    }
}

// Los clones comparten valor Y subscribers
impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_in_registration_order() {
        let state = ReactiveState::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["a", "b", "c"] {
            let order = order.clone();
            state.subscribe(move || order.borrow_mut().push(tag));
        }

        state.set(1);
        assert_eq!(*order.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let state = ReactiveState::new(0);
        let hits = Rc::new(Cell::new(0));

        let sub = {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1))
        };
        state.set(1);
        sub.unsubscribe();
        state.set(2);
        state.update(|v| *v += 1);

        assert_eq!(hits.get(), 1);
        assert_eq!(state.get(), 3);
        assert_eq!(state.subscriber_count(), 0);
    }

    #[test]
    fn test_clone_shares_subscribers() {
        let state = ReactiveState::new(String::new());
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe(move || hits.set(hits.get() + 1));
        }

        let other = state.clone();
        other.set("x".to_string());

        assert_eq!(hits.get(), 1);
        assert_eq!(state.get(), "x");
    }

    #[test]
    fn test_subscribe_during_notify_does_not_panic() {
        let subs = Subscribers::new();
        let inner_hits = Rc::new(Cell::new(0));
        {
            let subs_in = subs.clone();
            let inner_hits = inner_hits.clone();
            subs.subscribe(move || {
                let inner_hits = inner_hits.clone();
                subs_in.subscribe(move || inner_hits.set(inner_hits.get() + 1));
            });
        }

        subs.notify();
        // El subscriber añadido durante la notificación no recibe la actual
        assert_eq!(inner_hits.get(), 0);
        assert_eq!(subs.len(), 2);
    }

    #[test]
    fn test_unsubscribe_during_notify_skips_later_callback() {
        let subs = Subscribers::new();
        let later_hits = Rc::new(Cell::new(0));
        let later_handle: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        {
            let later_handle = later_handle.clone();
            subs.subscribe(move || {
                if let Some(handle) = later_handle.borrow_mut().take() {
                    handle.unsubscribe();
                }
            });
        }
        {
            let later_hits = later_hits.clone();
            let handle = subs.subscribe(move || later_hits.set(later_hits.get() + 1));
            *later_handle.borrow_mut() = Some(handle);
        }

        subs.notify();
        assert_eq!(later_hits.get(), 0);
        assert_eq!(subs.len(), 1);

        subs.notify();
        assert_eq!(later_hits.get(), 0);
    }
}
