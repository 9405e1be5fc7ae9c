use gloo_storage::{LocalStorage, Storage};

// Valores crudos (sin JSON): el token está tal cual lo deja el backend

pub fn load_raw(key: &str) -> Option<String> {
    LocalStorage::raw()
        .get_item(key)
        .ok()
        .flatten()
        .filter(|v| !v.is_empty())
}

pub fn remove(key: &str) {
    LocalStorage::delete(key);
}
