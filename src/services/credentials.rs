// ============================================================================
// CREDENTIALS - Token de autenticación persistido en el navegador
// ============================================================================

use crate::utils::constants::AUTH_STORAGE_KEY;
use crate::utils::storage;

/// Almacén del token `hr_auth`. Lo escribe el backend; el gateway solo lo
/// lee y lo borra en 401.
pub trait CredentialStore {
    fn token(&self) -> Option<String>;
    fn clear_token(&self);
}

/// Implementación con localStorage
#[derive(Clone, Copy, Default)]
pub struct LocalStorageCredentials;

impl CredentialStore for LocalStorageCredentials {
    fn token(&self) -> Option<String> {
        storage::load_raw(AUTH_STORAGE_KEY)
    }

    fn clear_token(&self) {
        log::info!("🧹 [AUTH] Token eliminado de localStorage");
        storage::remove(AUTH_STORAGE_KEY);
    }
}
