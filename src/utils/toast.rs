// Notificaciones bloqueantes (window.alert) + log en consola

fn alert(message: &str) {
    if let Some(win) = web_sys::window() {
        let _ = win.alert_with_message(message);
    }
}

pub fn success(message: &str) {
    log::info!("✅ [TOAST] {}", message);
    alert(&format!("✅ {}", message));
}

pub fn error(message: &str) {
    log::error!("❌ [TOAST] {}", message);
    alert(&format!("❌ {}", message));
}

pub fn info(message: &str) {
    log::info!("ℹ️ [TOAST] {}", message);
    alert(&format!("ℹ️ {}", message));
}
