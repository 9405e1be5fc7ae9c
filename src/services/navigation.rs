// ============================================================================
// NAVIGATION - Cambio de página (history API)
// ============================================================================

use wasm_bindgen::JsValue;

use crate::router::Route;

/// Evento emitido en `window` tras cada navegación programática
pub const ROUTE_CHANGE_EVENT: &str = "routechange";

pub trait Navigator {
    fn navigate(&self, route: &Route);
}

/// Navegación del navegador: `history.pushState` + evento `routechange`
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: &Route) {
        let path = route.to_path();
        log::info!("🧭 [NAV] → {}", path);

        let Some(win) = web_sys::window() else {
            return;
        };

        let pushed = win
            .history()
            .and_then(|h| h.push_state_with_url(&JsValue::NULL, "", Some(&path)));

        match pushed {
            Ok(()) => {
                if let Ok(event) = web_sys::Event::new(ROUTE_CHANGE_EVENT) {
                    let _ = win.dispatch_event(&event);
                }
            }
            Err(e) => {
                // Fallback: navegación completa
                log::warn!("⚠️ [NAV] pushState falló ({:?}), usando location.href", e);
                let _ = win.location().set_href(&path);
            }
        }
    }
}

/// Ruta actual según `location`
pub fn current_route() -> Route {
    let Some(location) = web_sys::window().map(|w| w.location()) else {
        return Route::Login;
    };
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    Route::parse(&path, &search)
}
