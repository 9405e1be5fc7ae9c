// ============================================================================
// TG HR PORTAL - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado de página + lógica UI
// - Services: SOLO comunicación (API, storage, Telegram, navegación)
// - State: State Management con Rc<RefCell> + subscribers
// - Models: Estructuras compartidas con backend
// ============================================================================

mod app;
mod config;
mod dom;
mod models;
mod router;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::CONFIG;
use crate::services::{current_route, ROUTE_CHANGE_EVENT};

// Instancia global de la App (un solo hilo en wasm)
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!(
        "🚀 TG HR Portal - Rust Puro + MVVM ({}, API {})",
        CONFIG.environment,
        CONFIG.api_base_url()
    );

    let app = App::new()?;
    let state = app.state();
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    // Listeners globales: se registran UNA SOLA VEZ aquí
    dom::on_window_event("popstate", |_| handle_route_change())?;
    dom::on_window_event(ROUTE_CHANGE_EVENT, |_| handle_route_change())?;

    app::enter_route(&state);
    rerender_app();
    Ok(())
}

/// Sincronizar la App con `location` tras pushState / atrás-adelante
fn handle_route_change() {
    // Clonar el estado y soltar el borrow: entrar en la ruta puede volver a navegar
    let Some(state) = APP.with(|cell| cell.borrow().as_ref().map(App::state)) else {
        return;
    };

    if state.set_route(current_route()) {
        app::enter_route(&state);
    }
    state.notify_subscribers();
}

/// Re-render completo de la página actual
pub fn rerender_app() {
    APP.with(|cell| match cell.try_borrow() {
        Ok(app) => {
            if let Some(app) = app.as_ref() {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
                }
            } else {
                log::warn!("⚠️ [RERENDER] App no está inicializada");
            }
        }
        Err(_) => log::warn!("⚠️ [RERENDER] App ocupada, render omitido"),
    });
}
