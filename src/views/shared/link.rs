use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::ElementBuilder;
use crate::router::Route;
use crate::state::AppState;

/// `<a>` con navegación interna (pushState). Ctrl/Cmd+click abre pestaña nueva.
pub fn render_link(state: &AppState, route: Route, class: &str, text: &str) -> Result<Element, JsValue> {
    let navigator = state.api.navigator();
    Ok(ElementBuilder::new("a")?
        .class(class)
        .attr("href", &route.to_path())?
        .text(text)
        .on_click(move |e: MouseEvent| {
            if e.ctrl_key() || e.meta_key() {
                return;
            }
            e.prevent_default();
            navigator.navigate(&route);
        })?
        .build())
}

/// Botón que navega a una ruta
pub fn render_nav_button(state: &AppState, route: Route, class: &str, text: &str) -> Result<Element, JsValue> {
    let navigator = state.api.navigator();
    Ok(ElementBuilder::new("button")?
        .class(class)
        .text(text)
        .on_click(move |_| navigator.navigate(&route))?
        .build())
}
