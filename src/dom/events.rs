// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Listeners en elementos: closure.forget() es seguro porque el navegador los
// limpia al destruir el elemento (cada render reemplaza el árbol).
// Listeners en window: registrar UNA SOLA VEZ al arrancar la app.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, KeyboardEvent, MouseEvent};

/// Click handler
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Input/change handler con el valor del campo
pub fn on_value_change<F>(element: &Element, event_type: &str, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut(&Element) + 'static,
{
    let target = element.clone();
    let closure = Closure::wrap(Box::new(move |_e: Event| handler(&target)) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Tecla Enter
pub fn on_enter<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            handler();
        }
    }) as Box<dyn FnMut(KeyboardEvent)>);
    element.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Listener global en window (popstate, routechange)
pub fn on_window_event<F>(event_type: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    win.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
