// ============================================================================
// TELEGRAM - Puente con Telegram Web App (window.Telegram.WebApp)
// ============================================================================
// Solo lectura del payload de identidad. La verificación del hash la hace
// el backend.
// ============================================================================

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::CONFIG;
use crate::models::TelegramAuthData;
use crate::router::query_param;

/// `initDataUnsafe.user`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TelegramUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Parámetro `hash` del `initData` crudo ("" si falta)
pub fn extract_hash(init_data: &str) -> String {
    query_param(init_data, "hash").unwrap_or_default()
}

pub fn build_auth_data(user: TelegramUser, auth_date: i64, init_data: &str) -> TelegramAuthData {
    TelegramAuthData {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        username: user.username,
        photo_url: user.photo_url,
        auth_date,
        hash: extract_hash(init_data),
    }
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn web_app() -> Option<JsValue> {
    let window: JsValue = web_sys::window()?.into();
    get(&get(&window, "Telegram")?, "WebApp")
}

/// Llamar `WebApp.ready()` y leer la identidad del usuario, si la hay
fn read_auth_data(web_app: &JsValue) -> Option<TelegramAuthData> {
    if let Some(ready) = get(web_app, "ready").and_then(|f| f.dyn_into::<js_sys::Function>().ok()) {
        let _ = ready.call0(web_app);
    }

    let unsafe_data = get(web_app, "initDataUnsafe")?;
    let user_value = get(&unsafe_data, "user")?;
    let user_json: String = js_sys::JSON::stringify(&user_value).ok()?.into();
    let user = match serde_json::from_str::<TelegramUser>(&user_json) {
        Ok(user) => user,
        Err(e) => {
            log::warn!("⚠️ [TELEGRAM] Usuario inválido en initDataUnsafe: {}", e);
            return None;
        }
    };

    let auth_date = get(&unsafe_data, "auth_date")
        .and_then(|v| v.as_f64())
        .map(|v| v as i64)
        .unwrap_or_default();
    let init_data = get(web_app, "initData")
        .and_then(|v| v.as_string())
        .unwrap_or_default();

    Some(build_auth_data(user, auth_date, &init_data))
}

/// Obtener la identidad de Telegram, cargando el script del SDK si no está.
/// `on_ready` recibe `None` fuera de Telegram o sin usuario.
pub fn with_telegram_identity<F>(on_ready: F) -> Result<(), JsValue>
where
    F: FnOnce(Option<TelegramAuthData>) + 'static,
{
    if let Some(app) = web_app() {
        on_ready(read_auth_data(&app));
        return Ok(());
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body"))?;

    let script = document
        .create_element("script")?
        .dyn_into::<web_sys::HtmlScriptElement>()?;
    script.set_src(&CONFIG.telegram_script_url);

    log::info!("📜 [TELEGRAM] Cargando {}", CONFIG.telegram_script_url);
    let onload = Closure::once(move || {
        on_ready(web_app().and_then(|app| read_auth_data(&app)));
    });
    script.set_onload(Some(onload.as_ref().unchecked_ref()));
    // Se dispara una sola vez; el closure debe vivir hasta entonces
    onload.forget();

    body.append_child(&script)?;
    Ok(())
}

/// `WebApp.close()` (botón de la página de login)
pub fn close() {
    if let Some(app) = web_app() {
        if let Some(close) = get(&app, "close").and_then(|f| f.dyn_into::<js_sys::Function>().ok()) {
            let _ = close.call0(&app);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_hash() {
        assert_eq!(
            extract_hash("query_id=AA&user=%7B%22id%22%3A1%7D&auth_date=1700000000&hash=deadbeef"),
            "deadbeef"
        );
        assert_eq!(extract_hash("hash=abc&auth_date=1"), "abc");
        assert_eq!(extract_hash("auth_date=1&hash=a%2Bb"), "a+b");
        assert_eq!(extract_hash("auth_date=1"), "");
        assert_eq!(extract_hash(""), "");
    }

    #[test]
    fn test_build_auth_data() {
        let user: TelegramUser =
            serde_json::from_str(r#"{"id": 42, "first_name": "Li", "username": "li_hr"}"#).unwrap();
        let data = build_auth_data(user, 1_700_000_000, "auth_date=1700000000&hash=f00");

        assert_eq!(data.id, 42);
        assert_eq!(data.first_name, "Li");
        assert_eq!(data.username.as_deref(), Some("li_hr"));
        assert_eq!(data.last_name, None);
        assert_eq!(data.auth_date, 1_700_000_000);
        assert_eq!(data.hash, "f00");
    }
}
