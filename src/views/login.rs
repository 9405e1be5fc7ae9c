// ============================================================================
// LOGIN VIEW - Login con Telegram Web App
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::services::telegram;
use crate::state::AppState;

/// Renderizar vista de login
pub fn render_login(state: &AppState) -> Result<Element, JsValue> {
    let logging_in = *state.logging_in.borrow();

    let hint = if logging_in {
        "正在通过 Telegram 登录..."
    } else {
        "点击下方按钮使用 Telegram 登录"
    };

    let card = ElementBuilder::new("div")?
        .class("login-card")
        .child(
            ElementBuilder::new("div")?
                .class("login-header")
                .child(ElementBuilder::new("h1")?.text("TG HR Platform").build())?
                .child(ElementBuilder::new("p")?.text("Telegram 快速登录").build())?
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("notice notice-blue")
                .child(ElementBuilder::new("p")?.text(hint).build())?
                .build(),
        )?
        .child(
            ElementBuilder::new("button")?
                .class("btn-primary btn-block")
                .text("📱 使用 Telegram 登录")
                .flag("disabled", logging_in)?
                .on_click(|_| telegram::close())?
                .build(),
        )?
        .child(
            ElementBuilder::new("p")?
                .class("login-footnote")
                .text("在 Telegram 中打开此链接以登录")
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("login-screen")
        .child(card)?
        .build())
}
