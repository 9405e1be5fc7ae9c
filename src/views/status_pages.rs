// ============================================================================
// STATUS PAGES - Pendiente de aprobación, 401, 403, 404
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::LoginViewModel;
use crate::views::shared::{render_centered, render_empty_state, render_link, Illustration};

pub fn render_waiting_approval(state: &AppState) -> Result<Element, JsValue> {
    let logout_state = state.clone();
    let card = ElementBuilder::new("div")?
        .class("login-card waiting-card")
        .child(ElementBuilder::new("div")?.class("waiting-icon").text("⏳").build())?
        .child(ElementBuilder::new("h1")?.text("账户待审批").build())?
        .child(
            ElementBuilder::new("p")?
                .class("muted")
                .text("你的账户已创建，但需要管理员审核后才能使用。请稍候，我们会尽快处理你的申请。")
                .build(),
        )?
        .child(
            ElementBuilder::new("button")?
                .class("btn-secondary btn-block")
                .text("返回登录")
                .on_click(move |_| {
                    LoginViewModel::new(logout_state.api.clone(), logout_state.session.clone())
                        .sign_out();
                })?
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("login-screen login-screen-amber")
        .child(card)?
        .build())
}

pub fn render_unauthorized(state: &AppState) -> Result<Element, JsValue> {
    render_centered(render_empty_state(
        "🔒",
        "未登录或会话过期",
        "请重新登录后再继续操作。",
        Illustration::Lock,
        vec![render_link(state, Route::Login, "btn-primary btn-block", "返回登录")?],
    )?)
}

pub fn render_forbidden(state: &AppState) -> Result<Element, JsValue> {
    render_centered(render_empty_state(
        "⛔",
        "访问受限",
        "你的账号没有权限访问该资源。",
        Illustration::Alert,
        vec![
            render_link(state, Route::Login, "btn-secondary", "返回登录")?,
            render_link(state, Route::Account, "btn-primary", "查看账号")?,
        ],
    )?)
}

pub fn render_not_found(state: &AppState) -> Result<Element, JsValue> {
    render_centered(render_empty_state(
        "🧭",
        "页面不存在",
        "你访问的页面不存在或已被移除。",
        Illustration::Compass,
        vec![render_link(state, Route::Candidates, "btn-primary btn-block", "返回候选人列表")?],
    )?)
}

/// Fallo al construir la página (error de DOM)
pub fn render_error_page() -> Result<Element, JsValue> {
    let reload = ElementBuilder::new("button")?
        .class("btn-primary")
        .text("重试")
        .on_click(|_| {
            if let Some(win) = web_sys::window() {
                let _ = win.location().reload();
            }
        })?
        .build();
    let home = ElementBuilder::new("a")?
        .class("btn-secondary")
        .attr("href", "/")?
        .text("返回登录")
        .build();

    render_centered(render_empty_state(
        "💥",
        "页面发生错误",
        "请刷新页面或稍后再试。",
        Illustration::Alert,
        vec![reload, home],
    )?)
}
