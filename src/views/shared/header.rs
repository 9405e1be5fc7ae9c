// ============================================================================
// HEADER - Navegación principal + usuario actual
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::router::Route;
use crate::state::AppState;
use crate::viewmodels::LoginViewModel;
use crate::views::shared::render_link;

pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let current = state.current_route();
    let nav_class = |route: &Route| {
        let active = match (route, &current) {
            (Route::Candidates, Route::CandidateDetail(_)) => true,
            (a, b) => a == b,
        };
        if active {
            "nav-link nav-link-active"
        } else {
            "nav-link"
        }
    };

    let mut nav = ElementBuilder::new("nav")?
        .class("header-nav")
        .child(render_link(state, Route::Account, nav_class(&Route::Account), "账号资料")?)?
        .child(render_link(state, Route::Candidates, nav_class(&Route::Candidates), "候选人")?)?
        .child(render_link(state, Route::AuditLogs, nav_class(&Route::AuditLogs), "审计日志")?)?;

    if let Some(session) = state.session.get_current() {
        let logout_state = state.clone();
        let user_box = ElementBuilder::new("div")?
            .class("header-user")
            .child(
                ElementBuilder::new("span")?
                    .class("header-user-id")
                    .text(&format!("用户 ID: {}", session.user_id))
                    .build(),
            )?
            .child(
                ElementBuilder::new("button")?
                    .class("header-logout")
                    .text("退出")
                    .on_click(move |_| {
                        LoginViewModel::new(logout_state.api.clone(), logout_state.session.clone())
                            .sign_out();
                    })?
                    .build(),
            )?
            .build();
        nav = nav.child(user_box)?;
    }

    Ok(ElementBuilder::new("header")?
        .class("header")
        .child(
            ElementBuilder::new("div")?
                .class("container header-inner")
                .child(render_link(state, Route::Candidates, "header-brand", "TG HR")?)?
                .child(nav.build())?
                .build(),
        )?
        .build())
}
