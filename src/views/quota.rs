// ============================================================================
// QUOTA VIEW - Cuota agotada / sin configurar
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::ElementBuilder;
use crate::router::{QuotaReason, Route};
use crate::state::AppState;
use crate::views::shared::{render_empty_state, render_link, render_page, Illustration};

struct QuotaCopy {
    icon: &'static str,
    illustration: Illustration,
    title: &'static str,
    description: &'static str,
}

fn copy_for(reason: QuotaReason) -> QuotaCopy {
    match reason {
        QuotaReason::NotConfigured => QuotaCopy {
            icon: "🧩",
            illustration: Illustration::Profile,
            title: "配额未配置",
            description: "当前公司尚未配置解锁配额，请联系管理员进行配置。",
        },
        QuotaReason::Exceeded => QuotaCopy {
            icon: "🎫",
            illustration: Illustration::Quota,
            title: "配额不足",
            description: "当前配额已用完，请联系管理员升级或续费。",
        },
    }
}

pub fn render_quota(state: &AppState, reason: QuotaReason, return_to: &str) -> Result<Element, JsValue> {
    let copy = copy_for(reason);
    let (path, query) = return_to.split_once('?').unwrap_or((return_to, ""));
    let back = Route::parse(path, query);

    let mailto = ElementBuilder::new("a")?
        .class("btn-secondary")
        .attr(
            "href",
            &format!("mailto:{}?subject=配额问题咨询", CONFIG.support_email),
        )?
        .text("联系管理员")
        .build();

    let actions = vec![
        render_link(state, Route::Account, "btn-primary", "前往账号资料")?,
        mailto,
        render_link(state, back, "btn-secondary", "返回上一页")?,
    ];

    let notice = ElementBuilder::new("div")?
        .class("notice notice-blue")
        .child(
            ElementBuilder::new("p")?
                .text("你可以前往账号资料页面查看当前配额使用情况。")
                .build(),
        )?
        .build();

    let body = ElementBuilder::new("div")?
        .class("narrow")
        .child(render_empty_state(
            copy.icon,
            copy.title,
            copy.description,
            copy.illustration,
            actions,
        )?)?
        .child(notice)?
        .build();

    render_page(state, vec![body])
}
