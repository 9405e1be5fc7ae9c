// ============================================================================
// AUDIT LOGS VIEW - Tabla de operaciones + paginación
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app;
use crate::dom::{scroll_to_top, ElementBuilder};
use crate::models::AuditLog;
use crate::state::AppState;
use crate::utils::{audit_action_label, format_date_time};
use crate::views::shared::{
    render_empty_state, render_loading_state, render_page, render_page_title, Illustration,
};

fn cell(tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new(tag)?.class(class).text(text).build())
}

fn render_row(log: &AuditLog) -> Result<Element, JsValue> {
    let action = ElementBuilder::new("td")?
        .class("cell")
        .child(
            ElementBuilder::new("span")?
                .class("badge badge-blue")
                .text(&audit_action_label(&log.action))
                .build(),
        )?
        .build();

    Ok(ElementBuilder::new("tr")?
        .class("table-row")
        .child(action)?
        .child(cell("td", "cell muted", &log.target_type)?)?
        .child(cell("td", "cell muted", &log.target_id)?)?
        .child(cell("td", "cell muted", &format_date_time(&log.created_at))?)?
        .build())
}

fn render_table(items: &[AuditLog]) -> Result<Element, JsValue> {
    let head = ElementBuilder::new("thead")?
        .child(
            ElementBuilder::new("tr")?
                .child(cell("th", "cell-head", "操作")?)?
                .child(cell("th", "cell-head", "目标类型")?)?
                .child(cell("th", "cell-head", "目标 ID")?)?
                .child(cell("th", "cell-head", "时间")?)?
                .build(),
        )?
        .build();

    let rows = items.iter().map(render_row).collect::<Result<Vec<_>, _>>()?;

    Ok(ElementBuilder::new("div")?
        .class("table-wrap")
        .child(
            ElementBuilder::new("table")?
                .class("table")
                .child(head)?
                .child(ElementBuilder::new("tbody")?.children(rows)?.build())?
                .build(),
        )?
        .build())
}

fn render_pagination(state: &AppState) -> Result<Element, JsValue> {
    let (page, can_prev, can_next) = {
        let audit = state.audit.borrow();
        (audit.page, audit.can_go_previous(), audit.can_go_next())
    };

    let prev_state = state.clone();
    let next_state = state.clone();
    Ok(ElementBuilder::new("div")?
        .class("pagination")
        .child(
            ElementBuilder::new("button")?
                .class("btn-secondary")
                .text("← 上一页")
                .flag("disabled", !can_prev)?
                .on_click(move |_| {
                    prev_state.audit.borrow_mut().previous_page();
                    scroll_to_top();
                    app::load_audit_logs(prev_state.clone());
                })?
                .build(),
        )?
        .child(cell("span", "pagination-label", &format!("第 {} 页", page))?)?
        .child(
            ElementBuilder::new("button")?
                .class("btn-secondary")
                .text("下一页 →")
                .flag("disabled", !can_next)?
                .on_click(move |_| {
                    next_state.audit.borrow_mut().next_page();
                    scroll_to_top();
                    app::load_audit_logs(next_state.clone());
                })?
                .build(),
        )?
        .build())
}

pub fn render_audit_logs(state: &AppState) -> Result<Element, JsValue> {
    let (loading, items) = {
        let audit = state.audit.borrow();
        (audit.loading, audit.items.clone())
    };

    let mut content = vec![render_page_title("审计日志", "查看所有操作历史记录")?];

    if loading {
        content.push(render_loading_state("加载中...", "正在获取审计日志", Illustration::Audit)?);
    } else if items.is_empty() {
        content.push(render_empty_state(
            "🧾",
            "暂无操作记录",
            "你还没有任何操作记录",
            Illustration::Audit,
            Vec::new(),
        )?);
        // Página vacía más allá del final: permitir volver
        if state.audit.borrow().can_go_previous() {
            content.push(render_pagination(state)?);
        }
    } else {
        content.push(render_table(&items)?);
        content.push(render_pagination(state)?);
    }

    render_page(state, content)
}
