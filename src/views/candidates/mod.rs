// ============================================================================
// CANDIDATES VIEW - Lista de candidatos con filtros y paginación
// ============================================================================

pub mod candidate_card;
pub mod filter_bar;

pub use candidate_card::render_candidate_card;
pub use filter_bar::render_filter_bar;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app;
use crate::dom::{scroll_to_top, ElementBuilder};
use crate::state::AppState;
use crate::views::shared::{
    render_empty_state, render_loading_state, render_page, render_page_title, Illustration,
};

fn render_pagination(state: &AppState) -> Result<Element, JsValue> {
    let (page, can_prev, can_next) = {
        let page = state.candidates.borrow();
        (page.params.page, page.can_go_previous(), page.can_go_next())
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
                    prev_state.candidates.borrow_mut().previous_page();
                    scroll_to_top();
                    app::load_candidates(prev_state.clone());
                })?
                .build(),
        )?
        .child(
            ElementBuilder::new("span")?
                .class("pagination-label")
                .text(&format!("第 {} 页", page))
                .build(),
        )?
        .child(
            ElementBuilder::new("button")?
                .class("btn-secondary")
                .text("下一页 →")
                .flag("disabled", !can_next)?
                .on_click(move |_| {
                    next_state.candidates.borrow_mut().next_page();
                    scroll_to_top();
                    app::load_candidates(next_state.clone());
                })?
                .build(),
        )?
        .build())
}

pub fn render_candidates(state: &AppState) -> Result<Element, JsValue> {
    let (loading, items) = {
        let page = state.candidates.borrow();
        (page.loading, page.items.clone())
    };

    let mut content = vec![
        render_page_title("候选人列表", "浏览并发现最适合的候选人")?,
        render_filter_bar(state)?,
    ];

    if loading {
        content.push(render_loading_state("加载中...", "正在获取候选人列表", Illustration::List)?);
    } else if items.is_empty() {
        let reset_state = state.clone();
        let clear = ElementBuilder::new("button")?
            .class("btn-secondary")
            .text("清除筛选")
            .on_click(move |_| {
                reset_state.candidates.borrow_mut().reset_filters();
                app::load_candidates(reset_state.clone());
            })?
            .build();
        content.push(render_empty_state(
            "🔎",
            "未找到匹配的候选人",
            "尝试调整筛选条件或清除筛选",
            Illustration::List,
            vec![clear],
        )?);
    } else {
        let cards = items
            .iter()
            .map(|candidate| render_candidate_card(state, candidate))
            .collect::<Result<Vec<_>, _>>()?;
        content.push(ElementBuilder::new("div")?.class("card-grid").children(cards)?.build());
        content.push(render_pagination(state)?);
    }

    render_page(state, content)
}
