// ============================================================================
// CANDIDATE DETAIL VIEW - Ficha + contacto (desbloqueo)
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app;
use crate::dom::ElementBuilder;
use crate::models::CandidateDetail;
use crate::router::Route;
use crate::state::AppState;
use crate::utils::{english_level_label, group_thousands};
use crate::views::shared::{
    render_empty_state, render_link, render_loading_state, render_page, Illustration,
};

fn info_card(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("card info-card")
        .child(ElementBuilder::new("p")?.class("info-label").text(label).build())?
        .child(ElementBuilder::new("p")?.class("info-value").text(value).build())?
        .build())
}

/// Salario en ficha: solo si vienen ambos extremos
fn detail_salary(detail: &CandidateDetail) -> String {
    let c = &detail.candidate;
    if c.expected_salary_min_cny > 0 && c.expected_salary_max_cny > 0 {
        format!(
            "¥{}-{}",
            group_thousands(c.expected_salary_min_cny),
            group_thousands(c.expected_salary_max_cny)
        )
    } else {
        "未指定".to_string()
    }
}

fn render_main(detail: &CandidateDetail) -> Result<Element, JsValue> {
    let c = &detail.candidate;

    let mut head = ElementBuilder::new("div")?
        .class("card detail-head")
        .child(
            ElementBuilder::new("div")?
                .child(ElementBuilder::new("h1")?.text(&c.display_name).build())?
                .child(ElementBuilder::new("p")?.class("detail-role").text(&c.desired_role).build())?
                .build(),
        )?;
    if c.bc_experience {
        head = head.child(ElementBuilder::new("span")?.class("badge badge-blue").text("区块链经验").build())?;
    }

    let availability = if c.availability_days > 0 {
        format!("{} 天", c.availability_days)
    } else {
        "- 天".to_string()
    };
    let timezone = if c.timezone.is_empty() { "未指定" } else { c.timezone.as_str() };

    let grid = ElementBuilder::new("div")?
        .class("info-grid")
        .child(info_card("英语水平", &english_level_label(&c.english_level))?)?
        .child(info_card("可用天数", &availability)?)?
        .child(info_card("时区", timezone)?)?
        .child(info_card("期望薪资", &detail_salary(detail))?)?
        .build();

    let summary = ElementBuilder::new("div")?
        .class("card")
        .child(ElementBuilder::new("h2")?.text("个人介绍").build())?
        .child(
            ElementBuilder::new("p")?
                .class("detail-summary")
                .text(if c.summary.is_empty() { "暂无简介" } else { c.summary.as_str() })
                .build(),
        )?
        .build();

    let mut skills = ElementBuilder::new("div")?.class("tag-list");
    if c.skills.is_empty() {
        skills = skills.child(ElementBuilder::new("p")?.class("muted").text("未添加技能").build())?;
    } else {
        for skill in &c.skills {
            skills = skills.child(ElementBuilder::new("span")?.class("tag tag-blue").text(skill).build())?;
        }
    }
    let skills_card = ElementBuilder::new("div")?
        .class("card")
        .child(ElementBuilder::new("h2")?.text("技能").build())?
        .child(skills.build())?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("detail-main")
        .child(head.build())?
        .child(grid)?
        .child(summary)?
        .child(skills_card)?
        .build())
}

fn contact_row(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("contact-row")
        .child(ElementBuilder::new("p")?.class("info-label").text(label).build())?
        .child(ElementBuilder::new("p")?.class("contact-value").text(value).build())?
        .build())
}

fn render_contact(state: &AppState, detail: &CandidateDetail, unlocking: bool) -> Result<Element, JsValue> {
    let mut sidebar = ElementBuilder::new("div")?
        .class("card contact-card")
        .child(ElementBuilder::new("h3")?.text("联系方式").build())?;

    if let Some(contact) = detail.visible_contact() {
        let mut rows = ElementBuilder::new("div")?.class("contact-list");
        if !contact.tg_username.is_empty() {
            rows = rows.child(contact_row("Telegram", &format!("@{}", contact.tg_username))?)?;
        }
        if !contact.email.is_empty() {
            rows = rows.child(contact_row("邮箱", &contact.email)?)?;
        }
        if !contact.phone.is_empty() {
            rows = rows.child(contact_row("电话", &contact.phone)?)?;
        }
        sidebar = sidebar.child(rows.build())?;
    } else if detail.candidate.unlocked_contact {
        sidebar = sidebar.child(ElementBuilder::new("p")?.class("muted").text("已解锁").build())?;
    } else {
        let unlock_state = state.clone();
        sidebar = sidebar
            .child(
                ElementBuilder::new("p")?
                    .class("muted")
                    .text("联系方式已锁定，点击下方按钮解锁")
                    .build(),
            )?
            .child(
                ElementBuilder::new("button")?
                    .class("btn-primary btn-block")
                    .text(if unlocking { "解锁中..." } else { "🔓 解锁联系方式" })
                    .flag("disabled", unlocking)?
                    .on_click(move |_| app::unlock_contact(unlock_state.clone()))?
                    .build(),
            )?;
    }

    Ok(ElementBuilder::new("div")?
        .class("detail-sidebar")
        .child(sidebar.build())?
        .build())
}

pub fn render_candidate_detail(state: &AppState) -> Result<Element, JsValue> {
    let (loading, unlocking, detail) = {
        let page = state.detail.borrow();
        (page.loading, page.unlocking, page.detail.clone())
    };

    if loading {
        return render_page(
            state,
            vec![render_loading_state("加载中...", "正在获取候选人详情", Illustration::Profile)?],
        );
    }

    let Some(detail) = detail else {
        return render_page(
            state,
            vec![render_empty_state(
                "📄",
                "候选人不存在",
                "该候选人可能已被删除或不可见",
                Illustration::Profile,
                vec![render_link(state, Route::Candidates, "btn-primary", "返回列表")?],
            )?],
        );
    };

    let layout = ElementBuilder::new("div")?
        .class("detail-layout")
        .child(render_main(&detail)?)?
        .child(render_contact(state, &detail, unlocking)?)?
        .build();

    render_page(
        state,
        vec![
            render_link(state, Route::Candidates, "back-link", "← 返回列表")?,
            layout,
        ],
    )
}
