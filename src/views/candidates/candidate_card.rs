use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

use crate::dom::ElementBuilder;
use crate::models::Candidate;
use crate::router::Route;
use crate::state::AppState;
use crate::utils::{english_level_label, format_salary_range, truncate_text};

/// Máximo de skills visibles en la tarjeta
const VISIBLE_SKILLS: usize = 3;

fn info_row(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("card-row")
        .child(ElementBuilder::new("span")?.text(label).build())?
        .child(ElementBuilder::new("span")?.class("card-row-value").text(value).build())?
        .build())
}

/// Tarjeta de candidato (enlace al detalle)
pub fn render_candidate_card(state: &AppState, candidate: &Candidate) -> Result<Element, JsValue> {
    let route = Route::CandidateDetail(candidate.slug.clone());

    let mut title = ElementBuilder::new("div")?
        .class("card-head")
        .child(
            ElementBuilder::new("div")?
                .child(ElementBuilder::new("h3")?.text(&candidate.display_name).build())?
                .child(
                    ElementBuilder::new("p")?
                        .class("card-subtitle")
                        .text(&truncate_text(&candidate.desired_role, 40))
                        .build(),
                )?
                .build(),
        )?;
    if candidate.bc_experience {
        title = title.child(ElementBuilder::new("span")?.class("badge badge-blue").text("BC经验").build())?;
    }

    let mut info = ElementBuilder::new("div")?
        .class("card-info")
        .child(info_row("英语水平:", &english_level_label(&candidate.english_level))?)?
        .child(info_row(
            "期望薪资:",
            &format_salary_range(candidate.expected_salary_min_cny, candidate.expected_salary_max_cny),
        )?)?;
    if candidate.availability_days > 0 {
        info = info.child(info_row("可用天数:", &format!("{} 天", candidate.availability_days))?)?;
    }

    let mut card = ElementBuilder::new("a")?
        .class("card candidate-card")
        .attr("href", &route.to_path())?
        .child(title.build())?
        .child(info.build())?;

    if !candidate.skills.is_empty() {
        let mut tags = ElementBuilder::new("div")?.class("tag-list");
        for skill in candidate.skills.iter().take(VISIBLE_SKILLS) {
            tags = tags.child(ElementBuilder::new("span")?.class("tag").text(skill).build())?;
        }
        if candidate.skills.len() > VISIBLE_SKILLS {
            tags = tags.child(
                ElementBuilder::new("span")?
                    .class("tag")
                    .text(&format!("+{}", candidate.skills.len() - VISIBLE_SKILLS))
                    .build(),
            )?;
        }
        card = card.child(
            ElementBuilder::new("div")?
                .class("card-skills")
                .child(ElementBuilder::new("p")?.class("card-caption").text("技能标签:").build())?
                .child(tags.build())?
                .build(),
        )?;
    }

    let (lock_class, lock_text) = if candidate.unlocked_contact {
        ("lock-state unlocked", "✓ 已解锁")
    } else {
        ("lock-state", "🔒 未解锁")
    };
    card = card.child(
        ElementBuilder::new("div")?
            .class("card-footer")
            .child(ElementBuilder::new("span")?.class(lock_class).text(lock_text).build())?
            .child(ElementBuilder::new("span")?.class("card-more").text("查看详情 →").build())?
            .build(),
    )?;

    let navigator = state.api.navigator();
    Ok(card
        .on_click(move |e: MouseEvent| {
            if e.ctrl_key() || e.meta_key() {
                return;
            }
            e.prevent_default();
            navigator.navigate(&route);
        })?
        .build())
}
