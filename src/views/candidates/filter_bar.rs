// ============================================================================
// FILTER BAR - Búsqueda y filtros de candidatos
// ============================================================================
// Los inputs escriben en `FilterForm` sin re-render; solo "搜索"/"重置"
// cambian los parámetros y disparan la carga.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::app;
use crate::dom::{field_value, is_checked, on_enter, on_value_change, ElementBuilder};
use crate::state::AppState;
use crate::utils::constants::{ENGLISH_LEVELS, SKILLS};
use crate::viewmodels::FilterForm;

fn labeled(label: &str, field: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("field")
        .child(ElementBuilder::new("label")?.class("field-label").text(label).build())?
        .child(field)?
        .build())
}

/// Input enlazado a un campo de texto del formulario
fn text_input<F>(
    state: &AppState,
    input_type: &str,
    value: &str,
    placeholder: &str,
    write: F,
) -> Result<Element, JsValue>
where
    F: Fn(&mut FilterForm, String) + 'static,
{
    let input = ElementBuilder::new("input")?
        .class("input-field")
        .attr("type", input_type)?
        .attr("value", value)?
        .attr("placeholder", placeholder)?
        .build();

    let page = state.candidates.clone();
    on_value_change(&input, "input", move |el| {
        write(&mut page.borrow_mut().form, field_value(el));
    })?;

    let search_state = state.clone();
    on_enter(&input, move || search(&search_state))?;
    Ok(input)
}

fn select<F>(
    state: &AppState,
    options: &[(&str, &str)],
    selected: &str,
    write: F,
) -> Result<Element, JsValue>
where
    F: Fn(&mut FilterForm, String) + 'static,
{
    let mut builder = ElementBuilder::new("select")?.class("input-field");
    for (value, label) in options {
        builder = builder.child(
            ElementBuilder::new("option")?
                .attr("value", value)?
                .flag("selected", *value == selected)?
                .text(label)
                .build(),
        )?;
    }
    let element = builder.build();

    let page = state.candidates.clone();
    on_value_change(&element, "change", move |el| {
        write(&mut page.borrow_mut().form, field_value(el));
    })?;
    Ok(element)
}

fn search(state: &AppState) {
    state.candidates.borrow_mut().apply_filters();
    app::load_candidates(state.clone());
}

fn reset(state: &AppState) {
    state.candidates.borrow_mut().reset_filters();
    app::load_candidates(state.clone());
}

pub fn render_filter_bar(state: &AppState) -> Result<Element, JsValue> {
    let form = state.candidates.borrow().form.clone();

    let skill_options: Vec<(&str, &str)> = SKILLS
        .iter()
        .map(|s| (*s, if s.is_empty() { "所有" } else { *s }))
        .collect();

    let basic = ElementBuilder::new("div")?
        .class("filter-grid")
        .child(labeled(
            "关键词搜索",
            text_input(state, "text", &form.q, "搜索候选人名字或职位...", |f, v| f.q = v)?,
        )?)?
        .child(labeled(
            "英语水平",
            select(state, ENGLISH_LEVELS, &form.english, |f, v| f.english = v)?,
        )?)?
        .child(labeled(
            "技能",
            select(state, &skill_options, &form.skill, |f, v| f.skill = v)?,
        )?)?
        .build();

    let toggle_state = state.clone();
    let toggle = ElementBuilder::new("button")?
        .class("link-button")
        .text(if form.show_advanced {
            "▼ 隐藏高级选项"
        } else {
            "▶ 显示高级选项"
        })
        .on_click(move |_| {
            {
                let mut page = toggle_state.candidates.borrow_mut();
                page.form.show_advanced = !page.form.show_advanced;
            }
            toggle_state.notify_subscribers();
        })?
        .build();

    let mut bar = ElementBuilder::new("div")?
        .class("filter-bar")
        .child(basic)?
        .child(toggle)?;

    if form.show_advanced {
        let checkbox = ElementBuilder::new("input")?
            .attr("type", "checkbox")?
            .flag("checked", form.bc_experience)?
            .build();
        let page = state.candidates.clone();
        on_value_change(&checkbox, "change", move |el| {
            page.borrow_mut().form.bc_experience = is_checked(el);
        })?;

        let advanced = ElementBuilder::new("div")?
            .class("filter-advanced")
            .child(
                ElementBuilder::new("label")?
                    .class("checkbox-row")
                    .child(checkbox)?
                    .child(ElementBuilder::new("span")?.text("仅显示有区块链经验的候选人").build())?
                    .build(),
            )?
            .child(
                ElementBuilder::new("div")?
                    .class("filter-grid-2")
                    .child(labeled(
                        "最低期望薪资 (CNY)",
                        text_input(state, "number", &form.salary_min, "例如: 20000", |f, v| {
                            f.salary_min = v
                        })?,
                    )?)?
                    .child(labeled(
                        "最高期望薪资 (CNY)",
                        text_input(state, "number", &form.salary_max, "例如: 50000", |f, v| {
                            f.salary_max = v
                        })?,
                    )?)?
                    .build(),
            )?
            .child(labeled(
                "最大可用天数",
                text_input(
                    state,
                    "number",
                    &form.availability_days_max,
                    "例如: 30",
                    |f, v| f.availability_days_max = v,
                )?,
            )?)?
            .build();
        bar = bar.child(advanced)?;
    }

    let search_state = state.clone();
    let reset_state = state.clone();
    let actions = ElementBuilder::new("div")?
        .class("filter-actions")
        .child(
            ElementBuilder::new("button")?
                .class("btn-primary")
                .text("🔍 搜索")
                .on_click(move |_| search(&search_state))?
                .build(),
        )?
        .child(
            ElementBuilder::new("button")?
                .class("btn-secondary")
                .text("重置")
                .on_click(move |_| reset(&reset_state))?
                .build(),
        )?
        .build();

    Ok(bar.child(actions)?.build())
}
