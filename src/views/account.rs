// ============================================================================
// ACCOUNT VIEW - Perfil, empresa y cuota de desbloqueo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::{MeResponse, QuotaInfo};
use crate::state::AppState;
use crate::utils::{format_date, status_class, status_label};
use crate::views::shared::{
    render_empty_state, render_loading_state, render_page, render_page_title, Illustration,
};

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

fn row(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("kv-row")
        .child(ElementBuilder::new("span")?.class("kv-label").text(label).build())?
        .child(ElementBuilder::new("span")?.class("kv-value").text(value).build())?
        .build())
}

fn status_row(label: &str, status: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("kv-row")
        .child(ElementBuilder::new("span")?.class("kv-label").text(label).build())?
        .child(
            ElementBuilder::new("span")?
                .class(status_class(status))
                .text(&status_label(status))
                .build(),
        )?
        .build())
}

fn section(title: &str, class: &str, rows: Vec<Element>) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class(class)
        .child(ElementBuilder::new("h2")?.text(title).build())?
        .child(ElementBuilder::new("div")?.class("kv-list").children(rows)?.build())?
        .build())
}

fn stat(label: &str, value: i64, class: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class(class)
        .child(ElementBuilder::new("p")?.class("stat-label").text(label).build())?
        .child(ElementBuilder::new("p")?.class("stat-value").text(&value.to_string()).build())?
        .build())
}

fn render_quota(quota: &QuotaInfo) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("card card-wide")
        .child(ElementBuilder::new("h2")?.text("解锁配额").build())?;

    if !quota.configured {
        return Ok(card
            .child(ElementBuilder::new("div")?.class("muted").text("配额尚未配置，请联系管理员。").build())?
            .build());
    }

    let stats = ElementBuilder::new("div")?
        .class("stat-grid")
        .child(stat("总配额", quota.unlock_quota_total, "stat stat-blue")?)?
        .child(stat("已使用", quota.unlock_quota_used, "stat stat-amber")?)?
        .child(stat("剩余", quota.unlock_quota_remaining, "stat stat-green")?)?
        .build();

    let progress = ElementBuilder::new("div")?
        .class("progress")
        .child(
            ElementBuilder::new("div")?
                .class("progress-caption")
                .child(ElementBuilder::new("span")?.text("使用进度").build())?
                .child(
                    ElementBuilder::new("span")?
                        .text(&format!("{}/{}", quota.unlock_quota_used, quota.unlock_quota_total))
                        .build(),
                )?
                .build(),
        )?
        .child(
            ElementBuilder::new("div")?
                .class("progress-track")
                .child(
                    ElementBuilder::new("div")?
                        .class("progress-bar")
                        .attr("style", &format!("width: {:.1}%", quota.usage_percent()))?
                        .build(),
                )?
                .build(),
        )?
        .build();

    let period = ElementBuilder::new("div")?
        .class("quota-period")
        .text(&format!(
            "配额周期：{} ~ {}",
            format_date(&quota.period_start),
            format_date(&quota.period_end)
        ))
        .build();

    Ok(card.child(stats)?.child(progress)?.child(period)?.build())
}

fn render_account_data(data: &MeResponse) -> Result<Element, JsValue> {
    let user = section(
        "个人信息",
        "card",
        vec![
            row("用户 ID", &data.user.id.to_string())?,
            row("显示名", or_dash(&data.user.display_name))?,
            row("Telegram", or_dash(&data.user.tg_username))?,
            row("角色", &data.user.role)?,
            status_row("状态", &data.user.status)?,
        ],
    )?;

    let company = section(
        "公司信息",
        "card",
        vec![
            row("公司 ID", &data.company.id.to_string())?,
            row("公司名称", or_dash(&data.company.name))?,
            status_row("公司状态", &data.company.status)?,
        ],
    )?;

    Ok(ElementBuilder::new("div")?
        .class("account-grid")
        .child(user)?
        .child(company)?
        .child(render_quota(&data.quota)?)?
        .build())
}

pub fn render_account(state: &AppState) -> Result<Element, JsValue> {
    let (loading, data) = {
        let account = state.account.borrow();
        (account.loading, account.data.clone())
    };

    let body = if loading {
        render_loading_state("加载中...", "正在获取账号信息", Illustration::Profile)?
    } else if let Some(data) = data {
        render_account_data(&data)?
    } else {
        render_empty_state(
            "👤",
            "暂无账号信息",
            "请稍后再试或联系管理员",
            Illustration::User,
            Vec::new(),
        )?
    };

    render_page(state, vec![render_page_title("账号资料", "查看当前账号与配额信息")?, body])
}
