pub mod header;
pub mod link;
pub mod state_blocks;

pub use header::render_header;
pub use link::{render_link, render_nav_button};
pub use state_blocks::{render_empty_state, render_loading_state, Illustration};

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::AppState;

/// Layout de página con header: `min-h-screen` + container
pub fn render_page(state: &AppState, content: Vec<Element>) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("page")
        .child(render_header(state)?)?
        .child(
            ElementBuilder::new("main")?
                .class("container page-body")
                .children(content)?
                .build(),
        )?
        .build())
}

/// Título + subtítulo de página
pub fn render_page_title(title: &str, subtitle: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("page-title")
        .child(ElementBuilder::new("h1")?.text(title).build())?
        .child(ElementBuilder::new("p")?.class("page-subtitle").text(subtitle).build())?
        .build())
}

/// Página centrada sin header (estados de error / acceso)
pub fn render_centered(content: Element) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("page page-centered")
        .child(ElementBuilder::new("div")?.class("centered-box").child(content)?.build())?
        .build())
}
