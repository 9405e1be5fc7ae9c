// ============================================================================
// APP VIEW - Selección de página según la ruta
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::router::Route;
use crate::state::AppState;
use crate::views::{
    render_account, render_audit_logs, render_candidate_detail, render_candidates, render_forbidden,
    render_login, render_not_found, render_quota, render_unauthorized, render_waiting_approval,
};

/// Renderizar la página de la ruta actual
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    match state.current_route() {
        Route::Login => render_login(state),
        Route::Candidates => render_candidates(state),
        Route::CandidateDetail(_) => render_candidate_detail(state),
        Route::Account => render_account(state),
        Route::AuditLogs => render_audit_logs(state),
        Route::Quota { reason, return_to } => render_quota(state, reason, &return_to),
        Route::WaitingApproval => render_waiting_approval(state),
        Route::Unauthorized => render_unauthorized(state),
        Route::Forbidden => render_forbidden(state),
        Route::NotFound => render_not_found(state),
    }
}
