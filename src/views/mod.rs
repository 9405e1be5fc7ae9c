pub mod app;
pub mod shared;
pub mod login;
pub mod candidates;
pub mod candidate_detail;
pub mod account;
pub mod audit_logs;
pub mod quota;
pub mod status_pages;

pub use app::render_app;
pub use login::render_login;
pub use candidates::render_candidates;
pub use candidate_detail::render_candidate_detail;
pub use account::render_account;
pub use audit_logs::render_audit_logs;
pub use quota::render_quota;
pub use status_pages::{
    render_error_page, render_forbidden, render_not_found, render_unauthorized,
    render_waiting_approval,
};
