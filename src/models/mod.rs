pub mod session;
pub mod auth;
pub mod candidate;
pub mod account;
pub mod audit;

pub use session::{Session, UserStatus};
pub use auth::{ApiErrorBody, LoginResponse, TelegramAuthData};
pub use candidate::{
    Candidate, CandidateContact, CandidateDetail, CandidateListParams, CandidateListResponse,
};
pub use account::{MeCompany, MeResponse, MeUser, QuotaInfo};
pub use audit::{AuditLog, AuditLogResponse};
