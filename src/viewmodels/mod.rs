pub mod pagination;
pub mod login_viewmodel;
pub mod candidates_viewmodel;
pub mod candidate_detail_viewmodel;
pub mod account_viewmodel;
pub mod audit_viewmodel;

pub use login_viewmodel::{LoginOutcome, LoginViewModel};
pub use candidates_viewmodel::{CandidatesPageState, CandidatesViewModel, FilterForm};
pub use candidate_detail_viewmodel::{CandidateDetailState, CandidateDetailViewModel, UnlockOutcome};
pub use account_viewmodel::{AccountState, AccountViewModel};
pub use audit_viewmodel::{AuditLogsState, AuditViewModel};
