// ============================================================================
// AUDIT VIEWMODEL - Historial de operaciones paginado
// ============================================================================

use crate::models::AuditLog;
use crate::services::ApiClient;
use crate::utils::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::viewmodels::pagination;

pub const AUDIT_FAILED: &str = "获取审计日志失败";

#[derive(Clone, Debug, PartialEq)]
pub struct AuditLogsState {
    pub page: u32,
    pub page_size: u32,
    pub items: Vec<AuditLog>,
    pub loading: bool,
    pub request_seq: u64,
}

impl Default for AuditLogsState {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            items: Vec::new(),
            loading: false,
            request_seq: 0,
        }
    }
}

impl AuditLogsState {
    pub fn previous_page(&mut self) {
        self.page = pagination::previous_page(self.page);
    }

    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.page = pagination::next_page(self.page);
        }
    }

    pub fn can_go_previous(&self) -> bool {
        pagination::can_go_previous(self.page)
    }

    pub fn can_go_next(&self) -> bool {
        pagination::can_go_next(self.items.len(), self.page_size)
    }

    pub fn begin_request(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.request_seq
    }

    pub fn finish_request(&mut self, seq: u64, result: Result<Vec<AuditLog>, String>) -> Option<String> {
        if seq != self.request_seq {
            return None;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                None
            }
            Err(message) => Some(message),
        }
    }
}

pub struct AuditViewModel {
    api: ApiClient,
}

impl AuditViewModel {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn fetch(&self, page: u32, page_size: u32) -> Result<Vec<AuditLog>, String> {
        log::info!("🧾 [AUDIT] Página {}", page);
        self.api
            .get_audit_logs(page, page_size)
            .await
            .map(|response| response.items)
            .map_err(|e| e.user_message(AUDIT_FAILED))
    }
}
