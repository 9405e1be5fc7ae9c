use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct AuditLog {
    pub id: i64,
    pub action: String,
    pub target_type: String,
    pub target_id: String,
    pub meta: serde_json::Value,
    pub created_at: String,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
#[serde(default)]
pub struct AuditLogResponse {
    pub items: Vec<AuditLog>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}
