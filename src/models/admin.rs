use serde::{Deserialize, Serialize};

/// Baris user di panel admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListItem {
    pub user_id: String,
    pub email: String,
    pub role: String,
    pub country: String,
    pub kyc_status: String,
    pub created_at: String,
}

/// Entry audit log platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub log_id: String,
    pub action: String,
    pub user_id: String,
    pub details: serde_json::Value,
    pub timestamp: String,
}

/// Statistik platform untuk dashboard admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformStats {
    pub total_users: u64,
    pub total_campaigns: u64,
    pub live_campaigns: u64,
    pub pending_campaigns: u64,
    pub total_raised: f64,
    pub total_transactions: u64,
}
