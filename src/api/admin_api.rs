use crate::api::client::ApiClient;
use crate::errors::AppError;
use crate::models::admin::{AuditLogEntry, PlatformStats, UserListItem};
use crate::models::campaign::{Campaign, CampaignList, CampaignStatus};
use crate::models::user::{KycStatus, Role};
use crate::validation;

/// Campaign yang menunggu approval.
pub async fn pending_campaigns(api: &ApiClient) -> Result<Option<CampaignList>, AppError> {
    api.get("/admin/campaigns/pending").await
}

/// Semua campaign lintas status, dengan filter status opsional.
pub async fn all_campaigns(
    api: &ApiClient,
    status: Option<CampaignStatus>,
) -> Result<Option<CampaignList>, AppError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(s) = status {
        query.push(("status", s.as_str().to_string()));
    }
    api.get_with_query("/admin/campaigns/all", &query).await
}

/// Approve campaign — status jadi LIVE.
pub async fn approve_campaign(
    api: &ApiClient,
    campaign_id: &str,
) -> Result<Option<Campaign>, AppError> {
    api.post(
        &format!("/admin/campaigns/{}/approve", campaign_id),
        serde_json::json!({}),
    )
    .await
}

/// Reject campaign dengan alasan (wajib diisi).
pub async fn reject_campaign(
    api: &ApiClient,
    campaign_id: &str,
    reason: &str,
) -> Result<Option<Campaign>, AppError> {
    validation::validate_rejection_reason(reason).map_err(AppError::Validation)?;

    api.post(
        &format!("/admin/campaigns/{}/reject", campaign_id),
        serde_json::json!({ "reason": reason }),
    )
    .await
}

/// User platform, difilter role / status KYC kalau diisi.
pub async fn list_users(
    api: &ApiClient,
    role: Option<Role>,
    kyc_status: Option<KycStatus>,
    limit: Option<u32>,
) -> Result<Option<Vec<UserListItem>>, AppError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(r) = role {
        query.push(("role", r.as_str().to_string()));
    }
    if let Some(k) = kyc_status {
        query.push(("kyc_status", k.as_str().to_string()));
    }
    if let Some(l) = limit {
        query.push(("limit", l.to_string()));
    }
    api.get_with_query("/admin/users", &query).await
}

/// Update status KYC seorang user.
pub async fn update_kyc(
    api: &ApiClient,
    user_id: &str,
    status: KycStatus,
) -> Result<Option<UserListItem>, AppError> {
    api.post(
        &format!("/admin/users/{}/kyc", user_id),
        serde_json::json!({ "status": status }),
    )
    .await
}

/// Audit log platform, terbaru dulu. Filter per action atau per user.
pub async fn audit_logs(
    api: &ApiClient,
    action: Option<&str>,
    user_id: Option<&str>,
    limit: Option<u32>,
) -> Result<Option<Vec<AuditLogEntry>>, AppError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(a) = action {
        query.push(("action", a.to_string()));
    }
    if let Some(u) = user_id {
        query.push(("user_id", u.to_string()));
    }
    if let Some(l) = limit {
        query.push(("limit", l.to_string()));
    }
    api.get_with_query("/admin/audit-logs", &query).await
}

/// Statistik platform untuk dashboard admin.
pub async fn platform_stats(api: &ApiClient) -> Result<Option<PlatformStats>, AppError> {
    api.get("/admin/stats").await
}
