use serde::{Deserialize, Serialize};

/// Status lifecycle campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignStatus {
    /// Menunggu approval admin
    Pending,
    /// Aktif dan menerima investasi
    Live,
    Rejected,
    Completed,
    Cancelled,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Pending => "PENDING",
            CampaignStatus::Live => "LIVE",
            CampaignStatus::Rejected => "REJECTED",
            CampaignStatus::Completed => "COMPLETED",
            CampaignStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Campaign seperti dikembalikan backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub campaign_id: String,
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub country: String,
    pub target_amount: f64,
    pub raised_amount: f64,
    pub status: CampaignStatus,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

/// Response list marketplace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignList {
    pub campaigns: Vec<Campaign>,
    pub total: usize,
}

/// Payload POST /campaigns (business owner).
#[derive(Debug, Clone, Serialize)]
pub struct CreateCampaignRequest {
    pub title: String,
    pub description: String,
    pub country: String,
    pub target_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_plan_url: Option<String>,
}

/// Payload PUT /campaigns/{id} — semua field opsional.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateCampaignRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}
