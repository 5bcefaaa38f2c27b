use crate::api::client::ApiClient;
use crate::errors::AppError;
use crate::models::campaign::{
    Campaign, CampaignList, CampaignStatus, CreateCampaignRequest, UpdateCampaignRequest,
};
use crate::validation;

/// List campaign marketplace (public).
///
/// Default backend: hanya LIVE. Filter country dan limit opsional.
pub async fn list_campaigns(
    api: &ApiClient,
    status: Option<CampaignStatus>,
    country: Option<&str>,
    limit: Option<u32>,
) -> Result<Option<CampaignList>, AppError> {
    let mut query: Vec<(&str, String)> = Vec::new();
    if let Some(s) = status {
        query.push(("status", s.as_str().to_string()));
    }
    if let Some(c) = country {
        query.push(("country", c.to_string()));
    }
    if let Some(l) = limit {
        query.push(("limit", l.to_string()));
    }

    api.get_with_query("/campaigns", &query).await
}

/// Detail satu campaign (public).
pub async fn get_campaign(api: &ApiClient, campaign_id: &str) -> Result<Option<Campaign>, AppError> {
    api.get(&format!("/campaigns/{}", campaign_id)).await
}

/// Campaign milik business owner yang sedang login (semua status).
pub async fn my_campaigns(api: &ApiClient) -> Result<Option<CampaignList>, AppError> {
    api.get("/campaigns/my").await
}

/// Buat campaign baru (business owner). Mulai di status PENDING.
pub async fn create_campaign(
    api: &ApiClient,
    request: CreateCampaignRequest,
) -> Result<Option<Campaign>, AppError> {
    validation::validate_campaign_title(&request.title).map_err(AppError::Validation)?;
    validation::validate_campaign_description(&request.description).map_err(AppError::Validation)?;
    validation::validate_amount(request.target_amount, Some(1.0), None)
        .map_err(AppError::Validation)?;
    if let Some(ref url) = request.image_url {
        validation::validate_url(url).map_err(AppError::Validation)?;
    }

    let body = serde_json::to_value(&request)
        .map_err(|e| AppError::Request(format!("Failed to encode campaign: {}", e)))?;
    api.post("/campaigns", body).await
}

/// Update campaign (owner only; backend menolak campaign LIVE).
pub async fn update_campaign(
    api: &ApiClient,
    campaign_id: &str,
    request: UpdateCampaignRequest,
) -> Result<Option<Campaign>, AppError> {
    if let Some(ref title) = request.title {
        validation::validate_campaign_title(title).map_err(AppError::Validation)?;
    }
    if let Some(amount) = request.target_amount {
        validation::validate_amount(amount, Some(1.0), None).map_err(AppError::Validation)?;
    }

    let body = serde_json::to_value(&request)
        .map_err(|e| AppError::Request(format!("Failed to encode campaign update: {}", e)))?;
    api.put(&format!("/campaigns/{}", campaign_id), body).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::harness;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn campaign_json(id: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "campaign_id": id,
            "owner_id": "owner-1",
            "title": "Solar kiosks",
            "description": "Community solar charging kiosks",
            "country": "KE",
            "target_amount": 25000.0,
            "raised_amount": 4000.0,
            "status": status,
            "category": "Energy",
            "image_url": null,
            "created_at": "2025-05-01T10:00:00",
            "updated_at": null
        })
    }

    #[tokio::test]
    async fn list_campaigns_builds_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/campaigns"))
            .and(query_param("status", "LIVE"))
            .and(query_param("country", "KE"))
            .and(query_param("limit", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "campaigns": [campaign_json("c1", "LIVE")],
                "total": 1
            })))
            .expect(1)
            .mount(&server)
            .await;

        let h = harness(&server.uri());
        let list = list_campaigns(&h.client, Some(CampaignStatus::Live), Some("KE"), Some(10))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.campaigns[0].status, CampaignStatus::Live);
    }

    #[tokio::test]
    async fn get_campaign_parses_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/campaigns/c42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(campaign_json("c42", "PENDING")))
            .mount(&server)
            .await;

        let h = harness(&server.uri());
        let campaign = get_campaign(&h.client, "c42").await.unwrap().unwrap();
        assert_eq!(campaign.campaign_id, "c42");
        assert_eq!(campaign.status, CampaignStatus::Pending);
    }

    #[tokio::test]
    async fn create_campaign_rejects_zero_target() {
        let h = harness("http://127.0.0.1:9");
        let request = CreateCampaignRequest {
            title: "Solar kiosks".to_string(),
            description: "Community solar charging kiosks".to_string(),
            country: "KE".to_string(),
            target_amount: 0.0,
            category: None,
            image_url: None,
            business_plan_url: None,
        };
        let err = create_campaign(&h.client, request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
