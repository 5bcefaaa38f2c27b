use crate::api::client::ApiClient;
use crate::errors::AppError;
use crate::models::payment::{
    InitiatePaymentRequest, PaymentSession, Transaction, TransactionStatus,
};
use crate::validation;

/// Mulai flow pembayaran (investor). Backend membuat record transaksi dan
/// sesi gateway, lalu mengembalikan checkout URL.
pub async fn initiate_payment(
    api: &ApiClient,
    request: InitiatePaymentRequest,
) -> Result<Option<PaymentSession>, AppError> {
    validation::validate_amount(request.amount, Some(1.0), None).map_err(AppError::Validation)?;

    let body = serde_json::to_value(&request)
        .map_err(|e| AppError::Request(format!("Failed to encode payment request: {}", e)))?;
    api.post("/payments/initiate", body).await
}

/// Konfirmasi pembayaran setelah redirect balik dari gateway.
pub async fn confirm_payment(
    api: &ApiClient,
    transaction_id: &str,
    gateway_reference: &str,
    status: TransactionStatus,
) -> Result<Option<Transaction>, AppError> {
    let body = serde_json::json!({
        "transaction_id": transaction_id,
        "gateway_reference": gateway_reference,
        "status": status,
    });
    api.post("/payments/confirm", body).await
}

/// Transaksi milik user yang sedang login.
pub async fn my_transactions(api: &ApiClient) -> Result<Option<Vec<Transaction>>, AppError> {
    api.get("/payments/my").await
}

/// Detail satu transaksi (backend menolak kalau bukan milik user).
pub async fn get_transaction(
    api: &ApiClient,
    transaction_id: &str,
) -> Result<Option<Transaction>, AppError> {
    api.get(&format!("/payments/{}", transaction_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::harness;
    use crate::models::payment::PaymentMethod;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn initiate_returns_checkout_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/payments/initiate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "transaction_id": "tx-1",
                "session_id": "sess-1",
                "checkout_url": "https://pay.example/sess-1",
                "amount": 100.0,
                "currency": "USD",
                "status": "PENDING",
                "expires_at": null
            })))
            .mount(&server)
            .await;

        let h = harness(&server.uri());
        let request = InitiatePaymentRequest {
            campaign_id: "c1".to_string(),
            amount: 100.0,
            currency: "USD".to_string(),
            payment_method: PaymentMethod::Card,
            return_url: None,
        };
        let session = initiate_payment(&h.client, request).await.unwrap().unwrap();
        assert_eq!(session.transaction_id, "tx-1");
        assert!(session.checkout_url.starts_with("https://"));
    }

    #[tokio::test]
    async fn initiate_rejects_non_positive_amount() {
        let h = harness("http://127.0.0.1:9");
        let request = InitiatePaymentRequest {
            campaign_id: "c1".to_string(),
            amount: 0.0,
            currency: "USD".to_string(),
            payment_method: PaymentMethod::Card,
            return_url: None,
        };
        let err = initiate_payment(&h.client, request).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn my_transactions_parses_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/payments/my"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([{
                "transaction_id": "tx-2",
                "user_id": "u1",
                "campaign_id": "c1",
                "amount": 50.0,
                "currency": "USD",
                "status": "COMPLETED",
                "payment_method": "MOBILE_MONEY",
                "created_at": "2025-06-01T08:00:00",
                "completed_at": "2025-06-01T08:01:00"
            }])))
            .mount(&server)
            .await;

        let h = harness(&server.uri());
        let txs = my_transactions(&h.client).await.unwrap().unwrap();
        assert_eq!(txs.len(), 1);
        assert_eq!(txs[0].status, TransactionStatus::Completed);
        assert_eq!(txs[0].payment_method, PaymentMethod::MobileMoney);
    }
}
