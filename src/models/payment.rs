use serde::{Deserialize, Serialize};

/// Status transaksi pembayaran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    Pending,
    Processing,
    Completed,
    Failed,
    Refunded,
}

/// Metode pembayaran yang didukung gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Card,
    MobileMoney,
    BankTransfer,
}

/// Payload POST /payments/initiate (investor).
#[derive(Debug, Clone, Serialize)]
pub struct InitiatePaymentRequest {
    pub campaign_id: String,
    pub amount: f64,
    pub currency: String,
    pub payment_method: PaymentMethod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

/// Sesi checkout yang dikembalikan gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSession {
    pub transaction_id: String,
    pub session_id: String,
    pub checkout_url: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub expires_at: Option<String>,
}

/// Transaksi seperti dikembalikan backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub user_id: String,
    pub campaign_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: TransactionStatus,
    pub payment_method: PaymentMethod,
    pub created_at: String,
    pub completed_at: Option<String>,
}
