use serde::{Deserialize, Serialize};

/// Role user di marketplace — menentukan halaman dan aksi yang boleh diakses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Investor,
    BusinessOwner,
    Admin,
    /// Nilai role yang tidak dikenali server-side; guard mengarahkan ke Home.
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Investor => "INVESTOR",
            Role::BusinessOwner => "BUSINESS_OWNER",
            Role::Admin => "ADMIN",
            Role::Unknown => "UNKNOWN",
        }
    }
}

/// Status verifikasi KYC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    Pending,
    Verified,
    Rejected,
}

impl KycStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::Pending => "PENDING",
            KycStatus::Verified => "VERIFIED",
            KycStatus::Rejected => "REJECTED",
        }
    }
}

/// Identitas user yang di-cache bersama token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub role: Role,
}

/// Response dari /auth/login dan /auth/signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: i64,
    pub user_id: String,
    pub role: Role,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

/// Profil user dari /auth/me.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub email: String,
    pub role: Role,
    pub country: String,
    pub kyc_status: KycStatus,
    pub full_name: Option<String>,
    pub created_at: String,
}

/// Payload POST /auth/signup.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Payload POST /auth/login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
