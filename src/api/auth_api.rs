use crate::api::client::ApiClient;
use crate::errors::AppError;
use crate::log_info;
use crate::models::user::{Identity, LoginRequest, SignupRequest, TokenResponse, UserProfile};
use crate::routes::Surface;
use crate::validation;

/// Persist hasil login/signup ke SessionStore.
/// Setelah ini sukses, `is_authenticated()` dijamin true.
fn persist_session(api: &ApiClient, token: &TokenResponse) -> Result<(), AppError> {
    api.session().set_token(&token.access_token)?;
    api.session().set_identity(Identity {
        id: token.user_id.clone(),
        role: token.role,
    })?;
    Ok(())
}

/// Registrasi user baru. Token dan identity dipersist sebelum return.
pub async fn signup(
    api: &ApiClient,
    request: SignupRequest,
) -> Result<Option<TokenResponse>, AppError> {
    validation::validate_email(&request.email).map_err(AppError::Validation)?;
    validation::validate_password(&request.password).map_err(AppError::Validation)?;
    validation::validate_country(&request.country).map_err(AppError::Validation)?;

    let body = serde_json::to_value(&request)
        .map_err(|e| AppError::Request(format!("Failed to encode signup request: {}", e)))?;

    let response: Option<TokenResponse> = api.post("/auth/signup", body).await?;

    if let Some(ref token) = response {
        persist_session(api, token)?;
        log_info!(
            "AUTH",
            "Signup successful",
            serde_json::json!({ "user_id": token.user_id, "role": token.role.as_str() })
        );
    }

    Ok(response)
}

/// Login. Token dan identity dipersist sebelum return.
pub async fn login(
    api: &ApiClient,
    email: &str,
    password: &str,
) -> Result<Option<TokenResponse>, AppError> {
    validation::validate_email(email).map_err(AppError::Validation)?;

    if password.is_empty() {
        return Err(AppError::Validation("Password must not be empty".to_string()));
    }

    let request = LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let body = serde_json::to_value(&request)
        .map_err(|e| AppError::Request(format!("Failed to encode login request: {}", e)))?;

    let response: Option<TokenResponse> = api.post("/auth/login", body).await?;

    if let Some(ref token) = response {
        persist_session(api, token)?;
        log_info!(
            "AUTH",
            "Login successful",
            serde_json::json!({ "user_id": token.user_id, "role": token.role.as_str() })
        );
    }

    Ok(response)
}

/// Profil user yang sedang login.
pub async fn me(api: &ApiClient) -> Result<Option<UserProfile>, AppError> {
    api.get("/auth/me").await
}

/// Logout — murni lokal: hapus sesi lalu kembali ke halaman login.
/// Tidak ada endpoint logout di backend; token dibiarkan expire sendiri.
pub async fn logout(api: &ApiClient) -> Result<(), AppError> {
    api.session().clear()?;
    api.navigator().go_to(Surface::Login);
    log_info!("AUTH", "Logged out");
    Ok(())
}
