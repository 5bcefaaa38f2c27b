//! Input validation and sanitization module
//!
//! Centralized client-side validation for:
//! - Account input (email, password, country)
//! - Campaign forms (title, description, target)
//! - Financial amounts
//!
//! The backend revalidates everything; these checks exist to fail fast
//! before a network round trip.

/// Validation result type
pub type ValidationResult = Result<(), String>;

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let trimmed = email.trim();

    if trimmed.is_empty() {
        return Err("Email must not be empty".into());
    }

    if trimmed.len() > 254 {
        return Err("Email is too long (max 254 characters)".into());
    }

    let parts: Vec<&str> = trimmed.split('@').collect();
    if parts.len() != 2 {
        return Err("Invalid email format".into());
    }

    let (local, domain) = (parts[0], parts[1]);

    if local.is_empty() || local.len() > 64 {
        return Err("Invalid email format".into());
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err("Invalid email domain".into());
    }

    Ok(())
}

/// Validate password strength
/// - Minimum length: 8 characters
/// - Must contain: uppercase, lowercase, number
pub fn validate_password(password: &str) -> ValidationResult {
    if password.is_empty() {
        return Err("Password must not be empty".into());
    }

    if password.len() < 8 {
        return Err("Password must be at least 8 characters".into());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters".into());
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_numeric());

    if !has_upper || !has_lower || !has_digit {
        return Err("Password must contain an uppercase letter, a lowercase letter and a number".into());
    }

    Ok(())
}

/// Validate country field (free text di backend, tapi tidak boleh kosong)
pub fn validate_country(country: &str) -> ValidationResult {
    let trimmed = country.trim();

    if trimmed.is_empty() {
        return Err("Country must not be empty".into());
    }

    if trimmed.len() > 60 {
        return Err("Country is too long".into());
    }

    Ok(())
}

/// Validate monetary amount
pub fn validate_amount(amount: f64, min: Option<f64>, max: Option<f64>) -> ValidationResult {
    if amount.is_nan() || amount.is_infinite() {
        return Err("Invalid amount".into());
    }

    let min_val = min.unwrap_or(0.0);
    let max_val = max.unwrap_or(1_000_000_000.0);

    if amount < min_val {
        return Err(format!("Amount must be at least {:.2}", min_val));
    }

    if amount > max_val {
        return Err(format!("Amount must be at most {:.2}", max_val));
    }

    Ok(())
}

/// Validate campaign title
pub fn validate_campaign_title(title: &str) -> ValidationResult {
    let trimmed = title.trim();

    if trimmed.is_empty() {
        return Err("Campaign title must not be empty".into());
    }

    if trimmed.len() < 3 || trimmed.len() > 200 {
        return Err("Campaign title must be 3-200 characters".into());
    }

    Ok(())
}

/// Validate campaign description
pub fn validate_campaign_description(description: &str) -> ValidationResult {
    let trimmed = description.trim();

    if trimmed.is_empty() {
        return Err("Campaign description must not be empty".into());
    }

    if trimmed.len() > 5000 {
        return Err("Campaign description is too long (max 5000 characters)".into());
    }

    Ok(())
}

/// Validate a URL field (image, business plan)
pub fn validate_url(url: &str) -> ValidationResult {
    let trimmed = url.trim();

    if trimmed.is_empty() {
        return Err("URL must not be empty".into());
    }

    if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
        return Err("URL must start with http:// or https://".into());
    }

    if trimmed.len() > 2048 {
        return Err("URL is too long".into());
    }

    Ok(())
}

/// Validate admin rejection reason
pub fn validate_rejection_reason(reason: &str) -> ValidationResult {
    let trimmed = reason.trim();

    if trimmed.is_empty() {
        return Err("Rejection reason must not be empty".into());
    }

    if trimmed.len() > 500 {
        return Err("Rejection reason is too long (max 500 characters)".into());
    }

    Ok(())
}

/// Sanitize string input (remove control characters)
pub fn sanitize_string(input: &str) -> String {
    input.chars().filter(|c| !c.is_control()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation() {
        assert!(validate_email("ada@example.com").is_ok());
        assert!(validate_email("  ada@example.com  ").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("ada@nodomain").is_err());
    }

    #[test]
    fn password_validation() {
        assert!(validate_password("Str0ngPass").is_ok());
        assert!(validate_password("short1A").is_err());
        assert!(validate_password("alllowercase1").is_err());
        assert!(validate_password("ALLUPPERCASE1").is_err());
        assert!(validate_password("NoDigitsHere").is_err());
    }

    #[test]
    fn amount_validation() {
        assert!(validate_amount(100.0, Some(1.0), None).is_ok());
        assert!(validate_amount(0.5, Some(1.0), None).is_err());
        assert!(validate_amount(f64::NAN, None, None).is_err());
        assert!(validate_amount(2_000_000_000.0, None, None).is_err());
    }

    #[test]
    fn title_validation() {
        assert!(validate_campaign_title("Solar kiosks").is_ok());
        assert!(validate_campaign_title("ab").is_err());
        assert!(validate_campaign_title(&"x".repeat(201)).is_err());
    }

    #[test]
    fn url_validation() {
        assert!(validate_url("https://cdn.example.com/img.png").is_ok());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("").is_err());
    }

    #[test]
    fn sanitize_strips_control_chars() {
        assert_eq!(sanitize_string("hello\x00world\n"), "helloworld");
    }
}
