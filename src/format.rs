//! Display helpers untuk rendering: currency, tanggal, truncation.
//! Murni fungsi — tidak menyentuh state sesi maupun network.

use chrono::NaiveDateTime;

/// Format jumlah uang dengan pemisah ribuan, mis. `USD 25,000.00`.
pub fn format_currency(amount: f64, currency: &str) -> String {
    let negative = amount < 0.0;
    let rounded = (amount.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - rounded.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!(
        "{}{} {}.{:02}",
        if negative { "-" } else { "" },
        currency,
        grouped,
        cents
    )
}

/// Format timestamp ISO dari backend jadi tanggal pendek, mis. `01 May 2025`.
/// Input yang tidak bisa diparse dikembalikan apa adanya.
pub fn format_date(iso: &str) -> String {
    let candidates = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
    for fmt in candidates {
        if let Ok(dt) = NaiveDateTime::parse_from_str(iso.trim(), fmt) {
            return dt.format("%d %b %Y").to_string();
        }
    }
    iso.to_string()
}

/// Potong teks panjang untuk card/list view, dengan ellipsis.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

/// Persentase terkumpul terhadap target, di-clamp ke 0..=100.
pub fn percent_funded(raised: f64, target: f64) -> u8 {
    if target <= 0.0 || raised <= 0.0 {
        return 0;
    }
    ((raised / target * 100.0).round() as u64).min(100) as u8
}
