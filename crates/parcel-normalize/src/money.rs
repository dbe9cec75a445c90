//! Monetary values rendered in Indian digit grouping.

const RUPEE: &str = "\u{20b9}";

/// Re-render a monetary string as rupees with lakh/crore grouping
/// ("₹ 8245000" becomes "₹82,45,000"). Text without a number is kept as is.
pub fn normalize_money(text: &str) -> String {
    let text = text.trim();
    match parse_amount(text) {
        Some(amount) => format!("{RUPEE}{}", group_indian(amount)),
        None => text.to_string(),
    }
}

/// Extract the numeric amount, rounded to whole rupees.
pub fn parse_amount(text: &str) -> Option<u64> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let numeric: String = text[start..]
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let amount: f64 = numeric.parse().ok()?;
    if !amount.is_finite() || amount < 0.0 || amount > u64::MAX as f64 {
        return None;
    }
    Some(amount.round() as u64)
}

/// 12345678 -> "1,23,45,678".
pub fn group_indian(amount: u64) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}
