// src/utils.rs
/// Render a money amount with thousands separators and two decimal places,
/// e.g. 1250000.5 -> "1,250,000.50".
pub fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some(parts) => parts,
        None => (formatted.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-{}.{}", int_grouped, frac_part)
    } else {
        format!("{}.{}", int_grouped, frac_part)
    }
}

/// Normalize a benefit code for comparison against the essential set.
pub fn normalize_benefit_code(code: &str) -> String {
    code.trim().to_lowercase()
}
