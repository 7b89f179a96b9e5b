//! Label formatting: area display names, group labels, number grouping.

/// Hand-authored display overrides for area names that title-casing mangles.
const NAME_OVERRIDES: &[(&str, &str)] = &[
    ("IAH / AIRPORT AREA", "IAH / Airport Area"),
    (
        "WASHINGTON AVENUE COALITION / MEMORIAL PARK",
        "Washington Ave / Memorial Park",
    ),
];

/// Human-readable display name for a raw area identity.
///
/// Overrides take priority; anything else is rendered in title case
/// (first letter of each space-separated token capitalized, rest lowercased).
pub fn display_name(raw: &str) -> String {
    if let Some((_, pretty)) = NAME_OVERRIDES.iter().find(|(k, _)| *k == raw) {
        return (*pretty).to_string();
    }
    title_case(raw)
}

fn title_case(s: &str) -> String {
    s.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Round and group an amount with comma thousands separators, e.g. `12,345`.
pub fn thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Widget-facing label for a demographic group identity.
///
/// Income labels come as `inc_<1250`, `inc_1250_3333`, `inc_>3333`;
/// age labels as `age_<=29`, `age_30_54`, `age_55+`.
pub fn group_display(raw: &str) -> String {
    if raw.starts_with("inc") {
        if raw.contains('<') {
            return "Below $1,250".to_string();
        }
        if raw.contains('>') {
            return "Above $3,333".to_string();
        }
        if let Some((low, high)) = range_bounds(raw) {
            return format!("${} to ${}", thousands(low as f64), thousands(high as f64));
        }
    } else if raw.starts_with("age") {
        return match raw.trim_start_matches("age_") {
            "<=29" => "Below 30".to_string(),
            "55+" => "Above 55".to_string(),
            "30_54" => "Between 30 and 55".to_string(),
            other => other.to_string(),
        };
    }
    raw.to_string()
}

/// First two digit runs in a label, e.g. `inc_1250_3333` -> (1250, 3333).
fn range_bounds(raw: &str) -> Option<(u64, u64)> {
    let mut runs: Vec<u64> = Vec::new();
    let mut current = String::new();
    for ch in raw.chars() {
        if ch.is_ascii_digit() {
            current.push(ch);
        } else if !current.is_empty() {
            runs.push(current.parse().ok()?);
            current.clear();
        }
    }
    if !current.is_empty() {
        runs.push(current.parse().ok()?);
    }
    if runs.len() >= 2 {
        Some((runs[0], runs[1]))
    } else {
        None
    }
}
