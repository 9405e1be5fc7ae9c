// ============================================================================
// FORMAT - Etiquetas y formatos de presentación
// ============================================================================

use chrono::DateTime;

use crate::utils::constants::{AUDIT_ACTION_LABELS, ENGLISH_LEVELS};

/// Separador de miles: 20000 → "20,000"
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

/// Rango salarial en CNY. 0 equivale a "sin valor".
pub fn format_salary_range(min: i64, max: i64) -> String {
    match (min > 0, max > 0) {
        (true, true) => format!("¥{} - ¥{}", group_thousands(min), group_thousands(max)),
        (true, false) => format!("¥{}+", group_thousands(min)),
        (false, true) => format!("最高 ¥{}", group_thousands(max)),
        (false, false) => "面议".to_string(),
    }
}

pub fn english_level_label(level: &str) -> String {
    if level.is_empty() {
        return "未指定".to_string();
    }
    ENGLISH_LEVELS
        .iter()
        .find(|(value, _)| !value.is_empty() && *value == level)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| level.to_string())
}

/// Estado de usuario o empresa
pub fn status_label(status: &str) -> String {
    match status {
        "active" => "已激活".to_string(),
        "pending" => "待审核".to_string(),
        "blocked" => "已禁用".to_string(),
        other => other.to_string(),
    }
}

/// Clase CSS del badge de estado
pub fn status_class(status: &str) -> &'static str {
    match status {
        "active" => "badge badge-green",
        "pending" => "badge badge-amber",
        "blocked" => "badge badge-red",
        _ => "badge badge-gray",
    }
}

pub fn audit_action_label(action: &str) -> String {
    AUDIT_ACTION_LABELS
        .iter()
        .find(|(key, _)| *key == action)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| action.to_string())
}

/// Recortar a `max_chars` caracteres añadiendo "..."
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

/// RFC 3339 → "YYYY-MM-DD HH:MM". Si no parsea, se muestra tal cual.
pub fn format_date_time(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Fecha de periodo de cuota: "-" si viene vacía
pub fn format_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "-".to_string();
    }
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(20000), "20,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-4500), "-4,500");
    }

    #[test]
    fn test_salary_range() {
        assert_eq!(format_salary_range(20000, 50000), "¥20,000 - ¥50,000");
        assert_eq!(format_salary_range(20000, 0), "¥20,000+");
        assert_eq!(format_salary_range(0, 50000), "最高 ¥50,000");
        assert_eq!(format_salary_range(0, 0), "面议");
    }

    #[test]
    fn test_labels() {
        assert_eq!(english_level_label("fluent"), "流利");
        assert_eq!(english_level_label(""), "未指定");
        assert_eq!(english_level_label("native"), "native");
        assert_eq!(status_label("pending"), "待审核");
        assert_eq!(status_label("archived"), "archived");
        assert_eq!(audit_action_label("candidate.unlock"), "解锁候选人联系方式");
        assert_eq!(audit_action_label("custom.action"), "custom.action");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_text("短文本", 10), "短文本");
        assert_eq!(truncate_text("区块链工程师", 3), "区块链...");
    }

    #[test]
    fn test_dates() {
        assert_eq!(format_date_time("2024-05-01T08:30:00Z"), "2024-05-01 08:30");
        assert_eq!(format_date_time("yesterday"), "yesterday");
        assert_eq!(format_date("2024-05-01T00:00:00+08:00"), "2024-05-01");
        assert_eq!(format_date(""), "-");
        assert_eq!(format_date("2024-05-01"), "2024-05-01");
    }
}
