// src/core/sanitize.rs
use once_cell::sync::Lazy;
use regex::Regex;

// "1. Математика" → "Математика". ASCII digit, a dot, at least one space.
static ORDINAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]\.\s+").expect("ordinal regex"));

/// Collapse sequences of whitespace (incl. NBSP) into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Drop a leading "N. " lesson number.
pub fn strip_ordinal(s: &str) -> String {
    ORDINAL.replace(s, "").into_owned()
}

/// Drop a leading field label such as "Группа: ".
pub fn strip_label<'a>(s: &'a str, label: &str) -> &'a str {
    s.strip_prefix(label).unwrap_or(s)
}

/// File-system friendly stem from a schedule title ("АТ-101" stays readable).
pub fn sanitize_filename(name: &str, id: u32) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch == '-' || ch == '_' { if !(last_us && ch == '_') { out.push(ch); } last_us = ch == '_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { format!("schedule_{}", id) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_nbsp_and_newlines() {
        assert_eq!(normalize_ws("  9:00\u{a0}-\n 10:30 "), "9:00 - 10:30");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn ordinal_only_single_digit_prefix() {
        assert_eq!(strip_ordinal("1. Math"), "Math");
        assert_eq!(strip_ordinal("3.   Физика"), "Физика");
        assert_eq!(strip_ordinal("12. Math"), "12. Math");
        assert_eq!(strip_ordinal("1.Math"), "1.Math");
        assert_eq!(strip_ordinal("Math 1. x"), "Math 1. x");
    }

    #[test]
    fn label_is_prefix_only() {
        assert_eq!(strip_label("Группа: АТ-101", "Группа: "), "АТ-101");
        assert_eq!(strip_label("АТ-101", "Группа: "), "АТ-101");
        assert_eq!(strip_label("x Группа: y", "Группа: "), "x Группа: y");
    }

    #[test]
    fn filename_keeps_cyrillic() {
        assert_eq!(sanitize_filename("РИ-280001 (1 подгр.)", 7), "РИ-280001_1_подгр");
        assert_eq!(sanitize_filename("???", 7), "schedule_7");
    }
}
