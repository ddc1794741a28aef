//! Locale-aware amount and date rendering.

use chrono::NaiveDate;

use crate::i18n::Language;

const MAX_FRACTION_DIGITS: usize = 2;

/// Separators used when rendering numbers for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleConfig {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl LocaleConfig {
    pub fn for_language(language: Language) -> Self {
        match language {
            Language::Tr => Self {
                decimal_separator: ',',
                grouping_separator: '.',
            },
            Language::En => Self {
                decimal_separator: '.',
                grouping_separator: ',',
            },
        }
    }
}

/// Groups thousands and keeps up to two fraction digits, dropping trailing
/// zeros (`5000.5` -> `5.000,5` in Turkish).
pub fn format_number(locale: &LocaleConfig, value: f64) -> String {
    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, fraction) = match fixed.split_once('.') {
        Some((int_part, fraction)) => (int_part, fraction.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };
    let mut body = group_digits(int_part, locale.grouping_separator);
    if !fraction.is_empty() {
        body.push(locale.decimal_separator);
        body.push_str(fraction);
    }
    if value < 0.0 && body.chars().any(|ch| ch.is_ascii_digit() && ch != '0') {
        body.insert(0, '-');
    }
    body
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx != 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Number followed by the currency label, e.g. `12.500 TL`.
pub fn format_amount(language: Language, value: f64, label: &str) -> String {
    let number = format_number(&LocaleConfig::for_language(language), value);
    if label.is_empty() {
        number
    } else {
        format!("{number} {label}")
    }
}

pub fn format_percent(language: Language, value: f64) -> String {
    let number = format_number(&LocaleConfig::for_language(language), value);
    match language {
        Language::Tr => format!("%{number}"),
        Language::En => format!("{number}%"),
    }
}

/// Short display date: `15.03.2024` in Turkish, `2024-03-15` in English.
pub fn format_date(language: Language, date: NaiveDate) -> String {
    match language {
        Language::Tr => date.format("%d.%m.%Y").to_string(),
        Language::En => date.format("%Y-%m-%d").to_string(),
    }
}
