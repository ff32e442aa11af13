//! Форматирование сумм для счёта

use crate::shared::config::InvoiceConfig;

/// Форматирует число с разделителем тысяч и не более чем `max_fraction_digits`
/// знаками после запятой. Незначащие нули дробной части отбрасываются,
/// как это делает `Number.toLocaleString` в браузере.
///
/// # Примеры
///
/// ```
/// use frontend::shared::config::InvoiceConfig;
/// use frontend::shared::number_format::format_amount;
///
/// let cfg = InvoiceConfig { thousands_separator: ' ', ..InvoiceConfig::default() };
/// assert_eq!(format_amount(1234.5, &cfg), "1 234,5");
/// ```
pub fn format_amount(value: f64, cfg: &InvoiceConfig) -> String {
    // Так же, как toLocaleString: "NaN", "∞", "-∞"
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let decimals = cfg.max_fraction_digits as usize;
    let formatted = format!("{:.*}", decimals, value);

    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted.as_str()),
    };

    let (integer_part, fraction_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (unsigned, ""),
    };

    // "-0" после округления выглядит странно
    let sign = if integer_part.chars().all(|c| c == '0') && fraction_part.is_empty() {
        ""
    } else {
        sign
    };

    // Вставляем разделитель каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(cfg.thousands_separator);
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    if fraction_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}{}{}", sign, grouped, cfg.decimal_separator, fraction_part)
    }
}

/// Сумма с суффиксом валюты, например `125 000 FCFA`
pub fn format_price(value: f64, cfg: &InvoiceConfig) -> String {
    format!("{} {}", format_amount(value, cfg), cfg.currency)
}

/// Plain decimal for weights, distances and coordinates.
///
/// Matches how a browser prints a number inside a template string:
/// no grouping, `.` as decimal point, no trailing zeros.
pub fn format_plain(value: f64) -> String {
    value.to_string()
}
