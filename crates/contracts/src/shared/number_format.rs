//! Форматирование денежных сумм (CZK, чешская локаль)

/// Разделитель тысяч: неразрывный пробел, как в `toLocaleString('cs-CZ')`
const GROUP_SEPARATOR: char = '\u{a0}';

/// Форматирует число по-чешски: разделитель тысяч: неразрывный пробел,
/// десятичный разделитель: запятая, не более 2 знаков после запятой,
/// незначащие нули отбрасываются.
///
/// # Примеры
///
/// ```
/// use contracts::shared::number_format::format_amount;
/// assert_eq!(format_amount(1062.5), "1\u{a0}062,5");
/// assert_eq!(format_amount(2125.0), "2\u{a0}125");
/// ```
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));

    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    // Вставляем разделитель каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let decimals = decimal_part.trim_end_matches('0');
    // "-0" после округления выглядит странно
    let sign = if grouped == "0" && decimals.is_empty() { "" } else { sign };

    if decimals.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{}", sign, grouped, decimals)
    }
}

/// Денежная сумма с валютой: "1 062,5 Kč"
pub fn format_money(value: f64) -> String {
    format!("{} Kč", format_amount(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(42.0), "42");
        assert_eq!(format_amount(999.99), "999,99");
        assert_eq!(format_amount(1062.5), "1\u{a0}062,5");
        assert_eq!(format_amount(1149.75), "1\u{a0}149,75");
        assert_eq!(format_amount(1234567.891), "1\u{a0}234\u{a0}567,89");
        assert_eq!(format_amount(-1234.5), "-1\u{a0}234,5");
        assert_eq!(format_amount(-0.001), "0");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(2125.0), "2\u{a0}125 Kč");
        assert_eq!(format_money(1062.5), "1\u{a0}062,5 Kč");
    }
}
