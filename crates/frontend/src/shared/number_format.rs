/// Format a monetary value as pt-BR currency: `R$ 1.234,56`.
pub fn format_brl(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as i64;
    let int_part = cents / 100;
    let frac = cents % 100;

    let mut formatted = String::new();
    for (i, ch) in int_part.to_string().chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(ch);
    }
    let int_str: String = formatted.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, int_str, frac)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(15.5), "R$ 15,50");
        assert_eq!(format_brl(1234.56), "R$ 1.234,56");
        assert_eq!(format_brl(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_brl(-42.1), "-R$ 42,10");
    }

    #[test]
    fn test_rounding() {
        assert_eq!(format_brl(2113.333), "R$ 2.113,33");
        assert_eq!(format_brl(0.999), "R$ 1,00");
    }
}
