use chrono::{DateTime, TimeZone};

pub const CURRENCY_PREFIX: &str = "Rp ";

/// Formats a rupiah amount as `Rp 1.234.567`, rounding exact halves to the
/// even rupiah. Negative amounts keep their sign after the prefix.
pub fn format_idr(amount: f64) -> String {
    let whole = amount.round_ties_even() as i128;
    let digits = whole.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("{CURRENCY_PREFIX}-{grouped}")
    } else {
        format!("{CURRENCY_PREFIX}{grouped}")
    }
}

pub fn format_long_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%d %B %Y").to_string()
}

pub fn format_file_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::compute_allocation;
    use chrono::Utc;

    #[test]
    fn format_idr_groups_thousands_with_periods() {
        assert_eq!(format_idr(1_234_567.0), "Rp 1.234.567");
        assert_eq!(format_idr(400_000_000.0), "Rp 400.000.000");
        assert_eq!(format_idr(999.0), "Rp 999");
        assert_eq!(format_idr(1_000.0), "Rp 1.000");
    }

    #[test]
    fn format_idr_renders_zero_without_sign() {
        assert_eq!(format_idr(0.0), "Rp 0");
        assert_eq!(format_idr(-0.0), "Rp 0");
        assert_eq!(format_idr(-0.4), "Rp 0");
    }

    #[test]
    fn format_idr_rounds_to_whole_rupiah() {
        assert_eq!(format_idr(1_499.5), "Rp 1.500");
        assert_eq!(format_idr(1_498.5), "Rp 1.498");
        assert_eq!(format_idr(1_499.49), "Rp 1.499");
        assert_eq!(format_idr(33_333_333.333_333), "Rp 33.333.333");
    }

    #[test]
    fn format_idr_rounds_exact_halves_to_even() {
        assert_eq!(format_idr(2.5), "Rp 2");
        assert_eq!(format_idr(3.5), "Rp 4");
        assert_eq!(format_idr(-2.5), "Rp -2");

        let zakat = compute_allocation(1_000_100.0).religious_obligation;
        assert_eq!(zakat, 25_002.5);
        assert_eq!(format_idr(zakat), "Rp 25.002");
    }

    #[test]
    fn format_idr_keeps_negative_sign_after_prefix() {
        assert_eq!(format_idr(-1_500.0), "Rp -1.500");
        assert_eq!(format_idr(-12_345_678.0), "Rp -12.345.678");
    }

    #[test]
    fn dates_use_long_and_compact_forms() {
        let at = Utc.with_ymd_and_hms(2026, 3, 7, 9, 30, 0).unwrap();
        assert_eq!(format_long_date(&at), "07 March 2026");
        assert_eq!(format_file_date(&at), "20260307");
    }
}
