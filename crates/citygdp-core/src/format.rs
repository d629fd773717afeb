// crates/citygdp-core/src/format.rs

//! Display formatting in the dashboard's locale (zh-CN).
//!
//! Numbers are grouped by thousands with `,`, use `.` as decimal point and
//! always carry exactly the requested number of decimals. Non-finite input
//! renders as [`PLACEHOLDER`] rather than `NaN`/`inf`.

/// Rendered in place of a non-finite number.
pub const PLACEHOLDER: &str = "—";

/// 亿元 per 万亿元.
pub const YI_PER_WAN_YI: f64 = 10_000.0;

// Rounding happens at 10^12 at most; further decimals are zero padding.
const MAX_DECIMALS: usize = 12;

/// Formats `value` with thousands grouping and exactly `decimals` decimal
/// places, rounding half away from zero. A value that rounds to zero has no
/// sign.
///
/// ```
/// use citygdp_core::format::format_number;
///
/// assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
/// assert_eq!(format_number(-0.004, 2), "0.00");
/// assert_eq!(format_number(f64::NAN, 2), "—");
/// assert_eq!(format_number(1.5, 14), "1.50000000000000");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_owned();
    }
    let padding = decimals.saturating_sub(MAX_DECIMALS);
    let decimals = decimals - padding;
    let scaled = (value.abs() * 10f64.powi(decimals as i32)).round();
    if !scaled.is_finite() {
        return PLACEHOLDER.to_owned();
    }

    let mut digits = format!("{scaled:.0}");
    if digits.len() <= decimals {
        digits.insert_str(0, &"0".repeat(decimals + 1 - digits.len()));
    }
    let (int_part, frac_part) = digits.split_at(digits.len() - decimals);

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    if value < 0.0 && scaled != 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if decimals > 0 {
        out.push('.');
        out.push_str(frac_part);
        out.extend(std::iter::repeat('0').take(padding));
    }
    out
}

/// `12.34%`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_owned();
    }
    format!("{}%", format_number(value, decimals))
}

/// `+12.34%` / `-5.00%`. Zero counts as growth and gets a `+`; a decline
/// keeps its `-` even when it rounds to zero (`-0.001` -> `"-0.00%"`).
pub fn format_signed_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_owned();
    }
    let sign = if value < 0.0 { '-' } else { '+' };
    format!("{sign}{}", format_percent(value.abs(), decimals))
}

/// A 亿元 amount expressed in 万亿, e.g. `47219.0` -> `"4.72万亿"`.
pub fn format_wan_yi(gdp_yi: f64, decimals: usize) -> String {
    if !gdp_yi.is_finite() {
        return PLACEHOLDER.to_owned();
    }
    format!("{}万亿", format_number(gdp_yi / YI_PER_WAN_YI, decimals))
}

fn group_thousands(int_part: &str) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_integer_part() {
        assert_eq!(format_number(0.0, 0), "0");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(47219.0, 2), "47,219.00");
        assert_eq!(format_number(-1234567.0, 0), "-1,234,567");
    }

    #[test]
    fn pads_small_fractions() {
        assert_eq!(format_number(0.5, 2), "0.50");
        assert_eq!(format_number(0.004, 2), "0.00");
        assert_eq!(format_number(0.05, 3), "0.050");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_number(2.5, 0), "3");
        assert_eq!(format_number(-2.5, 0), "-3");
        assert_eq!(format_number(1.25, 1), "1.3");
    }

    #[test]
    fn non_finite_values_render_placeholder() {
        assert_eq!(format_number(f64::NAN, 2), PLACEHOLDER);
        assert_eq!(format_number(f64::INFINITY, 0), PLACEHOLDER);
        assert_eq!(format_percent(f64::NEG_INFINITY, 2), PLACEHOLDER);
        assert_eq!(format_signed_percent(f64::NAN, 2), PLACEHOLDER);
        assert_eq!(format_wan_yi(f64::NAN, 2), PLACEHOLDER);
    }

    #[test]
    fn percent_variants() {
        assert_eq!(format_percent(6.7412, 2), "6.74%");
        assert_eq!(format_signed_percent(6.7412, 2), "+6.74%");
        assert_eq!(format_signed_percent(-3.74, 2), "-3.74%");
        assert_eq!(format_signed_percent(0.0, 2), "+0.00%");
        assert_eq!(format_signed_percent(-0.0, 2), "+0.00%");
    }

    #[test]
    fn small_decline_keeps_its_sign() {
        assert_eq!(format_signed_percent(-0.001, 2), "-0.00%");
        assert_eq!(format_signed_percent(0.001, 2), "+0.00%");
        assert_eq!(format_percent(-0.001, 2), "0.00%");
    }

    #[test]
    fn decimals_past_rounding_precision_are_zero_padded() {
        assert_eq!(format_number(1.0, 15), "1.000000000000000");
        assert_eq!(format_number(0.25, 13), "0.2500000000000");
        assert_eq!(format_number(1.0, 12), "1.000000000000");
    }

    #[test]
    fn wan_yi_scale() {
        assert_eq!(format_wan_yi(47219.0, 2), "4.72万亿");
        assert_eq!(format_wan_yi(327_305.0, 2), "32.73万亿");
    }
}
