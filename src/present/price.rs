use crate::model::Price;

pub const NAIRA_SIGN: char = '₦';

/// Naira currency format with no fractional digits: `2000000.0` → `₦2,000,000`.
/// Halves round away from zero; negatives put the sign before the symbol.
pub fn format_naira(amount: f64) -> String {
    let rounded = amount.round();
    let mut out = String::new();
    if rounded < 0.0 {
        out.push('-');
    }
    out.push(NAIRA_SIGN);
    out.push_str(&grouped(rounded.abs()));
    out
}

fn grouped(whole: f64) -> String {
    let digits = format!("{:.0}", whole);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Display text for a listing price. Labels are shown as given.
pub fn price_label(price: &Price) -> String {
    match price {
        Price::Amount(n) => format_naira(*n),
        Price::Label(s) => s.clone(),
    }
}

/// Price column of the admin table: `2,000,000 Naira`.
pub fn admin_price_label(price: &Price) -> String {
    match price {
        Price::Amount(n) if *n < 0.0 => format!("-{} Naira", grouped(n.round().abs())),
        Price::Amount(n) => format!("{} Naira", grouped(n.round())),
        Price::Label(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_million() {
        assert_eq!(format_naira(2_000_000.0), "₦2,000,000");
    }

    #[test]
    fn groups_and_rounds() {
        assert_eq!(format_naira(0.0), "₦0");
        assert_eq!(format_naira(999.0), "₦999");
        assert_eq!(format_naira(1000.0), "₦1,000");
        assert_eq!(format_naira(1_234_567.5), "₦1,234,568");
        assert_eq!(format_naira(12_345.49), "₦12,345");
        assert_eq!(format_naira(-1500.0), "-₦1,500");
    }

    #[test]
    fn labels_pass_through() {
        assert_eq!(price_label(&Price::Label("5,000,000 Naira".into())), "5,000,000 Naira");
        assert_eq!(price_label(&Price::Amount(150_000.0)), "₦150,000");
    }

    #[test]
    fn admin_column_spells_out_currency() {
        assert_eq!(admin_price_label(&Price::Amount(2_000_000.0)), "2,000,000 Naira");
        assert_eq!(admin_price_label(&Price::Label("On request".into())), "On request");
    }
}
