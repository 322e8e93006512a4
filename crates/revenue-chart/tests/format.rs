// File: crates/revenue-chart/tests/format.rs
// Purpose: Currency tick labels.

use revenue_chart::currency_thousands;

#[test]
fn thousands_are_abbreviated_with_dollar_prefix() {
    assert_eq!(currency_thousands(45_000.0), "$45K");
    assert_eq!(currency_thousands(20_000.0), "$20K");
    assert_eq!(currency_thousands(75_000.0), "$75K");
    assert_eq!(currency_thousands(0.0), "$0K");
}

#[test]
fn fractions_of_a_thousand_round_to_whole_units() {
    assert_eq!(currency_thousands(22_700.0), "$23K");
    assert_eq!(currency_thousands(1_200_000.0), "$1200K");
}
