use expense_core::currency::{default_currency, find_by_code, CURRENCIES};

#[test]
fn zero_formats_the_same_in_every_currency() {
    for currency in CURRENCIES.iter() {
        assert_eq!(currency.format(0.0), format!("{}0.00", currency.symbol));
    }
}

#[test]
fn inr_scenario_from_the_original_rates() {
    let inr = find_by_code("INR").expect("INR is in the table");
    assert!((inr.rate - 83.28).abs() < f64::EPSILON);
    assert_eq!(inr.format(100.0), "₹8328.00");
}

#[test]
fn converted_amounts_round_trip_within_a_cent() {
    let amounts = [0.01, 1.0, 12.34, 99.99, 1234.56];
    for currency in CURRENCIES.iter() {
        for amount in amounts {
            let converted = currency.convert(amount);
            let recovered = converted / currency.rate;
            assert!(
                (recovered - amount).abs() < 0.01,
                "{} did not round-trip for {}",
                amount,
                currency.code
            );
        }
    }
}

#[test]
fn lookup_misses_return_none() {
    assert!(find_by_code("XYZ").is_none());
    assert!(find_by_code("").is_none());
}

#[test]
fn default_currency_is_the_first_table_entry() {
    assert_eq!(default_currency().code, CURRENCIES[0].code);
}
