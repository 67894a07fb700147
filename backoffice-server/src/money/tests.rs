use super::*;
use surrealdb::RecordId;

fn item(key: &str, price: f64, quantity: i32) -> OrderItem {
    OrderItem {
        menu_item: RecordId::from_table_key("menu_item", key),
        quantity,
        price,
    }
}

#[test]
fn test_to_decimal_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let a = 0.1_f64;
    let b = 0.2_f64;
    let sum_f64 = a + b;

    // f64 fails
    assert_ne!(sum_f64, 0.3);

    // Decimal succeeds
    let sum_dec = to_decimal(a) + to_decimal(b);
    assert_eq!(to_f64(sum_dec), 0.3);
}

#[test]
fn test_accumulation_precision() {
    // Sum 0.01 one thousand times
    let mut total = Decimal::ZERO;
    for _ in 0..1000 {
        total += to_decimal(0.01);
    }
    assert_eq!(to_f64(total), 10.0);
}

#[test]
fn test_line_total() {
    assert_eq!(to_f64(line_total(10.99, 3)), 32.97);
    assert_eq!(to_f64(line_total(199.0, 1)), 199.0);
}

#[test]
fn test_order_total_sums_snapshot_lines() {
    let items = vec![item("a", 199.0, 2), item("b", 899.0, 1), item("c", 149.0, 3)];
    // 398 + 899 + 447
    assert_eq!(order_total(&items), 1744.0);
}

#[test]
fn test_order_total_empty_is_zero() {
    assert_eq!(order_total(&[]), 0.0);
}

#[test]
fn test_order_total_rounds_to_cents() {
    // 3.335 * 2 = 6.67, half-up at the cent boundary
    let items = vec![item("a", 3.335, 2)];
    assert_eq!(order_total(&items), 6.67);
}

#[test]
fn test_order_total_decimal_prices() {
    // 0.1 * 3 + 0.2 * 1 would drift under f64 accumulation
    let items = vec![item("a", 0.1, 3), item("b", 0.2, 1)];
    assert_eq!(order_total(&items), 0.5);
}

#[test]
fn test_validate_price_bounds() {
    assert!(validate_price(0.01).is_ok());
    assert!(validate_price(199.0).is_ok());

    assert!(validate_price(0.0).is_err());
    assert!(validate_price(-1.0).is_err());
    assert!(validate_price(f64::NAN).is_err());
    assert!(validate_price(f64::INFINITY).is_err());
    assert!(validate_price(MAX_PRICE + 1.0).is_err());
}

#[test]
fn test_validate_quantity_bounds() {
    assert!(validate_quantity(1).is_ok());
    assert!(validate_quantity(MAX_QUANTITY).is_ok());

    assert!(validate_quantity(0).is_err());
    assert!(validate_quantity(-3).is_err());
    assert!(validate_quantity(MAX_QUANTITY + 1).is_err());
}

#[test]
fn test_round_amount() {
    assert_eq!(round_amount(1297.004), 1297.0);
    // 0.125 is exact in binary, so the midpoint rounds half-up
    assert_eq!(round_amount(0.125), 0.13);
}
