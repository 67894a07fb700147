//! Money calculation utilities using rust_decimal for precision
//!
//! 订单金额一律用 `Decimal` 计算，只在存储/序列化边界转成 `f64`。
//! totalAmount 是派生字段：行项目写入或变更时由服务端重算，
//! 客户端提交的值一律忽略。

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::db::models::OrderItem;
use crate::utils::{AppError, AppResult};

#[cfg(test)]
mod tests;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per item
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line item
pub const MAX_QUANTITY: i32 = 9999;

/// f64 → Decimal (lossless retain)
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64_retain(value).unwrap_or(Decimal::ZERO)
}

/// Decimal → f64, rounded to 2 decimal places
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// 单行小计: price × quantity
pub fn line_total(price: f64, quantity: i32) -> Decimal {
    to_decimal(price) * Decimal::from(quantity)
}

/// 订单总额: Σ(price × quantity)，四舍五入到分
pub fn order_total(items: &[OrderItem]) -> f64 {
    let total = items
        .iter()
        .fold(Decimal::ZERO, |acc, item| {
            acc + line_total(item.price, item.quantity)
        });
    to_f64(total)
}

/// Round an f64 amount to 2 decimal places (报表输出用)
pub fn round_amount(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Validate a price is finite, positive and within bounds
pub fn validate_price(price: f64) -> AppResult<()> {
    if !price.is_finite() {
        return Err(AppError::validation(format!(
            "price must be a finite number, got {price}"
        )));
    }
    if price < 0.01 {
        return Err(AppError::validation("Price must be greater than 0"));
    }
    if price > MAX_PRICE {
        return Err(AppError::validation(format!(
            "price exceeds maximum allowed ({MAX_PRICE}), got {price}"
        )));
    }
    Ok(())
}

/// Validate a line-item quantity
pub fn validate_quantity(quantity: i32) -> AppResult<()> {
    if quantity < 1 {
        return Err(AppError::validation("Quantity must be at least 1"));
    }
    if quantity > MAX_QUANTITY {
        return Err(AppError::validation(format!(
            "quantity exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"
        )));
    }
    Ok(())
}
