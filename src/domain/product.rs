use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{error::MessageError, props::ProductId};

/// One purchased line item as reported back by the product service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResponse {
    pub product_id: ProductId,
    pub name: String,
    pub description: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
}

impl PurchaseResponse {
    pub fn line_total(&self) -> Result<Decimal, MessageError> {
        self.price
            .checked_mul(self.quantity)
            .ok_or(MessageError::AmountOverflow)
    }

    pub(crate) fn is_legal(&self) -> bool {
        self.price >= Decimal::ZERO && self.quantity >= Decimal::ZERO
    }
}

pub fn sum_line_totals(products: &[PurchaseResponse]) -> Result<Decimal, MessageError> {
    products.iter().try_fold(Decimal::ZERO, |total, line| {
        total
            .checked_add(line.line_total()?)
            .ok_or(MessageError::AmountOverflow)
    })
}
