use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{
    customer::CustomerResponse,
    error::MessageError,
    payment_method::PaymentMethod,
    product::{PurchaseResponse, sum_line_totals},
    props::{Amount, OrderReference},
};

/// Published once an order has been placed. Consumed by notification and
/// fulfilment services.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    order_reference: OrderReference,
    total_amount: Amount,
    payment_method: PaymentMethod,
    customer: CustomerResponse,
    products: Vec<PurchaseResponse>,
}

impl OrderConfirmation {
    pub fn new(
        order_reference: OrderReference,
        total_amount: Amount,
        payment_method: PaymentMethod,
        customer: CustomerResponse,
        products: Vec<PurchaseResponse>,
    ) -> Result<Self, MessageError> {
        let confirmation = OrderConfirmation {
            order_reference,
            total_amount,
            payment_method,
            customer,
            products,
        };
        confirmation.validate()?;

        Ok(confirmation)
    }

    pub fn validate(&self) -> Result<(), MessageError> {
        require_order_reference(&self.order_reference)?;
        require_non_negative(&self.total_amount)?;
        require_products(&self.products)?;

        Ok(())
    }

    pub fn order_reference(&self) -> &OrderReference {
        &self.order_reference
    }

    pub fn total_amount(&self) -> &Amount {
        &self.total_amount
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn customer(&self) -> &CustomerResponse {
        &self.customer
    }

    pub fn products(&self) -> &[PurchaseResponse] {
        &self.products
    }

    pub fn products_total(&self) -> Result<Decimal, MessageError> {
        sum_line_totals(&self.products)
    }

    // The producer owns the total; this only reports whether it adds up.
    // A sum past Decimal::MAX can never match.
    pub fn is_total_consistent(&self) -> bool {
        self.products_total()
            .is_ok_and(|total| total == *self.total_amount)
    }
}

pub(crate) fn require_order_reference(reference: &OrderReference) -> Result<(), MessageError> {
    if reference.trim().is_empty() {
        return Err(MessageError::MissingOrderReference);
    }

    Ok(())
}

pub(crate) fn require_non_negative(amount: &Amount) -> Result<(), MessageError> {
    if amount.is_negative() {
        return Err(MessageError::NegativeAmount);
    }

    Ok(())
}

fn require_products(products: &[PurchaseResponse]) -> Result<(), MessageError> {
    if products.is_empty() {
        return Err(MessageError::NoProducts);
    }
    if !products.iter().all(PurchaseResponse::is_legal) {
        return Err(MessageError::IllegalLineItem);
    }
    sum_line_totals(products)?;

    Ok(())
}
