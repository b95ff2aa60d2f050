use serde::{Deserialize, Serialize};

use crate::domain::{
    customer::CustomerResponse,
    error::MessageError,
    order::confirmation::{OrderConfirmation, require_non_negative, require_order_reference},
    payment_method::PaymentMethod,
    props::{Amount, OrderId, OrderReference},
};

/// Asks the payment service to charge a customer for an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    amount: Amount,
    payment_method: PaymentMethod,
    order_id: Option<OrderId>,
    order_reference: OrderReference,
    customer: CustomerResponse,
}

impl PaymentRequest {
    pub fn new(
        amount: Amount,
        payment_method: PaymentMethod,
        order_id: Option<OrderId>,
        order_reference: OrderReference,
        customer: CustomerResponse,
    ) -> Result<Self, MessageError> {
        let request = PaymentRequest {
            amount,
            payment_method,
            order_id,
            order_reference,
            customer,
        };
        request.validate()?;

        Ok(request)
    }

    /// Charge for exactly what the confirmation says was ordered.
    pub fn for_order(
        confirmation: &OrderConfirmation,
        order_id: Option<OrderId>,
    ) -> Result<Self, MessageError> {
        PaymentRequest::new(
            *confirmation.total_amount(),
            confirmation.payment_method(),
            order_id,
            confirmation.order_reference().clone(),
            confirmation.customer().clone(),
        )
    }

    pub fn validate(&self) -> Result<(), MessageError> {
        require_non_negative(&self.amount)?;
        require_order_reference(&self.order_reference)?;

        Ok(())
    }

    pub fn amount(&self) -> &Amount {
        &self.amount
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn order_id(&self) -> Option<OrderId> {
        self.order_id
    }

    pub fn order_reference(&self) -> &OrderReference {
        &self.order_reference
    }

    pub fn customer(&self) -> &CustomerResponse {
        &self.customer
    }
}
