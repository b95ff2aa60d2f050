#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::expect_used))]

pub mod csv;
pub mod domain;
pub mod messages;

pub use domain::{
    customer::CustomerResponse,
    error::MessageError,
    message::{Envelope, OrderMessage},
    order::confirmation::OrderConfirmation,
    payment::request::PaymentRequest,
    payment_method::PaymentMethod,
    product::PurchaseResponse,
};
