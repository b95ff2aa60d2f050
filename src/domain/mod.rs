pub mod customer;
pub mod error;
pub mod message;
pub mod order;
pub mod payment;
pub mod payment_method;
pub mod product;
pub mod props;
