use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shrinkwraprs::Shrinkwrap;

#[derive(Shrinkwrap, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Display, Hash)]
pub struct OrderReference(pub String);

#[derive(Shrinkwrap, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, Hash)]
pub struct OrderId(pub i32);

#[derive(Shrinkwrap, Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Display, Hash)]
pub struct CustomerId(pub String);

#[derive(Shrinkwrap, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, Hash)]
pub struct ProductId(pub i32);

#[derive(Shrinkwrap, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, Hash)]
pub struct Amount(#[serde(with = "rust_decimal::serde::str")] pub Decimal);

impl Amount {
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}
