use color_eyre::eyre::{Result, eyre};
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::payment_method::PaymentMethod;

/// One purchased line item of an order, flattened with its order header.
#[derive(Debug, Serialize, Deserialize)]
pub struct CsvPurchaseRecord {
    #[serde(rename = "order")]
    pub order_reference: String,
    pub order_id: Option<i32>,
    #[serde(rename = "customer")]
    pub customer_id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub payment_method: PaymentMethod,
    #[serde(rename = "product")]
    pub product_id: i32,
    pub name: String,
    pub description: String,
    // Parsed from the raw field text; the default path goes through f64.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub quantity: Decimal,
}

pub fn read_input<D: serde::de::DeserializeOwned>(
    file_path: &str,
) -> Result<impl Iterator<Item = Result<D>>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(file_path)
        .map_err(|e| eyre!("Could not read input file: {}", e))?;

    Ok(reader
        .into_deserialize()
        .map(|r| r.map_err(|ee| eyre!("Error parsing row: {}", ee))))
}
