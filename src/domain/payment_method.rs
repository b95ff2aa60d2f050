use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    #[display("PAYPAL")]
    Paypal,
    #[display("CREDIT_CARD")]
    CreditCard,
    #[display("VISA")]
    Visa,
    #[display("MASTER_CARD")]
    MasterCard,
    #[display("BITCOIN")]
    Bitcoin,
}

#[cfg(test)]
mod tests {
    use crate::domain::payment_method::PaymentMethod;

    #[test]
    fn wire_name_matches_display() {
        for method in [
            PaymentMethod::Paypal,
            PaymentMethod::CreditCard,
            PaymentMethod::Visa,
            PaymentMethod::MasterCard,
            PaymentMethod::Bitcoin,
        ] {
            let json = serde_json::to_string(&method).unwrap();
            assert_eq!(json, format!("\"{}\"", method));
        }
    }

    #[test]
    fn rejects_unknown_method() {
        serde_json::from_str::<PaymentMethod>("\"CASH\"").expect_err("CASH is not supported");
    }
}
