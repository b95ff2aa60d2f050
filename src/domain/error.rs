use derive_more::Display;

#[derive(Debug, PartialEq, Display)]
pub enum MessageError {
    MissingOrderReference,
    NegativeAmount,
    NoProducts,
    IllegalLineItem,
    AmountOverflow,
    NoPartitions,
}

impl std::error::Error for MessageError {}
