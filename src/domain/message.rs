use color_eyre::eyre::{Result, eyre};
use serde::{Deserialize, Serialize};

use crate::domain::{
    error::MessageError, order::confirmation::OrderConfirmation,
    payment::request::PaymentRequest, props::OrderReference,
};

// Seed used by the Kafka default partitioner.
const KAFKA_SEED: u32 = 0x9747b28c;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "payload")]
pub enum OrderMessage {
    OrderConfirmation(OrderConfirmation),
    PaymentRequest(PaymentRequest),
}

impl OrderMessage {
    pub fn message_type(&self) -> String {
        let message_type: &str = match self {
            OrderMessage::OrderConfirmation(_) => "OrderConfirmation",
            OrderMessage::PaymentRequest(_) => "PaymentRequest",
        };
        message_type.to_string()
    }

    pub fn message_version(&self) -> String {
        "1.0".to_string()
    }

    pub fn key(&self) -> &OrderReference {
        match self {
            OrderMessage::OrderConfirmation(c) => c.order_reference(),
            OrderMessage::PaymentRequest(r) => r.order_reference(),
        }
    }

    pub fn validate(&self) -> Result<(), MessageError> {
        match self {
            OrderMessage::OrderConfirmation(c) => c.validate(),
            OrderMessage::PaymentRequest(r) => r.validate(),
        }
    }
}

impl From<OrderConfirmation> for OrderMessage {
    fn from(c: OrderConfirmation) -> Self {
        OrderMessage::OrderConfirmation(c)
    }
}

impl From<PaymentRequest> for OrderMessage {
    fn from(r: PaymentRequest) -> Self {
        OrderMessage::PaymentRequest(r)
    }
}

/// A message as written to the wire: keyed by order reference so every
/// message about one order lands on the same partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Envelope {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<u32>,
    pub version: String,
    pub message: OrderMessage,
}

impl Envelope {
    pub fn new(message: OrderMessage, partitions: Option<u32>) -> Result<Self, MessageError> {
        let key = message.key().to_string();
        let partition = partitions
            .map(|n| partition_for(&key, n))
            .transpose()?;

        Ok(Envelope {
            key,
            partition,
            version: message.message_version(),
            message,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| eyre!("Could not encode message: {}", e))
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let envelope: Envelope =
            serde_json::from_str(s).map_err(|e| eyre!("Could not decode message: {}", e))?;
        envelope
            .message
            .validate()
            .map_err(|e| eyre!("Invalid {}: {}", envelope.message.message_type(), e))?;
        if envelope.key != envelope.message.key().as_str() {
            return Err(eyre!(
                "Envelope key {} does not match order {}",
                envelope.key,
                envelope.message.key()
            ));
        }
        if envelope.version != envelope.message.message_version() {
            return Err(eyre!("Unsupported message version {}", envelope.version));
        }

        Ok(envelope)
    }
}

pub fn partition_for(key: &str, partitions: u32) -> Result<u32, MessageError> {
    if partitions == 0 {
        return Err(MessageError::NoPartitions);
    }

    Ok((murmur2::murmur2(key.as_bytes(), KAFKA_SEED) & 0x7fffffff) % partitions)
}
