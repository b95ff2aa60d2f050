use serde::{Deserialize, Serialize};

use crate::domain::props::CustomerId;

/// Buyer summary owned by the customer service, embedded in order messages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: CustomerId,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl CustomerResponse {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}
