use serde::{Deserialize, Serialize};

use crate::domain::Address;

pub const ADDRESS_INTAKE_ROUTE: &str = "/api/address";
pub const HEALTH_ROUTE: &str = "/healthz";
pub const ADDRESS_RECEIVED_MESSAGE: &str = "Address received";

/// Acknowledgment returned by the intake endpoint.
///
/// The endpoint echoes whatever JSON it was given, so `address` stays untyped
/// on the wire; [`AddressReceived::echoed_address`] recovers the typed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressReceived {
    pub message: String,
    pub address: serde_json::Value,
}

impl AddressReceived {
    pub fn echo(address: serde_json::Value) -> Self {
        Self {
            message: ADDRESS_RECEIVED_MESSAGE.to_string(),
            address,
        }
    }

    pub fn echoed_address(&self) -> Option<Address> {
        serde_json::from_value(self.address.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoed_address_recovers_typed_payload() {
        let ack = AddressReceived::echo(serde_json::json!({
            "street": "1 Main St",
            "city": "Springfield",
            "state": "IL",
            "zip": "62701",
        }));
        assert_eq!(ack.message, "Address received");
        assert_eq!(
            ack.echoed_address(),
            Some(Address::new("1 Main St", "Springfield", "IL", "62701"))
        );
    }

    #[test]
    fn echoed_address_is_none_for_foreign_payloads() {
        let ack = AddressReceived::echo(serde_json::json!({ "street": 5 }));
        assert_eq!(ack.echoed_address(), None);
    }
}
