//! Payment method

use serde::{Deserialize, Serialize};

/// Payment method (`metodo_pago` on the wire)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    /// Cash; requires a tendered amount >= total
    #[default]
    #[serde(rename = "efectivo")]
    Cash,
    #[serde(rename = "tarjeta")]
    Card,
    #[serde(rename = "transferencia")]
    Transfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "efectivo",
            PaymentMethod::Card => "tarjeta",
            PaymentMethod::Transfer => "transferencia",
        }
    }

    /// Cash is the only method where the operator enters a tendered
    /// amount and change is computed.
    pub fn requires_tendered(&self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Cash).unwrap(),
            r#""efectivo""#
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Card).unwrap(),
            r#""tarjeta""#
        );
        assert_eq!(
            serde_json::to_string(&PaymentMethod::Transfer).unwrap(),
            r#""transferencia""#
        );
    }
}
