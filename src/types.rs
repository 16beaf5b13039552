//! Core types for the customer service

use serde::{Deserialize, Serialize};

/// Customer ID type
///
/// Signed so that non-positive ids arriving on the wire can be rejected by the
/// endpoint instead of failing to parse.
pub type CustomerId = i64;

/// A stored customer record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
}

/// Payload for create and update requests
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInput {
    pub first_name: String,
    pub last_name: String,
}

impl CustomerInput {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_uses_camel_case_fields() {
        let customer = Customer {
            id: 7,
            first_name: "Solomon".to_string(),
            last_name: "Bleeker".to_string(),
        };

        let value = serde_json::to_value(&customer).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["firstName"], "Solomon");
        assert_eq!(value["lastName"], "Bleeker");
    }

    #[test]
    fn test_input_ignores_id_field() {
        let input: CustomerInput =
            serde_json::from_str(r#"{"id": 42, "firstName": "A", "lastName": "B"}"#).unwrap();
        assert_eq!(input, CustomerInput::new("A", "B"));
    }
}
