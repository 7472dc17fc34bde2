use serde::{Deserialize, Serialize};

use super::Address;

/// A client as returned by `/api/client`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Tax identifier.
    #[serde(default)]
    pub cif: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Body of client create/update calls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientInput {
    pub name: String,
    pub cif: String,
    pub address: Address,
}

impl From<&Client> for ClientInput {
    fn from(client: &Client) -> Self {
        Self {
            name: client.name.clone(),
            cif: client.cif.clone(),
            address: client.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_backend_document() {
        let client: Client = serde_json::from_str(
            r#"{"_id":"65a1","userId":"u1","name":"ACME","cif":"B12345678",
                "address":{"street":"Mayor","number":3,"postal":28001,"city":"Madrid","province":"Madrid"},
                "createdAt":"2024-12-01T10:00:00.000Z"}"#,
        )
        .unwrap();
        assert_eq!(client.id, "65a1");
        assert_eq!(client.cif, "B12345678");
        assert_eq!(client.address.number, "3");
        assert_eq!(client.created_at.as_deref(), Some("2024-12-01T10:00:00.000Z"));
        assert!(client.updated_at.is_none());
    }

    #[test]
    fn test_input_has_no_identity() {
        let input = ClientInput {
            name: "ACME".into(),
            cif: "B1".into(),
            address: Address::default(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("_id").is_none());
        assert_eq!(json["address"]["postal"], "");
    }
}
