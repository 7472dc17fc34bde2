use serde::{Deserialize, Deserializer, Serialize};

/// Postal address shared by clients and projects.
///
/// `number` and `postal` are kept as text: records hold values like
/// `"12B"` or `"08001"` next to plain JSON numbers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    #[serde(deserialize_with = "number_or_text")]
    pub number: String,
    #[serde(deserialize_with = "number_or_text")]
    pub postal: String,
    pub city: String,
    pub province: String,
}

impl Address {
    /// Single-line rendering used by detail panels.
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {}, {}, {}",
            self.street, self.number, self.city, self.province, self.postal
        )
    }
}

/// Accept `12`, `"12B"` and `null` (as empty), keeping strings untouched.
fn number_or_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Integer(u64),
        Float(f64),
        Text(String),
        Null(()),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Integer(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
        Raw::Text(s) => s,
        Raw::Null(()) => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_numbers_and_strings() {
        let a: Address = serde_json::from_str(
            r#"{"street":"Gran Via","number":12,"postal":"28013","city":"Madrid","province":"Madrid"}"#,
        )
        .unwrap();
        assert_eq!(a.number, "12");
        assert_eq!(a.postal, "28013");
        assert_eq!(a.one_line(), "Gran Via, 12, Madrid, Madrid, 28013");
    }

    #[test]
    fn test_missing_fields_default() {
        let a: Address = serde_json::from_str(r#"{"city":"Bilbao","number":null}"#).unwrap();
        assert_eq!(a.city, "Bilbao");
        assert!(a.number.is_empty());
        assert!(a.street.is_empty());
    }

    #[test]
    fn test_text_values_survive_a_roundtrip() {
        let a: Address =
            serde_json::from_str(r#"{"street":"Luna","number":"12B","postal":"08001"}"#).unwrap();
        assert_eq!(a.number, "12B");
        assert_eq!(a.postal, "08001");

        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["number"], "12B");
        assert_eq!(json["postal"], "08001");
    }
}
