use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// What a delivery note accounts for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteFormat {
    #[default]
    Material,
    Hours,
}

impl NoteFormat {
    pub const ALL: [NoteFormat; 2] = [NoteFormat::Material, NoteFormat::Hours];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteFormat::Material => "material",
            NoteFormat::Hours => "hours",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoteFormat::Material => "Material",
            NoteFormat::Hours => "Hours",
        }
    }
}

impl fmt::Display for NoteFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NoteFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "material" => Ok(NoteFormat::Material),
            "hours" => Ok(NoteFormat::Hours),
            other => Err(format!("unknown delivery note format: {other}")),
        }
    }
}

/// A delivery note as returned by `/api/deliverynote`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryNote {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub format: NoteFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub workdate: String,
}

impl DeliveryNote {
    /// "12 h" or the material name, for list rows.
    pub fn quantity(&self) -> String {
        match self.format {
            NoteFormat::Hours => format!("{} h", self.hours.unwrap_or_default()),
            NoteFormat::Material => self.material.clone().unwrap_or_default(),
        }
    }
}

/// Body of delivery-note create/update calls.
///
/// Exactly one of `material`/`hours` is set, matching `format`; the other is
/// left out of the JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryNoteInput {
    pub client_id: String,
    pub project_id: String,
    pub format: NoteFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    pub description: String,
    pub workdate: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parses_and_prints() {
        assert_eq!("hours".parse::<NoteFormat>(), Ok(NoteFormat::Hours));
        assert_eq!(NoteFormat::Material.to_string(), "material");
        assert!("days".parse::<NoteFormat>().is_err());
    }

    #[test]
    fn test_hours_input_omits_material() {
        let input = DeliveryNoteInput {
            client_id: "c1".into(),
            project_id: "p1".into(),
            format: NoteFormat::Hours,
            material: None,
            hours: Some(7.5),
            description: "Tiling".into(),
            workdate: "2025-01-15".into(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["format"], "hours");
        assert_eq!(json["hours"], 7.5);
        assert!(json.get("material").is_none());
    }

    #[test]
    fn test_quantity_follows_format() {
        let note: DeliveryNote = serde_json::from_str(
            r#"{"_id":"n1","format":"material","material":"Cement","description":"Bags"}"#,
        )
        .unwrap();
        assert_eq!(note.quantity(), "Cement");

        let note = DeliveryNote {
            format: NoteFormat::Hours,
            hours: Some(3.0),
            ..note
        };
        assert_eq!(note.quantity(), "3 h");
    }
}
