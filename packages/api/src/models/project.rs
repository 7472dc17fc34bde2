use serde::{Deserialize, Serialize};

use super::Address;

/// A project as returned by `/api/project`.
///
/// The audit fields (`created_at` .. `notes`) are populated by the backend
/// and only ever displayed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub project_code: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: Address,
    /// Internal code.
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of project create/update calls.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    pub name: String,
    pub project_code: String,
    pub email: String,
    pub address: Address,
    pub code: String,
    pub client_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_audit_fields() {
        let project: Project = serde_json::from_str(
            r#"{"_id":"p1","name":"Reforma","projectCode":"PRJ-1","email":"obra@acme.es",
                "code":"INT-7","clientId":"c1","begin":"01-01-2025","notes":"Phase 1",
                "address":{"street":"Luna","number":"8","postal":"08001","city":"Barcelona","province":"Barcelona"}}"#,
        )
        .unwrap();
        assert_eq!(project.project_code, "PRJ-1");
        assert_eq!(project.client_id, "c1");
        assert_eq!(project.address.postal, "08001");
        assert_eq!(project.begin.as_deref(), Some("01-01-2025"));
        assert!(project.end.is_none());
    }

    #[test]
    fn test_input_uses_camel_case() {
        let input = ProjectInput {
            name: "Reforma".into(),
            project_code: "PRJ-1".into(),
            email: "obra@acme.es".into(),
            address: Address::default(),
            code: "INT-7".into(),
            client_id: "c1".into(),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["projectCode"], "PRJ-1");
        assert_eq!(json["clientId"], "c1");
    }
}
