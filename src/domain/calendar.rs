use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_calendar_object() -> String {
    "calendar".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    pub id: String,
    pub grant_id: String,
    pub name: String,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub is_owned_by_user: bool,
    #[serde(default = "default_calendar_object")]
    pub object: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_foreground_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCalendarRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCalendarRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_foreground_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListCalendarsQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_pair: Option<crate::domain::MetadataPair>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_defaults_object_when_missing() {
        let json = r#"{"id":"cal-1","grant_id":"grant-1","name":"Work","read_only":false,"is_owned_by_user":true}"#;
        let calendar: Calendar = serde_json::from_str(json).unwrap();

        assert_eq!(calendar.object, "calendar");
        assert!(calendar.is_owned_by_user);
        assert_eq!(calendar.timezone, None);
    }

    #[test]
    fn test_calendar_round_trip_preserves_fields() {
        let json = serde_json::json!({
            "id": "cal-1",
            "grant_id": "grant-1",
            "name": "Work",
            "read_only": true,
            "is_owned_by_user": false,
            "object": "calendar",
            "timezone": "America/New_York",
            "hex_color": "#039BE5",
            "is_primary": true,
            "metadata": {"team": "infra"}
        });

        let calendar: Calendar = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(serde_json::to_value(&calendar).unwrap(), json);
    }

    #[test]
    fn test_update_calendar_request_only_sends_set_fields() {
        let request = UpdateCalendarRequest {
            name: Some("Renamed".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, serde_json::json!({"name": "Renamed"}));
    }
}
