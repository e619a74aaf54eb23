use serde::{Deserialize, Serialize};

/// Envelope for endpoints returning a single object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<T> {
    pub data: T,
    pub request_id: String,
}

/// Envelope for list endpoints.
///
/// `next_cursor` is absent on the last page; pass it back as `page_token`
/// to fetch the following one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl<T> ListResponse<T> {
    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub request_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestIdOnlyResponse {
    pub request_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_list_response_with_cursor() {
        let json = r#"{"data":[{"id":"a"},{"id":"b"}],"request_id":"req-1","next_cursor":"cur-2"}"#;
        let parsed: ListResponse<Item> = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.data.len(), 2);
        assert_eq!(parsed.data[1].id, "b");
        assert_eq!(parsed.request_id, "req-1");
        assert_eq!(parsed.next_cursor.as_deref(), Some("cur-2"));
        assert!(parsed.has_more());
    }

    #[test]
    fn test_list_response_without_cursor() {
        let json = r#"{"data":[],"request_id":"req-1"}"#;
        let parsed: ListResponse<Item> = serde_json::from_str(json).unwrap();

        assert!(parsed.data.is_empty());
        assert_eq!(parsed.next_cursor, None);
        assert!(!parsed.has_more());
    }

    #[test]
    fn test_list_response_null_cursor() {
        let json = r#"{"data":[{"id":"a"}],"request_id":"req-1","next_cursor":null}"#;
        let parsed: ListResponse<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.next_cursor, None);
    }

    #[test]
    fn test_list_response_missing_request_id_is_rejected() {
        let json = r#"{"data":[]}"#;
        assert!(serde_json::from_str::<ListResponse<Item>>(json).is_err());
    }
}
