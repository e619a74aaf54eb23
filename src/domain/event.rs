use crate::domain::MetadataPair;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Confirmed,
    Tentative,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Private,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    Noreply,
    Yes,
    No,
    Maybe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SendRsvpStatus {
    Yes,
    No,
    Maybe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConferencingProvider {
    #[serde(rename = "Google Meet")]
    GoogleMeet,
    #[serde(rename = "Zoom Meeting")]
    ZoomMeeting,
    #[serde(rename = "Microsoft Teams")]
    MicrosoftTeams,
    #[serde(rename = "GoToMeeting")]
    GoToMeeting,
    #[serde(rename = "WebEx")]
    WebEx,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ParticipantStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailName {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// When an event happens, discriminated by the API's `object` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "object", rename_all = "lowercase")]
pub enum When {
    /// A single point in time, e.g. a 2pm reminder.
    Time {
        time: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timezone: Option<String>,
    },
    /// Start and end times, e.g. an hour-long lunch.
    Timespan {
        start_time: i64,
        end_time: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_timezone: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end_timezone: Option<String>,
    },
    /// A whole day, ISO 8601 date.
    Date { date: String },
    /// A range of whole days, ISO 8601 dates.
    Datespan { start_date: String, end_date: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Conferencing {
    Details {
        provider: ConferencingProvider,
        details: HashMap<String, serde_json::Value>,
    },
    Autocreate {
        provider: ConferencingProvider,
        autocreate: HashMap<String, serde_json::Value>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Minutes before start, formatted like `"[20]"`.
    pub reminder_minutes: String,
    pub reminder_method: String,
}

fn default_event_object() -> String {
    "event".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub grant_id: String,
    pub calendar_id: String,
    #[serde(default)]
    pub busy: bool,
    #[serde(default)]
    pub read_only: bool,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default)]
    pub participants: Vec<Participant>,
    pub when: When,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conferencing: Option<Conferencing>,
    #[serde(default = "default_event_object")]
    pub object: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ical_uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_participants: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<EmailName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<EmailName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Vec<Reminder>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
}

// Request side

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateParticipant {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ParticipantStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl CreateParticipant {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            status: None,
            name: None,
            comment: None,
            phone_number: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateParticipant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritableDetailsConfig {
    /// Zoom only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_code: Option<String>,
    /// Zoom only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Google Meet only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    /// Google Meet only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreateConferencing {
    Details {
        provider: ConferencingProvider,
        details: WritableDetailsConfig,
    },
    /// An empty `autocreate` map asks the provider to generate a link.
    Autocreate {
        provider: ConferencingProvider,
        autocreate: HashMap<String, serde_json::Value>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateConferencing {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<ConferencingProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<WritableDetailsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocreate: Option<HashMap<String, serde_json::Value>>,
}

/// `When` for writes; the API infers the variant from the fields present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreateWhen {
    Timespan {
        start_time: i64,
        end_time: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_timezone: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        end_timezone: Option<String>,
    },
    Time {
        time: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timezone: Option<String>,
    },
    Datespan {
        start_date: String,
        end_date: String,
    },
    Date {
        date: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateWhen {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub when: CreateWhen,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub busy: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conferencing: Option<CreateConferencing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_minutes: Option<String>,
    /// Google only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<CreateParticipant>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_participants: Option<bool>,
}

impl CreateEventRequest {
    pub fn new(when: CreateWhen) -> Self {
        Self {
            when,
            title: None,
            busy: None,
            description: None,
            location: None,
            conferencing: None,
            reminder_minutes: None,
            reminder_method: None,
            metadata: None,
            participants: None,
            recurrence: None,
            calendar_id: None,
            read_only: None,
            visibility: None,
            capacity: None,
            hide_participants: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub when: Option<UpdateWhen>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conferencing: Option<UpdateConferencing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_minutes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participants: Option<Vec<UpdateParticipant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_participants: Option<bool>,
}

// Query parameters

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventQueryParams {
    /// `"primary"` selects the account's primary calendar.
    pub calendar_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_cancelled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Unix timestamp; ignored when filtering on metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Unix timestamp; ignored when filtering on metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_pair: Option<MetadataPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expand_recurring: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub busy: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    /// Defaults to 50 server side, at most 200.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_token: Option<String>,
}

impl ListEventQueryParams {
    pub fn new(calendar_id: impl Into<String>) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventQueryParams {
    pub calendar_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_participants: Option<bool>,
}

impl CreateEventQueryParams {
    pub fn new(calendar_id: impl Into<String>) -> Self {
        Self {
            calendar_id: calendar_id.into(),
            notify_participants: None,
        }
    }
}

pub type UpdateEventQueryParams = CreateEventQueryParams;
pub type DestroyEventQueryParams = CreateEventQueryParams;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindEventQueryParams {
    pub calendar_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRsvpQueryParams {
    pub calendar_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendRsvpRequest {
    pub status: SendRsvpStatus,
}
