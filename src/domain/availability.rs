use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityMethod {
    MaxFairness,
    MaxAvailability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingBuffer {
    /// Minutes blocked off before each slot.
    pub before: u32,
    /// Minutes blocked off after each slot.
    pub after: u32,
}

/// Working hours for a participant, `days` counted from 0 (Sunday).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenHours {
    pub days: Vec<u8>,
    pub timezone: String,
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exdates: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_method: Option<AvailabilityMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer: Option<MeetingBuffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_open_hours: Option<Vec<OpenHours>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round_robin_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityParticipant {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_hours: Option<Vec<OpenHours>>,
}

impl AvailabilityParticipant {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            calendar_ids: None,
            open_hours: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAvailabilityRequest {
    pub start_time: i64,
    pub end_time: i64,
    pub participants: Vec<AvailabilityParticipant>,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round_to_30_minutes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_rules: Option<AvailabilityRules>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub emails: Vec<String>,
    pub start_time: i64,
    pub end_time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAvailabilityResponse {
    /// Round-robin order of participants; empty for collective meetings.
    #[serde(default)]
    pub order: Vec<String>,
    pub time_slots: Vec<TimeSlot>,
}
