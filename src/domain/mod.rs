// API models: plain serde structs mirroring the JSON the API sends and accepts.

pub mod attachment;
pub mod auth;
pub mod availability;
pub mod calendar;
pub mod event;
pub mod grant;
pub mod metadata;
pub mod response;

pub use attachment::CreateAttachmentRequest;
pub use auth::{
    AccessType, CodeExchangeRequest, CodeExchangeResponse, PkceAuthUrl, Provider,
    ProviderDetectParams, ProviderDetectResponse, TokenExchangeRequest, TokenInfoResponse,
    UrlForAdminConsentConfig, UrlForAuthenticationConfig,
};
pub use availability::{
    AvailabilityMethod, AvailabilityParticipant, AvailabilityRules, GetAvailabilityRequest,
    GetAvailabilityResponse, MeetingBuffer, OpenHours, TimeSlot,
};
pub use calendar::{
    Calendar, CreateCalendarRequest, ListCalendarsQueryParams, UpdateCalendarRequest,
};
pub use event::{
    Conferencing, ConferencingProvider, CreateConferencing, CreateEventQueryParams,
    CreateEventRequest, CreateParticipant, CreateWhen, DestroyEventQueryParams, EmailName, Event,
    FindEventQueryParams, ListEventQueryParams, Participant, ParticipantStatus, Reminder,
    SendRsvpQueryParams, SendRsvpRequest, SendRsvpStatus, Status, UpdateConferencing,
    UpdateEventQueryParams, UpdateEventRequest, UpdateParticipant, UpdateWhen, Visibility, When,
    WritableDetailsConfig,
};
pub use grant::{Grant, ListGrantsQueryParams, UpdateGrantRequest};
pub use metadata::MetadataPair;
pub use response::{DeleteResponse, ListResponse, RequestIdOnlyResponse, Response};
