use crate::core::api_resources::{
    ApiResource, CreatableApiResource, DestroyableApiResource, FindableApiResource,
    ListableApiResource, UpdatableApiResource,
};
use crate::core::http_client::HttpClient;
use crate::domain::{
    CreateEventQueryParams, CreateEventRequest, DeleteResponse, DestroyEventQueryParams, Event,
    FindEventQueryParams, ListEventQueryParams, ListResponse, RequestIdOnlyResponse, Response,
    SendRsvpQueryParams, SendRsvpRequest, UpdateEventQueryParams, UpdateEventRequest,
};
use crate::resources::grant_path;
use crate::utils::error::Result;
use crate::utils::validation::validate_path_segment;
use reqwest::Method;
use std::sync::Arc;

/// Events of a grant. Every call is scoped to a calendar through its query
/// params; `"primary"` is accepted as a calendar ID.
#[derive(Debug, Clone)]
pub struct Events {
    http_client: Arc<HttpClient>,
}

impl ApiResource for Events {
    fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

impl ListableApiResource for Events {}
impl FindableApiResource for Events {}
impl CreatableApiResource for Events {}
impl UpdatableApiResource for Events {}
impl DestroyableApiResource for Events {}

impl Events {
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    pub async fn list(
        &self,
        identifier: &str,
        query_params: &ListEventQueryParams,
    ) -> Result<ListResponse<Event>> {
        let path = format!("{}/events", grant_path(identifier)?);
        ListableApiResource::list(self, &path, Some(query_params)).await
    }

    pub async fn find(
        &self,
        identifier: &str,
        event_id: &str,
        query_params: &FindEventQueryParams,
    ) -> Result<Response<Event>> {
        let path = event_path(identifier, event_id)?;
        FindableApiResource::find(self, &path, Some(query_params)).await
    }

    pub async fn create(
        &self,
        identifier: &str,
        request_body: &CreateEventRequest,
        query_params: &CreateEventQueryParams,
    ) -> Result<Response<Event>> {
        let path = format!("{}/events", grant_path(identifier)?);
        CreatableApiResource::create(self, &path, request_body, Some(query_params)).await
    }

    pub async fn update(
        &self,
        identifier: &str,
        event_id: &str,
        request_body: &UpdateEventRequest,
        query_params: &UpdateEventQueryParams,
    ) -> Result<Response<Event>> {
        let path = event_path(identifier, event_id)?;
        UpdatableApiResource::update(self, &path, request_body, Some(query_params), Method::PUT)
            .await
    }

    pub async fn destroy(
        &self,
        identifier: &str,
        event_id: &str,
        query_params: &DestroyEventQueryParams,
    ) -> Result<DeleteResponse> {
        let path = event_path(identifier, event_id)?;
        DestroyableApiResource::destroy(self, &path, Some(query_params)).await
    }

    pub async fn send_rsvp(
        &self,
        identifier: &str,
        event_id: &str,
        request_body: &SendRsvpRequest,
        query_params: &SendRsvpQueryParams,
    ) -> Result<RequestIdOnlyResponse> {
        let path = format!("{}/send-rsvp", event_path(identifier, event_id)?);
        self.http_client
            .post(path)
            .query(query_params)?
            .json(request_body)?
            .send()
            .await
    }
}

fn event_path(identifier: &str, event_id: &str) -> Result<String> {
    validate_path_segment("event_id", event_id)?;
    Ok(format!("{}/events/{}", grant_path(identifier)?, event_id))
}
