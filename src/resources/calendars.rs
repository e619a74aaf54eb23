use crate::core::api_resources::{
    ApiResource, CreatableApiResource, DestroyableApiResource, FindableApiResource,
    ListableApiResource, NoQuery, UpdatableApiResource,
};
use crate::core::http_client::HttpClient;
use crate::domain::{
    Calendar, CreateCalendarRequest, DeleteResponse, GetAvailabilityRequest,
    GetAvailabilityResponse, ListCalendarsQueryParams, ListResponse, Response,
    UpdateCalendarRequest,
};
use crate::resources::grant_path;
use crate::utils::error::Result;
use reqwest::Method;
use std::sync::Arc;

/// Calendars of a grant. `identifier` is a grant ID or the account's email.
#[derive(Debug, Clone)]
pub struct Calendars {
    http_client: Arc<HttpClient>,
}

impl ApiResource for Calendars {
    fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

impl ListableApiResource for Calendars {}
impl FindableApiResource for Calendars {}
impl CreatableApiResource for Calendars {}
impl UpdatableApiResource for Calendars {}
impl DestroyableApiResource for Calendars {}

impl Calendars {
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    pub async fn list(
        &self,
        identifier: &str,
        query: Option<&ListCalendarsQueryParams>,
    ) -> Result<ListResponse<Calendar>> {
        let path = format!("{}/calendars", grant_path(identifier)?);
        ListableApiResource::list(self, &path, query).await
    }

    pub async fn find(&self, identifier: &str, calendar_id: &str) -> Result<Response<Calendar>> {
        let path = calendar_path(identifier, calendar_id)?;
        FindableApiResource::find(self, &path, None::<&NoQuery>).await
    }

    pub async fn create(
        &self,
        identifier: &str,
        request_body: &CreateCalendarRequest,
    ) -> Result<Response<Calendar>> {
        let path = format!("{}/calendars", grant_path(identifier)?);
        CreatableApiResource::create(self, &path, request_body, None::<&NoQuery>).await
    }

    pub async fn update(
        &self,
        identifier: &str,
        calendar_id: &str,
        request_body: &UpdateCalendarRequest,
    ) -> Result<Response<Calendar>> {
        let path = calendar_path(identifier, calendar_id)?;
        UpdatableApiResource::update(self, &path, request_body, None::<&NoQuery>, Method::PUT)
            .await
    }

    pub async fn destroy(&self, identifier: &str, calendar_id: &str) -> Result<DeleteResponse> {
        let path = calendar_path(identifier, calendar_id)?;
        DestroyableApiResource::destroy(self, &path, None::<&NoQuery>).await
    }

    /// Open time slots across the participants' calendars.
    pub async fn get_availability(
        &self,
        identifier: &str,
        request_body: &GetAvailabilityRequest,
    ) -> Result<Response<GetAvailabilityResponse>> {
        let path = format!("{}/calendar/availability", grant_path(identifier)?);
        self.http_client.post(path).json(request_body)?.send().await
    }
}

fn calendar_path(identifier: &str, calendar_id: &str) -> Result<String> {
    crate::utils::validation::validate_path_segment("calendar_id", calendar_id)?;
    Ok(format!("{}/calendars/{}", grant_path(identifier)?, calendar_id))
}
