use crate::core::api_resources::{
    ApiResource, DestroyableApiResource, FindableApiResource, ListableApiResource, NoQuery,
    UpdatableApiResource,
};
use crate::core::http_client::HttpClient;
use crate::domain::{
    DeleteResponse, Grant, ListGrantsQueryParams, ListResponse, Response, UpdateGrantRequest,
};
use crate::resources::grant_path;
use crate::utils::error::Result;
use reqwest::Method;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Grants {
    http_client: Arc<HttpClient>,
}

impl ApiResource for Grants {
    fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

impl ListableApiResource for Grants {}
impl FindableApiResource for Grants {}
impl UpdatableApiResource for Grants {}
impl DestroyableApiResource for Grants {}

impl Grants {
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }

    pub async fn list(&self, query: Option<&ListGrantsQueryParams>) -> Result<ListResponse<Grant>> {
        ListableApiResource::list(self, "/v3/grants", query).await
    }

    pub async fn find(&self, grant_id: &str) -> Result<Response<Grant>> {
        FindableApiResource::find(self, &grant_path(grant_id)?, None::<&NoQuery>).await
    }

    pub async fn update(
        &self,
        grant_id: &str,
        request_body: &UpdateGrantRequest,
    ) -> Result<Response<Grant>> {
        let path = grant_path(grant_id)?;
        UpdatableApiResource::update(self, &path, request_body, None::<&NoQuery>, Method::PATCH)
            .await
    }

    pub async fn destroy(&self, grant_id: &str) -> Result<DeleteResponse> {
        DestroyableApiResource::destroy(self, &grant_path(grant_id)?, None::<&NoQuery>).await
    }
}
