pub mod api_resources;
pub mod client;
pub mod http_client;

pub use crate::utils::error::Result;
pub use api_resources::{
    ApiResource, CreatableApiResource, DestroyableApiResource, FindableApiResource,
    ListableApiResource, UpdatableApiResource,
};
pub use client::Client;
pub use http_client::{ApiRequest, HttpClient};
