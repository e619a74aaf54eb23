use crate::core::http_client::HttpClient;
use crate::domain::{DeleteResponse, ListResponse, Response};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A resource wrapper bound to the shared HTTP session.
pub trait ApiResource: Send + Sync {
    fn http_client(&self) -> &HttpClient;
}

#[async_trait]
pub trait ListableApiResource: ApiResource {
    async fn list<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<ListResponse<T>>
    where
        T: DeserializeOwned + Send,
        Q: Serialize + Sync + ?Sized,
    {
        let mut request = self.http_client().get(path);
        if let Some(query) = query {
            request = request.query(query)?;
        }
        request.send().await
    }
}

#[async_trait]
pub trait FindableApiResource: ApiResource {
    async fn find<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
        Q: Serialize + Sync + ?Sized,
    {
        let mut request = self.http_client().get(path);
        if let Some(query) = query {
            request = request.query(query)?;
        }
        request.send().await
    }
}

#[async_trait]
pub trait CreatableApiResource: ApiResource {
    async fn create<T, B, Q>(&self, path: &str, body: &B, query: Option<&Q>) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized,
        Q: Serialize + Sync + ?Sized,
    {
        let mut request = self.http_client().post(path).json(body)?;
        if let Some(query) = query {
            request = request.query(query)?;
        }
        request.send().await
    }
}

#[async_trait]
pub trait UpdatableApiResource: ApiResource {
    /// Most resources update with `PUT`; grants use `PATCH`.
    async fn update<T, B, Q>(
        &self,
        path: &str,
        body: &B,
        query: Option<&Q>,
        method: Method,
    ) -> Result<Response<T>>
    where
        T: DeserializeOwned + Send,
        B: Serialize + Sync + ?Sized,
        Q: Serialize + Sync + ?Sized,
    {
        let mut request = self.http_client().request(method, path).json(body)?;
        if let Some(query) = query {
            request = request.query(query)?;
        }
        request.send().await
    }
}

#[async_trait]
pub trait DestroyableApiResource: ApiResource {
    async fn destroy<Q>(&self, path: &str, query: Option<&Q>) -> Result<DeleteResponse>
    where
        Q: Serialize + Sync + ?Sized,
    {
        let mut request = self.http_client().delete(path);
        if let Some(query) = query {
            request = request.query(query)?;
        }
        request.send().await
    }
}

/// Stand-in query type for calls that send none.
pub type NoQuery = [(&'static str, &'static str)];
