//! Typed operations over a [`Connection`].
//!
//! Resource clients never touch raw responses: they call `get`, `get_all`,
//! `post`, `patch` or `delete` here and receive decoded records or a typed
//! [`ApiError`].

use std::sync::Arc;

use futures::stream::{BoxStream, TryStreamExt};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::connection::{ApiRequest, ApiResponse, Connection, Parameters};
use crate::error::{ApiError, Error};
use crate::pagination::{paginate, ApiOptions};

/// Turn a non-success response into `Error::Api`.
pub(crate) fn into_success(response: ApiResponse) -> Result<ApiResponse, Error> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(Error::Api(ApiError::from_response(&response)))
    }
}

/// Shared, cheaply clonable handle the resource clients delegate to.
#[derive(Clone)]
pub struct ApiConnection {
    connection: Arc<dyn Connection>,
}

impl ApiConnection {
    pub fn new(connection: Arc<dyn Connection>) -> Self {
        Self { connection }
    }

    /// Get the underlying connection (for advanced use cases).
    #[must_use]
    pub fn connection(&self) -> &Arc<dyn Connection> {
        &self.connection
    }

    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, Error> {
        let response = into_success(self.connection.send(request).await?)?;
        serde_json::from_value(response.body).map_err(Error::from)
    }

    /// Fetch a single resource.
    ///
    /// # Errors
    ///
    /// Returns `Error::Api` for non-success statuses and
    /// `Error::Serialization` if the body does not decode into `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        parameters: Option<Parameters>,
    ) -> Result<T, Error> {
        let request = ApiRequest::get(path).with_parameters(parameters.unwrap_or_default());
        self.execute(request).await
    }

    /// Stream every item of a list endpoint, one page at a time.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if `options` holds a zero value.
    /// Request failures surface as items of the stream.
    pub fn stream_all<T>(
        &self,
        path: &str,
        parameters: Option<Parameters>,
        options: &ApiOptions,
    ) -> Result<BoxStream<'static, Result<T, Error>>, Error>
    where
        T: DeserializeOwned + Send + 'static,
    {
        options.validate()?;
        let request = ApiRequest::get(path).with_parameters(parameters.unwrap_or_default());
        Ok(paginate(Arc::clone(&self.connection), request, options))
    }

    /// Fetch every item of a list endpoint.
    ///
    /// # Errors
    ///
    /// Returns the first error hit while paging.
    pub async fn get_all<T>(
        &self,
        path: &str,
        parameters: Option<Parameters>,
        options: &ApiOptions,
    ) -> Result<Vec<T>, Error>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.stream_all(path, parameters, options)?
            .try_collect()
            .await
    }

    /// Create a resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized or the request fails.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::POST, path).with_body(serde_json::to_value(body)?);
        self.execute(request).await
    }

    /// POST without a body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.execute(ApiRequest::new(Method::POST, path)).await
    }

    /// Update a resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the body cannot be serialized or the request fails.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = ApiRequest::new(Method::PATCH, path).with_body(serde_json::to_value(body)?);
        self.execute(request).await
    }

    /// Delete a resource. GitHub answers `204 No Content`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn delete(&self, path: &str) -> Result<(), Error> {
        into_success(
            self.connection
                .send(ApiRequest::new(Method::DELETE, path))
                .await?,
        )?;
        Ok(())
    }
}
