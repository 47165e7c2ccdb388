use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::Error;

/// Query string extractor that rejects with [`Error::MalformedQuery`].
///
/// Behaves like [`Query`], except that a query string which does not
/// deserialize (e.g. `limit=abc`) is answered with the same
/// `{"detail": ...}` JSON body as every other error instead of axum's
/// plain-text rejection.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| Error::MalformedQuery(rejection.body_text()))?;
        Ok(ApiQuery(value))
    }
}
