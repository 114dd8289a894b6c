/// Request extractors
use crate::error::ServerError;
use axum::{
    async_trait,
    body::Body,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

/// JSON body that may be left out entirely
///
/// An empty body yields `None`. Anything else must be JSON for `T` sent with
/// a JSON content type, otherwise the request is rejected with 400.
#[derive(Debug)]
pub struct OptionalJson<T>(pub Option<T>);

#[async_trait]
impl<T, S> FromRequest<S> for OptionalJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = axum::body::to_bytes(body, usize::MAX)
            .await
            .map_err(|e| ServerError::BadRequest(e.to_string()))?;

        if bytes.is_empty() {
            return Ok(Self(None));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;

        Ok(Self(Some(value)))
    }
}
