use axum::{
    Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use axum_extra::extract::Form;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Request body accepted either as JSON or as an urlencoded form post.
///
/// Form bodies go through `axum_extra`'s `Form` so repeated keys such as
/// `genres=Jazz&genres=Folk` collect into a list. Rejections of either kind
/// become `AppError::Validation`.
pub struct AppInput<T>(pub T);

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

impl<S, T> FromRequest<S> for AppInput<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.to_string()))?;
            return Ok(AppInput(value));
        }

        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(AppInput(value))
    }
}
