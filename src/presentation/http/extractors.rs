use axum::{
    extract::{FromRequest, FromRequestParts},
    http::{HeaderName, HeaderValue, StatusCode, request::Parts},
};
use headers::{Header, HeaderMapExt};

use super::error::HttpError;

static X_MEMBER_ID: HeaderName = HeaderName::from_static("x-member-id");

/// `X-Member-Id`: the member on whose behalf a form is displayed, as set by
/// the front-end after authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XMemberId(pub i64);

impl Header for XMemberId {
    fn name() -> &'static HeaderName {
        &X_MEMBER_ID
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, headers::Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(headers::Error::invalid)?;
        value
            .to_str()
            .ok()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|id| *id > 0)
            .map(Self)
            .ok_or_else(headers::Error::invalid)
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        values.extend(std::iter::once(HeaderValue::from(self.0)));
    }
}

/// Optional member header. A malformed value is rejected rather than
/// ignored.
#[derive(Debug, Clone, Copy)]
pub struct MaybeMember(pub Option<i64>);

impl<S> FromRequestParts<S> for MaybeMember
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(&X_MEMBER_ID) {
            return Ok(Self(None));
        }

        parts
            .headers
            .typed_try_get::<XMemberId>()
            .map_err(|_| HttpError::new(StatusCode::BAD_REQUEST, "invalid X-Member-Id header"))
            .map(|member| Self(member.map(|XMemberId(id)| id)))
    }
}

/// `axum::Json` whose rejections are rendered as an [`ErrorResponse`].
///
/// [`ErrorResponse`]: super::error::ErrorResponse
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Path` with JSON rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(HttpError))]
pub struct PathParams<T>(pub T);

/// `axum::extract::Query` with JSON rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(HttpError))]
pub struct QueryParams<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;

    #[test]
    fn decodes_positive_ids_only() {
        let mut headers = HeaderMap::new();
        headers.insert(&X_MEMBER_ID, HeaderValue::from_static(" 42 "));
        assert_eq!(headers.typed_get::<XMemberId>(), Some(XMemberId(42)));

        headers.insert(&X_MEMBER_ID, HeaderValue::from_static("-3"));
        assert!(headers.typed_try_get::<XMemberId>().is_err());
    }
}
