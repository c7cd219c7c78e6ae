use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Largest response body that is read (16 MiB).
pub(crate) const MAX_BODY_SIZE: usize = 1 << 24;

pub(crate) async fn req_send(
    client: &reqwest::Client,
    req: reqwest::Request,
) -> reqwest::Result<reqwest::Response> {
    client.execute(req).await
}

/// Read the body, failing as soon as it grows beyond [`MAX_BODY_SIZE`].
pub(crate) async fn req_read_body(mut res: reqwest::Response) -> eyre::Result<Vec<u8>> {
    let too_large = ApiError::ResponseTooLarge {
        limit: MAX_BODY_SIZE,
    };

    if res
        .content_length()
        .is_some_and(|len| len > MAX_BODY_SIZE as u64)
    {
        return Err(too_large.into());
    }

    let mut body = Vec::new();

    while let Some(chunk) = res.chunk().await? {
        if body.len() + chunk.len() > MAX_BODY_SIZE {
            return Err(too_large.into());
        }

        body.extend_from_slice(&chunk);
    }

    Ok(body)
}

/// Turn a response into `T`.
///
/// Unexpected statuses are reported as [`ApiError::Status`] whether or not they carry a body.
///
/// 406 (no changes made) and 417 (invalid request data) are not errors: the body is decoded if
/// it holds a result and `T::default()` is returned otherwise.
pub(crate) async fn req_read_json<T>(res: reqwest::Response) -> eyre::Result<T>
where
    T: DeserializeOwned + Default,
{
    let status = res.status();
    let body = req_read_body(res).await?;

    log::trace!("{status} {}", String::from_utf8_lossy(&body));

    match status {
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),

        StatusCode::NOT_ACCEPTABLE | StatusCode::EXPECTATION_FAILED => {
            match serde_json::from_slice(&body) {
                Ok(result) => Ok(result),
                Err(err) => {
                    log::debug!("No result in {status} response: {err}");
                    Ok(T::default())
                }
            }
        }

        StatusCode::OK if body.is_empty() => Err(ApiError::EmptyResponse.into()),

        StatusCode::OK => Ok(serde_json::from_slice(&body)?),

        status => Err(ApiError::Status(status.as_u16()).into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{GetOrderRequest, GetOrderResult},
        test::{with_api_server, TOKEN},
        ApiUrl, Client,
    };

    async fn get_order(token: &str, id: i64) -> eyre::Result<GetOrderResult> {
        let server = with_api_server();
        let client = Client::new(ApiUrl::Other(&server.api_url), token).unwrap();
        client.get_order(&GetOrderRequest::new(id)).await
    }

    fn api_error(err: &eyre::Report) -> &ApiError {
        err.downcast_ref::<ApiError>()
            .unwrap_or_else(|| panic!("not an API error: {err:?}"))
    }

    #[tokio::test]
    async fn test_unauthorized() {
        let err = get_order("wrong-token", 1234567).await.unwrap_err();
        assert_eq!(api_error(&err), &ApiError::Unauthorized);
    }

    #[tokio::test]
    async fn test_not_acceptable_is_not_an_error() {
        let res = get_order(TOKEN, 406).await.unwrap();
        assert_eq!(res, GetOrderResult::default());
    }

    #[tokio::test]
    async fn test_expectation_failed_is_decoded() {
        let res = get_order(TOKEN, 417).await.unwrap();
        assert!(!res.info.success);
        assert_eq!(res.info.message, "Invalid Request Data");
        assert_eq!(res.info.error_field.as_deref(), Some("CertCenterOrderID"));
    }

    #[tokio::test]
    async fn test_other_status() {
        let err = get_order(TOKEN, 500).await.unwrap_err();
        assert_eq!(api_error(&err), &ApiError::Status(500));

        let err = get_order(TOKEN, 404).await.unwrap_err();
        assert_eq!(api_error(&err).status(), Some(404));
    }

    #[tokio::test]
    async fn test_other_status_without_body_keeps_code() {
        let err = get_order(TOKEN, 503).await.unwrap_err();
        assert_eq!(api_error(&err), &ApiError::Status(503));
        assert_eq!(api_error(&err).status(), Some(503));
    }

    #[tokio::test]
    async fn test_empty_body() {
        let err = get_order(TOKEN, 200).await.unwrap_err();
        assert_eq!(api_error(&err), &ApiError::EmptyResponse);
    }

    #[tokio::test]
    async fn test_body_too_large() {
        let err = get_order(TOKEN, 202).await.unwrap_err();
        assert_eq!(
            api_error(&err),
            &ApiError::ResponseTooLarge {
                limit: MAX_BODY_SIZE
            }
        );
    }

    #[tokio::test]
    async fn test_invalid_json() {
        let err = get_order(TOKEN, 201).await.unwrap_err();
        assert!(err.downcast_ref::<ApiError>().is_none());
        assert!(err.downcast_ref::<serde_json::Error>().is_some());
    }
}
