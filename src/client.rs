use std::{env, fmt};

use eyre::{eyre, WrapErr as _};
use reqwest::{header::CONTENT_TYPE, tls, Url};
use serde::{de::DeserializeOwned, Serialize};
use zeroize::Zeroizing;

use crate::{
    endpoint::{Endpoint, ParamLocation},
    req::{req_read_json, req_send},
};

const CERTCENTER_URL: &str = "https://api.certcenter.com/rest/v1";

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf8";

/// Environment variable holding the bearer token, read by [`Client::from_env()`].
pub const ENV_API_TOKEN: &str = "CERTCENTER_API_TOKEN";

/// Environment variable overriding the API root, read by [`Client::from_env()`].
pub const ENV_API_URL: &str = "CERTCENTER_API_URL";

/// Environment variable holding the key-value storage key, read by [`Client::from_env()`].
pub const ENV_KV_STORE_KEY: &str = "CERTCENTER_KV_STORE_KEY";

/// Enumeration of known API roots.
#[derive(Debug, Clone)]
pub enum ApiUrl<'a> {
    /// The CertCenter production API, `https://api.certcenter.com/rest/v1`.
    Production,

    /// Provide an arbitrary API root, including the version prefix.
    Other(&'a str),
}

impl<'a> ApiUrl<'a> {
    fn to_url(&self) -> &str {
        match self {
            ApiUrl::Production => CERTCENTER_URL,
            ApiUrl::Other(url) => url,
        }
    }
}

/// Entry point for accessing the CertCenter API.
///
/// Holds the credentials and a connection pool. Cloning is cheap and clones share the pool.
/// Separate clients may use separate credentials concurrently.
///
/// Every operation is a single round trip: there are no retries and nothing is cached.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_url: Url,
    bearer: Zeroizing<String>,
    kv_store_key: Option<Zeroizing<String>>,
}

impl Client {
    /// Create a client authenticating with `bearer`.
    pub fn new(url: ApiUrl<'_>, bearer: impl Into<String>) -> eyre::Result<Client> {
        let api_url = Url::parse(url.to_url().trim_end_matches('/'))
            .wrap_err_with(|| format!("invalid API URL: {}", url.to_url()))?;

        if api_url.cannot_be_a_base() {
            return Err(eyre!("API URL cannot be used as a base: {api_url}"));
        }

        let http = reqwest::Client::builder()
            .min_tls_version(tls::Version::TLS_1_2)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Client {
            http,
            api_url,
            bearer: Zeroizing::new(bearer.into()),
            kv_store_key: None,
        })
    }

    /// Create a client from `CERTCENTER_API_TOKEN`, and optionally `CERTCENTER_API_URL` and
    /// `CERTCENTER_KV_STORE_KEY`.
    pub fn from_env() -> eyre::Result<Client> {
        let bearer =
            env::var(ENV_API_TOKEN).wrap_err_with(|| format!("{ENV_API_TOKEN} is not set"))?;

        let url = env::var(ENV_API_URL).ok();
        let url = match &url {
            Some(url) => ApiUrl::Other(url),
            None => ApiUrl::Production,
        };

        let client = Client::new(url, bearer)?;

        Ok(match env::var(ENV_KV_STORE_KEY) {
            Ok(key) => client.with_kv_store_key(key),
            Err(_) => client,
        })
    }

    /// Set the AlwaysOnSSL KV-Storage authorization key.
    ///
    /// Ask your partner manager or the CertCenter support team for one if you want to use the
    /// free key-value database.
    pub fn with_kv_store_key(mut self, key: impl Into<String>) -> Client {
        self.kv_store_key = Some(Zeroizing::new(key.into()));
        self
    }

    /// The key-value storage authorization key, if configured.
    pub fn kv_store_key(&self) -> Option<&str> {
        self.kv_store_key.as_ref().map(|key| key.as_str())
    }

    /// The API root all endpoints are resolved against.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Shape the HTTP request for `endpoint` without sending it.
    ///
    /// `params` goes into the query string and/or the JSON body, depending on
    /// [`Endpoint::location()`]. Identifiers carried by the endpoint become the last path
    /// segment.
    pub fn prepare<Q>(&self, endpoint: &Endpoint, params: &Q) -> eyre::Result<reqwest::Request>
    where
        Q: Serialize + ?Sized,
    {
        let mut url = self.api_url.clone();

        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| eyre!("API URL cannot be used as a base: {}", self.api_url))?;
            segments.pop_if_empty().push(endpoint.resource());

            if let Some(param) = endpoint.path_param() {
                segments.push(&param);
            }
        }

        let location = endpoint.location();

        let mut builder = self
            .http
            .request(endpoint.method(), url)
            .bearer_auth(self.bearer.as_str())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);

        if location.contains(ParamLocation::QUERY_STRING) {
            builder = builder.query(params);
        }

        if location.contains(ParamLocation::BODY) {
            let body = serde_json::to_vec(params)
                .wrap_err_with(|| format!("encode {endpoint} request"))?;
            builder = builder.body(body);
        }

        builder
            .build()
            .wrap_err_with(|| format!("build {endpoint} request"))
    }

    /// Shape, send and decode a single API call.
    pub(crate) async fn call<Q, T>(&self, endpoint: Endpoint, params: &Q) -> eyre::Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let req = self.prepare(&endpoint, params)?;

        log::debug!("Call endpoint: {endpoint}");
        log::trace!("{} {}", req.method(), req.url());

        let res = match req_send(&self.http, req).await {
            Ok(res) => res,
            Err(err) => {
                log::debug!("{endpoint} failed: {err}");
                return Err(err.into());
            }
        };

        let result = req_read_json(res).await;

        if let Err(err) = &result {
            log::debug!("{endpoint} failed: {err:#}");
        }

        result.wrap_err_with(|| format!("{endpoint}"))
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_url", &self.api_url.as_str())
            .field("bearer", &"<redacted>")
            .field("kv_store_key", &self.kv_store_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use super::*;
    use crate::api::{
        GetOrderRequest, NoParams, PutApproverEmailRequest, RevokeRequest, UpdateUserRequest,
        UserData,
    };

    fn client() -> Client {
        Client::new(ApiUrl::Production, "test-token").unwrap()
    }

    fn body_json(req: &reqwest::Request) -> serde_json::Value {
        let body = req.body().and_then(|body| body.as_bytes()).unwrap();
        serde_json::from_slice(body).unwrap()
    }

    #[test]
    fn test_get_order_with_fulfillment() {
        let params = GetOrderRequest {
            include_fulfillment: true,
            ..GetOrderRequest::new(1234567)
        };

        let req = client()
            .prepare(&Endpoint::GetOrder(params.certcenter_order_id), &params)
            .unwrap();

        assert_eq!(req.method(), Method::GET);
        assert_eq!(
            req.url().as_str(),
            "https://api.certcenter.com/rest/v1/Order/1234567?includeFulfillment=true"
        );
        assert!(req.body().is_none());
    }

    #[test]
    fn test_get_order_without_flags_has_no_query() {
        let params = GetOrderRequest::new(7);
        let req = client().prepare(&Endpoint::GetOrder(7), &params).unwrap();

        assert_eq!(req.url().as_str(), "https://api.certcenter.com/rest/v1/Order/7");
    }

    #[test]
    fn test_headers() {
        let req = client().prepare(&Endpoint::Profile, &NoParams).unwrap();

        assert_eq!(req.url().as_str(), "https://api.certcenter.com/rest/v1/Profile");
        assert_eq!(req.headers()["authorization"], "Bearer test-token");
        assert_eq!(req.headers()["content-type"], "application/json; charset=utf8");
    }

    #[test]
    fn test_put_approver_email() {
        let params = PutApproverEmailRequest {
            certcenter_order_id: 42,
            approver_email: "admin@example.com".to_owned(),
        };
        let req = client()
            .prepare(&Endpoint::PutApproverEmail(42), &params)
            .unwrap();

        assert_eq!(req.method(), Method::PUT);
        assert_eq!(
            req.url().as_str(),
            "https://api.certcenter.com/rest/v1/ApproverEmail/42?ApproverEmail=admin%40example.com"
        );
    }

    #[test]
    fn test_revoke_body_and_path() {
        let params = RevokeRequest {
            certcenter_order_id: 42,
            revoke_reason: Some("superseded".to_owned()),
            certificate: None,
        };
        let req = client().prepare(&Endpoint::Revoke(42), &params).unwrap();

        assert_eq!(req.method(), Method::DELETE);
        assert_eq!(req.url().as_str(), "https://api.certcenter.com/rest/v1/Revoke/42");
        assert_eq!(
            body_json(&req),
            serde_json::json!({ "CertCenterOrderID": 42, "RevokeReason": "superseded" })
        );
    }

    #[test]
    fn test_update_user_path_is_encoded() {
        let params = UpdateUserRequest {
            username_or_user_id: "j doe/1".to_owned(),
            user: UserData {
                email: "jdoe@example.com".to_owned(),
                ..Default::default()
            },
        };
        let req = client()
            .prepare(&Endpoint::UpdateUser(params.username_or_user_id.clone()), &params)
            .unwrap();

        assert_eq!(req.method(), Method::POST);
        assert_eq!(
            req.url().as_str(),
            "https://api.certcenter.com/rest/v1/User/j%20doe%2F1"
        );
        assert_eq!(
            body_json(&req),
            serde_json::json!({ "Email": "jdoe@example.com" })
        );
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = Client::new(ApiUrl::Other("http://127.0.0.1:8080/rest/v1/"), "t").unwrap();
        let req = client.prepare(&Endpoint::Limit, &NoParams).unwrap();

        assert_eq!(req.url().as_str(), "http://127.0.0.1:8080/rest/v1/Limit");
    }

    #[test]
    fn test_invalid_url() {
        assert!(Client::new(ApiUrl::Other("not a url"), "t").is_err());
        assert!(Client::new(ApiUrl::Other("mailto:api@example.com"), "t").is_err());
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let client = client().with_kv_store_key("kv-secret");
        let debug = format!("{client:?}");

        assert!(!debug.contains("test-token"));
        assert!(!debug.contains("kv-secret"));
        assert_eq!(client.kv_store_key(), Some("kv-secret"));
    }
}
