use serde::{Deserialize, Serialize};

use crate::api::ResultInfo;

/// Basic information about the authenticated profile.
///
/// Returned by `GET /Profile`.
///
/// # Example JSON
///
/// ```json
/// {
///   "AuthType": "OAUTH2",
///   "AuthorizationID": 123456789,
///   "Country": "DE",
///   "Currency": "EUR",
///   "CustomerID": 123456,
///   "Locale": "de_DE",
///   "OAuth2_Token": "XYZ0123456789.oauth2.certcenter.com",
///   "Scope": "UI",
///   "Timezone": "Europe/Berlin"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProfileResult {
    pub auth_type: String,

    #[serde(rename = "AuthorizationID")]
    pub authorization_id: i64,

    pub country: String,
    pub currency: String,

    #[serde(rename = "CustomerID")]
    pub customer_id: i64,

    pub locale: String,

    #[serde(rename = "OAuth2_Token")]
    pub oauth2_token: String,

    pub scope: String,
    pub timezone: String,
}

/// Current credit limit and the amount already used.
///
/// Returned by `GET /Limit`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LimitResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub limit_info: LimitInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct LimitInfo {
    pub limit: f64,
    pub used: f64,
}

impl LimitInfo {
    /// Amount still available before the limit is reached.
    pub fn remaining(&self) -> f64 {
        self.limit - self.used
    }
}
