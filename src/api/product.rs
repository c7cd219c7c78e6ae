use serde::{Deserialize, Serialize};

use crate::api::ResultInfo;

/// List of valid product codes.
///
/// Returned by `GET /Products`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProductsResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub products: Vec<String>,
}

/// Query for `GET /ProductDetails`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProductDetailsRequest {
    pub product_code: String,
}

impl ProductDetailsRequest {
    pub fn new(product_code: impl Into<String>) -> Self {
        Self {
            product_code: product_code.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProductDetailsResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub product_details: ProductDetails,
}

/// Detailed information on a particular product code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProductDetails {
    #[serde(rename = "CA")]
    pub ca: String,

    pub currency: String,
    pub features: Vec<String>,
    pub licenses: i32,
    pub max_validity_period: i32,
    pub price: f64,
    pub product_code: String,
    pub product_name: String,
    pub refund_period: i32,
    pub renew_period: i32,

    #[serde(rename = "SANFeatures")]
    pub san_features: Vec<String>,

    #[serde(rename = "SANHostPrice")]
    pub san_host_price: f64,

    #[serde(rename = "SANMaxHosts")]
    pub san_max_hosts: i32,

    #[serde(rename = "SANPackagePrice")]
    pub san_package_price: f64,

    #[serde(rename = "SANPackageSize")]
    pub san_package_size: i32,
}

/// Query for `GET /Quote`, a real-time quotation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuoteRequest {
    pub product_code: String,
    pub subject_alt_name_count: i32,

    /// Validity in months (12 or 24).
    pub validity_period: i32,

    pub server_count: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct QuoteResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub currency: String,
    pub order_parameters: QuoteOrderParameters,
    pub price: f64,
}

/// Parameters the quotation was calculated for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct QuoteOrderParameters {
    pub product_code: String,
    pub server_count: i32,
    pub subject_alt_name_count: i32,
    pub validity_period: i32,
}

/// Query for `GET /UserAgreement`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UserAgreementRequest {
    pub product_code: String,
}

impl UserAgreementRequest {
    pub fn new(product_code: impl Into<String>) -> Self {
        Self {
            product_code: product_code.into(),
        }
    }
}

/// The latest subscriber agreement for a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UserAgreementResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub product_code: String,
    pub user_agreement: String,
}
