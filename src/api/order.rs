use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::api::{is_default, DomainApprovers, ResultInfo};

/// Request for `POST /Order`.
///
/// Used for regular certificates as well as S/MIME and AlwaysOnSSL certificates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_info: Option<OrganizationInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_parameters: Option<OrderParameters>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_contact: Option<Contact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_contact: Option<Contact>,
}

/// Generic order parameters.
///
/// Empty and zero fields are left out of the JSON payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OrderParameters {
    /// PEM-encoded PKCS#10.
    #[serde(rename = "CSR", skip_serializing_if = "String::is_empty")]
    pub csr: String,

    #[serde(skip_serializing_if = "is_default")]
    pub is_competitive_upgrade: bool,

    #[serde(skip_serializing_if = "is_default")]
    pub is_renewal: bool,

    #[serde(rename = "PartnerOrderID", skip_serializing_if = "String::is_empty")]
    pub partner_order_id: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub product_code: String,

    #[serde(skip_serializing_if = "is_default")]
    pub server_count: i32,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub signature_hash_algorithm: String,

    #[serde(skip_serializing_if = "is_default")]
    pub subject_alt_name_count: i32,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subject_alt_names: Vec<String>,

    /// 12 or 24 months; days for AlwaysOnSSL (180 to 365).
    #[serde(skip_serializing_if = "is_default")]
    pub validity_period: i32,

    /// `DNS`, `EMAIL` or `FILE`.
    #[serde(rename = "DVAuthMethod", skip_serializing_if = "String::is_empty")]
    pub dv_auth_method: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_approvers: Option<DomainApprovers>,

    /// Deprecated in favour of `domain_approvers`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub approver_email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OrganizationInfo {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub organization_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_address: Option<OrganizationAddress>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OrganizationAddress {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub address_line1: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub postal_code: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub country: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub fax: String,
}

/// Admin or tech contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Contact {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub organization_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_address: Option<OrganizationAddress>,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub phone: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub fax: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
}

/// Response to `POST /Order` (and `POST /Redeem`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OrderResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    #[serde(with = "time::serde::rfc3339::option")]
    pub timestamp: Option<OffsetDateTime>,

    #[serde(rename = "CertCenterOrderID")]
    pub certcenter_order_id: i64,

    pub order_parameters: OrderParameters,

    /// Only filled in for AlwaysOnSSL (Encryption Everywhere) orders, which issue immediately.
    pub fulfillment: OrderFulfillment,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OrderFulfillment {
    pub certificate: String,

    #[serde(rename = "Certificate_PKCS7")]
    pub pkcs7: String,

    pub intermediate: String,
}

impl OrderFulfillment {
    /// Returns true if the order was fulfilled synchronously.
    pub fn is_issued(&self) -> bool {
        !self.certificate.is_empty()
    }
}

/// Request for `DELETE /Order/:CertCenterOrderID`, cancelling an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteOrderRequest {
    #[serde(rename = "CertCenterOrderID")]
    pub certcenter_order_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteOrderResult {
    #[serde(flatten)]
    pub info: ResultInfo,
}

/// Request for `POST /Reissue`.
///
/// Replaces an existing certificate after a key loss or an algorithm/key-size upgrade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReissueRequest {
    #[serde(rename = "CertCenterOrderID")]
    pub certcenter_order_id: i64,

    pub order_parameters: ReissueOrderParameters,

    pub reissue_email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ReissueOrderParameters {
    #[serde(rename = "CSR")]
    pub csr: String,

    #[serde(rename = "DVAuthMethod")]
    pub dv_auth_method: String,

    pub signature_hash_algorithm: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_approvers: Option<DomainApprovers>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReissueResult {
    #[serde(flatten)]
    pub info: ResultInfo,
}

/// Request for `DELETE /Revoke/:CertCenterOrderID`.
///
/// The order ID is sent both in the path and in the JSON body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RevokeRequest {
    #[serde(rename = "CertCenterOrderID")]
    pub certcenter_order_id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoke_reason: Option<String>,

    /// PEM encoded X.509 certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevokeResult {
    #[serde(flatten)]
    pub info: ResultInfo,
}
