//! JSON API payloads.
//!
//! Request and result objects mirror the CertCenter REST API field for field, including some
//! legacy fields the API still emits for backward compatibility. Result objects decode leniently:
//! any field missing from a response is left at its default value.

use std::fmt;

use serde::{Deserialize, Serialize};

mod account;
mod approver;
mod assessment;
mod kv;
mod order;
mod order_info;
mod product;
mod user;
mod validation;
mod voucher;

pub use self::{
    account::{LimitInfo, LimitResult, ProfileResult},
    approver::{
        Approver, ApproverListRequest, ApproverListResult, DomainApproverItem, DomainApprovers,
        PutApproverEmailRequest, PutApproverEmailResult, ResendApproverEmailRequest,
        ResendApproverEmailResult,
    },
    assessment::{
        VulnerabilityAssessmentRequest, VulnerabilityAssessmentRescanRequest,
        VulnerabilityAssessmentRescanResult, VulnerabilityAssessmentResult,
    },
    kv::{KeyValueStoreRequest, KeyValueStoreResult},
    order::{
        Contact, DeleteOrderRequest, DeleteOrderResult, OrderFulfillment, OrderParameters,
        OrderRequest, OrderResult, OrganizationAddress, OrganizationInfo, ReissueOrderParameters,
        ReissueRequest, ReissueResult, RevokeRequest, RevokeResult,
    },
    order_info::{
        BillingInfo, ConfigurationAssessment, ContactInfoPair, DcvStatus, DnsAuthDetails,
        DownloadLinks, EmailAuthDetails, FileAuthDetails, Fulfillment, GetModifiedOrdersRequest,
        GetModifiedOrdersResult, GetOrderRequest, GetOrderResult, GetOrdersRequest,
        GetOrdersResult, OrderInfo, OrderStatus, OrdersMeta,
    },
    product::{
        ProductDetails, ProductDetailsRequest, ProductDetailsResult, ProductsResult,
        QuoteOrderParameters, QuoteRequest, QuoteResult, UserAgreementRequest, UserAgreementResult,
    },
    user::{
        CreateUserRequest, CreateUserResult, DeleteUserRequest, DeleteUserResult, GetUserRequest,
        GetUserResult, UpdateUserRequest, UpdateUserResult, UserData,
    },
    validation::{
        BaseDomainRequest, BaseDomainResult, DnsDataRequest, DnsDataResult, DnsValidationData,
        FileDataRequest, FileDataResult, FileValidationData, ParsedCsr, ValidateCsrRequest,
        ValidateCsrResult, ValidateNameRequest, ValidateNameResult,
    },
    voucher::{
        CreateVoucherRequest, CreateVoucherResult, DeleteVoucherRequest, DeleteVoucherResult,
        GetVoucherRequest, GetVouchersResult, RedeemInfo, RedeemVoucherRequest,
        RedeemVoucherResult, Voucher,
    },
};

/// Request placeholder for operations that take no parameters.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct NoParams;

/// Common envelope included in each result set.
///
/// If `success` is false, `error_id` and/or `error_field` may be provided. Scheme validation
/// failures are reported through `msg` and `errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ResultInfo {
    #[serde(rename = "success")]
    pub success: bool,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_field: Option<String>,

    #[serde(rename = "msg", skip_serializing_if = "String::is_empty")]
    pub msg: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<SchemeValidationError>,
}

impl ResultInfo {
    /// Returns true if the API flagged the call as successful.
    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl fmt::Display for ResultInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.error_id, &self.error_field) {
            (Some(id), Some(field)) => write!(f, "{} (error {id}, field {field})", self.message),
            (Some(id), None) => write!(f, "{} (error {id})", self.message),
            (None, Some(field)) => write!(f, "{} (field {field})", self.message),
            (None, None) if !self.msg.is_empty() => write!(f, "{}", self.msg),
            (None, None) => write!(f, "{}", self.message),
        }
    }
}

/// A single scheme validation failure. May contain nested failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemeValidationError {
    pub msg: String,
    pub status: String,
    pub key: String,

    #[serde(rename = "Errors", skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<SchemeValidationError>,
}

pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_info_decodes_failure() {
        let info: ResultInfo = serde_json::from_str(
            r#"{
            "success": false,
            "Message": "Invalid ProductCode",
            "ErrorId": 400,
            "ErrorField": "ProductCode"
            }"#,
        )
        .unwrap();

        assert!(!info.is_success());
        assert_eq!(info.error_id, Some(400));
        assert_eq!(info.error_field.as_deref(), Some("ProductCode"));
        assert_eq!(
            info.to_string(),
            "Invalid ProductCode (error 400, field ProductCode)"
        );
    }

    #[test]
    fn test_result_info_decodes_nested_scheme_errors() {
        let info: ResultInfo = serde_json::from_str(
            r#"{
            "success": false,
            "msg": "scheme validation failed",
            "Errors": [
                {
                "msg": "invalid value",
                "status": "error",
                "key": "OrderParameters",
                "Errors": [
                    { "msg": "required", "status": "error", "key": "ProductCode" }
                ]
                }
            ]
            }"#,
        )
        .unwrap();

        assert_eq!(info.msg, "scheme validation failed");
        assert_eq!(info.errors.len(), 1);
        assert_eq!(info.errors[0].key, "OrderParameters");
        assert_eq!(info.errors[0].errors[0].key, "ProductCode");
        assert_eq!(info.to_string(), "scheme validation failed");
    }

    #[test]
    fn test_result_info_missing_fields_default() {
        let info: ResultInfo = serde_json::from_str("{}").unwrap();
        assert_eq!(info, ResultInfo::default());
    }
}
