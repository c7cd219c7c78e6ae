use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::api::{Contact, OrderParameters, OrderResult, OrganizationInfo, ResultInfo};

/// Request for `POST /Voucher`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateVoucherRequest {
    pub order_parameters: OrderParameters,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CreateVoucherResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub voucher_code: String,
    pub order_parameters: OrderParameters,
}

/// Request for `POST /Redeem`, turning a voucher into an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RedeemVoucherRequest {
    pub voucher_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_info: Option<OrganizationInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_parameters: Option<OrderParameters>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_contact: Option<Contact>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedeemVoucherResult {
    #[serde(flatten)]
    pub order: OrderResult,
}

/// Response to `GET /Vouchers` and `GET /Voucher/:VoucherCode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetVouchersResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub vouchers: Vec<Voucher>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Voucher {
    pub redeem_info: RedeemInfo,

    #[serde(with = "time::serde::rfc3339::option")]
    pub creation_date: Option<OffsetDateTime>,

    pub order_parameters: OrderParameters,
    pub voucher_code: String,
    pub redeemed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RedeemInfo {
    #[serde(with = "time::serde::rfc3339::option")]
    pub redeem_date: Option<OffsetDateTime>,

    #[serde(rename = "CertCenterOrderID")]
    pub certcenter_order_id: i64,
}

/// Request for `GET /Voucher/:VoucherCode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetVoucherRequest {
    pub voucher_code: String,
}

/// Request for `DELETE /Voucher/:VoucherCode`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteVoucherRequest {
    pub voucher_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteVoucherResult {
    #[serde(flatten)]
    pub order: OrderResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_vouchers() {
        let res: GetVouchersResult = serde_json::from_str(
            r#"{
            "success": true,
            "Vouchers": [
                {
                "VoucherCode": "VC-ABCDEF",
                "CreationDate": "2024-03-01T12:00:00Z",
                "Redeemed": true,
                "RedeemInfo": { "RedeemDate": "2024-03-02T12:00:00Z", "CertCenterOrderID": 77 },
                "OrderParameters": { "ProductCode": "GeoTrust.QuickSSLPremium", "ValidityPeriod": 12 }
                }
            ]
            }"#,
        )
        .unwrap();

        let voucher = &res.vouchers[0];
        assert!(voucher.redeemed);
        assert_eq!(voucher.redeem_info.certcenter_order_id, 77);
        assert_eq!(voucher.order_parameters.validity_period, 12);
        assert!(voucher.creation_date.unwrap() < voucher.redeem_info.redeem_date.unwrap());
    }

    #[test]
    fn test_decode_redeem_result() {
        let res: RedeemVoucherResult = serde_json::from_str(
            r#"{ "success": true, "CertCenterOrderID": 88, "OrderParameters": { "ProductCode": "X" } }"#,
        )
        .unwrap();

        assert!(res.order.info.success);
        assert_eq!(res.order.certcenter_order_id, 88);
    }
}
