use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::api::{is_default, Contact, OrderParameters, OrganizationInfo, ResultInfo};

/// Everything known about a particular order.
///
/// Which sections are filled in depends on the `include_*` flags of the query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OrderInfo {
    #[serde(rename = "CertCenterOrderID")]
    pub certcenter_order_id: i64,

    pub common_name: String,
    pub order_status: OrderStatus,
    pub configuration_assessment: ConfigurationAssessment,
    pub billing_info: BillingInfo,
    pub order_parameters: OrderParameters,
    pub contact_info: ContactInfoPair,
    pub organization_info: OrganizationInfo,
    pub fulfillment: Fulfillment,

    /// Deprecated, for DV orders with DNS authentication.
    #[serde(rename = "DNSAuthDetails")]
    pub dns_auth_details: DnsAuthDetails,

    /// Deprecated, for DV orders with FILE authentication.
    pub file_auth_details: FileAuthDetails,

    /// Deprecated, for DV orders with EMAIL authentication.
    pub email_auth_details: EmailAuthDetails,

    #[serde(rename = "DCVStatus")]
    pub dcv_status: Vec<DcvStatus>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OrderStatus {
    pub major_status: String,
    pub minor_status: String,

    #[serde(with = "time::serde::rfc3339::option")]
    pub order_date: Option<OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub update_date: Option<OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,

    pub progress: i32,
}

impl OrderStatus {
    pub fn is_complete(&self) -> bool {
        self.major_status == "COMPLETE"
    }
}

/// Configuration assessment done by ssllabs.com.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ConfigurationAssessment {
    pub engine: String,
    pub ranking: String,

    #[serde(with = "time::serde::rfc3339::option")]
    pub effective: Option<OffsetDateTime>,

    pub criteria_version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BillingInfo {
    pub price: f32,
    pub currency: String,
    pub status: String,

    /// Only set once `status` is `cleared`.
    pub invoice_ref: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ContactInfoPair {
    pub admin_contact: Contact,
    pub tech_contact: Contact,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Fulfillment {
    #[serde(with = "time::serde::rfc3339::option")]
    pub start_date: Option<OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub end_date: Option<OffsetDateTime>,

    #[serde(rename = "CSR")]
    pub csr: String,

    pub certificate: String,
    pub intermediate: String,
    pub download_links: DownloadLinks,
}

/// cert.sh download links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DownloadLinks {
    pub certificate: String,
    pub intermediate: String,
    pub icon_script: String,

    #[serde(rename = "PKCS7")]
    pub pkcs7: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DnsAuthDetails {
    #[serde(rename = "DNSEntry")]
    pub dns_entry: String,

    #[serde(rename = "DNSValue")]
    pub dns_value: String,

    pub example: String,

    #[serde(rename = "FQDNs")]
    pub fqdns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FileAuthDetails {
    pub file_contents: String,
    pub file_name: String,
    pub file_path: String,
    pub poll_status: String,

    #[serde(with = "time::serde::rfc3339::option")]
    pub last_poll_date: Option<OffsetDateTime>,

    #[serde(rename = "FQDNs")]
    pub fqdns: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct EmailAuthDetails {
    pub approver_email: String,

    #[serde(with = "time::serde::rfc3339::option")]
    pub approver_notify_date: Option<OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub approver_confirm_date: Option<OffsetDateTime>,
}

/// Domain control validation state of one domain of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DcvStatus {
    #[serde(rename = "DomainControlValidationID")]
    pub domain_control_validation_id: i32,

    pub domain: String,
    pub status: String,
    pub approver_email: String,

    #[serde(with = "time::serde::rfc3339::option")]
    pub last_check_date: Option<OffsetDateTime>,

    #[serde(with = "time::serde::rfc3339::option")]
    pub last_update_date: Option<OffsetDateTime>,
}

/// Query for `GET /Orders`.
///
/// Unset filters and `false` include flags are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetOrdersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items_per_page: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_dir: Option<String>,

    #[serde(rename = "includeFulfillment", skip_serializing_if = "is_default")]
    pub include_fulfillment: bool,

    #[serde(rename = "includeOrderParameters", skip_serializing_if = "is_default")]
    pub include_order_parameters: bool,

    #[serde(rename = "includeBillingDetails", skip_serializing_if = "is_default")]
    pub include_billing_details: bool,

    #[serde(rename = "includeContacts", skip_serializing_if = "is_default")]
    pub include_contacts: bool,

    #[serde(
        rename = "includeOrganizationInfos",
        skip_serializing_if = "is_default"
    )]
    pub include_organization_infos: bool,

    #[serde(rename = "includeDCVStatus", skip_serializing_if = "is_default")]
    pub include_dcv_status: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetOrdersResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub order_infos: Vec<OrderInfo>,

    #[serde(rename = "_meta")]
    pub meta: OrdersMeta,
}

/// Paging and filter information of a `GET /Orders` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct OrdersMeta {
    pub items_available: i64,
    pub items_per_page: i64,
    pub page: i64,
    pub order_by: String,
    pub order_dir: String,
    pub status: Vec<String>,
    pub product_type: Vec<String>,
    pub common_name: String,
}

impl OrdersMeta {
    /// Returns true if more pages follow the current one.
    pub fn has_more(&self) -> bool {
        self.items_per_page > 0 && self.page * self.items_per_page < self.items_available
    }
}

/// Query for orders modified within a timespan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetModifiedOrdersRequest {
    #[serde(with = "time::serde::rfc3339")]
    pub from_date: OffsetDateTime,

    #[serde(with = "time::serde::rfc3339")]
    pub to_date: OffsetDateTime,

    #[serde(rename = "includeFulfillment", skip_serializing_if = "is_default")]
    pub include_fulfillment: bool,

    #[serde(rename = "includeOrderParameters", skip_serializing_if = "is_default")]
    pub include_order_parameters: bool,

    #[serde(rename = "includeBillingDetails", skip_serializing_if = "is_default")]
    pub include_billing_details: bool,

    #[serde(rename = "includeContacts", skip_serializing_if = "is_default")]
    pub include_contacts: bool,

    #[serde(
        rename = "includeOrganizationInfos",
        skip_serializing_if = "is_default"
    )]
    pub include_organization_infos: bool,

    #[serde(rename = "includeDCVStatus", skip_serializing_if = "is_default")]
    pub include_dcv_status: bool,
}

impl GetModifiedOrdersRequest {
    pub fn new(from_date: OffsetDateTime, to_date: OffsetDateTime) -> Self {
        Self {
            from_date,
            to_date,
            include_fulfillment: false,
            include_order_parameters: false,
            include_billing_details: false,
            include_contacts: false,
            include_organization_infos: false,
            include_dcv_status: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetModifiedOrdersResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub order_infos: Vec<OrderInfo>,
}

/// Query for `GET /Order/:CertCenterOrderID`.
///
/// The order ID only goes into the path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOrderRequest {
    #[serde(rename = "CertCenterOrderID", skip_serializing)]
    pub certcenter_order_id: i64,

    #[serde(rename = "includeFulfillment", skip_serializing_if = "is_default")]
    pub include_fulfillment: bool,

    #[serde(rename = "includeOrderParameters", skip_serializing_if = "is_default")]
    pub include_order_parameters: bool,

    #[serde(rename = "includeBillingDetails", skip_serializing_if = "is_default")]
    pub include_billing_details: bool,

    #[serde(rename = "includeContacts", skip_serializing_if = "is_default")]
    pub include_contacts: bool,

    #[serde(
        rename = "includeOrganizationInfos",
        skip_serializing_if = "is_default"
    )]
    pub include_organization_infos: bool,

    #[serde(rename = "includeDCVStatus", skip_serializing_if = "is_default")]
    pub include_dcv_status: bool,
}

impl GetOrderRequest {
    pub fn new(certcenter_order_id: i64) -> Self {
        Self {
            certcenter_order_id,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct GetOrderResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub order_info: OrderInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_order_info() {
        let res: GetOrderResult = serde_json::from_str(
            r#"{
            "success": true,
            "OrderInfo": {
                "CertCenterOrderID": 1234567,
                "CommonName": "www.example.com",
                "OrderStatus": {
                    "MajorStatus": "COMPLETE",
                    "MinorStatus": "",
                    "OrderDate": "2024-01-02T03:04:05Z",
                    "UpdateDate": "2024-01-02T04:04:05Z",
                    "StartDate": "2024-01-02T00:00:00Z",
                    "EndDate": "2025-01-02T00:00:00Z",
                    "Progress": 100
                },
                "BillingInfo": { "Price": 19.5, "Currency": "EUR", "Status": "cleared", "InvoiceRef": "INV-1" },
                "Fulfillment": {
                    "CSR": "csr",
                    "Certificate": "cert",
                    "Intermediate": "inter",
                    "DownloadLinks": { "PKCS7": "https://cert.sh/p7" }
                },
                "DNSAuthDetails": { "DNSEntry": "_dnsauth", "DNSValue": "abc", "FQDNs": ["example.com"] },
                "DCVStatus": [
                    { "DomainControlValidationID": 7, "Domain": "example.com", "Status": "VALID" }
                ]
            }
            }"#,
        )
        .unwrap();

        let info = res.order_info;
        assert_eq!(info.certcenter_order_id, 1234567);
        assert!(info.order_status.is_complete());
        assert_eq!(info.order_status.progress, 100);
        assert_eq!(info.order_status.end_date.unwrap().year(), 2025);
        assert_eq!(info.billing_info.invoice_ref, "INV-1");
        assert_eq!(info.fulfillment.download_links.pkcs7, "https://cert.sh/p7");
        assert_eq!(info.dns_auth_details.fqdns, vec!["example.com"]);
        assert_eq!(info.dcv_status[0].domain_control_validation_id, 7);
        assert!(info.email_auth_details.approver_notify_date.is_none());
    }

    #[test]
    fn test_decode_orders_meta() {
        let res: GetOrdersResult = serde_json::from_str(
            r#"{
            "success": true,
            "OrderInfos": [{ "CertCenterOrderID": 1 }, { "CertCenterOrderID": 2 }],
            "_meta": {
                "ItemsAvailable": 5,
                "ItemsPerPage": 2,
                "Page": 1,
                "OrderBy": "ID",
                "OrderDir": "DESC",
                "Status": ["COMPLETE"],
                "ProductType": ["SSL"],
                "CommonName": ""
            }
            }"#,
        )
        .unwrap();

        assert_eq!(res.order_infos.len(), 2);
        assert_eq!(res.meta.items_available, 5);
        assert!(res.meta.has_more());
    }

    #[test]
    fn test_get_order_request_hides_order_id() {
        let req = GetOrderRequest {
            include_fulfillment: true,
            ..GetOrderRequest::new(99)
        };

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "includeFulfillment": true }));
    }
}
