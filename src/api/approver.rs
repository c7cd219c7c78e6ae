use serde::{Deserialize, Serialize};

use crate::api::ResultInfo;

/// Query for `GET /ApproverList`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApproverListRequest {
    pub common_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,

    /// Comma separated list of additional DNS names.
    #[serde(rename = "DNSNames", skip_serializing_if = "Option::is_none")]
    pub dns_names: Option<String>,
}

/// Valid approver email addresses for a common name and product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ApproverListResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    /// Per-domain approver information (BR 3.2.2.4).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_approvers: Option<DomainApprovers>,

    /// Legacy flat list, still sent for backward compatibility.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub approver_list: Vec<Approver>,
}

impl ApproverListResult {
    /// All approvers for `domain`, falling back to the legacy list when the API didn't send
    /// per-domain information.
    pub fn approvers_for(&self, domain: &str) -> Vec<&Approver> {
        match &self.domain_approvers {
            Some(approvers) => approvers
                .domain_approver
                .iter()
                .filter(|item| item.domain.eq_ignore_ascii_case(domain))
                .flat_map(|item| item.approvers.iter())
                .collect(),
            None => self.approver_list.iter().collect(),
        }
    }
}

/// Domain control validation approvers, grouped by domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DomainApprovers {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domain_approver: Vec<DomainApproverItem>,
}

impl DomainApprovers {
    /// One approver email per domain, the usual shape of an order's DCV parameters.
    pub fn from_emails<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let domain_approver = pairs
            .into_iter()
            .map(|(domain, email)| DomainApproverItem {
                domain: domain.to_owned(),
                approvers: vec![Approver::email(email)],
            })
            .collect();

        Self { domain_approver }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DomainApproverItem {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub domain: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub approvers: Vec<Approver>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Approver {
    pub approver_email: String,

    /// `Domain` or `Generic`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approver_type: Option<String>,
}

impl Approver {
    pub fn email(approver_email: impl Into<String>) -> Self {
        Self {
            approver_email: approver_email.into(),
            approver_type: None,
        }
    }
}

/// Request for `PUT /ApproverEmail/:CertCenterOrderID`, resetting the approver address.
///
/// The order ID goes into the path, the new address into the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutApproverEmailRequest {
    #[serde(rename = "CertCenterOrderID", skip_serializing)]
    pub certcenter_order_id: i64,

    pub approver_email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PutApproverEmailResult {
    #[serde(flatten)]
    pub info: ResultInfo,
}

/// Request for `POST /ApproverEmail/:CertCenterOrderID`, resending the approver email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResendApproverEmailRequest {
    #[serde(rename = "CertCenterOrderID")]
    pub certcenter_order_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResendApproverEmailResult {
    #[serde(flatten)]
    pub info: ResultInfo,
}
