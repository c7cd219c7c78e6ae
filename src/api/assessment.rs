use serde::{Deserialize, Serialize};

use crate::api::ResultInfo;

/// Request for `POST /VulnerabilityAssessment`.
///
/// Configures the vulnerability assessment of an order (Symantec certificates only).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VulnerabilityAssessmentRequest {
    #[serde(rename = "CertCenterOrderID")]
    pub certcenter_order_id: i64,

    /// `Active` or `Inactive`.
    pub service_status: String,

    pub email_notification_level: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VulnerabilityAssessmentResult {
    #[serde(flatten)]
    pub info: ResultInfo,
}

/// Request for `GET /VulnerabilityAssessment/:CertCenterOrderID`, initiating a re-scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityAssessmentRescanRequest {
    #[serde(rename = "CertCenterOrderID")]
    pub certcenter_order_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VulnerabilityAssessmentRescanResult {
    #[serde(flatten)]
    pub info: ResultInfo,
}
