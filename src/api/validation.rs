use serde::{Deserialize, Serialize};

use crate::api::ResultInfo;

/// Request for `POST /ValidateCSR`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidateCsrRequest {
    /// PEM-encoded PKCS#10.
    #[serde(rename = "CSR")]
    pub csr: String,
}

impl ValidateCsrRequest {
    pub fn new(csr: impl Into<String>) -> Self {
        Self { csr: csr.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ValidateCsrResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    #[serde(rename = "ParsedCSR")]
    pub parsed_csr: ParsedCsr,
}

/// CSR fields as parsed by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ParsedCsr {
    pub common_name: String,
    pub organization: String,
    pub organization_unit: String,
    pub email: String,
    pub state: String,
    pub locality: String,
    pub country: String,
    pub key_length: i32,

    // spelled this way on the wire
    #[serde(rename = "SignaturAlgorithm")]
    pub signature_algorithm: String,

    pub key_encryption_algorithm: String,

    #[serde(rename = "HashMD5")]
    pub hash_md5: String,

    #[serde(rename = "HashSHA256")]
    pub hash_sha256: String,

    pub unique_value: String,
}

/// Request for `POST /ValidateName`, checking a common name against the Symantec EE blacklist.
///
/// AlwaysOnSSL only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateNameRequest {
    pub common_name: String,

    /// Asks the API to generate a private key and CSR.
    ///
    /// For testing only; generate your own keys in production (see [`create_csr`]).
    ///
    /// [`create_csr`]: crate::create_csr
    pub generate_private_key: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ValidateNameResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub is_qualified: bool,

    /// Only set when `generate_private_key` was requested.
    #[serde(rename = "CSR")]
    pub csr: String,

    /// Only set when `generate_private_key` was requested.
    pub private_key: String,
}

/// Request for `POST /DNSData`. AlwaysOnSSL only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsDataRequest {
    pub product_code: String,

    #[serde(rename = "CSR")]
    pub csr: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DnsDataResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    #[serde(rename = "DNSAuthDetails")]
    pub dns_auth_details: DnsValidationData,
}

/// Record to publish for DNS based validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DnsValidationData {
    /// Usually `CNAME`.
    pub pointer_type: String,

    #[serde(rename = "DNSEntry")]
    pub dns_entry: String,

    #[serde(rename = "DNSValue")]
    pub dns_value: String,

    pub example: String,
}

/// Request for `POST /FileData`. AlwaysOnSSL only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileDataRequest {
    pub product_code: String,

    #[serde(rename = "CSR")]
    pub csr: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FileDataResult {
    #[serde(flatten)]
    pub info: ResultInfo,

    pub file_auth_details: FileValidationData,
}

/// File to serve for FILE based validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct FileValidationData {
    pub file_contents: String,
    pub file_name: String,
    pub file_path: String,
}

impl FileValidationData {
    /// Location of the file relative to the web root.
    pub fn web_path(&self) -> String {
        let dir = self.file_path.trim_end_matches('/');
        if dir.ends_with(&self.file_name) {
            dir.to_owned()
        } else {
            format!("{dir}/{}", self.file_name)
        }
    }
}

/// Base domain lookup request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseDomainRequest {
    pub fqdn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseDomainResult {
    pub fqdn: String,
    pub domain: String,
}
