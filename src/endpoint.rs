//! The operation table.
//!
//! Every API operation is an [`Endpoint`] variant that knows its HTTP method, its path below the
//! API root and where its parameters travel ([`ParamLocation`]).

use std::fmt;

use bitflags::bitflags;
use reqwest::Method;

bitflags! {
    /// Where the parameters of a request are placed.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ParamLocation: u8 {
        /// Query string, e.g. `?ProductCode=Symantec.SecureSite`.
        const QUERY_STRING = 1 << 0;

        /// Path segment, e.g. `/Order/:CertCenterOrderID`.
        const PATH = 1 << 1;

        /// JSON body.
        const BODY = 1 << 2;
    }
}

/// A CertCenter REST API operation.
///
/// Variants addressing a single resource carry its identifier, which becomes the last path
/// segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Profile,
    Limit,
    Products,
    ProductDetails,
    Quote,
    ValidateCsr,
    UserAgreement,
    ApproverList,
    Order,
    PutApproverEmail(i64),
    ResendApproverEmail(i64),
    GetOrders,
    GetModifiedOrders,
    GetOrder(i64),
    DeleteOrder(i64),
    Reissue,
    Revoke(i64),
    ValidateName,
    DnsData,
    FileData,
    VulnerabilityAssessment,
    VulnerabilityAssessmentRescan(i64),
    CreateUser,
    GetUser(String),
    UpdateUser(String),
    DeleteUser(String),
    CreateVoucher,
    RedeemVoucher,
    GetVouchers,
    GetVoucher(String),
    DeleteVoucher(String),
}

impl Endpoint {
    /// Name of the API resource, i.e. the first path segment.
    pub fn resource(&self) -> &'static str {
        match self {
            Endpoint::Profile => "Profile",
            Endpoint::Limit => "Limit",
            Endpoint::Products => "Products",
            Endpoint::ProductDetails => "ProductDetails",
            Endpoint::Quote => "Quote",
            Endpoint::ValidateCsr => "ValidateCSR",
            Endpoint::UserAgreement => "UserAgreement",
            Endpoint::ApproverList => "ApproverList",
            Endpoint::Order | Endpoint::GetOrder(_) | Endpoint::DeleteOrder(_) => "Order",
            Endpoint::PutApproverEmail(_) | Endpoint::ResendApproverEmail(_) => "ApproverEmail",
            Endpoint::GetOrders => "Orders",
            Endpoint::GetModifiedOrders => "GetModifiedOrders",
            Endpoint::Reissue => "Reissue",
            Endpoint::Revoke(_) => "Revoke",
            Endpoint::ValidateName => "ValidateName",
            Endpoint::DnsData => "DNSData",
            Endpoint::FileData => "FileData",
            Endpoint::VulnerabilityAssessment | Endpoint::VulnerabilityAssessmentRescan(_) => {
                "VulnerabilityAssessment"
            }
            Endpoint::CreateUser
            | Endpoint::GetUser(_)
            | Endpoint::UpdateUser(_)
            | Endpoint::DeleteUser(_) => "User",
            Endpoint::CreateVoucher | Endpoint::GetVoucher(_) | Endpoint::DeleteVoucher(_) => {
                "Voucher"
            }
            Endpoint::RedeemVoucher => "Redeem",
            Endpoint::GetVouchers => "Vouchers",
        }
    }

    /// Identifier appended to the resource path, if any.
    pub fn path_param(&self) -> Option<String> {
        match self {
            Endpoint::PutApproverEmail(id)
            | Endpoint::ResendApproverEmail(id)
            | Endpoint::GetOrder(id)
            | Endpoint::DeleteOrder(id)
            | Endpoint::Revoke(id)
            | Endpoint::VulnerabilityAssessmentRescan(id) => Some(id.to_string()),

            Endpoint::GetUser(name)
            | Endpoint::UpdateUser(name)
            | Endpoint::DeleteUser(name)
            | Endpoint::GetVoucher(name)
            | Endpoint::DeleteVoucher(name) => Some(name.clone()),

            _ => None,
        }
    }

    /// Path below the API root, e.g. `Order/1234567`. The identifier is not percent-encoded.
    pub fn path(&self) -> String {
        match self.path_param() {
            Some(param) => format!("{}/{param}", self.resource()),
            None => self.resource().to_owned(),
        }
    }

    /// Where this operation's parameters are placed.
    pub fn location(&self) -> ParamLocation {
        match self {
            Endpoint::Profile | Endpoint::Limit | Endpoint::Products | Endpoint::GetVouchers => {
                ParamLocation::empty()
            }

            Endpoint::ProductDetails
            | Endpoint::Quote
            | Endpoint::UserAgreement
            | Endpoint::ApproverList
            | Endpoint::GetOrders
            | Endpoint::GetModifiedOrders => ParamLocation::QUERY_STRING,

            Endpoint::ValidateCsr
            | Endpoint::Order
            | Endpoint::Reissue
            | Endpoint::ValidateName
            | Endpoint::DnsData
            | Endpoint::FileData
            | Endpoint::VulnerabilityAssessment
            | Endpoint::CreateUser
            | Endpoint::CreateVoucher
            | Endpoint::RedeemVoucher => ParamLocation::BODY,

            Endpoint::ResendApproverEmail(_)
            | Endpoint::DeleteOrder(_)
            | Endpoint::VulnerabilityAssessmentRescan(_)
            | Endpoint::GetUser(_)
            | Endpoint::DeleteUser(_)
            | Endpoint::GetVoucher(_)
            | Endpoint::DeleteVoucher(_) => ParamLocation::PATH,

            Endpoint::PutApproverEmail(_) | Endpoint::GetOrder(_) => {
                ParamLocation::QUERY_STRING | ParamLocation::PATH
            }

            Endpoint::Revoke(_) | Endpoint::UpdateUser(_) => {
                ParamLocation::BODY | ParamLocation::PATH
            }
        }
    }

    /// HTTP method of this operation.
    ///
    /// Parameters in the body imply `POST` unless the operation says otherwise.
    pub fn method(&self) -> Method {
        match self {
            Endpoint::PutApproverEmail(_) => Method::PUT,
            Endpoint::ResendApproverEmail(_) | Endpoint::UpdateUser(_) => Method::POST,
            Endpoint::DeleteOrder(_)
            | Endpoint::Revoke(_)
            | Endpoint::DeleteUser(_)
            | Endpoint::DeleteVoucher(_) => Method::DELETE,
            _ if self.location().contains(ParamLocation::BODY) => Method::POST,
            _ => Method::GET,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} /{}", self.method(), self.path())
    }
}
