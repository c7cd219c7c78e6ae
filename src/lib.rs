//! Typed client for the [CertCenter](https://www.certcenter.com) REST API.
//!
//! Every API operation is a method on [`Client`] taking a request struct from [`api`] and
//! returning the matching result struct. Requests and results are plain data; the wire names
//! (`CertCenterOrderID`, `ProductCode`, ...) are handled by serde.
//!
//! # Usage
//!
//! ```no_run
//! use certcenter::{api::GetOrderRequest, ApiUrl, Client};
//!
//! # async fn run() -> eyre::Result<()> {
//! let client = Client::new(ApiUrl::Production, "XYZ0123456789.oauth2.certcenter.com")?;
//!
//! let res = client
//!     .get_order(&GetOrderRequest {
//!         include_fulfillment: true,
//!         ..GetOrderRequest::new(1234567)
//!     })
//!     .await?;
//!
//! if res.order_info.order_status.is_complete() {
//!     println!("{}", res.order_info.fulfillment.certificate);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Examples
//!
//! Runnable examples live in the `demos/` directory of the source repository and pick up their
//! credentials from `CERTCENTER_API_TOKEN` (see [`Client::from_env()`]).
//!
//! # Errors
//!
//! All operations return [`eyre::Result`]. Transport level failures (401, unexpected status codes,
//! empty or oversized bodies) can be recovered with `err.downcast_ref::<ApiError>()`.
//!
//! Responses with status 406 (no changes made) and 417 (invalid request data) are not errors: the
//! result carries `success: false` and the API's message in its [`api::ResultInfo`].
//!
//! # Certificates
//!
//! [`create_p256_key()`] and [`create_csr()`] produce the PEM-encoded CSR expected by order and
//! reissue requests. [`Certificate`] pairs an issued certificate with its private key.

#![deny(rust_2018_idioms, nonstandard_style, future_incompatible)]

mod cert;
mod client;
mod endpoint;
mod error;
mod ops;
mod req;

pub mod api;


pub use crate::{
    cert::{create_csr, create_p256_key, private_key_pem, Certificate},
    client::{ApiUrl, Client, ENV_API_TOKEN, ENV_API_URL, ENV_KV_STORE_KEY},
    endpoint::{Endpoint, ParamLocation},
    error::ApiError,
};
