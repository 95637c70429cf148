//! Owner request capability.
//!
//! The controller only depends on [`OwnerFetcher`]; the libcurl-backed
//! [`CurlFetcher`] is the production implementation.

mod error;
mod http;

pub use error::FetchError;
pub use http::CurlFetcher;

use crate::owner::Owner;

/// Performs one read of an owner record at a gateway-relative path
/// (e.g. `api/customer/owners/1`).
///
/// Blocking; callers on async code run it through `spawn_blocking`.
pub trait OwnerFetcher: Send + Sync + 'static {
    fn fetch(&self, path: &str) -> Result<Owner, FetchError>;
}
