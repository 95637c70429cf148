//! Request path construction for the owner endpoint.
//!
//! Owners are served by the gateway under `/api/customer`, not `/api/gateway`.

use crate::owner::OwnerId;

/// Fixed base path of the owners resource, relative to the gateway root.
pub const OWNERS_BASE_PATH: &str = "api/customer/owners/";

/// Builds `api/customer/owners/{id}` by plain concatenation (no escaping).
pub fn owner_path(id: &OwnerId) -> String {
    format!("{}{}", OWNERS_BASE_PATH, id.as_str())
}
