//! `owner-details show <owner-id>` – load one owner and render it.

use anyhow::{Context, Result};
use owner_details_core::config::GatewayConfig;
use owner_details_core::controller::OwnerDetailsController;
use owner_details_core::fetch::CurlFetcher;
use owner_details_core::owner::OwnerId;
use std::io::Write;
use std::sync::Arc;

use crate::view;

/// Writes the details view (or raw JSON) to `out`. A failed fetch is not an
/// error here: the view is left in its loading state.
pub async fn run_show(
    cfg: &GatewayConfig,
    owner_id: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let fetcher = CurlFetcher::from_config(cfg).context("gateway base URL")?;
    let controller = OwnerDetailsController::new(Arc::new(fetcher));

    controller.activate(OwnerId::new(owner_id)).settled().await;

    let owner = controller.owner();
    if json {
        match owner {
            Some(o) => writeln!(out, "{}", serde_json::to_string_pretty(&o)?)?,
            None => writeln!(out, "null")?,
        }
    } else {
        write!(out, "{}", view::render(owner.as_ref()))?;
    }
    Ok(())
}
