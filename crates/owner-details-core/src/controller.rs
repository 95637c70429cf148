//! Owner details controller.
//!
//! Bridges a route's owner id to a read-only detail view: each activation
//! issues one GET for the owner and, on success, stores the body in the
//! controller's `owner` field for the view to read.
//!
//! The field is written by whichever activation completes last, not by the
//! one issued last. A failed fetch is logged and leaves the field as it was.

use crate::api_path::owner_path;
use crate::fetch::{FetchError, OwnerFetcher};
use crate::owner::{Owner, OwnerId};
use std::sync::{Arc, PoisonError, RwLock};
use tokio::task::JoinHandle;

/// What the view sees: nothing yet, or a loaded owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Unset,
    Loaded,
}

pub struct OwnerDetailsController<F: OwnerFetcher> {
    fetcher: Arc<F>,
    owner: Arc<RwLock<Option<Owner>>>,
}

impl<F: OwnerFetcher> OwnerDetailsController<F> {
    pub fn new(fetcher: Arc<F>) -> Self {
        Self {
            fetcher,
            owner: Arc::new(RwLock::new(None)),
        }
    }

    /// Starts loading the owner identified by `owner_id` and returns at once.
    ///
    /// Must be called from within a tokio runtime. The returned [`Activation`]
    /// may be awaited or dropped; dropping it does not cancel the request.
    pub fn activate(&self, owner_id: impl Into<OwnerId>) -> Activation {
        let owner_id = owner_id.into();
        let path = owner_path(&owner_id);
        let fetcher = Arc::clone(&self.fetcher);
        let slot = Arc::clone(&self.owner);

        tracing::debug!(owner_id = %owner_id, path = %path, "activating owner details");

        let handle = tokio::spawn(async move {
            let result = tokio::task::spawn_blocking({
                let path = path.clone();
                move || fetcher.fetch(&path)
            })
            .await
            .map_err(|e| FetchError::Task(e.to_string()))
            .and_then(|r| r);

            match result {
                Ok(owner) => {
                    *slot.write().unwrap_or_else(PoisonError::into_inner) = Some(owner);
                    tracing::info!(owner_id = %owner_id, "owner loaded");
                }
                Err(e) => {
                    tracing::warn!(owner_id = %owner_id, path = %path, "owner fetch failed: {}", e);
                }
            }
        });

        Activation { handle }
    }

    /// Current value of the `owner` field.
    pub fn owner(&self) -> Option<Owner> {
        self.owner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn state(&self) -> ControllerState {
        let loaded = self
            .owner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some();
        if loaded {
            ControllerState::Loaded
        } else {
            ControllerState::Unset
        }
    }
}

/// Handle to one in-flight activation.
#[derive(Debug)]
pub struct Activation {
    handle: JoinHandle<()>,
}

impl Activation {
    /// Waits until the activation's continuation has run. Never fails.
    pub async fn settled(self) {
        if let Err(e) = self.handle.await {
            tracing::warn!("owner activation task ended abnormally: {}", e);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}
