use std::sync::Arc;

use tokio::sync::{Mutex, mpsc};

use crate::snapshot::{
    dependencies::SnapDependencies,
    pipeline::{SnapRequest, perform_snapshot},
    types::{RegionName, SnapError, SnapOutcome, SnapStatus, TransferMode},
};

/// Shared state for managing async snapshot operations.
///
/// Requests are queued onto a background task so that a trigger (typically a
/// button or double-click handler) returns immediately while the render and
/// clipboard write run to completion off the UI path.
#[derive(Clone)]
pub struct SnapshotManager {
    /// Channel for sending snapshot requests.
    request_tx: mpsc::UnboundedSender<SnapRequest>,
    /// Clipboard representation this deployment produces.
    mode: TransferMode,
    /// Shared status of the current snapshot operation.
    status: Arc<Mutex<SnapStatus>>,
    /// Shared result of the last snapshot (if any).
    last_result: Arc<Mutex<Option<SnapOutcome>>>,
}

impl SnapshotManager {
    /// Create a snapshot manager.
    ///
    /// Spawns a background task that services snapshot requests one at a
    /// time. Rapid triggers queue up; each runs an independent pipeline and
    /// the clipboard ends up holding whichever write lands last.
    ///
    /// # Arguments
    /// * `runtime_handle` - Tokio runtime handle for spawning the worker
    /// * `dependencies` - Region provider, renderer, and clipboard sink
    /// * `mode` - Which payload representation to produce
    pub fn new(
        runtime_handle: &tokio::runtime::Handle,
        dependencies: SnapDependencies,
        mode: TransferMode,
    ) -> Self {
        let (request_tx, mut request_rx) = mpsc::unbounded_channel::<SnapRequest>();
        let status = Arc::new(Mutex::new(SnapStatus::Idle));
        let last_result = Arc::new(Mutex::new(None));
        let dependencies = Arc::new(dependencies);

        let status_clone = status.clone();
        let result_clone = last_result.clone();
        let deps_clone = dependencies.clone();

        runtime_handle.spawn(async move {
            while let Some(request) = request_rx.recv().await {
                log::debug!("Processing snapshot request: {:?}", request);

                *status_clone.lock().await = SnapStatus::InProgress;

                match perform_snapshot(request, deps_clone.clone()).await {
                    Ok(result) => {
                        log::info!(
                            "Snapshot successful (copied_to_clipboard={})",
                            result.copied_to_clipboard
                        );
                        *status_clone.lock().await = SnapStatus::Success;
                        *result_clone.lock().await = Some(SnapOutcome::Success(result));
                    }
                    Err(e) => {
                        let error_message = e.to_string();
                        log::error!("Snapshot failed: {}", error_message);
                        *status_clone.lock().await = SnapStatus::Failed(error_message.clone());
                        *result_clone.lock().await = Some(SnapOutcome::Failed(error_message));
                    }
                }
            }
        });

        Self {
            request_tx,
            mode,
            status,
            last_result,
        }
    }

    /// Snapshot the source plate to the clipboard. Fire-and-forget.
    pub fn copy_source_plate(&self) -> Result<(), SnapError> {
        self.request_snapshot(RegionName::SourcePlate)
    }

    /// Snapshot the destination plate to the clipboard. Fire-and-forget.
    pub fn copy_dest_plate(&self) -> Result<(), SnapError> {
        self.request_snapshot(RegionName::DestPlate)
    }

    /// Request a snapshot of the given region.
    ///
    /// Non-blocking; returns once the request is queued. The snapshot itself
    /// happens asynchronously in the background.
    pub fn request_snapshot(&self, region: RegionName) -> Result<(), SnapError> {
        let request = SnapRequest {
            region,
            mode: self.mode,
        };

        self.request_tx
            .send(request)
            .map_err(|_| SnapError::ManagerStopped)?;

        Ok(())
    }

    /// Get the current snapshot status.
    pub async fn get_status(&self) -> SnapStatus {
        self.status.lock().await.clone()
    }

    /// Get the result of the last snapshot and clear it.
    pub async fn take_result(&self) -> Option<SnapOutcome> {
        self.last_result.lock().await.take()
    }

    /// Try to get the result without waiting (non-blocking).
    pub fn try_take_result(&self) -> Option<SnapOutcome> {
        self.last_result.try_lock().ok().and_then(|mut r| r.take())
    }

    /// Reset status to idle.
    pub async fn reset(&self) {
        *self.status.lock().await = SnapStatus::Idle;
    }
}

#[cfg(test)]
impl SnapshotManager {
    pub(crate) fn with_closed_channel_for_test() -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<SnapRequest>();
        drop(rx);
        Self {
            request_tx: tx,
            mode: TransferMode::PngBlob,
            status: Arc::new(Mutex::new(SnapStatus::Idle)),
            last_result: Arc::new(Mutex::new(None)),
        }
    }
}
