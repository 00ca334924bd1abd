use std::sync::Arc;

use tokio::task;

use crate::snapshot::{
    dependencies::{ClipboardSink, SnapDependencies},
    types::{ImagePayload, RegionName, SnapError, SnapResult, TransferMode},
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct SnapRequest {
    pub(crate) region: RegionName,
    pub(crate) mode: TransferMode,
}

pub(crate) async fn perform_snapshot(
    request: SnapRequest,
    dependencies: Arc<SnapDependencies>,
) -> Result<SnapResult, SnapError> {
    log::info!("Starting snapshot of '{}'", request.region.class_label());

    // Step 1: resolve the target region. A missing region fails here,
    // explicitly, instead of surfacing later as an invalid reference.
    let region = dependencies.regions.resolve(request.region)?;
    log::debug!(
        "Resolved '{}' to {:?}",
        region.name.class_label(),
        region.bounds
    );

    // Step 2: render the region off-screen. This is the expensive await.
    let surface = dependencies.renderer.render(&region).await?;
    log::info!(
        "Rendered {}x{} surface for '{}'",
        surface.width(),
        surface.height(),
        region.name.class_label()
    );

    // Step 3: extract the payload in the configured representation.
    let payload = match request.mode {
        TransferMode::PngBlob => ImagePayload::Png(surface.encode_png()?),
        TransferMode::DataUrl => ImagePayload::DataUrl(surface.to_data_url()?),
    };

    // Step 4: clipboard write. Best-effort: a rejected write is logged and
    // reported in the result, but does not fail the snapshot.
    let copied_to_clipboard =
        copy_to_clipboard(Arc::clone(&dependencies.clipboard), payload.clone()).await;

    Ok(SnapResult {
        payload,
        copied_to_clipboard,
    })
}

async fn copy_to_clipboard(clipboard: Arc<dyn ClipboardSink>, payload: ImagePayload) -> bool {
    match task::spawn_blocking(move || clipboard.copy(&payload))
        .await
        .map_err(|e| SnapError::ClipboardError(format!("Clipboard task failed: {}", e)))
    {
        Ok(Ok(())) => {
            log::info!("Snapshot copied to clipboard");
            true
        }
        Ok(Err(e)) | Err(e) => {
            log::error!("Failed to copy snapshot to clipboard: {}", e);
            false
        }
    }
}
