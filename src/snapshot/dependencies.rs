use std::sync::Arc;

use async_trait::async_trait;

use crate::snapshot::{
    clipboard,
    region::RegionProvider,
    surface::RasterSurface,
    types::{ImagePayload, Region, SnapError},
};

/// Abstraction over rendering a resolved region to an off-screen surface.
///
/// The renderer is an external capability supplied by the embedding UI; the
/// subsystem only relies on this contract. Rendering may legitimately fail
/// (cross-origin assets, widget torn down mid-render) and such failures must
/// propagate as errors.
#[async_trait]
pub trait SurfaceRenderer: Send + Sync {
    async fn render(&self, region: &Region) -> Result<RasterSurface, SnapError>;
}

/// Abstraction over delivering a payload to the system clipboard.
pub trait ClipboardSink: Send + Sync {
    fn copy(&self, payload: &ImagePayload) -> Result<(), SnapError>;
}

/// Bundle of capabilities used by the snapshot pipeline. Each component can
/// be mocked in tests.
#[derive(Clone)]
pub struct SnapDependencies {
    pub regions: Arc<dyn RegionProvider>,
    pub renderer: Arc<dyn SurfaceRenderer>,
    pub clipboard: Arc<dyn ClipboardSink>,
}

impl SnapDependencies {
    /// Builds the bundle with the system clipboard. The region provider and
    /// renderer come from the host; there is no meaningful default for
    /// either.
    pub fn new(regions: Arc<dyn RegionProvider>, renderer: Arc<dyn SurfaceRenderer>) -> Self {
        Self {
            regions,
            renderer,
            clipboard: Arc::new(SystemClipboard),
        }
    }
}

struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy(&self, payload: &ImagePayload) -> Result<(), SnapError> {
        clipboard::copy_to_clipboard(payload)
    }
}
