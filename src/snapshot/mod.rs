//! Plate snapshot functionality for platesnap.
//!
//! This module turns a named plate region into a clipboard payload:
//! - Region resolution by class label (`source_plate`, `dest_plate`)
//! - Off-screen rendering through a host-supplied capability
//! - PNG blob or data-URL payload extraction
//! - Clipboard integration

pub mod clipboard;
pub mod region;
pub mod surface;
pub mod types;

mod dependencies;
mod manager;
mod pipeline;

pub use dependencies::{ClipboardSink, SnapDependencies, SurfaceRenderer};
pub use manager::SnapshotManager;
pub use region::{RegionProvider, StaticRegions};
pub use surface::RasterSurface;
pub use types::{
    ImagePayload, Region, RegionBounds, RegionName, SnapError, SnapOutcome, SnapResult,
    SnapStatus, TransferMode,
};
