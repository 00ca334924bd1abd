//! Data types for the plate snapshot subsystem.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Logical name of a snapshot-able plate region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionName {
    /// The source plate display area.
    SourcePlate,
    /// The destination plate display area.
    DestPlate,
}

impl RegionName {
    /// Class label the region resolver matches against.
    pub fn class_label(self) -> &'static str {
        match self {
            RegionName::SourcePlate => "source_plate",
            RegionName::DestPlate => "dest_plate",
        }
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_label())
    }
}

/// Pixel bounds of a resolved region in the host UI's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// A resolved reference to a plate region.
///
/// Valid for a single snapshot only; the host UI may relayout or drop the
/// underlying widget between invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub name: RegionName,
    pub bounds: RegionBounds,
}

/// Which clipboard representation a snapshot produces.
///
/// Deployment policy: exactly one mode is active per manager, selected via
/// configuration.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TransferMode {
    /// Binary PNG blob tagged `image/png` on the clipboard.
    #[default]
    PngBlob,
    /// Textual `data:image/png;base64,` string placed as plain text.
    DataUrl,
}

/// Encoded form of a rendered surface, ready for the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePayload {
    /// Binary PNG bytes.
    Png(Vec<u8>),
    /// Textual data-URL encoding of the same PNG bytes.
    DataUrl(String),
}

impl ImagePayload {
    /// MIME type the payload is tagged with on the clipboard.
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImagePayload::Png(_) => "image/png",
            ImagePayload::DataUrl(_) => "text/plain;charset=utf-8",
        }
    }

    /// Raw bytes to hand to the clipboard.
    pub fn bytes(&self) -> &[u8] {
        match self {
            ImagePayload::Png(data) => data,
            ImagePayload::DataUrl(text) => text.as_bytes(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes().is_empty()
    }
}

/// Result of a completed snapshot operation.
#[derive(Debug, Clone)]
pub struct SnapResult {
    /// The payload that was produced for the clipboard.
    pub payload: ImagePayload,
    /// Whether the clipboard accepted the payload. `false` means the write
    /// was rejected and logged (best-effort policy), not that the snapshot
    /// failed.
    pub copied_to_clipboard: bool,
}

/// Outcome of a snapshot request (success or failure).
#[derive(Debug, Clone)]
pub enum SnapOutcome {
    Success(SnapResult),
    Failed(String),
}

/// Errors that can occur while snapshotting a plate region.
#[derive(Debug, Error)]
pub enum SnapError {
    #[error("no region with class label '{0}' exists")]
    RegionNotFound(RegionName),

    #[error("renderer failed: {0}")]
    RenderFailed(String),

    #[error("PNG encoding failed: {0}")]
    EncodeFailed(String),

    #[error("clipboard operation failed: {0}")]
    ClipboardError(String),

    #[error("snapshot manager is not running")]
    ManagerStopped,
}

/// Status of the most recent snapshot operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapStatus {
    /// No snapshot requested yet, or status was reset.
    Idle,
    /// A snapshot is being rendered or copied.
    InProgress,
    /// The last snapshot completed.
    Success,
    /// The last snapshot failed.
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_labels_match_recognized_names() {
        assert_eq!(RegionName::SourcePlate.class_label(), "source_plate");
        assert_eq!(RegionName::DestPlate.class_label(), "dest_plate");
    }

    #[test]
    fn payload_mime_types() {
        assert_eq!(ImagePayload::Png(vec![1]).mime_type(), "image/png");
        assert_eq!(
            ImagePayload::DataUrl("data:image/png;base64,".into()).mime_type(),
            "text/plain;charset=utf-8"
        );
    }

    #[test]
    fn region_not_found_names_the_label() {
        let msg = SnapError::RegionNotFound(RegionName::DestPlate).to_string();
        assert!(msg.contains("dest_plate"), "unexpected message: {msg}");
    }
}
