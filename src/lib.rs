//! Snapshot-to-clipboard support for plate UIs.
//!
//! Given one of two named plate regions (the "source" and "destination"
//! display areas), renders the region off-screen through a host-supplied
//! renderer and places the image on the system clipboard, either as a binary
//! PNG or as its data-URL text form.
//!
//! The embedding UI wires up a [`snapshot::RegionProvider`] and a
//! [`snapshot::SurfaceRenderer`], then triggers
//! [`SnapshotManager::copy_source_plate`] or
//! [`SnapshotManager::copy_dest_plate`] from its input handlers.

pub mod config;
pub mod snapshot;

pub use config::Config;
pub use snapshot::SnapshotManager;
