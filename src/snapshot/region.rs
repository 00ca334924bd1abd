//! Region resolution: mapping logical plate names to concrete UI regions.

use std::collections::HashMap;
use std::sync::RwLock;

use super::types::{Region, RegionBounds, RegionName, SnapError};

/// Capability for resolving a logical region name to the region carrying the
/// matching class label.
///
/// Read-only; resolution has no side effects. A missing region is an explicit
/// error rather than an absent reference the caller might dereference.
pub trait RegionProvider: Send + Sync {
    fn resolve(&self, name: RegionName) -> Result<Region, SnapError>;
}

/// In-memory region registry.
///
/// The embedding UI registers the current bounds of each plate widget as its
/// layout settles; lookups see whatever was registered most recently. Regions
/// are not assumed to persist, so a host may unregister a plate when its
/// widget is torn down.
#[derive(Default)]
pub struct StaticRegions {
    bounds: RwLock<HashMap<RegionName, RegionBounds>>,
}

impl StaticRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the bounds for a region.
    pub fn register(&self, name: RegionName, bounds: RegionBounds) {
        log::debug!("Registering region '{}' at {:?}", name.class_label(), bounds);
        self.lock_bounds().insert(name, bounds);
    }

    /// Removes a region, typically when its widget is dropped.
    pub fn unregister(&self, name: RegionName) {
        self.lock_bounds().remove(&name);
    }

    fn lock_bounds(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<RegionName, RegionBounds>> {
        self.bounds.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl RegionProvider for StaticRegions {
    fn resolve(&self, name: RegionName) -> Result<Region, SnapError> {
        let map = self.bounds.read().unwrap_or_else(|e| e.into_inner());
        map.get(&name)
            .copied()
            .map(|bounds| Region { name, bounds })
            .ok_or(SnapError::RegionNotFound(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(width: u32, height: u32) -> RegionBounds {
        RegionBounds {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    #[test]
    fn resolves_registered_region() {
        let regions = StaticRegions::new();
        regions.register(RegionName::SourcePlate, bounds(640, 480));

        let region = regions.resolve(RegionName::SourcePlate).unwrap();
        assert_eq!(region.name, RegionName::SourcePlate);
        assert_eq!(region.bounds.width, 640);
    }

    #[test]
    fn missing_region_is_an_explicit_error() {
        let regions = StaticRegions::new();
        let err = regions.resolve(RegionName::DestPlate).unwrap_err();
        assert!(matches!(err, SnapError::RegionNotFound(RegionName::DestPlate)));
    }

    #[test]
    fn reregistering_replaces_bounds() {
        let regions = StaticRegions::new();
        regions.register(RegionName::DestPlate, bounds(100, 100));
        regions.register(RegionName::DestPlate, bounds(200, 150));

        let region = regions.resolve(RegionName::DestPlate).unwrap();
        assert_eq!(region.bounds.width, 200);
        assert_eq!(region.bounds.height, 150);
    }

    #[test]
    fn unregister_makes_region_unresolvable() {
        let regions = StaticRegions::new();
        regions.register(RegionName::SourcePlate, bounds(10, 10));
        regions.unregister(RegionName::SourcePlate);
        assert!(regions.resolve(RegionName::SourcePlate).is_err());
    }
}
