//! Cell Computation Configuration and Builder
//!
//! This module provides the per-frame configuration shared by every generator.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoronoiError};

/// Default distance beyond which another generator is ignored
pub const DEFAULT_NEIGHBOR_CUTOFF: f32 = 0.3;

/// Default maximum generator-to-vertex distance
pub const DEFAULT_CELL_LIMIT: f32 = 0.3;

/// Default half extent of the bounding octagon (normalized device coordinates)
pub const DEFAULT_BOUNDS_HALF_EXTENT: f32 = 1.0;

/// Configuration for one frame of cell computation
///
/// All distances are expressed in the working coordinate space, which is
/// normalized device coordinates (`[-1, 1]²`) for the default bounds.
///
/// # Example
///
/// ```rust
/// use rust_voronoi_cells::*;
///
/// let config = CellConfigBuilder::new()
///     .neighbor_cutoff(0.5)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.neighbor_cutoff, 0.5);
/// assert_eq!(config.cell_limit, 0.3);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellConfig {
    /// Generators farther apart than this never clip each other
    pub neighbor_cutoff: f32,

    /// Every output vertex lies within this distance of its generator
    ///
    /// This is what bounds a cell when too few neighbors exist to enclose it.
    pub cell_limit: f32,

    /// Half extent of the square spanned by the starting octagon
    pub bounds_half_extent: f32,
}

impl Default for CellConfig {
    fn default() -> Self {
        Self {
            neighbor_cutoff: DEFAULT_NEIGHBOR_CUTOFF,
            cell_limit: DEFAULT_CELL_LIMIT,
            bounds_half_extent: DEFAULT_BOUNDS_HALF_EXTENT,
        }
    }
}

/// Builder for creating CellConfig with validation
///
/// # Example
///
/// ```rust
/// use rust_voronoi_cells::*;
///
/// let config = CellConfigBuilder::new()
///     .cell_limit(0.2)
///     .unwrap()
///     .bounds_half_extent(2.0)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.cell_limit, 0.2);
/// ```
#[derive(Debug, Clone)]
pub struct CellConfigBuilder {
    neighbor_cutoff: f32,
    cell_limit: f32,
    bounds_half_extent: f32,
}

impl CellConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - neighbor_cutoff: 0.3
    /// - cell_limit: 0.3
    /// - bounds_half_extent: 1.0 (the screen in normalized device coordinates)
    pub fn new() -> Self {
        let defaults = CellConfig::default();
        Self {
            neighbor_cutoff: defaults.neighbor_cutoff,
            cell_limit: defaults.cell_limit,
            bounds_half_extent: defaults.bounds_half_extent,
        }
    }

    /// Set the neighbor cutoff radius
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the cutoff is not finite and positive
    pub fn neighbor_cutoff(mut self, cutoff: f32) -> Result<Self> {
        self.neighbor_cutoff = positive("neighbor cutoff", cutoff)?;
        Ok(self)
    }

    /// Set the cell radius limit
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the limit is not finite and positive
    pub fn cell_limit(mut self, limit: f32) -> Result<Self> {
        self.cell_limit = positive("cell limit", limit)?;
        Ok(self)
    }

    /// Set the half extent of the starting octagon
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the extent is not finite and positive
    pub fn bounds_half_extent(mut self, half_extent: f32) -> Result<Self> {
        self.bounds_half_extent = positive("bounds half extent", half_extent)?;
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<CellConfig> {
        Ok(CellConfig {
            neighbor_cutoff: self.neighbor_cutoff,
            cell_limit: self.cell_limit,
            bounds_half_extent: self.bounds_half_extent,
        })
    }
}

impl Default for CellConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn positive(name: &str, value: f32) -> Result<f32> {
    if !value.is_finite() || value <= 0.0 {
        return Err(VoronoiError::InvalidConfig(format!(
            "{} must be finite and positive (got {})",
            name, value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = CellConfigBuilder::new().build().unwrap();
        assert_eq!(config.neighbor_cutoff, 0.3);
        assert_eq!(config.cell_limit, 0.3);
        assert_eq!(config.bounds_half_extent, 1.0);
        assert_eq!(config, CellConfig::default());
    }

    #[test]
    fn test_builder_custom() {
        let config = CellConfigBuilder::new()
            .neighbor_cutoff(0.5)
            .unwrap()
            .cell_limit(0.25)
            .unwrap()
            .bounds_half_extent(4.0)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.neighbor_cutoff, 0.5);
        assert_eq!(config.cell_limit, 0.25);
        assert_eq!(config.bounds_half_extent, 4.0);
    }

    #[test]
    fn test_builder_rejects_non_positive() {
        assert!(CellConfigBuilder::new().neighbor_cutoff(0.0).is_err());
        assert!(CellConfigBuilder::new().cell_limit(-0.1).is_err());
        assert!(CellConfigBuilder::new().bounds_half_extent(-1.0).is_err());
    }

    #[test]
    fn test_builder_rejects_non_finite() {
        assert!(CellConfigBuilder::new().neighbor_cutoff(f32::NAN).is_err());
        assert!(CellConfigBuilder::new().cell_limit(f32::INFINITY).is_err());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = CellConfigBuilder::new().cell_limit(0.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: cell limit must be finite and positive (got 0)"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = CellConfigBuilder::new()
            .neighbor_cutoff(0.4)
            .unwrap()
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: CellConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
