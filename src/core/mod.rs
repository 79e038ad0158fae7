// mod.rs - Core probe design module

pub mod aggregate;
pub mod design;
pub mod fragment;
pub mod tiling;

// Re-export main types for convenience
pub use aggregate::{aggregate_probes, ProbeAggregator, ProbeSet};
pub use design::{design_probes, DesignConfig, DesignReport, DesignStats};
pub use fragment::{split_fragments, SiteMatching};
pub use tiling::{tile_fragment, tile_positions, Anchor, TileAnchor};
