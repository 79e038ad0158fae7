// lib.rs - capprobe library root

//! # capprobe - Capture-C probe designer
//!
//! Splits a single nucleotide sequence at every occurrence of a restriction site and tiles
//! fixed-length capture probes anchored near each fragment end. The probe set is deduplicated
//! across fragments and enumerates in a deterministic order (fragment order, then start-anchored
//! offsets, then end-anchored offsets).
//!
//! ## Basic Usage
//!
//! ```rust
//! use capprobe::prelude::*;
//!
//! let config = DesignConfig {
//!     restriction_site: "GATC".to_string(),
//!     probe_length: 4,
//!     max_probe_distance: 6,
//!     site_matching: SiteMatching::Exact,
//! };
//!
//! let report = design_probes("ACGTACGATCTTTTTT", &config);
//! assert_eq!(report.stats.fragment_count, 2);
//! assert!(report.probes.iter().all(|p| p.len() == 4));
//! ```

pub mod cli;
pub mod core;
pub mod data;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::core::{aggregate_probes, design_probes, split_fragments, tile_fragment};
    pub use crate::core::{DesignConfig, DesignReport, DesignStats, ProbeSet, SiteMatching};
    pub use crate::data::TargetSequence;
    pub use crate::error::{ProbeError, Result};
    pub use crate::output::{write_probes, OutputFormat};
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use core::{DesignConfig, DesignReport, ProbeSet, SiteMatching};
pub use data::TargetSequence;
pub use error::ProbeError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("capprobe v{} - Capture-C probe designer", VERSION)
}
