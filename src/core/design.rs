// design.rs - Probe design pipeline and run configuration

use serde::{Deserialize, Serialize};

use super::aggregate::{ProbeAggregator, ProbeSet};
use super::fragment::{split_fragments, SiteMatching};

pub const DEFAULT_RESTRICTION_SITE: &str = "GATC";
pub const DEFAULT_PROBE_LENGTH: usize = 120;
pub const DEFAULT_MAX_PROBE_DISTANCE: usize = 140;

/// Parameters for one probe design run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignConfig {
    pub restriction_site: String,
    pub probe_length: usize,
    pub max_probe_distance: usize,
    pub site_matching: SiteMatching,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            // DpnII
            restriction_site: DEFAULT_RESTRICTION_SITE.to_string(),
            probe_length: DEFAULT_PROBE_LENGTH,
            max_probe_distance: DEFAULT_MAX_PROBE_DISTANCE,
            site_matching: SiteMatching::Exact,
        }
    }
}

impl DesignConfig {
    /// Degenerate but valid settings that will silently reduce the probe count
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.max_probe_distance < self.probe_length {
            warnings.push(format!(
                "max probe distance ({}) is shorter than probe length ({}): no probes can be designed",
                self.max_probe_distance, self.probe_length
            ));
        } else if self.max_probe_distance == self.probe_length {
            warnings.push(format!(
                "max probe distance equals probe length ({}): no tiling offsets remain",
                self.probe_length
            ));
        }
        warnings
    }
}

/// Summary counts for a design run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DesignStats {
    pub sequence_length: usize,
    pub fragment_count: usize,
    pub tiled_fragments: usize,
    pub candidate_probes: usize,
    pub unique_probes: usize,
}

impl DesignStats {
    /// Probes dropped because an identical sequence came from another fragment
    pub fn duplicate_probes(&self) -> usize {
        self.candidate_probes - self.unique_probes
    }
}

#[derive(Debug, Clone)]
pub struct DesignReport {
    pub probes: ProbeSet,
    pub stats: DesignStats,
}

/// Split `sequence` at the configured restriction site and tile probes from every fragment
pub fn design_probes(sequence: &str, config: &DesignConfig) -> DesignReport {
    log::info!("Sequence is {}bp", sequence.len());

    let fragments = split_fragments(sequence, &config.restriction_site, config.site_matching);
    log::info!(
        "{} fragments expected after restriction with {} ({})",
        fragments.len(),
        config.restriction_site,
        config.site_matching.description()
    );

    let mut aggregator = ProbeAggregator::new(config.probe_length, config.max_probe_distance);
    for fragment in &fragments {
        aggregator.add_fragment(fragment);
    }

    let stats = DesignStats {
        sequence_length: sequence.len(),
        fragment_count: aggregator.fragments_seen(),
        tiled_fragments: aggregator.tiled_fragments(),
        candidate_probes: aggregator.candidate_probes(),
        unique_probes: aggregator.unique_probes(),
    };
    log::info!(
        "Generated {} unique {}bp probe sequences",
        stats.unique_probes,
        config.probe_length
    );

    DesignReport {
        probes: aggregator.finish(),
        stats,
    }
}
