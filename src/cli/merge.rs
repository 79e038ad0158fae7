// merge.rs - Merge configuration file with CLI arguments

use crate::cli::{Args, Config};
use crate::core::design::{
    DEFAULT_MAX_PROBE_DISTANCE, DEFAULT_PROBE_LENGTH, DEFAULT_RESTRICTION_SITE,
};
use crate::error::Result;
use crate::output::DEFAULT_PROBE_PREFIX;

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Input/Output
        if self.fasta.is_none() {
            self.fasta = config.input;
        }
        if self.output.is_none() {
            self.output = config.output;
        }

        // Only override defaults, not explicit CLI values
        if let Some(format) = config.format {
            if self.format == "fasta" {
                self.format = format;
            }
        }
        if let Some(prefix) = config.probe_prefix {
            if self.probe_prefix == DEFAULT_PROBE_PREFIX {
                self.probe_prefix = prefix;
            }
        }

        // Design settings
        if let Some(site) = config.restriction_site {
            if self.restriction_site == DEFAULT_RESTRICTION_SITE {
                self.restriction_site = site;
            }
        }
        if let Some(length) = config.probe_length {
            if self.probe_length == DEFAULT_PROBE_LENGTH {
                self.probe_length = length;
            }
        }
        if let Some(distance) = config.max_probe_distance {
            if self.max_probe_distance == DEFAULT_MAX_PROBE_DISTANCE {
                self.max_probe_distance = distance;
            }
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.ignore_case && config.ignore_case.unwrap_or(false) {
            self.ignore_case = true;
        }

        if self.log_level.is_none() {
            self.log_level = config.log_level;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}
