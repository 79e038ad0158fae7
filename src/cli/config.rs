// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ProbeError, Result};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Input/Output
    pub input: Option<String>,
    pub output: Option<String>,
    pub format: Option<String>,
    pub probe_prefix: Option<String>,

    // Design settings
    pub restriction_site: Option<String>,
    pub probe_length: Option<usize>,
    pub max_probe_distance: Option<usize>,
    pub ignore_case: Option<bool>,

    // Logging
    pub log_level: Option<String>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ProbeError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        toml::from_str(&content).map_err(|e| {
            ProbeError::config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# capprobe.toml - Configuration file for capprobe
# Command line arguments will override these settings

# =============================================================================
# INPUT/OUTPUT
# =============================================================================

# Single-sequence FASTA to design probes for (- for stdin)
input = "/path/to/target.fa"

# Output file for probes (omit to write to stdout)
# output = "probes.fa"

# Output format: fasta, tsv
format = "fasta"

# Prefix for probe record names (probe_0, probe_1, ...)
probe_prefix = "probe"

# =============================================================================
# DESIGN SETTINGS
# =============================================================================

# Restriction site sequence (GATC = DpnII)
restriction_site = "GATC"

# Length of each probe oligo
probe_length = 120

# Maximum distance from far end of probe to nearest restriction site
max_probe_distance = 140

# Match the restriction site case-insensitively
ignore_case = false

# =============================================================================
# LOGGING
# =============================================================================

# Logging level: error, warn, info, debug, trace
log_level = "info"
"#
        .to_string()
    }
}
