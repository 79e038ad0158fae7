// validation.rs - Input validation utilities

use log::LevelFilter;
use regex::Regex;
use std::str::FromStr;

use crate::cli::args::Args;
use crate::core::{DesignConfig, SiteMatching};
use crate::error::{ProbeError, Result};
use crate::output::OutputFormat;

pub struct ValidationResult {
    pub design: DesignConfig,
    pub format: OutputFormat,
    pub log_level: Option<LevelFilter>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult> {
    // Restriction site: plain nucleotides only, no ambiguity codes
    if args.restriction_site.is_empty() {
        return Err(ProbeError::validation("Restriction site must not be empty"));
    }
    let site_re = Regex::new(r"^[ACGTNacgtn]+$")
        .map_err(|e| ProbeError::validation(format!("Invalid site pattern: {}", e)))?;
    if !site_re.is_match(&args.restriction_site) {
        return Err(ProbeError::validation(format!(
            "Invalid restriction site '{}': only A, C, G, T, N are allowed",
            args.restriction_site
        )));
    }

    if args.probe_length == 0 {
        return Err(ProbeError::validation("Probe length must be positive"));
    }
    if args.max_probe_distance == 0 {
        return Err(ProbeError::validation("Max probe distance must be positive"));
    }

    let format = OutputFormat::from_str(&args.format).map_err(ProbeError::validation)?;

    let log_level = match &args.log_level {
        Some(level) => Some(LevelFilter::from_str(level).map_err(|_| {
            ProbeError::validation(format!(
                "Invalid log level '{}'. Use: error, warn, info, debug, trace",
                level
            ))
        })?),
        None => None,
    };

    let site_matching = if args.ignore_case {
        SiteMatching::IgnoreCase
    } else {
        SiteMatching::Exact
    };

    Ok(ValidationResult {
        design: DesignConfig {
            restriction_site: args.restriction_site.clone(),
            probe_length: args.probe_length,
            max_probe_distance: args.max_probe_distance,
            site_matching,
        },
        format,
        log_level,
    })
}
