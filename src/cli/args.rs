// args.rs - Command line arguments definition

use argh::FromArgs;

#[derive(FromArgs)]
/// capprobe - Capture-C probe designer for a single-sequence FASTA
pub struct Args {
    /// single-sequence FASTA to design probes for (use - for stdin)
    #[argh(positional)]
    pub fasta: Option<String>,

    /// restriction site sequence (default: GATC, DpnII)
    #[argh(option, default = "String::from(\"GATC\")")]
    pub restriction_site: String,

    /// length of each probe oligo (default: 120)
    #[argh(option, default = "120")]
    pub probe_length: usize,

    /// maximum distance from far end of probe to nearest restriction site (default: 140)
    #[argh(option, default = "140")]
    pub max_probe_distance: usize,

    /// match the restriction site case-insensitively
    #[argh(switch)]
    pub ignore_case: bool,

    /// output file for probes (default: stdout)
    #[argh(option)]
    pub output: Option<String>,

    /// output format: fasta, tsv (default: fasta)
    #[argh(option, default = "String::from(\"fasta\")")]
    pub format: String,

    /// prefix for probe record names (default: probe)
    #[argh(option, default = "String::from(\"probe\")")]
    pub probe_prefix: String,

    /// logging level: error, warn, info, debug, trace (default: RUST_LOG or info)
    #[argh(option)]
    pub log_level: Option<String>,

    /// print design statistics as JSON instead of probes
    #[argh(switch)]
    pub stats_only: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}
