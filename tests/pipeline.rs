use capprobe::prelude::*;
use std::io::Write;

fn write_fasta(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(body.as_bytes()).unwrap();
    path
}

#[test]
fn fasta_to_probe_records() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fasta(
        &dir,
        "target.fa",
        ">viewpoint\nACGTACGATCAACC\nGGTTACGATCACGT\n",
    );

    let target = TargetSequence::from_fasta_path(&input).unwrap();
    let config = DesignConfig {
        restriction_site: "GATC".to_string(),
        probe_length: 4,
        max_probe_distance: 6,
        site_matching: SiteMatching::Exact,
    };
    let report = design_probes(&target.sequence, &config);

    let output = dir.path().join("out").join("probes.fa");
    write_probes(
        output.to_str(),
        OutputFormat::Fasta,
        &report.probes,
        "probe",
        "capprobe target.fa",
    )
    .unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        ">probe_0\nACGT\n>probe_1\nCGTA\n>probe_2\nAACC\n>probe_3\nACCG\n\
         >probe_4\nTTAC\n>probe_5\nGTTA\n"
    );
}

#[test]
fn default_parameters_on_long_fragment() {
    // One 200bp fragment followed by a site and a short tail
    let bases = ['A', 'C', 'G', 'T'];
    let fragment: String = (0..200u32)
        .map(|i| bases[((i * 7 + i / 5) % 4) as usize])
        .collect();
    assert!(!fragment.contains("GATC"));
    let sequence = format!("{}GATCACGT", fragment);

    let report = design_probes(&sequence, &DesignConfig::default());
    assert_eq!(report.stats.fragment_count, 2);
    assert_eq!(report.stats.tiled_fragments, 1);
    assert!(report.stats.candidate_probes <= 40);
    for probe in report.probes.iter() {
        assert_eq!(probe.len(), 120);
        assert!(fragment.contains(probe.as_str()));
    }
}

#[test]
fn multi_record_input_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fasta(&dir, "two.fa", ">a\nACGT\n>b\nACGT\n");
    let err = TargetSequence::from_fasta_path(&input).unwrap_err();
    assert!(matches!(err, ProbeError::MultipleSequences { count: 2 }));
}
