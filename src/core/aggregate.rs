// aggregate.rs - Ordered probe set and cross-fragment aggregation

use std::collections::HashSet;

use super::tiling::tile_fragment;

/// Set of unique probe sequences that enumerates in first-insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProbeSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl ProbeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a probe; returns false if the sequence was already present
    pub fn insert(&mut self, probe: impl Into<String>) -> bool {
        let probe = probe.into();
        if self.seen.contains(&probe) {
            return false;
        }
        self.seen.insert(probe.clone());
        self.ordered.push(probe);
        true
    }

    pub fn contains(&self, probe: &str) -> bool {
        self.seen.contains(probe)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.ordered.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

impl<S: Into<String>> FromIterator<S> for ProbeSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = ProbeSet::new();
        set.extend(iter);
        set
    }
}

impl<S: Into<String>> Extend<S> for ProbeSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for probe in iter {
            self.insert(probe);
        }
    }
}

impl IntoIterator for ProbeSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProbeSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ordered.iter()
    }
}

/// Accumulates per-fragment tilings into one global probe set
#[derive(Debug)]
pub struct ProbeAggregator {
    probe_length: usize,
    max_probe_distance: usize,
    probes: ProbeSet,
    fragments_seen: usize,
    tiled_fragments: usize,
    candidate_probes: usize,
}

impl ProbeAggregator {
    pub fn new(probe_length: usize, max_probe_distance: usize) -> Self {
        Self {
            probe_length,
            max_probe_distance,
            probes: ProbeSet::new(),
            fragments_seen: 0,
            tiled_fragments: 0,
            candidate_probes: 0,
        }
    }

    /// Tile one fragment and merge its probes; returns the fragment's own probe count
    pub fn add_fragment(&mut self, fragment: &str) -> usize {
        let fragment_probes = tile_fragment(fragment, self.probe_length, self.max_probe_distance);
        let count = fragment_probes.len();
        log::debug!(
            "Fragment {} of length {}: designed {} probes",
            self.fragments_seen,
            fragment.len(),
            count
        );

        self.fragments_seen += 1;
        if count > 0 {
            self.tiled_fragments += 1;
        }
        self.candidate_probes += count;
        self.probes.extend(fragment_probes);
        count
    }

    pub fn fragments_seen(&self) -> usize {
        self.fragments_seen
    }

    /// Fragments that produced at least one probe
    pub fn tiled_fragments(&self) -> usize {
        self.tiled_fragments
    }

    /// Sum of per-fragment probe counts before cross-fragment deduplication
    pub fn candidate_probes(&self) -> usize {
        self.candidate_probes
    }

    pub fn unique_probes(&self) -> usize {
        self.probes.len()
    }

    pub fn finish(self) -> ProbeSet {
        self.probes
    }
}

/// Tile every fragment in order and union the results
pub fn aggregate_probes<'a, I>(fragments: I, probe_length: usize, max_probe_distance: usize) -> ProbeSet
where
    I: IntoIterator<Item = &'a str>,
{
    let mut aggregator = ProbeAggregator::new(probe_length, max_probe_distance);
    for fragment in fragments {
        aggregator.add_fragment(fragment);
    }
    aggregator.finish()
}
