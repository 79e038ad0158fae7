// tiling.rs - Bounded two-ended probe tiling within one fragment

use super::aggregate::ProbeSet;

/// Which fragment end a tile is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

/// Half-open span `[start, end)` of one tile inside its fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileAnchor {
    pub start: usize,
    pub end: usize,
    pub anchor: Anchor,
}

/// Number of tiling offsets taken from each anchored end.
///
/// `min(fragment_len, max_probe_distance) - probe_length`, clamped at zero. A fragment whose
/// length equals `probe_length` therefore yields no tiles.
pub fn tiles_per_end(fragment_len: usize, probe_length: usize, max_probe_distance: usize) -> usize {
    fragment_len
        .min(max_probe_distance)
        .saturating_sub(probe_length)
}

/// Tile spans for a fragment of `fragment_len`, start-anchored first then end-anchored.
///
/// End-anchored tiles are only produced when the fragment is longer than `max_probe_distance`;
/// otherwise the start-anchored window already reaches the far end.
pub fn tile_positions(
    fragment_len: usize,
    probe_length: usize,
    max_probe_distance: usize,
) -> Vec<TileAnchor> {
    if probe_length == 0 || fragment_len < probe_length {
        return Vec::new();
    }

    let n_tiles = tiles_per_end(fragment_len, probe_length, max_probe_distance);
    let mut spans = Vec::with_capacity(n_tiles * 2);

    spans.extend((0..n_tiles).map(|offset| TileAnchor {
        start: offset,
        end: offset + probe_length,
        anchor: Anchor::Start,
    }));

    if fragment_len > max_probe_distance {
        spans.extend((0..n_tiles).map(|offset| TileAnchor {
            start: fragment_len - offset - probe_length,
            end: fragment_len - offset,
            anchor: Anchor::End,
        }));
    }

    spans
}

/// Candidate probes for one fragment, deduplicated, in tiling order
pub fn tile_fragment(fragment: &str, probe_length: usize, max_probe_distance: usize) -> ProbeSet {
    tile_positions(fragment.len(), probe_length, max_probe_distance)
        .into_iter()
        .filter_map(|span| fragment.get(span.start..span.end))
        .collect()
}
