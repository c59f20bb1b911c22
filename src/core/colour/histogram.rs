use rayon::prelude::*;

use crate::core::data::grid_dimensions::GridDimensions;
use crate::core::data::iteration_grid::IterationGrid;

/// Contrast exponent applied to hues before palette lookup; compresses low
/// hues and expands high ones, concentrating detail at the set boundary.
const CONTRAST_EXPONENT: i32 = 5;

/// Per-pixel hues in `[0, 1]`, the intermediate product of histogram
/// equalisation. Lives only between the escape pass and colourisation.
#[derive(Debug, Clone, PartialEq)]
pub struct HueGrid {
    dimensions: GridDimensions,
    hues: Vec<f64>,
}

impl HueGrid {
    #[must_use]
    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    #[must_use]
    pub fn hues(&self) -> &[f64] {
        &self.hues
    }
}

/// Converts a completed iteration-count grid into equalised hues.
///
/// Three passes, each over the whole grid before the next starts: bucket the
/// counts, total the escaped buckets, then accumulate each pixel's hue as the
/// share of buckets strictly below its own count. Equalisation gives each
/// escape-time band the same visual weight regardless of how many raw
/// iteration values it spans.
#[derive(Debug, Copy, Clone)]
pub struct HistogramEqualiser {
    max_iteration: u32,
}

impl HistogramEqualiser {
    #[must_use]
    pub fn new(max_iteration: u32) -> Self {
        Self { max_iteration }
    }

    #[must_use]
    pub fn equalise(&self, grid: &IterationGrid) -> HueGrid {
        let counts = self.count_iterations(grid);
        let total = escaped_total(&counts);
        let ranks = escape_ranks(&counts, total);

        let width = grid.dimensions().width() as usize;
        let mut hues = vec![0.0; grid.dimensions().pixel_count()];

        hues.par_chunks_mut(width)
            .zip(grid.counts().par_chunks(width))
            .for_each(|(hue_row, count_row)| {
                for (hue, &count) in hue_row.iter_mut().zip(count_row) {
                    *hue = ranks[count as usize];
                }
            });

        HueGrid {
            dimensions: grid.dimensions(),
            hues,
        }
    }

    /// Pass one: per-iteration-value bucket counts.
    ///
    /// Rows build private partial histograms that are merged after the join;
    /// no bucket is ever shared between concurrent tasks.
    fn count_iterations(&self, grid: &IterationGrid) -> Vec<u64> {
        let buckets = self.max_iteration as usize + 1;
        let width = grid.dimensions().width() as usize;

        grid.counts()
            .par_chunks(width)
            .map(|row| {
                let mut partial = vec![0u64; buckets];
                for &count in row {
                    partial[count as usize] += 1;
                }
                partial
            })
            .reduce(
                || vec![0u64; buckets],
                |mut merged, partial| {
                    for (bucket, row_bucket) in merged.iter_mut().zip(partial) {
                        *bucket += row_bucket;
                    }
                    merged
                },
            )
    }
}

/// Pass two: escaped-pixel total. The cap bucket is excluded — capped points
/// are interior and do not contribute to escape-frequency normalisation.
fn escaped_total(counts: &[u64]) -> u64 {
    counts[..counts.len() - 1].iter().sum()
}

/// Pass three's lookup table: `ranks[i]` is the cumulative share of escaped
/// pixels with counts strictly below `i`. A pixel's own bucket never joins
/// its hue, keeping hue a function of escape rank alone. A zero total (every
/// pixel capped) leaves every rank at zero.
fn escape_ranks(counts: &[u64], total: u64) -> Vec<f64> {
    let mut ranks = vec![0.0; counts.len()];

    if total == 0 {
        return ranks;
    }

    let total = total as f64;
    let mut cumulative = 0.0;

    for i in 1..ranks.len() {
        cumulative += counts[i - 1] as f64 / total;
        // Accumulated shares can drift a few ulps past 1; hue must not.
        ranks[i] = cumulative.min(1.0);
    }

    ranks
}

/// Palette position for an equalised hue: `round(hue^5 * (max_iteration - 1))`.
#[must_use]
pub fn palette_index(hue: f64, max_iteration: u32) -> usize {
    (hue.powi(CONTRAST_EXPONENT) * f64::from(max_iteration.saturating_sub(1))).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_counts(width: u32, height: u32, counts: &[u32]) -> IterationGrid {
        let dimensions = GridDimensions::new(width, height).unwrap();
        let mut grid = IterationGrid::new(dimensions);
        grid.counts_mut().copy_from_slice(counts);
        grid
    }

    #[test]
    fn test_hue_is_monotonic_in_count() {
        let grid = grid_with_counts(4, 1, &[0, 1, 2, 4]);
        let hue = HistogramEqualiser::new(4).equalise(&grid);

        let hues = hue.hues();
        assert!(hues[0] <= hues[1]);
        assert!(hues[1] <= hues[2]);
        assert!(hues[2] <= hues[3]);
    }

    #[test]
    fn test_hue_excludes_own_bucket() {
        // Counts 1, 1, 2 with cap 3: the count-2 pixel's hue is the share of
        // buckets below 2, so its own (populated) bucket must not appear.
        let grid = grid_with_counts(3, 1, &[1, 1, 2]);
        let hue = HistogramEqualiser::new(3).equalise(&grid);

        let expected = 2.0 / 3.0;
        assert!((hue.hues()[2] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_capped_pixels_do_not_enter_total() {
        // One capped pixel; the three escaped pixels split the distribution
        // among themselves.
        let grid = grid_with_counts(4, 1, &[0, 1, 2, 4]);
        let hue = HistogramEqualiser::new(4).equalise(&grid);

        let hues = hue.hues();
        assert!((hues[1] - 1.0 / 3.0).abs() < 1e-12);
        assert!((hues[2] - 2.0 / 3.0).abs() < 1e-12);
        // The capped pixel accumulates every escaped bucket.
        assert!((hues[3] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_hues_stay_in_unit_interval() {
        let grid = grid_with_counts(4, 2, &[0, 0, 1, 3, 5, 5, 2, 1]);
        let hue = HistogramEqualiser::new(5).equalise(&grid);

        for &value in hue.hues() {
            assert!((0.0..=1.0).contains(&value), "hue out of range: {}", value);
        }
    }

    #[test]
    fn test_all_capped_grid_yields_zero_hue() {
        let grid = grid_with_counts(2, 2, &[4, 4, 4, 4]);
        let hue = HistogramEqualiser::new(4).equalise(&grid);

        assert!(hue.hues().iter().all(|&value| value == 0.0));
    }

    #[test]
    fn test_equalise_is_deterministic() {
        let counts = [0, 3, 1, 4, 2, 2, 5, 1];
        let first = HistogramEqualiser::new(5).equalise(&grid_with_counts(4, 2, &counts));
        let second = HistogramEqualiser::new(5).equalise(&grid_with_counts(4, 2, &counts));

        assert_eq!(first.hues(), second.hues());
    }

    #[test]
    fn test_hue_grid_keeps_input_dimensions() {
        let grid = grid_with_counts(2, 2, &[0, 1, 2, 4]);
        let hue = HistogramEqualiser::new(4).equalise(&grid);

        assert_eq!(hue.dimensions(), grid.dimensions());
        assert_eq!(hue.hues().len(), 4);
    }

    #[test]
    fn test_palette_index_endpoints() {
        assert_eq!(palette_index(0.0, 512), 0);
        assert_eq!(palette_index(1.0, 512), 511);
    }

    #[test]
    fn test_palette_index_compresses_low_hues() {
        // The fifth power pushes mid hues towards the low end of the palette.
        assert_eq!(palette_index(0.5, 512), 16);
    }

    #[test]
    fn test_palette_index_with_unit_cap() {
        assert_eq!(palette_index(1.0, 1), 0);
    }
}
