//! Interval (gap) analyzer
//!
//! For every draw of a value already seen, records how many positions back
//! its previous occurrence was. Gaps at or beyond the bucket count are
//! dropped rather than folded into the last bucket.

use crate::analysis::{filled, require_range};
use crate::error::{Error, Result};
use crate::generator::IntGenerator;

/// Fixed-size histogram of gap lengths
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalHistogram {
    buckets: Vec<u64>,
    discarded: u64,
    distinct_values: usize,
}

impl IntervalHistogram {
    /// Empty histogram covering gaps `0..bucket_count`
    pub fn new(bucket_count: usize) -> Result<Self> {
        if bucket_count == 0 {
            return Err(Error::DegenerateInput(
                "interval bucket count must be greater than 0".into(),
            ));
        }
        Ok(Self {
            buckets: filled("interval histogram", bucket_count, 0)?,
            discarded: 0,
            distinct_values: 0,
        })
    }

    /// Record one gap. Returns false if it was out of range and discarded.
    pub fn record(&mut self, gap: usize) -> bool {
        match self.buckets.get_mut(gap) {
            Some(bucket) => {
                *bucket += 1;
                true
            }
            None => {
                self.discarded += 1;
                false
            }
        }
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Count for one gap length (0 if out of range)
    pub fn count(&self, gap: usize) -> u64 {
        self.buckets.get(gap).copied().unwrap_or(0)
    }

    /// Gaps that fell outside the histogram
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    /// Gaps kept in the histogram
    pub fn recorded(&self) -> u64 {
        self.buckets.iter().sum()
    }

    /// Distinct values seen while the histogram was filled
    pub fn distinct_values(&self) -> usize {
        self.distinct_values
    }

    /// `(gap, count)` pairs for nonzero gaps `1..bucket_count`, ascending
    ///
    /// Gap 0 never occurs: a draw is not compared against itself.
    pub fn nonzero(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.buckets
            .iter()
            .copied()
            .enumerate()
            .skip(1)
            .filter(|&(_, count)| count > 0)
    }
}

/// Draw `samples` values in `[0, n)` and histogram the repeat gaps
pub fn interval<G: IntGenerator + ?Sized>(
    gen: &mut G,
    n: u32,
    samples: usize,
    bucket_count: usize,
) -> Result<IntervalHistogram> {
    require_range(n)?;
    let mut histogram = IntervalHistogram::new(bucket_count)?;
    let mut last_seen: Vec<Option<usize>> = filled("last-seen table", n as usize, None)?;

    for position in 0..samples {
        let value = gen.draw(n) as usize;
        match last_seen[value] {
            Some(previous) => {
                histogram.record(position - previous);
            }
            None => histogram.distinct_values += 1,
        }
        last_seen[value] = Some(position);
    }

    Ok(histogram)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{ModuloGenerator, SequenceGenerator};
    use crate::source::SeededSource;

    #[test]
    fn test_known_sequence() {
        let mut gen = SequenceGenerator::new(vec![0, 1, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2]).unwrap();
        let histogram = interval(&mut gen, 4, 12, 100).unwrap();

        let pairs: Vec<(usize, u64)> = histogram.nonzero().collect();
        assert_eq!(pairs, vec![(1, 1), (4, 6), (5, 1)]);
        assert_eq!(histogram.distinct_values(), 4);
        assert_eq!(histogram.recorded(), 8);
        assert_eq!(histogram.discarded(), 0);
        assert_eq!(histogram.bucket_count(), 100);
    }

    #[test]
    fn test_first_occurrence_records_nothing() {
        let mut gen = SequenceGenerator::new(vec![0, 1, 2, 3]).unwrap();
        let histogram = interval(&mut gen, 4, 4, 100).unwrap();
        assert_eq!(histogram.recorded(), 0);
        assert_eq!(histogram.nonzero().count(), 0);
    }

    #[test]
    fn test_long_gaps_discarded_not_clipped() {
        // every value repeats exactly 6 draws later
        let mut gen = SequenceGenerator::new(vec![0, 1, 2, 3, 4, 5]).unwrap();
        let histogram = interval(&mut gen, 6, 18, 5).unwrap();
        assert_eq!(histogram.recorded(), 0);
        assert_eq!(histogram.discarded(), 12);
        assert_eq!(histogram.count(4), 0);
    }

    #[test]
    fn test_last_seen_updated_after_discard() {
        // gap 3 is discarded with 3 buckets, the following gap 1 is kept
        let mut gen = SequenceGenerator::new(vec![0, 1, 2, 0, 0]).unwrap();
        let histogram = interval(&mut gen, 3, 5, 3).unwrap();
        assert_eq!(histogram.discarded(), 1);
        assert_eq!(histogram.count(1), 1);
    }

    #[test]
    fn test_recorded_gaps_bounded_by_distinct_values() {
        let mut source = SeededSource::with_max(11, 40_000);
        let mut gen = ModuloGenerator::new(&mut source);
        let samples = 50_000;
        let histogram = interval(&mut gen, 1000, samples, 100).unwrap();

        let total = histogram.recorded() + histogram.discarded();
        assert_eq!(total, (samples - histogram.distinct_values()) as u64);
        assert!(histogram.recorded() <= (samples - histogram.distinct_values()) as u64);
    }

    #[test]
    fn test_degenerate_parameters() {
        let mut gen = SequenceGenerator::new(vec![0]).unwrap();
        assert!(interval(&mut gen, 0, 10, 100).is_err());
        assert!(interval(&mut gen, 4, 10, 0).is_err());
    }
}
