//! Injectable sources of uniform random values.

use rand::{Rng, RngCore};

/// A stream of uniform values in `[0, 1)`.
///
/// [`build_tour`](crate::build_tour) draws every random decision from a
/// caller-supplied source, so a fixed sequence of values always yields the
/// same tour. Any [`rand::RngCore`] is a source; [`SequenceSource`] replays
/// a scripted list.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use tourline_core::RandomSource;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let value = rng.next_unit();
/// assert!((0.0..1.0).contains(&value));
/// ```
pub trait RandomSource {
    /// Draw the next value. Implementations should stay within `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// An empty list behaves as an endless stream of `0.0`.
///
/// # Examples
/// ```
/// use tourline_core::{RandomSource, SequenceSource};
///
/// let mut source = SequenceSource::new([0.25, 0.75]);
/// assert_eq!(source.next_unit(), 0.25);
/// assert_eq!(source.next_unit(), 0.75);
/// assert_eq!(source.next_unit(), 0.25);
/// assert_eq!(source.draws(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
    draws: usize,
}

impl SequenceSource {
    /// Create a source replaying `values` in order.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            cursor: 0,
            draws: 0,
        }
    }

    /// A source that always returns `value`.
    #[must_use]
    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }

    /// Number of values drawn so far.
    #[must_use]
    pub const fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        self.draws = self.draws.saturating_add(1);
        let Some(value) = self.values.get(self.cursor).copied() else {
            return 0.0;
        };
        self.cursor = self.cursor.saturating_add(1);
        if self.cursor >= self.values.len() {
            self.cursor = 0;
        }
        value
    }
}
