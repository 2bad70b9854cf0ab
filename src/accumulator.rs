// ➕ Curried accumulator
//
// Builder while fed numbers, reducer on demand:
//
//   curried_add().add(1.0).add(2.0).add(3.0).total() == 6.0
//
// Reading the total does not reset the sequence.

use tracing::trace;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurriedAdd {
    numbers: Vec<f64>,
}

impl CurriedAdd {
    pub fn new() -> Self {
        CurriedAdd { numbers: Vec::new() }
    }

    /// Append a number and hand the accumulator back for chaining
    pub fn add(&mut self, number: f64) -> &mut Self {
        self.numbers.push(number);
        trace!(number, count = self.numbers.len(), "accumulated");
        self
    }

    /// Left-to-right sum starting from 0
    pub fn total(&self) -> f64 {
        self.numbers.iter().fold(0.0, |acc, n| acc + n)
    }

    /// Accumulated numbers in insertion order
    pub fn numbers(&self) -> &[f64] {
        &self.numbers
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl Extend<f64> for CurriedAdd {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for number in iter {
            self.add(number);
        }
    }
}

impl FromIterator<f64> for CurriedAdd {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = CurriedAdd::new();
        acc.extend(iter);
        acc
    }
}

// ============================================================================
// TESTS
// ============================================================================
