//! Measured cost series

/// Ordered `(x, y)` cost measurements, kept in input order
///
/// `x` is typically the number of operations performed and `y` the
/// measured cost. The two columns are stored separately so they can be
/// handed straight to the regression routines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostSeries {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl CostSeries {
    /// Create an empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one measurement
    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Independent variable column
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Dependent variable column
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterate over `(x, y)` pairs in input order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

impl FromIterator<(f64, f64)> for CostSeries {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        let (x, y) = iter.into_iter().unzip();
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_order() {
        let mut series = CostSeries::new();
        series.push(8.0, 3.0);
        series.push(1.0, 0.0);

        assert_eq!(series.len(), 2);
        assert_eq!(series.x(), &[8.0, 1.0]);
        assert_eq!(series.y(), &[3.0, 0.0]);
        assert_eq!(series.points().collect::<Vec<_>>(), vec![(8.0, 3.0), (1.0, 0.0)]);
    }

    #[test]
    fn test_collect_from_pairs() {
        let series: CostSeries = vec![(1.0, 0.0), (2.0, 1.0)].into_iter().collect();
        assert!(!series.is_empty());
        assert_eq!(series.x(), &[1.0, 2.0]);
        assert_eq!(series.y(), &[0.0, 1.0]);
    }
}
