// crate modules
use crate::core::approx_eq;

// external crates
use serde::{Deserialize, Serialize};

/// Two column numeric table in file order
///
/// Cross section tables hold `(energy (eV), cross section (m2))` rows, while
/// swarm data hold `(reduced field E/N (Td), parameter value)` rows. The
/// first column is referred to as the energy column either way.
///
/// ```rust
/// # use lxtools_lxcat::Table;
/// let table = Table::from(vec![[0.0, 1.1e-20], [0.1, 3.6e-20]]);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.energies(), vec![0.0, 0.1]);
/// assert_eq!(table.values(), vec![1.1e-20, 3.6e-20]);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Table {
    rows: Vec<[f64; 2]>,
}

impl Table {
    /// Create a new empty [Table]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row to the end of the table
    pub fn push(&mut self, energy: f64, value: f64) {
        self.rows.push([energy, value]);
    }

    /// All rows in file order
    pub fn rows(&self) -> &[[f64; 2]] {
        &self.rows
    }

    /// Iterate over `(energy, value)` pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.rows.iter().map(|[energy, value]| (*energy, *value))
    }

    /// First column
    pub fn energies(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row[0]).collect()
    }

    /// Second column
    pub fn values(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row[1]).collect()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if there are no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<[f64; 2]>> for Table {
    fn from(rows: Vec<[f64; 2]>) -> Self {
        Self { rows }
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.rows.len() == other.rows.len()
            && self
                .rows
                .iter()
                .zip(other.rows.iter())
                .all(|(a, b)| approx_eq(a[0], b[0]) && approx_eq(a[1], b[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_tolerates_codec_precision() {
        let a = Table::from(vec![[1.0, 1.23456789e-20]]);
        let b = Table::from(vec![[1.0, 1.234568e-20]]);
        assert_eq!(a, b);
    }

    #[test]
    fn equality_detects_changes() {
        let a = Table::from(vec![[1.0, 1.2e-20], [2.0, 1.3e-20]]);
        let b = Table::from(vec![[1.0, 1.2e-20], [2.0, 1.4e-20]]);
        let c = Table::from(vec![[1.0, 1.2e-20]]);
        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn push_keeps_order() {
        let mut table = Table::new();
        table.push(0.5, 2.0);
        table.push(0.1, 1.0);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec![(0.5, 2.0), (0.1, 1.0)]);
    }
}
