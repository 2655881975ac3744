/// Sparse feature vector produced by a [`FeatureTransformer`](super::FeatureTransformer).
///
/// Entries are `(column, value)` pairs sorted by column, without duplicates.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    /// Build a vector from unsorted entries. Repeated columns are summed and
    /// zero values dropped.
    pub fn from_entries(dim: usize, mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|(column, _)| *column);
        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (column, value) in entries {
            match merged.last_mut() {
                Some((last, acc)) if *last == column => *acc += value,
                _ => merged.push((column, value)),
            }
        }
        merged.retain(|(_, value)| *value != 0.0);
        Self {
            dim,
            entries: merged,
        }
    }

    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Dot product with a dense weight row. Columns beyond `weights` count as 0.
    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|(column, value)| weights.get(*column).map(|w| w * value))
            .sum()
    }

    pub fn map_values(&mut self, f: impl Fn(f64) -> f64) {
        for (_, value) in &mut self.entries {
            *value = f(*value);
        }
    }

    pub fn l1_norm(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v.abs()).sum()
    }

    pub fn l2_norm(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt()
    }

    /// Divide every value by `norm`; a zero norm leaves the vector untouched.
    pub fn scale_by(&mut self, norm: f64) {
        if norm > 0.0 {
            self.map_values(|v| v / norm);
        }
    }
}
