use serde::{Deserialize, Serialize};

/// Probability mass over the condition catalog. Index = condition id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbabilityVector(Vec<f64>);

impl ProbabilityVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Uniform distribution over `n` conditions.
    pub fn uniform(n: usize) -> Self {
        if n == 0 {
            return Self(Vec::new());
        }
        Self(vec![1.0 / n as f64; n])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn get(&self, id: usize) -> Option<f64> {
        self.0.get(id).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Divide every entry by the total mass.
    ///
    /// Returns `false` and leaves the vector untouched when the mass is zero
    /// (or not finite), so callers never divide by zero.
    pub fn normalize(&mut self) -> bool {
        let total = self.sum();
        if total <= 0.0 || !total.is_finite() {
            return false;
        }
        for p in &mut self.0 {
            *p /= total;
        }
        true
    }

    /// Whether the vector sums to one within `tolerance`.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.sum() - 1.0).abs() <= tolerance
    }
}

impl From<Vec<f64>> for ProbabilityVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl std::ops::Index<usize> for ProbabilityVector {
    type Output = f64;

    fn index(&self, id: usize) -> &f64 {
        &self.0[id]
    }
}
