//! Numeric helpers shared by the selector and rankers.
//!
//! Ties always resolve to the lowest index.

/// `f(x; α)_i = x_iᵅ / Σ_j x_jᵅ`.
///
/// Zero entries stay zero and an all-zero input yields all zeros, never NaN.
pub fn power_transform(values: &[f64], alpha: f64) -> Vec<f64> {
    let powered: Vec<f64> = values
        .iter()
        .map(|&x| if x > 0.0 { x.powf(alpha) } else { 0.0 })
        .collect();
    let total: f64 = powered.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return vec![0.0; values.len()];
    }
    powered.into_iter().map(|x| x / total).collect()
}

/// Sum of probabilities per group. `group_map[i]` is the group of index `i`.
pub fn group_sums(probs: &[f64], group_map: &[usize], num_groups: usize) -> Vec<f64> {
    let mut sums = vec![0.0; num_groups];
    for (&p, &g) in probs.iter().zip(group_map) {
        if let Some(slot) = sums.get_mut(g) {
            *slot += p;
        }
    }
    sums
}

/// Index of the largest value. `None` for an empty slice.
pub fn argmax(values: &[f64]) -> Option<usize> {
    argmax_where(values, |_| true)
}

/// Index of the largest value among indices accepted by `eligible`.
pub fn argmax_where(values: &[f64], eligible: impl Fn(usize) -> bool) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if !eligible(i) {
            continue;
        }
        match best {
            Some((_, b)) if v <= b => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}

/// Indices sorted by value, descending.
pub fn descending_order(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[b].total_cmp(&values[a]).then(a.cmp(&b)));
    order
}
