//! Question selector: probe the most likely condition outside the
//! subspecialty the distribution already favors.

use std::collections::BTreeSet;

use crate::transform::{argmax, argmax_where, group_sums};

/// Result of one selection pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Group with the largest probability mass.
    pub dominant_group: usize,
    /// Condition to ask about next; `None` when every condition has been asked.
    pub next_id: Option<usize>,
    /// The pick came from the dominant group because nothing else was eligible.
    pub fell_back: bool,
    pub group_sums: Vec<f64>,
}

/// Choose the next question.
///
/// Conditions in the dominant group or already in `asked` are masked out and
/// the highest remaining probability wins. When nothing outside the dominant
/// group is eligible and `fallback` is set, the best unasked condition of the
/// dominant group is used instead.
pub fn select_next(
    probs: &[f64],
    group_map: &[usize],
    num_groups: usize,
    asked: &BTreeSet<usize>,
    fallback: bool,
) -> Selection {
    let sums = group_sums(probs, group_map, num_groups);
    let dominant_group = argmax(&sums).unwrap_or(0);

    let group_of = |i: usize| group_map.get(i).copied();
    let outside = argmax_where(probs, |i| {
        group_of(i) != Some(dominant_group) && !asked.contains(&i)
    });

    let (next_id, fell_back) = match outside {
        Some(id) => (Some(id), false),
        None if fallback => {
            let inside = argmax_where(probs, |i| !asked.contains(&i));
            (inside, inside.is_some())
        }
        None => (None, false),
    };

    Selection {
        dominant_group,
        next_id,
        fell_back,
        group_sums: sums,
    }
}
