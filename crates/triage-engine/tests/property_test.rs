mod common;

use std::collections::BTreeSet;

use proptest::prelude::*;
use triage_core::models::{Answer, ConversationId, ProbabilityVector, SessionState};
use triage_engine::selector::select_next;
use triage_engine::transform::{group_sums, power_transform};
use triage_engine::updater::apply_answer;

fn answer_strategy() -> impl Strategy<Value = Answer> {
    prop_oneof![
        Just(Answer::Yes),
        Just(Answer::No),
        Just(Answer::Skip),
        Just(Answer::None)
    ]
}

fn distribution(n: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.001f64..1.0, n).prop_map(|v| {
        let total: f64 = v.iter().sum();
        v.into_iter().map(|x| x / total).collect()
    })
}

proptest! {
    #[test]
    fn power_transform_sums_to_one(
        values in prop::collection::vec(0.0f64..10.0, 1..20),
        alpha in 0.1f64..8.0,
    ) {
        prop_assume!(values.iter().any(|v| *v > 0.0));
        let out = power_transform(&values, alpha);
        prop_assert!((out.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        prop_assert!(out.iter().all(|x| x.is_finite() && *x >= 0.0));
    }

    #[test]
    fn answered_conversation_keeps_invariants(
        raw in distribution(10),
        turns in prop::collection::vec(answer_strategy(), 1..15),
    ) {
        let tables = common::tables(test_fixtures::TWO_GROUPS);
        let mut state = SessionState::new(ConversationId::from("prop"), tables.fingerprint());
        let mut previous_asked = BTreeSet::new();

        for answer in turns {
            let mut probs = ProbabilityVector::new(raw.clone());
            let outcome = apply_answer(&mut state, &mut probs, answer, &tables).unwrap();

            // asked only grows, and the answered sets stay inside it
            prop_assert!(state.asked_idx.is_superset(&previous_asked));
            prop_assert!(state.is_consistent());
            previous_asked = state.asked_idx.clone();

            if !outcome.degenerate && state.has_probability_updates() {
                prop_assert!(probs.is_normalized(1e-6));
            }
            for &id in &state.excluded_idx {
                prop_assert_eq!(probs[id], 0.0);
            }

            if outcome.degenerate {
                break;
            }
            if answer == Answer::None && state.last_question_id.is_some() {
                continue;
            }
            let selection = select_next(
                probs.as_slice(),
                tables.group_map(),
                tables.num_subspecialties(),
                &state.asked_idx,
                true,
            );
            match selection.next_id {
                Some(next) => {
                    prop_assert!(!state.asked_idx.contains(&next));
                    if !selection.fell_back {
                        prop_assert_ne!(tables.group_of(next).unwrap(), selection.dominant_group);
                    }
                    state.last_question_id = Some(next);
                }
                None => break,
            }
        }
    }

    #[test]
    fn group_sums_preserve_mass(raw in distribution(18)) {
        let tables = common::tables(test_fixtures::GYNECOLOGY);
        let sums = group_sums(&raw, tables.group_map(), tables.num_subspecialties());
        prop_assert!((sums.iter().sum::<f64>() - 1.0).abs() < 1e-9);
    }
}
