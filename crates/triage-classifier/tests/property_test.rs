use proptest::prelude::*;
use triage_classifier::linear::softmax;
use triage_classifier::{validate_distribution, LinearSoftmaxClassifier};
use triage_core::traits::IConditionClassifier;

proptest! {
    #[test]
    fn softmax_is_a_distribution(logits in prop::collection::vec(-500.0f64..500.0, 1..12)) {
        let p = softmax(&logits);
        prop_assert_eq!(p.len(), logits.len());
        prop_assert!((p.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        prop_assert!(p.iter().all(|x| x.is_finite() && *x >= 0.0));
    }

    #[test]
    fn any_text_scores_to_a_valid_distribution(text in "\\PC{0,80}") {
        let clf = LinearSoftmaxClassifier::from_file(
            &test_fixtures::fixture_path(test_fixtures::TINY_MODEL),
        )
        .unwrap();
        let p = clf.score(&text).unwrap();
        prop_assert_eq!(p.len(), 3);
        prop_assert!(validate_distribution(&p).is_ok());
    }
}
