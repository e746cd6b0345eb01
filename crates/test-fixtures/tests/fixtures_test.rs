use triage_core::traits::IConditionClassifier;

#[test]
fn reference_fixtures_parse_as_json() {
    for path in [
        test_fixtures::TWO_GROUPS,
        test_fixtures::GYNECOLOGY,
        test_fixtures::TINY,
    ] {
        let value: serde_json::Value = test_fixtures::load_fixture(path);
        assert!(value["conditions"].is_array(), "{path} has no conditions");
    }
}

#[test]
fn fixed_classifier_records_calls() {
    let clf = test_fixtures::FixedClassifier::uniform(4);
    clf.score("first").unwrap();
    clf.score("second").unwrap();
    assert_eq!(clf.calls(), 2);
    assert_eq!(clf.texts(), vec!["first", "second"]);
    assert_eq!(clf.num_classes(), 4);
}

#[test]
fn peaked_is_normalized() {
    let v = test_fixtures::peaked(5, &[(1, 3.0), (4, 1.0)]);
    assert!((v.iter().sum::<f64>() - 1.0).abs() < 1e-12);
    assert!((v[1] - 0.75).abs() < 1e-12);
}

#[test]
fn fixed_classifier_can_fail_on_demand() {
    let clf = test_fixtures::FixedClassifier::uniform(3);
    clf.set_failing(true);
    assert!(clf.score("text").is_err());
    clf.set_failing(false);
    assert_eq!(clf.score("text").unwrap().len(), 3);
    assert_eq!(clf.calls(), 2);
}
