use triage_core::TriageError;
use triage_reference::{ReferenceBundle, ReferenceTables};

fn bundle(path: &str) -> ReferenceBundle {
    test_fixtures::load_fixture(path)
}

#[test]
fn gynecology_bundle_loads_with_six_groups() {
    let path = test_fixtures::fixture_path(test_fixtures::GYNECOLOGY);
    let tables = ReferenceTables::from_file(&path).unwrap();
    assert_eq!(tables.num_subspecialties(), 6);
    assert_eq!(tables.num_conditions(), 18);
    assert_eq!(tables.num_doctors(), 5);
    assert_eq!(tables.group_map().len(), 18);
    assert_eq!(tables.subspecialty(0).unwrap().short, "REI");
    assert_eq!(tables.group_of(16).unwrap(), 5);
    assert_eq!(tables.condition(16).unwrap().name, "Endometriosis");
    assert!(tables.question(0).unwrap().ends_with('?'));
    assert!(tables.scaler(6).unwrap() > 1.0);
}

#[test]
fn rows_are_reordered_by_id_with_their_weights() {
    let mut b = bundle(test_fixtures::TWO_GROUPS);
    b.conditions.reverse();
    b.doctor_weights.reverse();
    let tables = ReferenceTables::from_bundle(b).unwrap();
    for (i, c) in tables.conditions().iter().enumerate() {
        assert_eq!(c.id, i);
    }
    // Conditions 0..5 belong to group A and lean on doctor 0.
    assert_eq!(tables.doctor_weights()[0], vec![1.0, 0.0, 0.5]);
    assert_eq!(tables.doctor_weights()[9], vec![0.0, 1.0, 0.5]);
}

#[test]
fn fingerprint_is_stable_and_content_sensitive() {
    let a = ReferenceTables::from_bundle(bundle(test_fixtures::TWO_GROUPS)).unwrap();
    let b = ReferenceTables::from_bundle(bundle(test_fixtures::TWO_GROUPS)).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());

    let mut changed = bundle(test_fixtures::TWO_GROUPS);
    changed.conditions[3].scaler = 9.0;
    let c = ReferenceTables::from_bundle(changed).unwrap();
    assert_ne!(a.fingerprint(), c.fingerprint());

    assert!(a.check_fingerprint(b.fingerprint()).is_ok());
    assert!(matches!(
        a.check_fingerprint(c.fingerprint()),
        Err(TriageError::ReferenceDataMismatch(_))
    ));
}

#[test]
fn vector_length_must_match_condition_count() {
    let tables = ReferenceTables::from_bundle(bundle(test_fixtures::TWO_GROUPS)).unwrap();
    assert!(tables.check_vector_len(10).is_ok());
    let err = tables.check_vector_len(9).unwrap_err();
    assert!(matches!(err, TriageError::ReferenceDataMismatch(_)));
}

#[test]
fn unknown_condition_lookup_fails_loudly() {
    let tables = ReferenceTables::from_bundle(bundle(test_fixtures::TWO_GROUPS)).unwrap();
    assert!(matches!(
        tables.condition(10),
        Err(TriageError::ReferenceDataMismatch(_))
    ));
    assert!(tables.group_of(99).is_err());
}

#[test]
fn condition_with_unknown_group_is_rejected() {
    let mut b = bundle(test_fixtures::TWO_GROUPS);
    b.conditions[2].subspecialty = 5;
    let err = ReferenceTables::from_bundle(b).unwrap_err();
    assert!(err.to_string().contains("unknown subspecialty 5"));
}

#[test]
fn gap_in_condition_ids_is_rejected() {
    let mut b = bundle(test_fixtures::TWO_GROUPS);
    b.conditions[9].id = 12;
    assert!(ReferenceTables::from_bundle(b).is_err());
}

#[test]
fn weight_matrix_must_cover_every_condition() {
    let mut b = bundle(test_fixtures::TWO_GROUPS);
    b.doctor_weights.pop();
    let err = ReferenceTables::from_bundle(b).unwrap_err();
    assert!(err.to_string().contains("9 rows for 10 conditions"));
}

#[test]
fn weight_rows_must_cover_every_doctor() {
    let mut b = bundle(test_fixtures::TWO_GROUPS);
    b.doctor_weights[4].push(1.0);
    assert!(ReferenceTables::from_bundle(b).is_err());
}

#[test]
fn negative_weights_and_scalers_are_rejected() {
    let mut b = bundle(test_fixtures::TWO_GROUPS);
    b.doctor_weights[0][0] = -1.0;
    assert!(ReferenceTables::from_bundle(b).is_err());

    let mut b = bundle(test_fixtures::TWO_GROUPS);
    b.conditions[0].scaler = f64::NAN;
    assert!(ReferenceTables::from_bundle(b).is_err());
}

#[test]
fn fewer_than_three_doctors_is_rejected() {
    let mut b = bundle(test_fixtures::TWO_GROUPS);
    b.doctors.truncate(2);
    for row in &mut b.doctor_weights {
        row.truncate(2);
    }
    let err = ReferenceTables::from_bundle(b).unwrap_err();
    assert!(err.to_string().contains("at least 3 doctors"));
}

#[test]
fn malformed_json_is_a_reference_error() {
    let err = ReferenceTables::from_json("{\"conditions\": 3}").unwrap_err();
    assert!(matches!(err, TriageError::ReferenceDataMismatch(_)));
}

#[test]
fn bundle_file_roundtrip_through_tempdir() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bundle.json");
    let original = bundle(test_fixtures::GYNECOLOGY);
    std::fs::write(&path, serde_json::to_string(&original).unwrap()).unwrap();
    let loaded = ReferenceBundle::from_file(&path).unwrap();
    assert_eq!(loaded, original);
}
