use triage_core::errors::*;

#[test]
fn length_mismatch_carries_both_sizes() {
    let err = ReferenceError::LengthMismatch {
        expected: 42,
        actual: 40,
    };
    let msg = err.to_string();
    assert!(msg.contains("42"));
    assert!(msg.contains("40"));
}

#[test]
fn unknown_subspecialty_carries_ids() {
    let err = ReferenceError::UnknownSubspecialty {
        condition_id: 7,
        subspecialty_id: 9,
    };
    let msg = err.to_string();
    assert!(msg.contains('7'));
    assert!(msg.contains('9'));
}

#[test]
fn session_not_found_carries_conversation_id() {
    let err = SessionError::NotFound {
        conversation_id: "conv-123".into(),
    };
    assert!(err.to_string().contains("conv-123"));
}

#[test]
fn invalid_answer_carries_code() {
    let err = TriageError::InvalidAnswer { code: 7 };
    assert!(err.to_string().contains('7'));
}

// --- From impls ---

#[test]
fn classifier_error_converts_to_classifier_failure() {
    let err: TriageError = ClassifierError::ZeroMass.into();
    assert!(matches!(err, TriageError::ClassifierFailure(_)));
}

#[test]
fn reference_error_converts_to_reference_data_mismatch() {
    let err: TriageError = ReferenceError::UnknownCondition { condition_id: 3 }.into();
    assert!(matches!(err, TriageError::ReferenceDataMismatch(_)));
}

#[test]
fn storage_error_converts_to_triage_error() {
    let err: TriageError = StorageError::SqliteError {
        message: "disk full".into(),
    }
    .into();
    assert!(matches!(err, TriageError::StorageError(_)));
    assert!(err.to_string().contains("disk full"));
}

#[test]
fn serde_error_converts_to_serialization_error() {
    let serde_err = serde_json::from_str::<u32>("not a number").unwrap_err();
    let err: TriageError = serde_err.into();
    assert!(matches!(err, TriageError::SerializationError(_)));
}
