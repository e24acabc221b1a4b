use std::fs;
use std::sync::Arc;

use call_triage::analysis::intent::IntentClassifier;
use call_triage::model::store::{
    ArtifactStore, StoreError, CLASSIFIER_ARTIFACT, VECTORIZER_ARTIFACT,
};
use call_triage::model::IntentModel;

const PROBES: &[&str] = &[
    "Quiero agendar una cita para diciembre",
    "Debo cancelar mi cita",
    "Es una emergencia, me duele mucho",
    "¿Cuál es el costo del tratamiento?",
    "Tengo una queja del servicio",
    "Necesito una endodoncia",
];

#[test]
fn training_persists_both_artifacts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ArtifactStore::new(dir.path());
    IntentModel::load_or_train(&store, 100).expect("train model");
    assert!(store.exists(VECTORIZER_ARTIFACT));
    assert!(store.exists(CLASSIFIER_ARTIFACT));
}

#[test]
fn reloaded_model_predicts_identically() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ArtifactStore::new(dir.path());
    let trained = IntentModel::load_or_train(&store, 100).expect("train model");
    let reloaded = IntentModel::load_or_train(&store, 100).expect("load model");

    let first = IntentClassifier::new(Arc::new(trained));
    let second = IntentClassifier::new(Arc::new(reloaded));
    for probe in PROBES {
        assert_eq!(
            first.classify(probe),
            second.classify(probe),
            "probe: {probe}"
        );
    }
}

#[test]
fn missing_single_artifact_triggers_retraining() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ArtifactStore::new(dir.path());
    IntentModel::load_or_train(&store, 100).expect("train model");

    fs::remove_file(dir.path().join(CLASSIFIER_ARTIFACT)).expect("drop artifact");
    IntentModel::load_or_train(&store, 100).expect("retrain model");
    assert!(store.exists(CLASSIFIER_ARTIFACT));
}

#[test]
fn corrupt_artifact_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ArtifactStore::new(dir.path());
    IntentModel::load_or_train(&store, 100).expect("train model");

    fs::write(dir.path().join(VECTORIZER_ARTIFACT), "not json").expect("overwrite artifact");
    let err = IntentModel::load_or_train(&store, 100).expect_err("corrupt artifact must fail");
    assert!(matches!(
        err.downcast_ref::<StoreError>(),
        Some(StoreError::Corrupt { .. })
    ));
}

#[test]
fn loading_a_missing_artifact_reports_io() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ArtifactStore::new(dir.path());
    let err = store
        .load::<Vec<String>>("absent.json")
        .expect_err("missing artifact must fail");
    assert!(matches!(err, StoreError::Io { .. }));
}
