use std::sync::Arc;

use call_triage::analysis::entities::extract;
use call_triage::analysis::intent::{Category, IntentClassifier};
use call_triage::analysis::urgency::{detect_urgency, UrgencyLevel};
use call_triage::model::store::ArtifactStore;
use call_triage::model::IntentModel;
use once_cell::sync::Lazy;
use proptest::prelude::*;

static CLASSIFIER: Lazy<IntentClassifier> = Lazy::new(|| {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = ArtifactStore::new(dir.path());
    let model = IntentModel::load_or_train(&store, 100).expect("train model");
    IntentClassifier::new(Arc::new(model))
});

proptest! {
    #[test]
    fn short_input_is_always_unclassified(text in ".{0,2}") {
        let prediction = CLASSIFIER.classify(&text);
        prop_assert_eq!(prediction.category, Category::Unclassified);
        prop_assert_eq!(prediction.confidence, 0.0);
    }

    #[test]
    fn confidence_stays_in_range(text in ".{0,80}") {
        let confidence = CLASSIFIER.classify(&text).confidence;
        prop_assert!((0.0..=1.0).contains(&confidence));
    }

    #[test]
    fn classification_is_stable(text in ".{3,60}") {
        prop_assert_eq!(CLASSIFIER.classify(&text), CLASSIFIER.classify(&text));
    }

    #[test]
    fn extraction_is_idempotent(text in ".{0,120}") {
        prop_assert_eq!(extract(&text), extract(&text));
    }

    #[test]
    fn embedded_emergency_keyword_forces_high(prefix in ".{0,20}", suffix in ".{0,20}") {
        let text = format!("{prefix}emergencia{suffix}");
        prop_assert_eq!(detect_urgency(&text), UrgencyLevel::High);
    }
}
