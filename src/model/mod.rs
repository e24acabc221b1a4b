//! Intent model lifecycle: load persisted artifacts or train from seed data.

pub mod classifier;
pub mod store;
pub mod vectorizer;

use anyhow::Result;
use tracing::info;

use crate::analysis::intent::Category;
use classifier::LinearClassifier;
use store::{ArtifactStore, CLASSIFIER_ARTIFACT, VECTORIZER_ARTIFACT};
use vectorizer::TfidfVectorizer;

/// Labeled utterances the model is trained on when no artifacts exist.
const SEED_UTTERANCES: &[(&str, Category)] = &[
    (
        "Hola, quiero agendar una cita para limpiar los dientes",
        Category::Appointment,
    ),
    ("Necesito una cita lo antes posible", Category::Appointment),
    ("¿Cuáles son los horarios disponibles?", Category::Appointment),
    ("Debo cancelar mi cita de mañana", Category::Cancellation),
    ("No puedo asistir al tratamiento", Category::Cancellation),
    ("Necesito reprogramar mi fecha", Category::Cancellation),
    ("Tengo un dolor de muela insoportable", Category::Urgency),
    ("Es una emergencia, me duele mucho", Category::Urgency),
    ("Necesito atención urgente ahora", Category::Urgency),
    ("¿Cuál es el costo del tratamiento?", Category::Inquiry),
    ("¿Cuáles son los precios de los servicios?", Category::Inquiry),
    ("Tengo una pregunta sobre ortodoncia", Category::Inquiry),
    ("El servicio fue muy malo", Category::Complaint),
    ("Tengo una queja sobre la atención recibida", Category::Complaint),
    ("Insatisfecho con el procedimiento", Category::Complaint),
    ("Necesito una endodoncia", Category::Treatment),
    ("Quiero hacerme un blanqueamiento", Category::Treatment),
];

/// Fitted vectorizer plus classifier, immutable once constructed.
#[derive(Debug, Clone)]
pub struct IntentModel {
    pub vectorizer: TfidfVectorizer,
    pub classifier: LinearClassifier,
}

impl IntentModel {
    /// Load both artifacts if present, otherwise train and persist them.
    ///
    /// A corrupt artifact is surfaced as an error rather than silently
    /// retrained over.
    pub fn load_or_train(store: &ArtifactStore, max_vocabulary: usize) -> Result<Self> {
        if store.exists(VECTORIZER_ARTIFACT) && store.exists(CLASSIFIER_ARTIFACT) {
            let vectorizer = store.load(VECTORIZER_ARTIFACT)?;
            let classifier = store.load(CLASSIFIER_ARTIFACT)?;
            info!("loaded persisted intent model");
            return Ok(Self {
                vectorizer,
                classifier,
            });
        }
        Self::retrain(store, max_vocabulary)
    }

    /// Train from the seed corpus and persist both artifacts.
    pub fn retrain(store: &ArtifactStore, max_vocabulary: usize) -> Result<Self> {
        let mut documents = Vec::with_capacity(SEED_UTTERANCES.len());
        let mut labels = Vec::with_capacity(SEED_UTTERANCES.len());
        for (text, category) in SEED_UTTERANCES {
            if let Some(index) = category.class_index() {
                documents.push(*text);
                labels.push(index);
            }
        }
        let vectorizer = TfidfVectorizer::fit(&documents, max_vocabulary);
        let features = vectorizer.transform_batch(&documents);
        let classifier = LinearClassifier::fit(features, labels)?;
        store.save(VECTORIZER_ARTIFACT, &vectorizer)?;
        store.save(CLASSIFIER_ARTIFACT, &classifier)?;
        info!(
            examples = SEED_UTTERANCES.len(),
            vocabulary = vectorizer.vocabulary_len(),
            classes = classifier.n_classes(),
            "trained intent model from seed corpus"
        );
        Ok(Self {
            vectorizer,
            classifier,
        })
    }
}
