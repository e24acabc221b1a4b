use call_triage::model::vectorizer::TfidfVectorizer;

#[test]
fn vocabulary_respects_feature_cap() {
    let documents = [
        "cita limpieza dientes revisión",
        "dolor muela emergencia atención",
        "precio costo presupuesto consulta",
    ];
    let vectorizer = TfidfVectorizer::fit(&documents, 5);
    assert_eq!(vectorizer.vocabulary_len(), 5);
}

#[test]
fn stopwords_never_enter_the_vocabulary() {
    let documents = ["la cita de la clínica", "una cita para el dentista"];
    let vectorizer = TfidfVectorizer::fit(&documents, 100);
    assert_eq!(vectorizer.vocabulary_len(), 3);

    let weights = vectorizer.transform("la de el para una");
    assert_eq!(weights.sum(), 0.0);
}

#[test]
fn known_terms_produce_a_unit_vector() {
    let documents = ["cita dental", "urgencia dental"];
    let vectorizer = TfidfVectorizer::fit(&documents, 100);
    let weights = vectorizer.transform("una cita urgente con urgencia");
    let norm = weights.dot(&weights).sqrt();
    assert!((norm - 1.0).abs() < 1e-9);
}

#[test]
fn fitting_is_deterministic() {
    let documents = [
        "quiero agendar una cita",
        "necesito cancelar mi cita",
        "tengo un dolor fuerte",
    ];
    let first = TfidfVectorizer::fit(&documents, 100);
    let second = TfidfVectorizer::fit(&documents, 100);
    assert_eq!(
        first.transform("quiero una cita sin dolor"),
        second.transform("quiero una cita sin dolor")
    );
}

#[test]
fn unknown_text_maps_to_the_zero_vector() {
    let documents = ["cita dental", "urgencia dental"];
    let vectorizer = TfidfVectorizer::fit(&documents, 100);
    let weights = vectorizer.transform("zapato rojo");
    assert_eq!(weights.sum(), 0.0);
}
