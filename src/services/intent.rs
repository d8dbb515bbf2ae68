use crate::models::{ExtractedEntities, Intent};
use crate::services::catalog::Catalog;

const RECOMMEND_KEYWORDS: &[&str] = &["hospital", "doctor", "clinic", "specialist"];
const BOOK_KEYWORDS: &[&str] = &["book", "schedule", "appointment"];

/// Keyword classification. Recommendation keywords win over booking keywords.
pub fn classify(text: &str) -> Intent {
    let lower = text.to_lowercase();
    if RECOMMEND_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Intent::RecommendHospital
    } else if BOOK_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Intent::BookAppointment
    } else {
        Intent::Unknown
    }
}

/// Finds the first catalog location and the first catalog specialty that
/// appear in `text`. Ties go to vocabulary order, not to the longest match.
pub fn extract(text: &str, catalog: &Catalog) -> ExtractedEntities {
    let lower = text.to_lowercase();
    ExtractedEntities {
        location: first_mention(&lower, catalog.locations()),
        specialty: first_mention(&lower, catalog.specialties()),
    }
}

fn first_mention(lower_text: &str, vocabulary: &[String]) -> Option<String> {
    vocabulary
        .iter()
        .find(|entry| lower_text.contains(&entry.to_lowercase()))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Hospital;

    fn catalog() -> Catalog {
        let rows = [
            ("New York", "Cardiology"),
            ("Los Angeles", "Dermatology"),
            ("Chicago", "Pediatrics"),
        ];
        Catalog::from_hospitals(
            rows.iter()
                .map(|(location, specialty)| Hospital {
                    name: format!("{location} General"),
                    location: location.to_string(),
                    specialty: specialty.to_string(),
                    address: "1 Main St".to_string(),
                    phone: "555-0100".to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn test_classify_recommendation() {
        assert_eq!(classify("Where is a good DOCTOR?"), Intent::RecommendHospital);
        assert_eq!(classify("any clinic nearby"), Intent::RecommendHospital);
        assert_eq!(classify("I need a specialist"), Intent::RecommendHospital);
    }

    #[test]
    fn test_classify_booking() {
        assert_eq!(classify("book an appointment"), Intent::BookAppointment);
        assert_eq!(classify("Can I Schedule something?"), Intent::BookAppointment);
    }

    #[test]
    fn test_classify_recommendation_takes_precedence() {
        assert_eq!(
            classify("book an appointment with a doctor"),
            Intent::RecommendHospital
        );
        assert_eq!(classify("schedule at the hospital"), Intent::RecommendHospital);
    }

    #[test]
    fn test_classify_unknown() {
        assert_eq!(classify("what's the weather"), Intent::Unknown);
        assert_eq!(classify(""), Intent::Unknown);
    }

    #[test]
    fn test_extract_both_slots() {
        let entities = extract("Are there any cardiology doctors in new york?", &catalog());
        assert_eq!(entities.location.as_deref(), Some("New York"));
        assert_eq!(entities.specialty.as_deref(), Some("Cardiology"));
    }

    #[test]
    fn test_extract_missing_slots() {
        let entities = extract("I need a specialist", &catalog());
        assert_eq!(entities, ExtractedEntities::default());

        let entities = extract("a hospital in Chicago", &catalog());
        assert_eq!(entities.location.as_deref(), Some("Chicago"));
        assert_eq!(entities.specialty, None);
    }

    #[test]
    fn test_extract_first_vocabulary_entry_wins() {
        // Chicago is mentioned first but New York is listed first.
        let entities = extract("Chicago or New York, either works", &catalog());
        assert_eq!(entities.location.as_deref(), Some("New York"));
    }

    #[test]
    fn test_extract_is_idempotent() {
        let catalog = catalog();
        let text = "pediatrics clinic in los angeles";
        assert_eq!(extract(text, &catalog), extract(text, &catalog));
    }

    #[test]
    fn test_extract_with_empty_catalog_finds_nothing() {
        let entities = extract("cardiology in Chicago", &Catalog::empty());
        assert_eq!(entities, ExtractedEntities::default());
    }
}
