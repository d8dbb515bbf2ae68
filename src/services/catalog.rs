use std::path::Path;

use anyhow::Context;

use crate::errors::DialogueError;
use crate::models::{Hospital, HospitalSummary};

/// Read-only hospital table plus the location and specialty vocabularies
/// derived from it. Built once at startup and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    // `None` marks a catalog whose source could not be read.
    hospitals: Option<Vec<Hospital>>,
    locations: Vec<String>,
    specialties: Vec<String>,
}

impl Catalog {
    /// Loads the catalog from a CSV file with a `name,location,specialty,address,phone`
    /// header. A missing or malformed file yields [`Catalog::empty`].
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match read_csv(path) {
            Ok(hospitals) => {
                tracing::info!(
                    path = %path.display(),
                    hospitals = hospitals.len(),
                    "loaded hospital catalog"
                );
                Self::from_hospitals(hospitals)
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "hospital data not available");
                Self::empty()
            }
        }
    }

    /// The "no data" catalog: every lookup reports `DataUnavailable`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_hospitals(hospitals: Vec<Hospital>) -> Self {
        let locations = distinct(hospitals.iter().map(|h| h.location.as_str()));
        let specialties = distinct(hospitals.iter().map(|h| h.specialty.as_str()));
        Self {
            hospitals: Some(hospitals),
            locations,
            specialties,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.hospitals.is_some()
    }

    pub fn len(&self) -> usize {
        self.hospitals.as_ref().map(Vec::len).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct locations in order of first appearance.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Distinct specialties in order of first appearance.
    pub fn specialties(&self) -> &[String] {
        &self.specialties
    }

    /// Rows whose location and specialty equal the arguments, ignoring case.
    /// Duplicate rows are all returned.
    pub fn lookup(
        &self,
        location: &str,
        specialty: &str,
    ) -> Result<Vec<HospitalSummary>, DialogueError> {
        let hospitals = self
            .hospitals
            .as_ref()
            .ok_or(DialogueError::DataUnavailable)?;

        let location = location.to_lowercase();
        let specialty = specialty.to_lowercase();

        Ok(hospitals
            .iter()
            .filter(|h| {
                h.location.to_lowercase() == location && h.specialty.to_lowercase() == specialty
            })
            .map(HospitalSummary::from)
            .collect())
    }
}

fn read_csv(path: &Path) -> anyhow::Result<Vec<Hospital>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open hospital CSV: {}", path.display()))?;

    let mut hospitals = vec![];
    for (idx, row) in reader.deserialize::<Hospital>().enumerate() {
        let hospital = row.with_context(|| format!("failed to read row {}", idx + 1))?;
        hospitals.push(hospital);
    }
    Ok(hospitals)
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = vec![];
    let mut seen_lower: Vec<String> = vec![];
    for value in values {
        let lower = value.to_lowercase();
        if value.is_empty() || seen_lower.contains(&lower) {
            continue;
        }
        seen.push(value.to_string());
        seen_lower.push(lower);
    }
    seen
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn hospital(name: &str, location: &str, specialty: &str) -> Hospital {
        Hospital {
            name: name.to_string(),
            location: location.to_string(),
            specialty: specialty.to_string(),
            address: format!("1 {name} Way"),
            phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive_exact_match() {
        let catalog = Catalog::from_hospitals(vec![
            hospital("Northwestern Memorial", "Chicago", "Cardiology"),
            hospital("Lurie Children's", "Chicago", "Pediatrics"),
        ]);

        let found = catalog.lookup("chicago", "CARDIOLOGY").unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Northwestern Memorial");
        assert_eq!(found[0].address, "1 Northwestern Memorial Way");

        // substrings do not match
        assert!(catalog.lookup("Chi", "Cardiology").unwrap().is_empty());
    }

    #[test]
    fn test_lookup_returns_duplicate_rows() {
        let row = hospital("Cedars-Sinai", "Los Angeles", "Cardiology");
        let catalog = Catalog::from_hospitals(vec![row.clone(), row]);
        assert_eq!(catalog.lookup("Los Angeles", "Cardiology").unwrap().len(), 2);
    }

    #[test]
    fn test_lookup_no_match_is_empty_not_unavailable() {
        let catalog = Catalog::from_hospitals(vec![hospital("Mount Sinai", "New York", "Cardiology")]);
        assert_eq!(catalog.lookup("Los Angeles", "Dermatology"), Ok(vec![]));
    }

    #[test]
    fn test_empty_catalog_reports_data_unavailable() {
        let catalog = Catalog::empty();
        assert!(!catalog.is_loaded());
        assert_eq!(
            catalog.lookup("Chicago", "Cardiology"),
            Err(DialogueError::DataUnavailable)
        );
        assert!(catalog.locations().is_empty());
    }

    #[test]
    fn test_vocabularies_keep_first_appearance_order() {
        let catalog = Catalog::from_hospitals(vec![
            hospital("A", "New York", "Cardiology"),
            hospital("B", "Chicago", "Dermatology"),
            hospital("C", "new york", "Pediatrics"),
            hospital("D", "Los Angeles", "cardiology"),
        ]);
        assert_eq!(catalog.locations(), ["New York", "Chicago", "Los Angeles"]);
        assert_eq!(catalog.specialties(), ["Cardiology", "Dermatology", "Pediatrics"]);
    }

    #[test]
    fn test_vocabularies_dedup_non_ascii_case() {
        let catalog = Catalog::from_hospitals(vec![
            hospital("A", "Zürich", "Kardiologie"),
            hospital("B", "ZÜRICH", "KARDIOLOGIE"),
            hospital("C", "Århus", "Kardiologie"),
        ]);
        assert_eq!(catalog.locations(), ["Zürich", "Århus"]);
        assert_eq!(catalog.specialties(), ["Kardiologie"]);
    }

    #[test]
    fn test_load_from_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,location,specialty,address,phone").unwrap();
        writeln!(
            file,
            "Northwestern Memorial, Chicago ,Cardiology,251 E Huron St,312-926-2000"
        )
        .unwrap();
        writeln!(file, "\"Cedars-Sinai\",Los Angeles,Cardiology,\"8700 Beverly Blvd, Los Angeles\",310-423-3277").unwrap();

        let catalog = Catalog::load(file.path());
        assert!(catalog.is_loaded());
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.locations(), ["Chicago", "Los Angeles"]);

        let found = catalog.lookup("Los Angeles", "cardiology").unwrap();
        assert_eq!(found[0].address, "8700 Beverly Blvd, Los Angeles");
    }

    #[test]
    fn test_load_header_only_csv_is_loaded_but_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,location,specialty,address,phone").unwrap();

        let catalog = Catalog::load(file.path());
        assert!(catalog.is_loaded());
        assert!(catalog.is_empty());
        assert_eq!(catalog.lookup("Chicago", "Cardiology"), Ok(vec![]));
    }

    #[test]
    fn test_load_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::load(dir.path().join("hospitals.csv"));
        assert!(!catalog.is_loaded());
    }

    #[test]
    fn test_load_malformed_csv_is_unavailable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,location").unwrap();
        writeln!(file, "Only Two,Columns").unwrap();

        let catalog = Catalog::load(file.path());
        assert!(!catalog.is_loaded());
    }
}
