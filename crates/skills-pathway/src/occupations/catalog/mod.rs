mod import;
mod standard;

use super::domain::{OccupationCategory, OccupationRecord};
use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Failure while building a catalog from external data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read occupation catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid occupation catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid occupation catalog CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported catalog format '{0}', expected .json or .csv")]
    UnsupportedFormat(String),
    #[error("occupation code {0} appears more than once")]
    DuplicateCode(String),
    #[error("occupation {0} lists no essential qualifications")]
    MissingQualifications(String),
    #[error("occupation {0} has no minimum work experience")]
    MissingExperience(String),
    #[error("occupation {code} has unknown category '{category}'")]
    UnknownCategory { code: String, category: String },
}

/// Immutable occupation table, indexed by code and kept in load order.
#[derive(Debug, Clone)]
pub struct OccupationCatalog {
    records: Vec<OccupationRecord>,
    index: HashMap<String, usize>,
}

impl OccupationCatalog {
    /// Validates the records and derives their structured requirements.
    pub fn new(records: Vec<OccupationRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.code.as_str()) {
                return Err(CatalogError::DuplicateCode(record.code.clone()));
            }
            if record.qualifications.essential.is_empty() {
                return Err(CatalogError::MissingQualifications(record.code.clone()));
            }
            if record.work_experience.minimum.trim().is_empty() {
                return Err(CatalogError::MissingExperience(record.code.clone()));
            }
        }

        Ok(Self::assemble(records))
    }

    /// The embedded ANZSCO table shipped with the crate.
    pub fn standard() -> Self {
        Self::assemble(standard::standard_records())
    }

    /// Reads a JSON array of occupation records in the legacy field layout.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let records: Vec<OccupationRecord> = serde_json::from_reader(reader)?;
        Self::new(records)
    }

    /// Reads a flat CSV export; list columns are `;` separated.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        Self::new(import::parse_records(reader)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let catalog = match extension.as_str() {
            "json" => Self::from_json_reader(std::fs::File::open(path)?)?,
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?)?,
            _ => return Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        };

        debug!(path = %path.display(), occupations = catalog.len(), "occupation catalog loaded");
        Ok(catalog)
    }

    fn assemble(mut records: Vec<OccupationRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (position, record) in records.iter_mut().enumerate() {
            record.derive_requirements();
            if record.minimum_experience_years().is_none() {
                warn!(
                    code = %record.code,
                    minimum = %record.work_experience.minimum,
                    "work experience minimum has no leading year count; experience checks will fail"
                );
            }
            index.insert(record.code.clone(), position);
        }

        Self { records, index }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[OccupationRecord] {
        &self.records
    }

    pub fn get_occupation_by_code(&self, code: &str) -> Option<&OccupationRecord> {
        self.index
            .get(code)
            .and_then(|position| self.records.get(*position))
    }

    /// Case-insensitive substring match on titles, in catalog order.
    ///
    /// An empty term is a substring of every title and so returns the whole
    /// catalog; callers that expose this cap the result themselves.
    pub fn search_occupations_by_title(&self, term: &str) -> Vec<&OccupationRecord> {
        let needle = term.to_lowercase();
        self.records
            .iter()
            .filter(|record| record.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn get_occupations_by_category(
        &self,
        category: OccupationCategory,
    ) -> Vec<&OccupationRecord> {
        self.records
            .iter()
            .filter(|record| record.category == category)
            .collect()
    }

    /// Distinct categories in the order they first appear.
    pub fn get_all_categories(&self) -> Vec<OccupationCategory> {
        let mut categories = Vec::new();
        for record in &self.records {
            if !categories.contains(&record.category) {
                categories.push(record.category);
            }
        }
        categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupations::domain::{leading_years, EnglishTier, SkillsAssessment};
    use std::io::Cursor;

    fn assessment() -> SkillsAssessment {
        SkillsAssessment {
            assessing_authority: "VETASSESS".to_string(),
            requirements: vec!["Qualification evidence".to_string()],
            processing_time: "10 weeks".to_string(),
            cost: "AUD $1,000".to_string(),
        }
    }

    fn record(code: &str, essential: Vec<&str>, minimum: &str) -> OccupationRecord {
        OccupationRecord::new(
            code,
            format!("Occupation {code}"),
            OccupationCategory::Business,
            1,
            essential.into_iter().map(str::to_string).collect(),
            minimum,
            "6.0 overall",
            assessment(),
        )
    }

    #[test]
    fn standard_catalog_passes_validation() {
        let standard = OccupationCatalog::standard();
        let validated = OccupationCatalog::new(standard.records().to_vec())
            .expect("embedded catalog is valid");
        assert_eq!(validated.len(), standard.len());
        assert!(!standard.is_empty());
    }

    #[test]
    fn structured_requirements_match_legacy_heuristics() {
        let catalog = OccupationCatalog::standard();
        for record in catalog.records() {
            let legacy_minimum = record
                .work_experience
                .minimum
                .split_whitespace()
                .next()
                .and_then(|token| token.parse::<u32>().ok());
            assert_eq!(
                record.minimum_experience_years(),
                legacy_minimum,
                "minimum years for {}",
                record.code
            );
            assert_eq!(
                record.minimum_experience_years(),
                leading_years(&record.work_experience.minimum)
            );

            let legacy_native = record.english_requirements.ielts.contains("7.5");
            assert_eq!(
                record.english_tier() == EnglishTier::Native,
                legacy_native,
                "english tier for {}",
                record.code
            );
        }
    }

    #[test]
    fn rejects_duplicate_codes() {
        let error = OccupationCatalog::new(vec![
            record("111111", vec!["Bachelor degree"], "1 year"),
            record("111111", vec!["Bachelor degree"], "2 years"),
        ])
        .expect_err("duplicate codes rejected");
        assert!(matches!(error, CatalogError::DuplicateCode(code) if code == "111111"));
    }

    #[test]
    fn rejects_records_without_requirements() {
        let error = OccupationCatalog::new(vec![record("222222", Vec::new(), "1 year")])
            .expect_err("empty essentials rejected");
        assert!(matches!(error, CatalogError::MissingQualifications(_)));

        let error = OccupationCatalog::new(vec![record("333333", vec!["Diploma"], "  ")])
            .expect_err("blank minimum rejected");
        assert!(matches!(error, CatalogError::MissingExperience(_)));
    }

    #[test]
    fn keeps_unparseable_minimums_without_years() {
        let catalog =
            OccupationCatalog::new(vec![record("444444", vec!["Diploma"], "Relevant experience")])
                .expect("catalog builds");
        let occupation = catalog.get_occupation_by_code("444444").expect("present");
        assert_eq!(occupation.minimum_experience_years(), None);
    }

    #[test]
    fn json_reader_ignores_serialized_derived_fields() {
        let source = OccupationCatalog::standard();
        let json = serde_json::to_vec(source.records()).expect("serialize catalog");
        let reloaded = OccupationCatalog::from_json_reader(Cursor::new(json)).expect("reload");
        assert_eq!(reloaded.records(), source.records());
    }

    #[test]
    fn json_reader_rejects_unknown_categories() {
        let json = r#"[{
            "code": "999001",
            "title": "Astronaut",
            "category": "Space",
            "skillLevel": 1,
            "qualifications": { "essential": ["Bachelor of Science"] },
            "workExperience": { "minimum": "2 years" },
            "englishRequirements": { "IELTS": "7.0 in each band" },
            "skillsAssessment": {
                "assessingAuthority": "VETASSESS",
                "requirements": [],
                "processingTime": "12 weeks",
                "cost": "AUD $1,000"
            }
        }]"#;
        let error = OccupationCatalog::from_json_reader(Cursor::new(json))
            .expect_err("category outside the closed set");
        assert!(matches!(error, CatalogError::Json(_)));
    }

    #[test]
    fn from_path_rejects_unknown_extensions() {
        let error = OccupationCatalog::from_path("occupations.xlsx").expect_err("unsupported");
        assert!(matches!(error, CatalogError::UnsupportedFormat(_)));
    }
}
