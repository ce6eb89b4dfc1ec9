use super::catalog::OccupationCatalog;
use super::domain::{OccupationCategory, OccupationRecord};
use serde::Serialize;

/// Names of the documents every applicant provides, in checklist order.
pub const BASELINE_DOCUMENTS: [&str; 6] = [
    "Passport",
    "Birth Certificate",
    "Academic Transcripts",
    "Degree/Diploma Certificates",
    "Employment References",
    "CV/Resume",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Identity,
    Education,
    Employment,
    Registration,
    Language,
    Trade,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRequirement {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub required: bool,
    pub description: String,
}

impl DocumentRequirement {
    fn required(name: &'static str, kind: DocumentKind, description: impl Into<String>) -> Self {
        Self {
            name,
            kind,
            required: true,
            description: description.into(),
        }
    }

    fn optional(name: &'static str, kind: DocumentKind, description: impl Into<String>) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind, description)
        }
    }
}

/// Checklist for the occupation under `occupation_code`; empty when the code is unknown.
pub fn generate_document_checklist(
    catalog: &OccupationCatalog,
    occupation_code: &str,
) -> Vec<DocumentRequirement> {
    catalog
        .get_occupation_by_code(occupation_code)
        .map(checklist_for)
        .unwrap_or_default()
}

pub fn checklist_for(occupation: &OccupationRecord) -> Vec<DocumentRequirement> {
    let mut documents = baseline_documents();
    documents.extend(category_documents(occupation));
    documents
}

fn baseline_documents() -> Vec<DocumentRequirement> {
    let [passport, birth, transcripts, certificates, references, resume] = BASELINE_DOCUMENTS;
    vec![
        DocumentRequirement::required(
            passport,
            DocumentKind::Identity,
            "Current passport bio-data page",
        ),
        DocumentRequirement::required(
            birth,
            DocumentKind::Identity,
            "Full birth certificate showing both parents' names",
        ),
        DocumentRequirement::required(
            transcripts,
            DocumentKind::Education,
            "Official transcripts for every completed qualification",
        ),
        DocumentRequirement::required(
            certificates,
            DocumentKind::Education,
            "Award certificates for each qualification claimed",
        ),
        DocumentRequirement::required(
            references,
            DocumentKind::Employment,
            "Signed references on company letterhead listing duties, hours and dates",
        ),
        DocumentRequirement::required(
            resume,
            DocumentKind::Employment,
            "Chronological CV covering education and employment history",
        ),
    ]
}

fn category_documents(occupation: &OccupationRecord) -> Vec<DocumentRequirement> {
    match occupation.category {
        OccupationCategory::Education => vec![
            DocumentRequirement::required(
                "Teaching Registration",
                DocumentKind::Registration,
                "Registration or eligibility letter from a teacher registration authority",
            ),
            DocumentRequirement::required(
                "English Language Test Results",
                DocumentKind::Language,
                format!(
                    "Academic test results meeting IELTS {}",
                    occupation.english_requirements.ielts
                ),
            ),
            DocumentRequirement::required(
                "Curriculum Vitae (Teaching)",
                DocumentKind::Employment,
                "Teaching CV listing schools, year levels and supervised practice days",
            ),
        ],
        OccupationCategory::Trades => vec![
            DocumentRequirement::required(
                "Trade Qualification Certificate",
                DocumentKind::Trade,
                "Certificate for the trade qualification being assessed",
            ),
            DocumentRequirement::required(
                "Trade License",
                DocumentKind::Trade,
                "Current or previous licence to practise the trade",
            ),
            DocumentRequirement::required(
                "Apprenticeship Records",
                DocumentKind::Trade,
                "Indenture papers or training contract for the apprenticeship",
            ),
            DocumentRequirement::optional(
                "Skills Logbook",
                DocumentKind::Trade,
                "Workplace logbook or photos evidencing the tasks performed",
            ),
        ],
        OccupationCategory::Health
        | OccupationCategory::Engineering
        | OccupationCategory::Ict
        | OccupationCategory::Business => Vec::new(),
    }
}
