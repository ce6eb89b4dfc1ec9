//! ANZSCO occupation catalog, eligibility evaluation and assessment planning.

pub mod advisor;
pub mod catalog;
pub mod checklist;
pub mod domain;
pub mod eligibility;
pub mod matching;
pub mod router;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use advisor::{ActionPlan, PathwayAdvisor};
pub use catalog::{CatalogError, OccupationCatalog};
pub use checklist::{generate_document_checklist, DocumentKind, DocumentRequirement};
pub use domain::{
    ClientProfile, EducationLevel, EnglishProficiency, EnglishTier, LanguageSkills,
    OccupationCategory, OccupationRecord, SkillsAssessment,
};
pub use eligibility::{
    check_skills_assessment_eligibility, evaluate_occupation, AxisChecks, EligibilityAxis,
    EligibilityOutcome, EligibilityResult, InvalidOccupation, NextStep, Recommendation,
    RecommendationPriority,
};
pub use matching::{calculate_match_score, match_client_to_anzsco, MatchCandidate, MatchProfile};
pub use router::occupation_router;
pub use timeline::{
    calculate_assessment_timeline, AssessmentTimeline, ClientReadiness, OutcomeWindow, WeekRange,
};
