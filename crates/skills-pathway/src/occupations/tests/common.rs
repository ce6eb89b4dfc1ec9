use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::occupations::advisor::PathwayAdvisor;
use crate::occupations::catalog::OccupationCatalog;
use crate::occupations::domain::{ClientProfile, LanguageSkills};
use crate::occupations::router::occupation_router;

pub(super) const PLUMBER: &str = "334111";
pub(super) const EARLY_CHILDHOOD_TEACHER: &str = "241111";
pub(super) const SOFTWARE_ENGINEER: &str = "261313";
pub(super) const REGISTERED_NURSE: &str = "254418";
pub(super) const UNKNOWN_CODE: &str = "999999";

pub(super) fn catalog() -> OccupationCatalog {
    OccupationCatalog::standard()
}

pub(super) fn advisor() -> PathwayAdvisor {
    PathwayAdvisor::new(Arc::new(catalog()), 25)
}

pub(super) fn router() -> axum::Router {
    occupation_router(Arc::new(advisor()))
}

/// Meets every plumber requirement.
pub(super) fn qualified_tradesperson() -> ClientProfile {
    ClientProfile::new("Diploma/Certificate", 4.0, "Advanced")
}

pub(super) fn apprentice_plumber() -> ClientProfile {
    ClientProfile::new("Certificate III", 1.0, "Basic")
}

pub(super) fn profile_without_english(education: &str, years: f64) -> ClientProfile {
    ClientProfile {
        education_level: Some(education.to_string()),
        work_experience_years: Some(years),
        language_skills: Some(LanguageSkills { english: None }),
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
