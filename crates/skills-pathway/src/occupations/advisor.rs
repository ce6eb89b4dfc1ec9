use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use super::catalog::OccupationCatalog;
use super::checklist::{checklist_for, DocumentRequirement};
use super::domain::{ClientProfile, OccupationCategory, OccupationRecord};
use super::eligibility::{
    check_skills_assessment_eligibility, evaluate_occupation, EligibilityOutcome,
    EligibilityResult,
};
use super::matching::{match_client_to_anzsco, MatchCandidate, MatchProfile};
use super::timeline::{timeline_for, AssessmentTimeline, ClientReadiness, OutcomeWindow};

/// Everything a consultant needs once an occupation has been chosen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan<'a> {
    pub occupation: &'a OccupationRecord,
    pub prepared_on: NaiveDate,
    pub eligibility: EligibilityResult,
    pub checklist: Vec<DocumentRequirement>,
    pub timeline: AssessmentTimeline,
    pub projected_outcome: OutcomeWindow,
}

/// Shared entry point over one immutable catalog, with result caps applied.
pub struct PathwayAdvisor {
    catalog: Arc<OccupationCatalog>,
    search_limit: usize,
}

impl PathwayAdvisor {
    pub fn new(catalog: Arc<OccupationCatalog>, search_limit: usize) -> Self {
        info!(
            occupations = catalog.len(),
            search_limit, "pathway advisor ready"
        );
        Self {
            catalog,
            search_limit,
        }
    }

    pub fn catalog(&self) -> &OccupationCatalog {
        &self.catalog
    }

    pub fn search_limit(&self) -> usize {
        self.search_limit
    }

    /// Title and category filters combined. A missing or empty term matches every
    /// title; an unrecognised category label matches nothing.
    pub fn search(&self, term: Option<&str>, category: Option<&str>) -> Vec<&OccupationRecord> {
        let category = match category {
            Some(label) => match OccupationCategory::from_label(label) {
                Some(category) => Some(category),
                None => return Vec::new(),
            },
            None => None,
        };

        self.catalog
            .search_occupations_by_title(term.unwrap_or_default())
            .into_iter()
            .filter(|record| category.map_or(true, |wanted| record.category == wanted))
            .take(self.search_limit)
            .collect()
    }

    pub fn evaluate(&self, profile: &ClientProfile, occupation_code: &str) -> EligibilityOutcome {
        check_skills_assessment_eligibility(&self.catalog, profile, occupation_code)
    }

    pub fn match_client(
        &self,
        client_occupation: &str,
        profile: Option<&MatchProfile>,
    ) -> Vec<MatchCandidate<'_>> {
        let mut candidates = match_client_to_anzsco(&self.catalog, client_occupation, profile);
        candidates.truncate(self.search_limit);
        candidates
    }

    pub fn checklist(&self, occupation_code: &str) -> Option<Vec<DocumentRequirement>> {
        self.catalog
            .get_occupation_by_code(occupation_code)
            .map(checklist_for)
    }

    pub fn timeline(
        &self,
        occupation_code: &str,
        readiness: ClientReadiness,
    ) -> Option<AssessmentTimeline> {
        self.catalog
            .get_occupation_by_code(occupation_code)
            .map(|occupation| timeline_for(occupation, readiness))
    }

    pub fn plan(
        &self,
        profile: &ClientProfile,
        occupation_code: &str,
        readiness: ClientReadiness,
        prepared_on: NaiveDate,
    ) -> Option<ActionPlan<'_>> {
        let occupation = self.catalog.get_occupation_by_code(occupation_code)?;
        let timeline = timeline_for(occupation, readiness);
        let projected_outcome = timeline.projected_outcome(prepared_on);

        Some(ActionPlan {
            occupation,
            prepared_on,
            eligibility: evaluate_occupation(profile, occupation),
            checklist: checklist_for(occupation),
            timeline,
            projected_outcome,
        })
    }
}
