use super::catalog::OccupationCatalog;
use super::domain::OccupationRecord;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

const PREPARATION: WeekRange = WeekRange::new(4, 8);
const PREPARATION_WITH_DOCUMENTS: WeekRange = WeekRange::new(2, 4);
const TOTAL: WeekRange = WeekRange::new(16, 24);
const TOTAL_WITH_DOCUMENTS: WeekRange = WeekRange::new(14, 20);

const ENGLISH_TEST_COST: &str = "AUD $300-400";
const ENGLISH_TEST_COST_WAIVED: &str = "AUD $0";
const TRANSLATION_COST: &str = "AUD $200-500";
const TOTAL_COST: &str = "AUD $1,700-2,700";
const TOTAL_COST_WITHOUT_TEST: &str = "AUD $1,400-2,300";

/// Inclusive span of weeks, rendered as `"4-8 weeks"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub min_weeks: u32,
    pub max_weeks: u32,
}

impl WeekRange {
    pub const fn new(min_weeks: u32, max_weeks: u32) -> Self {
        Self {
            min_weeks,
            max_weeks,
        }
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} weeks", self.min_weeks, self.max_weeks)
    }
}

impl Serialize for WeekRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Hints from the client that shorten the estimate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientReadiness {
    #[serde(default)]
    pub has_documents: bool,
    #[serde(default)]
    pub has_english_test: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePhases {
    pub preparation: WeekRange,
    pub assessment: String,
    pub total: WeekRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub assessment: String,
    pub english_test: &'static str,
    pub document_translation: &'static str,
    pub total: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub phase: &'static str,
    pub duration: String,
    pub tasks: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentTimeline {
    pub timeline: TimelinePhases,
    pub costs: CostBreakdown,
    pub milestones: Vec<Milestone>,
}

/// Calendar window in which an outcome can be expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutcomeWindow {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

impl AssessmentTimeline {
    /// Projects the total estimate onto the calendar from `start`.
    pub fn projected_outcome(&self, start: NaiveDate) -> OutcomeWindow {
        let total = self.timeline.total;
        OutcomeWindow {
            earliest: start + Duration::weeks(i64::from(total.min_weeks)),
            latest: start + Duration::weeks(i64::from(total.max_weeks)),
        }
    }
}

/// Timeline for the occupation under `occupation_code`; `None` when unknown.
pub fn calculate_assessment_timeline(
    catalog: &OccupationCatalog,
    occupation_code: &str,
    readiness: ClientReadiness,
) -> Option<AssessmentTimeline> {
    catalog
        .get_occupation_by_code(occupation_code)
        .map(|occupation| timeline_for(occupation, readiness))
}

pub fn timeline_for(occupation: &OccupationRecord, readiness: ClientReadiness) -> AssessmentTimeline {
    let assessment = &occupation.skills_assessment;

    let (preparation, total) = if readiness.has_documents {
        (PREPARATION_WITH_DOCUMENTS, TOTAL_WITH_DOCUMENTS)
    } else {
        (PREPARATION, TOTAL)
    };
    let (english_test, total_cost) = if readiness.has_english_test {
        (ENGLISH_TEST_COST_WAIVED, TOTAL_COST_WITHOUT_TEST)
    } else {
        (ENGLISH_TEST_COST, TOTAL_COST)
    };

    AssessmentTimeline {
        timeline: TimelinePhases {
            preparation,
            assessment: assessment.processing_time.clone(),
            total,
        },
        costs: CostBreakdown {
            assessment: assessment.cost.clone(),
            english_test,
            document_translation: TRANSLATION_COST,
            total: total_cost,
        },
        milestones: vec![
            Milestone {
                phase: "Document Preparation",
                duration: preparation.to_string(),
                tasks: vec![
                    "Gather identity documents",
                    "Obtain certified copies of qualifications",
                    "Collect employment references",
                    "Arrange translations of non-English documents",
                ],
            },
            Milestone {
                phase: "Application Submission",
                duration: "1 week".to_string(),
                tasks: vec![
                    "Complete the online application",
                    "Upload supporting documents",
                    "Pay the assessment fee",
                ],
            },
            Milestone {
                phase: "Assessment Processing",
                duration: assessment.processing_time.clone(),
                tasks: vec![
                    "Respond to requests for further information",
                    "Attend interviews or practical assessments if required",
                ],
            },
            Milestone {
                phase: "Outcome",
                duration: "1-2 weeks".to_string(),
                tasks: vec![
                    "Receive the assessment outcome letter",
                    "Plan the visa application",
                ],
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn week_ranges_render_as_display_strings() {
        assert_eq!(PREPARATION.to_string(), "4-8 weeks");
        assert_eq!(
            serde_json::to_value(TOTAL_WITH_DOCUMENTS).expect("serialize"),
            serde_json::json!("14-20 weeks")
        );
    }

    #[test]
    fn readiness_flags_accept_camel_case_and_default_false() {
        let readiness: ClientReadiness =
            serde_json::from_str(r#"{"hasDocuments": true}"#).expect("parse readiness");
        assert!(readiness.has_documents);
        assert!(!readiness.has_english_test);
    }
}
