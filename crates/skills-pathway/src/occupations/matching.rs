use super::catalog::OccupationCatalog;
use super::domain::{ClientProfile, EnglishProficiency, LanguageSkills, OccupationRecord};
use super::eligibility::evaluate_occupation;
use serde::{Deserialize, Serialize};

/// Client details used when ranking free-text matches. English is not captured
/// here; matching assumes an `Advanced` speaker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchProfile {
    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default)]
    pub experience_years: Option<f64>,
}

impl MatchProfile {
    fn as_client_profile(&self) -> ClientProfile {
        ClientProfile {
            education_level: self.education_level.clone(),
            work_experience_years: self.experience_years,
            language_skills: Some(LanguageSkills {
                english: Some(EnglishProficiency::Advanced.label().to_string()),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate<'a> {
    pub occupation: &'a OccupationRecord,
    pub match_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligible: Option<bool>,
}

/// Percentage of tokens that overlap by substring containment in either direction,
/// measured against the longer of the two token lists.
pub fn calculate_match_score(client_occupation: &str, title: &str) -> f64 {
    let input_tokens = tokenize(client_occupation);
    let title_tokens = tokenize(title);
    let denominator = input_tokens.len().max(title_tokens.len());
    if denominator == 0 {
        return 0.0;
    }

    let matches = input_tokens
        .iter()
        .filter(|input| {
            title_tokens
                .iter()
                .any(|title| title.contains(input.as_str()) || input.contains(title.as_str()))
        })
        .count();

    matches as f64 / denominator as f64 * 100.0
}

fn tokenize(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_lowercase).collect()
}

/// Ranks title-search candidates: eligible first, then by score, then catalog order.
pub fn match_client_to_anzsco<'a>(
    catalog: &'a OccupationCatalog,
    client_occupation: &str,
    profile: Option<&MatchProfile>,
) -> Vec<MatchCandidate<'a>> {
    let client_profile = profile.map(MatchProfile::as_client_profile);

    let mut candidates: Vec<MatchCandidate<'a>> = catalog
        .search_occupations_by_title(client_occupation)
        .into_iter()
        .map(|occupation| MatchCandidate {
            occupation,
            match_score: calculate_match_score(client_occupation, &occupation.title),
            eligible: client_profile
                .as_ref()
                .map(|client| evaluate_occupation(client, occupation).eligible),
        })
        .collect();

    candidates.sort_by(|left, right| {
        right
            .eligible
            .unwrap_or(false)
            .cmp(&left.eligible.unwrap_or(false))
            .then_with(|| right.match_score.total_cmp(&left.match_score))
    });

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_title_overlap_scores_between_bounds() {
        let score = calculate_match_score("Plumber", "Plumber (General)");
        assert!(score > 0.0 && score <= 100.0);
        assert_eq!(score, 50.0);
    }

    #[test]
    fn unrelated_text_scores_zero() {
        assert_eq!(calculate_match_score("Zzqx", "Plumber (General)"), 0.0);
    }

    #[test]
    fn containment_works_in_both_directions() {
        assert_eq!(calculate_match_score("engineering", "Civil Engineer"), 50.0);
        assert_eq!(calculate_match_score("chef", "Chef"), 100.0);
        assert_eq!(calculate_match_score("  ", ""), 0.0);
    }
}
