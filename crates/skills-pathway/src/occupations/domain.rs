use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of occupation groupings used to pick checklist additions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OccupationCategory {
    Education,
    Trades,
    Health,
    Engineering,
    #[serde(rename = "ICT")]
    Ict,
    Business,
}

impl OccupationCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Education,
            Self::Trades,
            Self::Health,
            Self::Engineering,
            Self::Ict,
            Self::Business,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Education => "Education",
            Self::Trades => "Trades",
            Self::Health => "Health",
            Self::Engineering => "Engineering",
            Self::Ict => "ICT",
            Self::Business => "Business",
        }
    }

    /// Exact, case-sensitive match against [`label`](Self::label).
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.label() == value)
    }
}

impl fmt::Display for OccupationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// English band an occupation demands, derived once from the IELTS description.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnglishTier {
    #[default]
    Advanced,
    Native,
}

impl EnglishTier {
    /// A "7.5" anywhere in the band text marks the native-equivalent tier.
    pub fn from_ielts(ielts: &str) -> Self {
        if ielts.contains("7.5") {
            Self::Native
        } else {
            Self::Advanced
        }
    }

    pub const fn minimum_rank(self) -> u8 {
        match self {
            Self::Advanced => EnglishProficiency::Advanced.rank(),
            Self::Native => EnglishProficiency::Native.rank(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualifications {
    pub essential: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub minimum: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnglishRequirements {
    #[serde(rename = "IELTS")]
    pub ielts: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsAssessment {
    pub assessing_authority: String,
    pub requirements: Vec<String>,
    pub processing_time: String,
    pub cost: String,
}

/// Catalog entry keyed by its ANZSCO code.
///
/// The structured requirement fields are filled in when the record enters an
/// [`OccupationCatalog`](super::OccupationCatalog); they are never read from input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupationRecord {
    pub code: String,
    pub title: String,
    pub category: OccupationCategory,
    pub skill_level: u8,
    pub qualifications: Qualifications,
    pub work_experience: WorkExperience,
    pub english_requirements: EnglishRequirements,
    pub skills_assessment: SkillsAssessment,
    #[serde(skip_deserializing)]
    minimum_experience_years: Option<u32>,
    #[serde(skip_deserializing)]
    english_tier: EnglishTier,
}

impl OccupationRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        category: OccupationCategory,
        skill_level: u8,
        essential: Vec<String>,
        minimum_experience: impl Into<String>,
        ielts: impl Into<String>,
        skills_assessment: SkillsAssessment,
    ) -> Self {
        let mut record = Self {
            code: code.into(),
            title: title.into(),
            category,
            skill_level,
            qualifications: Qualifications { essential },
            work_experience: WorkExperience {
                minimum: minimum_experience.into(),
            },
            english_requirements: EnglishRequirements {
                ielts: ielts.into(),
            },
            skills_assessment,
            minimum_experience_years: None,
            english_tier: EnglishTier::default(),
        };
        record.derive_requirements();
        record
    }

    /// Years parsed from the leading token of `workExperience.minimum`.
    ///
    /// `None` when the text does not start with a number; the experience check
    /// then always fails.
    pub fn minimum_experience_years(&self) -> Option<u32> {
        self.minimum_experience_years
    }

    pub fn english_tier(&self) -> EnglishTier {
        self.english_tier
    }

    pub(crate) fn derive_requirements(&mut self) {
        self.minimum_experience_years = leading_years(&self.work_experience.minimum);
        self.english_tier = EnglishTier::from_ielts(&self.english_requirements.ielts);
    }
}

/// Leading digits of the first whitespace token, e.g. `"3+ years"` -> `3`.
pub(crate) fn leading_years(minimum: &str) -> Option<u32> {
    let token = minimum.split_whitespace().next()?;
    let digits: String = token.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Ordinal education scale. Unrecognised labels rank below every level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "High School")]
    HighSchool,
    #[serde(rename = "Diploma/Certificate")]
    DiplomaCertificate,
    #[serde(rename = "Bachelor's Degree")]
    Bachelor,
    #[serde(rename = "Professional Degree")]
    Professional,
    #[serde(rename = "Master's Degree")]
    Master,
    #[serde(rename = "PhD/Doctorate")]
    Doctorate,
}

impl EducationLevel {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::HighSchool,
            Self::DiplomaCertificate,
            Self::Bachelor,
            Self::Professional,
            Self::Master,
            Self::Doctorate,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::DiplomaCertificate => "Diploma/Certificate",
            Self::Bachelor => "Bachelor's Degree",
            Self::Professional => "Professional Degree",
            Self::Master => "Master's Degree",
            Self::Doctorate => "PhD/Doctorate",
        }
    }

    pub const fn rank(self) -> u8 {
        match self {
            Self::HighSchool => 1,
            Self::DiplomaCertificate => 2,
            Self::Bachelor => 3,
            Self::Professional | Self::Master => 4,
            Self::Doctorate => 5,
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|level| level.label() == value)
    }

    pub fn rank_of(value: &str) -> u8 {
        Self::from_label(value).map(Self::rank).unwrap_or(0)
    }
}

/// Ordinal English proficiency scale, `None` through `Native`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnglishProficiency {
    None,
    Basic,
    Intermediate,
    Advanced,
    Native,
}

impl EnglishProficiency {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::None,
            Self::Basic,
            Self::Intermediate,
            Self::Advanced,
            Self::Native,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Basic => "Basic",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Native => "Native",
        }
    }

    pub const fn rank(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Basic => 1,
            Self::Intermediate => 2,
            Self::Advanced => 3,
            Self::Native => 4,
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|level| level.label() == value)
    }

    pub fn rank_of(value: &str) -> u8 {
        Self::from_label(value).map(Self::rank).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageSkills {
    #[serde(default)]
    pub english: Option<String>,
}

/// Client details captured on the intake form. Labels stay free text so that
/// values outside the known scales still evaluate (ranking as 0).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientProfile {
    #[serde(default)]
    pub education_level: Option<String>,
    #[serde(default)]
    pub work_experience_years: Option<f64>,
    #[serde(default)]
    pub language_skills: Option<LanguageSkills>,
}

impl ClientProfile {
    pub fn new(
        education_level: impl Into<String>,
        work_experience_years: f64,
        english: impl Into<String>,
    ) -> Self {
        Self {
            education_level: Some(education_level.into()),
            work_experience_years: Some(work_experience_years),
            language_skills: Some(LanguageSkills {
                english: Some(english.into()),
            }),
        }
    }

    pub(crate) fn supplied_education(&self) -> Option<&str> {
        self.education_level
            .as_deref()
            .filter(|value| !value.is_empty())
    }

    /// Zero years counts as not supplied.
    pub(crate) fn supplied_experience(&self) -> Option<f64> {
        self.work_experience_years.filter(|years| *years > 0.0)
    }

    pub(crate) fn supplied_english(&self) -> Option<&str> {
        self.language_skills
            .as_ref()
            .and_then(|skills| skills.english.as_deref())
            .filter(|value| !value.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_years_reads_digits_of_first_token() {
        assert_eq!(leading_years("3 years full-time"), Some(3));
        assert_eq!(leading_years("1 year"), Some(1));
        assert_eq!(leading_years("5+ years"), Some(5));
        assert_eq!(leading_years("Three years"), None);
        assert_eq!(leading_years(""), None);
    }

    #[test]
    fn english_tier_keys_off_seven_point_five() {
        assert_eq!(
            EnglishTier::from_ielts("7.5 overall (minimum 7.0 in each band)"),
            EnglishTier::Native
        );
        assert_eq!(EnglishTier::from_ielts("7.0 in each band"), EnglishTier::Advanced);
        assert_eq!(EnglishTier::Native.minimum_rank(), 4);
        assert_eq!(EnglishTier::Advanced.minimum_rank(), 3);
    }

    #[test]
    fn unknown_labels_rank_zero() {
        assert_eq!(EducationLevel::rank_of("Certificate III"), 0);
        assert_eq!(EducationLevel::rank_of("Master's Degree"), 4);
        assert_eq!(EducationLevel::rank_of("Professional Degree"), 4);
        assert_eq!(EnglishProficiency::rank_of("Fluent"), 0);
        assert_eq!(EnglishProficiency::rank_of("Native"), 4);
    }

    #[test]
    fn profile_treats_blank_and_zero_as_absent() {
        let profile = ClientProfile::new("", 0.0, "");
        assert!(profile.supplied_education().is_none());
        assert!(profile.supplied_experience().is_none());
        assert!(profile.supplied_english().is_none());
    }

    #[test]
    fn category_labels_round_trip() {
        for category in OccupationCategory::ordered() {
            assert_eq!(OccupationCategory::from_label(category.label()), Some(category));
        }
        assert_eq!(OccupationCategory::from_label("trades"), None);
    }
}
