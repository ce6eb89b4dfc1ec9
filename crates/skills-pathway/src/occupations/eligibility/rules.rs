use super::EligibilityAxis;
use crate::occupations::domain::{
    ClientProfile, EducationLevel, EnglishProficiency, EnglishTier, OccupationRecord,
};

/// `None` when the client did not supply the field the axis needs.
pub(super) fn evaluate_axis(
    axis: EligibilityAxis,
    profile: &ClientProfile,
    occupation: &OccupationRecord,
) -> Option<bool> {
    match axis {
        EligibilityAxis::Qualification => profile.supplied_education().map(|education| {
            qualification_satisfied(
                EducationLevel::rank_of(education),
                &occupation.qualifications.essential,
            )
        }),
        EligibilityAxis::Experience => profile
            .supplied_experience()
            .map(|years| experience_satisfied(years, occupation.minimum_experience_years())),
        EligibilityAxis::English => profile.supplied_english().map(|english| {
            english_satisfied(EnglishProficiency::rank_of(english), occupation.english_tier())
        }),
    }
}

/// Rank an essential-qualification descriptor demands. The first keyword that
/// appears wins; descriptors without a keyword demand nothing.
pub(crate) fn required_education_rank(descriptor: &str) -> Option<u8> {
    if descriptor.contains("Certificate III") || descriptor.contains("Certificate IV") {
        Some(EducationLevel::DiplomaCertificate.rank())
    } else if descriptor.contains("Bachelor") {
        Some(EducationLevel::Bachelor.rank())
    } else if descriptor.contains("Postgraduate") || descriptor.contains("Master") {
        Some(EducationLevel::Master.rank())
    } else {
        None
    }
}

fn qualification_satisfied(education_rank: u8, essential: &[String]) -> bool {
    essential.iter().any(|descriptor| {
        required_education_rank(descriptor)
            .map(|required| education_rank >= required)
            .unwrap_or(true)
    })
}

fn experience_satisfied(years: f64, minimum: Option<u32>) -> bool {
    minimum
        .map(|minimum| years >= f64::from(minimum))
        .unwrap_or(false)
}

fn english_satisfied(english_rank: u8, tier: EnglishTier) -> bool {
    english_rank >= tier.minimum_rank()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn essentials(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn keyword_ranks_follow_first_match() {
        assert_eq!(required_education_rank("Certificate III in Plumbing"), Some(2));
        assert_eq!(required_education_rank("Certificate IV in Commercial Cookery"), Some(2));
        assert_eq!(required_education_rank("Bachelor of Nursing"), Some(3));
        assert_eq!(required_education_rank("Master of Teaching"), Some(4));
        assert_eq!(required_education_rank("Postgraduate Diploma"), Some(4));
        assert_eq!(required_education_rank("Bachelor or Master degree"), Some(3));
        assert_eq!(required_education_rank("bachelor degree"), None);
        assert_eq!(required_education_rank("Relevant trade licence"), None);
    }

    #[test]
    fn any_satisfied_descriptor_passes() {
        let list = essentials(&["Master of Engineering", "Bachelor of Engineering"]);
        assert!(qualification_satisfied(3, &list));
        assert!(!qualification_satisfied(2, &list));

        let open = essentials(&["Certificate III in Carpentry", "Equivalent overseas trade qualification"]);
        assert!(qualification_satisfied(0, &open));
    }

    #[test]
    fn experience_without_parsed_minimum_always_fails() {
        assert!(experience_satisfied(3.0, Some(3)));
        assert!(!experience_satisfied(2.5, Some(3)));
        assert!(!experience_satisfied(40.0, None));
    }

    #[test]
    fn english_tiers_set_the_threshold() {
        assert!(english_satisfied(3, EnglishTier::Advanced));
        assert!(!english_satisfied(3, EnglishTier::Native));
        assert!(english_satisfied(4, EnglishTier::Native));
        assert!(!english_satisfied(2, EnglishTier::Advanced));
    }
}
