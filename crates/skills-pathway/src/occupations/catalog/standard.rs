use crate::occupations::domain::{OccupationCategory, OccupationRecord, SkillsAssessment};

struct StandardOccupation {
    code: &'static str,
    title: &'static str,
    category: OccupationCategory,
    skill_level: u8,
    essential: &'static [&'static str],
    minimum_experience: &'static str,
    ielts: &'static str,
    assessing_authority: &'static str,
    requirements: &'static [&'static str],
    processing_time: &'static str,
    cost: &'static str,
}

impl StandardOccupation {
    fn to_record(&self) -> OccupationRecord {
        OccupationRecord::new(
            self.code,
            self.title,
            self.category,
            self.skill_level,
            owned(self.essential),
            self.minimum_experience,
            self.ielts,
            SkillsAssessment {
                assessing_authority: self.assessing_authority.to_string(),
                requirements: owned(self.requirements),
                processing_time: self.processing_time.to_string(),
                cost: self.cost.to_string(),
            },
        )
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn standard_records() -> Vec<OccupationRecord> {
    STANDARD_OCCUPATIONS
        .iter()
        .map(StandardOccupation::to_record)
        .collect()
}

const TEACHER_IELTS: &str = "7.5 overall (minimum 7.0 in Reading and Writing, 8.0 in Speaking and Listening)";
const TRADE_IELTS: &str = "6.0 overall (minimum 5.5 in each band)";

const STANDARD_OCCUPATIONS: &[StandardOccupation] = &[
    StandardOccupation {
        code: "241111",
        title: "Early Childhood (Pre-primary School) Teacher",
        category: OccupationCategory::Education,
        skill_level: 1,
        essential: &[
            "Bachelor of Education (Early Childhood)",
            "Postgraduate Diploma in Early Childhood Education",
        ],
        minimum_experience: "1 year full-time teaching experience",
        ielts: TEACHER_IELTS,
        assessing_authority: "AITSL",
        requirements: &[
            "Four years of full-time higher education study",
            "At least 45 days of supervised teaching practice with children aged 0-8",
            "Academic English test completed within the last two years",
        ],
        processing_time: "12 weeks",
        cost: "AUD $1,000",
    },
    StandardOccupation {
        code: "241213",
        title: "Primary School Teacher",
        category: OccupationCategory::Education,
        skill_level: 1,
        essential: &[
            "Bachelor of Education (Primary)",
            "Postgraduate teaching qualification with a primary specialisation",
        ],
        minimum_experience: "1 year full-time teaching experience",
        ielts: TEACHER_IELTS,
        assessing_authority: "AITSL",
        requirements: &[
            "Four years of full-time higher education study",
            "At least 45 days of supervised teaching practice in primary schools",
            "Academic English test completed within the last two years",
        ],
        processing_time: "12 weeks",
        cost: "AUD $1,000",
    },
    StandardOccupation {
        code: "241411",
        title: "Secondary School Teacher",
        category: OccupationCategory::Education,
        skill_level: 1,
        essential: &[
            "Bachelor degree with a secondary teaching specialisation",
            "Master of Teaching (Secondary)",
        ],
        minimum_experience: "1 year full-time teaching experience",
        ielts: TEACHER_IELTS,
        assessing_authority: "AITSL",
        requirements: &[
            "Four years of full-time higher education study",
            "At least 45 days of supervised teaching practice in secondary schools",
            "Academic English test completed within the last two years",
        ],
        processing_time: "12 weeks",
        cost: "AUD $1,000",
    },
    StandardOccupation {
        code: "334111",
        title: "Plumber (General)",
        category: OccupationCategory::Trades,
        skill_level: 3,
        essential: &[
            "Certificate III in Plumbing",
            "Equivalent overseas trade qualification",
        ],
        minimum_experience: "3 years full-time post-qualification experience",
        ielts: TRADE_IELTS,
        assessing_authority: "TRA (Trades Recognition Australia)",
        requirements: &[
            "Documentary evidence of paid employment in the trade",
            "Technical interview with a registered training organisation",
            "Practical assessment of plumbing competencies",
        ],
        processing_time: "8-12 weeks",
        cost: "AUD $1,200",
    },
    StandardOccupation {
        code: "341111",
        title: "Electrician (General)",
        category: OccupationCategory::Trades,
        skill_level: 3,
        essential: &[
            "Certificate III in Electrotechnology Electrician",
            "Overseas electrical trade qualification eligible for an Australian licence",
        ],
        minimum_experience: "3 years full-time post-qualification experience",
        ielts: TRADE_IELTS,
        assessing_authority: "TRA (Trades Recognition Australia)",
        requirements: &[
            "Documentary evidence of paid employment in the trade",
            "Technical interview and practical assessment",
            "Provisional licence application with the state electrical regulator",
        ],
        processing_time: "10-14 weeks",
        cost: "AUD $1,350",
    },
    StandardOccupation {
        code: "331212",
        title: "Carpenter",
        category: OccupationCategory::Trades,
        skill_level: 3,
        essential: &[
            "Certificate III in Carpentry",
            "Equivalent overseas trade qualification",
        ],
        minimum_experience: "3 years full-time post-qualification experience",
        ielts: TRADE_IELTS,
        assessing_authority: "TRA (Trades Recognition Australia)",
        requirements: &[
            "Documentary evidence of paid employment in the trade",
            "Technical interview with a registered training organisation",
            "Practical assessment of carpentry competencies",
        ],
        processing_time: "8-12 weeks",
        cost: "AUD $1,200",
    },
    StandardOccupation {
        code: "321211",
        title: "Motor Mechanic (General)",
        category: OccupationCategory::Trades,
        skill_level: 3,
        essential: &[
            "Certificate III in Light Vehicle Mechanical Technology",
            "Equivalent overseas trade qualification",
        ],
        minimum_experience: "3 years full-time post-qualification experience",
        ielts: TRADE_IELTS,
        assessing_authority: "TRA (Trades Recognition Australia)",
        requirements: &[
            "Documentary evidence of paid employment in the trade",
            "Technical interview with a registered training organisation",
        ],
        processing_time: "8-12 weeks",
        cost: "AUD $1,200",
    },
    StandardOccupation {
        code: "351311",
        title: "Chef",
        category: OccupationCategory::Trades,
        skill_level: 2,
        essential: &[
            "Certificate IV in Commercial Cookery",
            "Equivalent overseas commercial cookery qualification",
        ],
        minimum_experience: "2 years full-time experience as a chef",
        ielts: "6.0 overall (minimum 5.0 in each band)",
        assessing_authority: "TRA (Trades Recognition Australia)",
        requirements: &[
            "Documentary evidence of paid employment in commercial kitchens",
            "Technical interview and practical cookery assessment",
        ],
        processing_time: "8-12 weeks",
        cost: "AUD $1,200",
    },
    StandardOccupation {
        code: "254418",
        title: "Registered Nurse (Medical)",
        category: OccupationCategory::Health,
        skill_level: 1,
        essential: &["Bachelor of Nursing or an equivalent overseas nursing degree"],
        minimum_experience: "1 year post-registration clinical experience",
        ielts: "7.0 in each band",
        assessing_authority: "ANMAC",
        requirements: &[
            "Current registration with the Nursing and Midwifery Board of Australia",
            "Evidence of clinical practice hours",
        ],
        processing_time: "12-16 weeks",
        cost: "AUD $595",
    },
    StandardOccupation {
        code: "261313",
        title: "Software Engineer",
        category: OccupationCategory::Ict,
        skill_level: 1,
        essential: &[
            "Bachelor degree with an ICT major",
            "Master degree with an ICT major",
        ],
        minimum_experience: "2 years relevant post-qualification experience",
        ielts: "6.0 overall (minimum 6.0 in each band)",
        assessing_authority: "ACS (Australian Computer Society)",
        requirements: &[
            "Qualification closely related to the nominated occupation",
            "Employment references describing duties and hours",
        ],
        processing_time: "8-12 weeks",
        cost: "AUD $1,340",
    },
    StandardOccupation {
        code: "233211",
        title: "Civil Engineer",
        category: OccupationCategory::Engineering,
        skill_level: 1,
        essential: &[
            "Bachelor of Engineering (Civil) accredited under the Washington Accord",
            "Master of Engineering (Civil)",
        ],
        minimum_experience: "1 year post-qualification experience",
        ielts: "6.0 overall (minimum 6.0 in each band)",
        assessing_authority: "Engineers Australia",
        requirements: &[
            "Competency Demonstration Report with three career episodes",
            "Continuing professional development listing",
        ],
        processing_time: "12-16 weeks",
        cost: "AUD $1,040",
    },
    StandardOccupation {
        code: "221111",
        title: "Accountant (General)",
        category: OccupationCategory::Business,
        skill_level: 1,
        essential: &[
            "Bachelor degree in Accounting",
            "Postgraduate qualification in Accounting",
        ],
        minimum_experience: "1 year professional accounting experience",
        ielts: "7.0 in each band",
        assessing_authority: "CPA Australia",
        requirements: &[
            "Qualification covering the nine core accounting knowledge areas",
            "Academic transcripts with subject descriptions",
        ],
        processing_time: "8-10 weeks",
        cost: "AUD $550",
    },
];
