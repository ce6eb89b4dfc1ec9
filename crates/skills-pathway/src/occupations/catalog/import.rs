use super::CatalogError;
use crate::occupations::domain::{OccupationCategory, OccupationRecord, SkillsAssessment};
use serde::{Deserialize, Deserializer};
use std::io::Read;

const LIST_SEPARATOR: char = ';';

pub(super) fn parse_records<R: Read>(reader: R) -> Result<Vec<OccupationRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<OccupationRow>() {
        records.push(row?.into_record()?);
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct OccupationRow {
    code: String,
    title: String,
    category: String,
    skill_level: u8,
    #[serde(deserialize_with = "split_list")]
    essential_qualifications: Vec<String>,
    minimum_experience: String,
    ielts: String,
    assessing_authority: String,
    #[serde(default, deserialize_with = "split_list")]
    assessment_requirements: Vec<String>,
    processing_time: String,
    cost: String,
}

impl OccupationRow {
    fn into_record(self) -> Result<OccupationRecord, CatalogError> {
        let category = OccupationCategory::from_label(&self.category).ok_or_else(|| {
            CatalogError::UnknownCategory {
                code: self.code.clone(),
                category: self.category.clone(),
            }
        })?;

        Ok(OccupationRecord::new(
            self.code,
            self.title,
            category,
            self.skill_level,
            self.essential_qualifications,
            self.minimum_experience,
            self.ielts,
            SkillsAssessment {
                assessing_authority: self.assessing_authority,
                requirements: self.assessment_requirements,
                processing_time: self.processing_time,
                cost: self.cost,
            },
        ))
    }
}

fn split_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect())
}
