/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use super::unsupported_value;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Population statistics category
///
/// Each category maps to one fixed endpoint under `/privateapi/popapi/`.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PopulationDataType {
    /// Economic status
    Economic,
    /// Education attending
    Education,
    /// Ethnic group
    Ethnicity,
    /// Household monthly income from work
    HouseholdIncomeFromWork,
    /// Household size
    HouseholdSize,
    /// Household structure
    HouseholdStructure,
    /// Individual income from work
    IncomeFromWork,
    /// Industry
    Industry,
    /// Language literacy
    LanguageLiteracy,
    /// Marital status
    Marital,
    /// Mode of transport to school
    ModeTransportSchool,
    /// Mode of transport to work
    ModeTransportWork,
    /// Occupation
    Occupation,
    /// Age group
    Age,
    /// Religion
    Religion,
    /// Language spoken at home
    SpokenLanguage,
    /// Tenancy
    Tenancy,
    /// Type of dwelling, counted by household
    DwellingTypeHousehold,
    /// Type of dwelling, counted by population
    DwellingTypePopulation,
}

impl PopulationDataType {
    /// Every supported category, in lookup table order
    pub const ALL: [PopulationDataType; 19] = [
        PopulationDataType::Economic,
        PopulationDataType::Education,
        PopulationDataType::Ethnicity,
        PopulationDataType::HouseholdIncomeFromWork,
        PopulationDataType::HouseholdSize,
        PopulationDataType::HouseholdStructure,
        PopulationDataType::IncomeFromWork,
        PopulationDataType::Industry,
        PopulationDataType::LanguageLiteracy,
        PopulationDataType::Marital,
        PopulationDataType::ModeTransportSchool,
        PopulationDataType::ModeTransportWork,
        PopulationDataType::Occupation,
        PopulationDataType::Age,
        PopulationDataType::Religion,
        PopulationDataType::SpokenLanguage,
        PopulationDataType::Tenancy,
        PopulationDataType::DwellingTypeHousehold,
        PopulationDataType::DwellingTypePopulation,
    ];

    /// Every supported category
    pub fn all() -> &'static [PopulationDataType] {
        &Self::ALL
    }

    /// Logical name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            PopulationDataType::Economic => "economic",
            PopulationDataType::Education => "education",
            PopulationDataType::Ethnicity => "ethnicity",
            PopulationDataType::HouseholdIncomeFromWork => "household_income_from_work",
            PopulationDataType::HouseholdSize => "household_size",
            PopulationDataType::HouseholdStructure => "household_structure",
            PopulationDataType::IncomeFromWork => "income_from_work",
            PopulationDataType::Industry => "industry",
            PopulationDataType::LanguageLiteracy => "language_literacy",
            PopulationDataType::Marital => "marital",
            PopulationDataType::ModeTransportSchool => "mode_transport_school",
            PopulationDataType::ModeTransportWork => "mode_transport_work",
            PopulationDataType::Occupation => "occupation",
            PopulationDataType::Age => "age",
            PopulationDataType::Religion => "religion",
            PopulationDataType::SpokenLanguage => "spoken_language",
            PopulationDataType::Tenancy => "tenancy",
            PopulationDataType::DwellingTypeHousehold => "dwelling_type_household",
            PopulationDataType::DwellingTypePopulation => "dwelling_type_population",
        }
    }

    /// Endpoint name under `/privateapi/popapi/`
    pub fn endpoint(&self) -> &'static str {
        match self {
            PopulationDataType::Economic => "getEconomicStatus",
            PopulationDataType::Education => "getEducationAttending",
            PopulationDataType::Ethnicity => "getEthnicGroup",
            PopulationDataType::HouseholdIncomeFromWork => "getHouseholdMonthlyIncomeWork",
            PopulationDataType::HouseholdSize => "getHouseholdSize",
            PopulationDataType::HouseholdStructure => "getHouseholdStructure",
            PopulationDataType::IncomeFromWork => "getIncomeFromWork",
            PopulationDataType::Industry => "getIndustry",
            PopulationDataType::LanguageLiteracy => "getLanguageLiterate",
            PopulationDataType::Marital => "getMaritalStatus",
            PopulationDataType::ModeTransportSchool => "getModeOfTransportSchool",
            PopulationDataType::ModeTransportWork => "getModeOfTransportWork",
            PopulationDataType::Occupation => "getOccupation",
            PopulationDataType::Age => "getPopulationAgeGroup",
            PopulationDataType::Religion => "getReligion",
            PopulationDataType::SpokenLanguage => "getSpokenAtHome",
            PopulationDataType::Tenancy => "getTenancy",
            PopulationDataType::DwellingTypeHousehold => "getTypeOfDwellingHousehold",
            PopulationDataType::DwellingTypePopulation => "getTypeOfDwellingPop",
        }
    }

    /// Whether the API documents a per-gender breakdown for this category
    pub fn supports_gender(&self) -> bool {
        matches!(
            self,
            PopulationDataType::Economic
                | PopulationDataType::Ethnicity
                | PopulationDataType::Marital
        )
    }
}

impl fmt::Display for PopulationDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PopulationDataType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|data_type| data_type.as_str() == name)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(Self::as_str).collect();
                unsupported_value("population data type", s, &names)
            })
    }
}

/// Gender filter for population statistics
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male residents
    Male,
    /// Female residents
    Female,
}

impl Gender {
    /// Query value expected by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(unsupported_value("gender", s, &["male", "female"])),
        }
    }
}
