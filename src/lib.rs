pub mod api;
pub mod fuzzy;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod search;
pub mod similarity;

use serde::{Deserialize, Serialize};
use strum::AsRefStr;

// Commonly used data models for matching functions.

/// Niveau de maîtrise d'une compétence (échelle ordinale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Types de contrat proposés sur la plateforme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    #[default]
    Cdi,
    Cdd,
    Freelance,
    Internship,
    Apprenticeship,
}

/// Compétence exigée par une offre, avec le niveau minimal attendu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRequirement {
    pub name: String,
    pub level_required: SkillLevel,
}

/// Compétence déclarée par un candidat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSkill {
    pub name: String,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub location: String,
    pub preferred_contract_types: Vec<ContractType>,
    pub years_of_experience: u32,
    pub skills: Vec<CandidateSkill>,
}

/// Sous-ensemble d'une offre d'emploi pertinent pour le matching.
/// `min_experience_years == 0` signifie: pas d'exigence d'expérience.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobOffer {
    pub location: String,
    pub contract_type: ContractType,
    pub required_skills: Vec<SkillRequirement>,
    pub min_experience_years: u32,
}
