use serde::{Deserialize, Serialize};

use crate::matching::scoring::{MatchLevel, MatchingResult};
use crate::{ContractType, SkillLevel};

/// Réponse de matching destinée à l'interface: scores, ventilation des
/// compétences, libellé du palier et formule de calcul (transparence).
/// Couche de présentation uniquement: le moteur ne dépend jamais d'ici.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub overall_score: f64,
    pub skills_score: f64,
    pub location_score: f64,
    pub contract_type_score: f64,
    pub experience_score: f64,
    pub matching_skills: Vec<String>,
    pub partial_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_level: MatchLevel,
    /// Libellé français du palier, prêt à afficher.
    pub match_level_label: String,
    pub explanation: String,
    pub formula: String,
}

impl MatchResponse {
    pub fn from_result(result: &MatchingResult) -> Self {
        Self {
            overall_score: result.overall_score,
            skills_score: result.skills_score,
            location_score: result.location_score,
            contract_type_score: result.contract_type_score,
            experience_score: result.experience_score,
            matching_skills: result.matching_skills.clone(),
            partial_skills: result.partial_skills.clone(),
            missing_skills: result.missing_skills.clone(),
            match_level: result.match_level,
            match_level_label: match_level_label(result.match_level).to_string(),
            explanation: result.explanation.clone(),
            formula: result.formula.to_string(),
        }
    }
}

/// Libellé d'affichage des types de contrat.
pub fn contract_type_label(contract_type: ContractType) -> &'static str {
    match contract_type {
        ContractType::Cdi => "CDI",
        ContractType::Cdd => "CDD",
        ContractType::Freelance => "Freelance",
        ContractType::Internship => "Stage",
        ContractType::Apprenticeship => "Alternance",
    }
}

/// Libellé d'affichage des niveaux de compétence.
pub fn skill_level_label(level: SkillLevel) -> &'static str {
    match level {
        SkillLevel::Beginner => "Débutant",
        SkillLevel::Intermediate => "Intermédiaire",
        SkillLevel::Advanced => "Avancé",
    }
}

/// Libellé d'affichage des paliers de compatibilité.
pub fn match_level_label(level: MatchLevel) -> &'static str {
    match level {
        MatchLevel::Excellent => "Excellent",
        MatchLevel::Good => "Bon",
        MatchLevel::Moderate => "Moyen",
        MatchLevel::Weak => "Faible",
    }
}
