use serde::{Deserialize, Serialize};
use strum::AsRefStr;
use tracing::debug;

use super::{
    contract::evaluate_contract,
    experience::evaluate_experience,
    location::evaluate_location,
    skills::evaluate_skills,
    weights::{MATCH_WEIGHTS, SCORE_FORMULA},
};
use crate::{CandidateProfile, JobOffer};

/// Score d'un critère isolé, 0..100, avec son explication affichable.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionScore {
    pub score: f64,
    pub details: String,
}

/// Palier de compatibilité dérivé du score global.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "snake_case")]
pub enum MatchLevel {
    Excellent,
    Good,
    Moderate,
    Weak,
}

/// Résultat de matching: objet-valeur construit à chaque appel, jamais
/// muté ensuite. Chaque compétence exigée apparaît dans exactement une
/// des trois listes.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchingResult {
    pub overall_score: f64,
    pub skills_score: f64,
    pub location_score: f64,
    pub contract_type_score: f64,
    pub experience_score: f64,
    pub matching_skills: Vec<String>,
    pub partial_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub match_level: MatchLevel,
    pub explanation: String,
    pub formula: &'static str,
}

/// Moteur de compatibilité candidat/offre. Sans état: construit
/// explicitement par l'appelant, partageable entre threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchingEngine;

impl MatchingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Calcule le score de compatibilité pondéré entre un profil et une
    /// offre. Fonction pure: mêmes entrées, même résultat, appelable à
    /// chaque rendu de carte d'offre.
    pub fn calculate_match(&self, profile: &CandidateProfile, offer: &JobOffer) -> MatchingResult {
        let skills = evaluate_skills(&offer.required_skills, &profile.skills);
        let location = evaluate_location(&profile.location, &offer.location);
        let contract = evaluate_contract(&profile.preferred_contract_types, offer.contract_type);
        let experience =
            evaluate_experience(profile.years_of_experience, offer.min_experience_years);

        let weights = MATCH_WEIGHTS;
        let overall = round_one_decimal(
            skills.score * weights.skills
                + location.score * weights.location
                + contract.score * weights.contract
                + experience.score * weights.experience,
        );

        let match_level = classify(overall);
        let explanation = build_explanation(
            match_level,
            skills.score,
            location.score,
            contract.score,
            experience.score,
        );

        debug!(
            overall,
            skills = %skills.details,
            location = %location.details,
            contract = %contract.details,
            experience = %experience.details,
            "match calculé"
        );

        MatchingResult {
            overall_score: overall,
            skills_score: skills.score,
            location_score: location.score,
            contract_type_score: contract.score,
            experience_score: experience.score,
            matching_skills: skills.matching,
            partial_skills: skills.partial,
            missing_skills: skills.missing,
            match_level,
            explanation,
            formula: SCORE_FORMULA,
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn classify(overall: f64) -> MatchLevel {
    if overall >= 85.0 {
        MatchLevel::Excellent
    } else if overall >= 70.0 {
        MatchLevel::Good
    } else if overall >= 50.0 {
        MatchLevel::Moderate
    } else {
        MatchLevel::Weak
    }
}

/// Gabarit d'explication par palier, complété par le critère le plus
/// fort et le plus faible (ordre fixe des critères pour départager les
/// égalités de façon déterministe).
fn build_explanation(
    level: MatchLevel,
    skills: f64,
    location: f64,
    contract: f64,
    experience: f64,
) -> String {
    let components = [
        ("compétences", skills),
        ("localisation", location),
        ("type de contrat", contract),
        ("expérience", experience),
    ];

    let strongest = components
        .iter()
        .fold(&components[0], |best, c| if c.1 > best.1 { c } else { best });
    let weakest = components
        .iter()
        .fold(&components[0], |worst, c| if c.1 < worst.1 { c } else { worst });

    let summary = match level {
        MatchLevel::Excellent => "Correspondance excellente: le profil couvre l'essentiel de l'offre.",
        MatchLevel::Good => "Bonne correspondance: le profil répond à la plupart des critères.",
        MatchLevel::Moderate => {
            "Correspondance moyenne: plusieurs critères ne sont que partiellement couverts."
        }
        MatchLevel::Weak => "Correspondance faible: le profil s'éloigne des attentes de l'offre.",
    };

    format!(
        "{summary} Point fort: {} ({:.0}). Point faible: {} ({:.0}).",
        strongest.0, strongest.1, weakest.0, weakest.1
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CandidateSkill, ContractType, SkillLevel, SkillRequirement};

    fn base_profile() -> CandidateProfile {
        CandidateProfile {
            location: "Tunis".into(),
            preferred_contract_types: vec![ContractType::Cdi],
            years_of_experience: 5,
            skills: vec![
                CandidateSkill {
                    name: "Java".into(),
                    level: SkillLevel::Advanced,
                },
                CandidateSkill {
                    name: "SQL".into(),
                    level: SkillLevel::Intermediate,
                },
            ],
        }
    }

    fn base_offer() -> JobOffer {
        JobOffer {
            location: "Tunis".into(),
            contract_type: ContractType::Cdi,
            required_skills: vec![
                SkillRequirement {
                    name: "Java".into(),
                    level_required: SkillLevel::Intermediate,
                },
                SkillRequirement {
                    name: "SQL".into(),
                    level_required: SkillLevel::Intermediate,
                },
            ],
            min_experience_years: 3,
        }
    }

    #[test]
    fn perfect_profile_is_excellent() {
        let result = MatchingEngine::new().calculate_match(&base_profile(), &base_offer());

        assert_eq!(result.overall_score, 100.0);
        assert_eq!(result.match_level, MatchLevel::Excellent);
        assert_eq!(result.matching_skills, vec!["Java".to_string(), "SQL".to_string()]);
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.formula, SCORE_FORMULA);
    }

    #[test]
    fn half_skills_full_rest_is_good() {
        let mut profile = base_profile();
        profile.skills = vec![CandidateSkill {
            name: "Java".into(),
            level: SkillLevel::Advanced,
        }];

        let result = MatchingEngine::new().calculate_match(&profile, &base_offer());

        // skills 50, localisation 100, contrat 100, expérience 100
        // → 0.5*50 + 0.2*100 + 0.15*100 + 0.15*100 = 75.
        assert_eq!(result.skills_score, 50.0);
        assert_eq!(result.overall_score, 75.0);
        assert_eq!(result.match_level, MatchLevel::Good);
        assert_eq!(result.missing_skills, vec!["SQL".to_string()]);
    }

    #[test]
    fn empty_contract_preferences_score_full() {
        let mut profile = base_profile();
        profile.preferred_contract_types.clear();
        let mut offer = base_offer();
        offer.contract_type = ContractType::Apprenticeship;

        let result = MatchingEngine::new().calculate_match(&profile, &offer);
        assert_eq!(result.contract_type_score, 100.0);
    }

    #[test]
    fn missing_candidate_location_is_neutral_not_zero() {
        let mut profile = base_profile();
        profile.location.clear();

        let result = MatchingEngine::new().calculate_match(&profile, &base_offer());
        assert_eq!(result.location_score, 50.0);
    }

    #[test]
    fn identical_inputs_reproduce_identical_results() {
        let engine = MatchingEngine::new();
        let first = engine.calculate_match(&base_profile(), &base_offer());
        let second = engine.calculate_match(&base_profile(), &base_offer());
        assert_eq!(first, second);
    }

    #[test]
    fn classification_tiers_follow_thresholds() {
        assert_eq!(classify(85.0), MatchLevel::Excellent);
        assert_eq!(classify(84.9), MatchLevel::Good);
        assert_eq!(classify(70.0), MatchLevel::Good);
        assert_eq!(classify(69.9), MatchLevel::Moderate);
        assert_eq!(classify(50.0), MatchLevel::Moderate);
        assert_eq!(classify(49.9), MatchLevel::Weak);
    }

    #[test]
    fn explanation_names_strongest_and_weakest_criterion() {
        let mut profile = base_profile();
        profile.location = "Sfax".into();

        let result = MatchingEngine::new().calculate_match(&profile, &base_offer());

        assert!(result.explanation.contains("Point fort: compétences"));
        assert!(result.explanation.contains("Point faible: localisation"));
    }

    #[test]
    fn overall_is_rounded_to_one_decimal() {
        let mut offer = base_offer();
        offer.required_skills.push(SkillRequirement {
            name: "Python".into(),
            level_required: SkillLevel::Beginner,
        });

        let result = MatchingEngine::new().calculate_match(&base_profile(), &offer);

        // skills = 100*2/3 ≈ 66.667 → overall = 33.333... + 50 = 83.3.
        assert_eq!(result.overall_score, 83.3);
    }
}
