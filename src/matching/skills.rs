use std::collections::HashMap;

use super::levels::{compare_levels, LevelRelation};
use crate::normalize::fold_skill_name;
use crate::{CandidateSkill, SkillLevel, SkillRequirement};

/// Ventilation des compétences exigées: chaque exigence tombe dans
/// exactement une des trois listes.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillBreakdown {
    /// Score 0..100.
    pub score: f64,
    /// Niveau atteint ou dépassé (crédit plein).
    pub matching: Vec<String>,
    /// Compétence présente mais sous le niveau exigé (demi-crédit).
    pub partial: Vec<String>,
    /// Compétence absente du profil.
    pub missing: Vec<String>,
    pub details: String,
}

/// Évalue les compétences exigées contre celles du candidat.
///
/// Correspondance exacte sur le nom plié (casse/accents neutralisés),
/// aucune tolérance aux fautes: les noms viennent d'une saisie contrôlée.
/// En cas de doublon côté candidat, la dernière déclaration l'emporte.
pub fn evaluate_skills(required: &[SkillRequirement], possessed: &[CandidateSkill]) -> SkillBreakdown {
    if required.is_empty() {
        return SkillBreakdown {
            score: 100.0,
            matching: vec![],
            partial: vec![],
            missing: vec![],
            details: "Aucune compétence exigée par l'offre".into(),
        };
    }

    let mut by_name: HashMap<String, SkillLevel> = HashMap::new();
    for skill in possessed {
        by_name.insert(fold_skill_name(&skill.name), skill.level);
    }

    let mut matching = Vec::new();
    let mut partial = Vec::new();
    let mut missing = Vec::new();

    for requirement in required {
        match by_name.get(&fold_skill_name(&requirement.name)) {
            Some(level) => match compare_levels(*level, requirement.level_required) {
                LevelRelation::Meets | LevelRelation::Exceeds => {
                    matching.push(requirement.name.clone());
                }
                LevelRelation::Below => partial.push(requirement.name.clone()),
            },
            None => missing.push(requirement.name.clone()),
        }
    }

    let total = required.len();
    let score = 100.0 * (matching.len() as f64 + 0.5 * partial.len() as f64) / total.max(1) as f64;

    let details = format!(
        "{total} exigée(s): {} acquise(s), {} partielle(s), {} manquante(s){}",
        matching.len(),
        partial.len(),
        missing.len(),
        if missing.is_empty() {
            String::new()
        } else {
            format!(" (manque: {})", missing.join(", "))
        }
    );

    SkillBreakdown {
        score,
        matching,
        partial,
        missing,
        details,
    }
}
