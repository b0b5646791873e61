use super::scoring::CriterionScore;
use crate::normalize::fold_text;

/// Score d'un rattachement partiel par inclusion ("Tunis" dans
/// "Grand Tunis"). Palier unique: la source ne justifie pas plus fin.
const CONTAINMENT_SCORE: f64 = 60.0;

/// Score neutre quand l'information de localisation manque d'un côté:
/// l'absence de préférence n'est pas un désaccord.
const NEUTRAL_SCORE: f64 = 50.0;

/// Évalue la compatibilité géographique candidat/offre.
///
/// Égalité sur les formes pliées → 100; inclusion dans un sens ou dans
/// l'autre → palier partiel; localisation absente d'un côté → neutre;
/// sinon 0.
pub fn evaluate_location(candidate_location: &str, offer_location: &str) -> CriterionScore {
    let candidate = fold_text(candidate_location);
    let offer = fold_text(offer_location);

    if candidate.is_empty() {
        return CriterionScore {
            score: NEUTRAL_SCORE,
            details: "Localisation du candidat non renseignée - score neutre".into(),
        };
    }
    if offer.is_empty() {
        return CriterionScore {
            score: NEUTRAL_SCORE,
            details: "Localisation de l'offre non renseignée - score neutre".into(),
        };
    }

    if candidate == offer {
        return CriterionScore {
            score: 100.0,
            details: format!("Localisation identique: {}", offer_location.trim()),
        };
    }

    if candidate.contains(&offer) || offer.contains(&candidate) {
        return CriterionScore {
            score: CONTAINMENT_SCORE,
            details: format!(
                "Localisations proches: {} / {}",
                candidate_location.trim(),
                offer_location.trim()
            ),
        };
    }

    CriterionScore {
        score: 0.0,
        details: format!(
            "Localisations distinctes: {} vs {}",
            candidate_location.trim(),
            offer_location.trim()
        ),
    }
}
