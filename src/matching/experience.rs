use super::scoring::CriterionScore;

/// Évalue l'expérience du candidat face au minimum exigé par l'offre.
///
/// Exigence atteinte (ou nulle) → 100. Sinon le score décroît
/// linéairement vers 0 à mesure que le manque approche l'exigence
/// entière: un quasi-accès score près de 100, un gros écart près de 0.
pub fn evaluate_experience(years: u32, min_required: u32) -> CriterionScore {
    if min_required == 0 {
        return CriterionScore {
            score: 100.0,
            details: "Aucune exigence d'expérience".into(),
        };
    }

    if years >= min_required {
        return CriterionScore {
            score: 100.0,
            details: format!("Expérience suffisante: {years} an(s) ≥ {min_required} an(s)"),
        };
    }

    let shortfall = (min_required - years) as f64;
    let score = (100.0 - 100.0 * shortfall / min_required as f64).max(0.0);

    CriterionScore {
        score,
        details: format!("Expérience insuffisante: {years} an(s) < {min_required} an(s)"),
    }
}
