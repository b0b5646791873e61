use super::scoring::CriterionScore;
use crate::ContractType;

/// Évalue le type de contrat de l'offre contre les préférences du
/// candidat. Un ensemble de préférences vide vaut "ouvert à tout".
pub fn evaluate_contract(preferred: &[ContractType], offered: ContractType) -> CriterionScore {
    if preferred.is_empty() {
        return CriterionScore {
            score: 100.0,
            details: "Aucune préférence de contrat - ouvert à tout".into(),
        };
    }

    if preferred.contains(&offered) {
        CriterionScore {
            score: 100.0,
            details: format!("Type de contrat souhaité: {}", offered.as_ref()),
        }
    } else {
        CriterionScore {
            score: 0.0,
            details: format!("Type de contrat non souhaité: {}", offered.as_ref()),
        }
    }
}
