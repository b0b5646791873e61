/// Pondérations du score global (constantes de conception, non
/// configurables): l'adéquation des compétences domine l'employabilité.
pub const MATCH_WEIGHTS: Weights = Weights {
    skills: 0.50,
    location: 0.20,
    contract: 0.15,
    experience: 0.15,
};

/// Formule affichée telle quelle dans l'interface (transparence du score).
pub const SCORE_FORMULA: &str =
    "overall = 0.50*skills + 0.20*location + 0.15*contract_type + 0.15*experience";

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub skills: f64,
    pub location: f64,
    pub contract: f64,
    pub experience: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.skills + self.location + self.contract + self.experience
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_sum_to_one() {
        assert!((MATCH_WEIGHTS.sum() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn formula_documents_the_weights_verbatim() {
        assert!(SCORE_FORMULA.contains("0.50*skills"));
        assert!(SCORE_FORMULA.contains("0.20*location"));
        assert!(SCORE_FORMULA.contains("0.15*contract_type"));
        assert!(SCORE_FORMULA.contains("0.15*experience"));
    }
}
