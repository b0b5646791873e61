use crate::normalize::fold_text;
use crate::similarity::similarity_folded;

fn env_suggestion_floor() -> f64 {
    std::env::var("RH_SUGGESTION_FLOOR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.4)
}

#[derive(Debug, Clone)]
pub struct FuzzyConfig {
    /// Similarité minimale pour qu'une entrée apparaisse dans les
    /// suggestions. En dessous, la proposition serait du bruit.
    pub suggestion_floor: f64,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        Self {
            suggestion_floor: env_suggestion_floor(),
        }
    }
}

/// Service de recherche tolérante aux fautes de frappe. Sans état mutable:
/// une instance partagée ou une instance par appel sont équivalentes.
#[derive(Debug, Clone, Default)]
pub struct FuzzyMatcher {
    config: FuzzyConfig,
}

impl FuzzyMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: FuzzyConfig) -> Self {
        Self { config }
    }

    /// Vrai si au moins un champ contient la requête telle quelle (une
    /// correspondance exacte n'est jamais pénalisée par le chemin fuzzy,
    /// quel que soit le seuil) ou lui est similaire au-delà du seuil.
    ///
    /// Requête vide ou champs vides → faux, jamais d'erreur: c'est un
    /// utilitaire de classement, pas un validateur.
    pub fn matches_any(&self, query: &str, threshold: f64, fields: &[&str]) -> bool {
        let query = fold_text(query);
        if query.is_empty() {
            return false;
        }

        fields.iter().any(|field| {
            let field = fold_text(field);
            if field.is_empty() {
                return false;
            }
            field.contains(&query) || similarity_folded(&field, &query) >= threshold
        })
    }

    /// Meilleure similarité entre la requête et une fenêtre de tokens du
    /// corpus de largeur comparable (±1 token), le corpus entier servant
    /// de fenêtre de repli. Sert à classer un bloc "titre + description"
    /// face à une requête courte.
    pub fn best_score(&self, corpus: &str, query: &str) -> f64 {
        let query = fold_text(query);
        let corpus = fold_text(corpus);
        if query.is_empty() || corpus.is_empty() {
            return 0.0;
        }

        let tokens: Vec<&str> = corpus.split_whitespace().collect();
        let query_width = query.split_whitespace().count().max(1);

        let mut best = similarity_folded(&corpus, &query);
        let lower = query_width.saturating_sub(1).max(1);
        let upper = (query_width + 1).min(tokens.len());

        for width in lower..=upper {
            for window in tokens.windows(width) {
                let joined = window.join(" ");
                best = best.max(similarity_folded(&joined, &query));
            }
        }

        best
    }

    /// Jusqu'à `limit` chaînes distinctes du pool, triées par similarité
    /// décroissante avec la requête (meilleure fenêtre de tokens, pas la
    /// chaîne entière: "pythn" doit retrouver "Python Developer"), ordre
    /// du pool conservé à égalité. Les entrées sous le plancher de
    /// similarité sont écartées.
    pub fn suggestions(&self, query: &str, pool: &[String], limit: usize) -> Vec<String> {
        if limit == 0 || pool.is_empty() {
            return Vec::new();
        }

        if fold_text(query).is_empty() {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &String)> = pool
            .iter()
            .map(|entry| (self.best_score(entry, query), entry))
            .filter(|(score, _)| *score >= self.config.suggestion_floor)
            .collect();

        // Tri stable: à score égal, l'ordre du pool est conservé.
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut seen: Vec<&str> = Vec::new();
        let mut suggestions = Vec::new();
        for (_, entry) in scored {
            if seen.contains(&entry.as_str()) {
                continue;
            }
            seen.push(entry);
            suggestions.push(entry.clone());
            if suggestions.len() == limit {
                break;
            }
        }

        suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_hit_short_circuits_regardless_of_threshold() {
        let matcher = FuzzyMatcher::new();
        assert!(matcher.matches_any("tunis", 0.6, &["Tunis, Tunisia"]));
        assert!(matcher.matches_any("tunis", 0.99, &["Tunis, Tunisia"]));
    }

    #[test]
    fn typo_passes_loose_threshold_but_not_strict() {
        let matcher = FuzzyMatcher::new();
        assert!(matcher.matches_any("tunsi", 0.6, &["Tunis"]));
        assert!(!matcher.matches_any("tunsi", 0.9, &["Tunis"]));
    }

    #[test]
    fn empty_query_or_fields_never_match() {
        let matcher = FuzzyMatcher::new();
        assert!(!matcher.matches_any("", 0.1, &["Tunis"]));
        assert!(!matcher.matches_any("tunis", 0.1, &[]));
        assert!(!matcher.matches_any("tunis", 0.1, &["", "  "]));
    }

    #[test]
    fn accents_are_neutralized() {
        let matcher = FuzzyMatcher::new();
        assert!(matcher.matches_any("developpeur", 0.8, &["Développeur Java"]));
    }

    #[test]
    fn best_score_finds_matching_token_in_blob() {
        let matcher = FuzzyMatcher::new();
        let corpus = "Développeur Python confirmé pour équipe data";
        assert_eq!(matcher.best_score(corpus, "python"), 1.0);
        assert!(matcher.best_score(corpus, "pythn") > 0.7);
        assert!(matcher.best_score(corpus, "cobol") < 0.4);
    }

    #[test]
    fn best_score_spans_multi_token_queries() {
        let matcher = FuzzyMatcher::new();
        let corpus = "Ingénieur réseaux et sécurité à Lyon";
        assert_eq!(matcher.best_score(corpus, "ingenieur reseaux"), 1.0);
    }

    #[test]
    fn best_score_empty_sides_are_zero() {
        let matcher = FuzzyMatcher::new();
        assert_eq!(matcher.best_score("", "python"), 0.0);
        assert_eq!(matcher.best_score("python", ""), 0.0);
    }

    #[test]
    fn query_wider_than_corpus_falls_back_to_whole_corpus() {
        let matcher = FuzzyMatcher::new();
        let score = matcher.best_score("java", "java spring boot");
        assert!(score > 0.0);
    }

    #[test]
    fn suggestions_rank_closest_first() {
        let matcher = FuzzyMatcher::new();
        let pool = vec![
            "Python Developer".to_string(),
            "Java Developer".to_string(),
            "Ruby".to_string(),
        ];
        let result = matcher.suggestions("pythn", &pool, 2);
        assert!(!result.is_empty());
        assert_eq!(result[0], "Python Developer");
        assert!(result.len() <= 2);
    }

    #[test]
    fn suggestions_drop_noise_below_floor() {
        let matcher = FuzzyMatcher::with_config(FuzzyConfig {
            suggestion_floor: 0.4,
        });
        let pool = vec!["Python".to_string(), "zzzz".to_string()];
        let result = matcher.suggestions("python", &pool, 10);
        assert_eq!(result, vec!["Python".to_string()]);
    }

    #[test]
    fn suggestions_dedupe_and_keep_pool_order_on_ties() {
        let matcher = FuzzyMatcher::new();
        let pool = vec![
            "Java".to_string(),
            "Java".to_string(),
            "java".to_string(),
        ];
        let result = matcher.suggestions("java", &pool, 10);
        // "Java" et "java" sont distincts en tant que chaînes; le doublon
        // exact est replié sur sa première occurrence.
        assert_eq!(result, vec!["Java".to_string(), "java".to_string()]);
    }

    #[test]
    fn zero_limit_and_empty_pool_yield_empty() {
        let matcher = FuzzyMatcher::new();
        assert!(matcher.suggestions("java", &["Java".to_string()], 0).is_empty());
        assert!(matcher.suggestions("java", &[], 5).is_empty());
    }
}
