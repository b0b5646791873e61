use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::fuzzy::FuzzyMatcher;
use crate::normalize::fold_text;

/// Une passe de classement a observé son drapeau d'annulation en cours
/// de route (recherche remplacée par une plus récente).
#[derive(Debug, Error, PartialEq, Eq)]
#[error("recherche annulée avant la fin du classement")]
pub struct SearchCancelled;

/// Drapeau d'annulation coopérative: consulté entre deux éléments par la
/// passe de classement, basculable depuis le thread interactif.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Relaxed)
    }
}

/// Classe et filtre des enregistrements cherchables par requête libre.
/// Les correspondances exactes (sous-chaîne) passent toujours devant les
/// correspondances floues.
#[derive(Debug, Clone, Default)]
pub struct SearchRanker {
    matcher: FuzzyMatcher,
}

impl SearchRanker {
    pub fn new(matcher: FuzzyMatcher) -> Self {
        Self { matcher }
    }

    /// Filtre puis ordonne `items` pour la requête: sous-chaînes d'abord
    /// (meilleur score décroissant), puis correspondances floues
    /// (score décroissant), tri stable à score égal. Une requête vide ne
    /// filtre rien et rend les éléments dans l'ordre d'entrée.
    pub fn rank<T, F>(&self, query: &str, items: Vec<T>, fields_of: F, threshold: f64) -> Vec<T>
    where
        F: Fn(&T) -> Vec<String>,
    {
        // Un drapeau local jamais basculé: cette branche ne peut pas
        // être annulée.
        match self.rank_with_cancel(query, items, fields_of, threshold, &CancelFlag::new()) {
            Ok(ranked) => ranked,
            Err(SearchCancelled) => Vec::new(),
        }
    }

    /// Variante annulable de [`rank`](Self::rank): le drapeau est
    /// consulté entre chaque élément pour qu'une recherche remplacée
    /// cesse de consommer du temps de calcul.
    pub fn rank_with_cancel<T, F>(
        &self,
        query: &str,
        items: Vec<T>,
        fields_of: F,
        threshold: f64,
        cancel: &CancelFlag,
    ) -> Result<Vec<T>, SearchCancelled>
    where
        F: Fn(&T) -> Vec<String>,
    {
        let folded_query = fold_text(query);
        if folded_query.is_empty() {
            return Ok(items);
        }

        let total = items.len();
        let mut scored: Vec<(bool, f64, T)> = Vec::with_capacity(total);
        for item in items {
            if cancel.is_cancelled() {
                return Err(SearchCancelled);
            }

            let fields = fields_of(&item);
            let mut substring_hit = false;
            let mut best: f64 = 0.0;
            for field in &fields {
                let folded = fold_text(field);
                if folded.is_empty() {
                    continue;
                }
                if folded.contains(&folded_query) {
                    substring_hit = true;
                }
                best = best.max(self.matcher.best_score(field, query));
            }

            if substring_hit || best >= threshold {
                scored.push((substring_hit, best, item));
            }
        }

        // Tri stable: l'ordre d'entrée départage les scores égaux.
        scored.sort_by(|a, b| {
            b.0.cmp(&a.0)
                .then(b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal))
        });

        debug!(query, total, kept = scored.len(), "classement terminé");

        Ok(scored.into_iter().map(|(_, _, item)| item).collect())
    }
}
