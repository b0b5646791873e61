use strsim::damerau_levenshtein;

use crate::normalize::fold_text;

/// Similarité normalisée entre deux chaînes, dans [0, 1].
///
/// `1 - distance(a, b) / max(len(a), len(b))` sur les formes pliées
/// (casse et accents neutralisés). La distance est Damerau–Levenshtein:
/// une transposition ("tunsi" / "tunis") compte pour une seule édition.
/// Deux chaînes vides → 1.0; une seule vide → 0.0. Symétrique et
/// déterministe.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_folded(&fold_text(a), &fold_text(b))
}

/// Variante interne pour des chaînes déjà pliées (évite de replier dans
/// les boucles de fenêtrage du fuzzy matcher).
pub(crate) fn similarity_folded(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let distance = damerau_levenshtein(a, b);
    let longest = a.chars().count().max(b.chars().count());
    1.0 - distance as f64 / longest as f64
}
