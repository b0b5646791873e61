use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Forme canonique de comparaison: décomposition NFKD, suppression des
/// signes diacritiques, minuscules, trim.
///
/// Les utilisateurs cherchent en français ("Développeur", "Orléans"): la
/// comparaison doit ignorer casse et accents.
pub fn fold_text(input: &str) -> String {
    input
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// Clé de comparaison pour les noms de compétences (même pliage que le
/// texte libre: un seul canonique pour tout le crate).
pub fn fold_skill_name(name: &str) -> String {
    fold_text(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_diacritics() {
        assert_eq!(fold_text("Développeur"), "developpeur");
        assert_eq!(fold_text("DEVELOPPEUR"), "developpeur");
        assert_eq!(fold_text("Orléans"), "orleans");
        assert_eq!(fold_text("  Ingénieur Réseaux  "), "ingenieur reseaux");
    }

    #[test]
    fn folds_cedilla_and_ligatures() {
        assert_eq!(fold_text("Çà"), "ca");
        assert_eq!(fold_text("Nîmes"), "nimes");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(fold_text(""), "");
        assert_eq!(fold_text("   "), "");
    }

    #[test]
    fn skill_names_share_the_same_fold() {
        assert_eq!(fold_skill_name("Réseaux"), fold_text("reseaux"));
    }
}
