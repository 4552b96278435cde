// src/noyau/comparaison.rs
//
// Concordance avec π de référence : comparaison LEXICALE caractère à caractère
// des écritures décimales (le point décimal compte comme un caractère ordinaire).
// Pas de tolérance numérique : un écart d'arrondi sur le dernier chiffre comparé
// sous-compte d'exactement un chiffre, comportement assumé.

use super::decimale::ValeurDecimale;
use super::erreur::ResultatPi;

/// π de référence : 101 chiffres significatifs, donnée embarquée.
pub const PI_REFERENCE: &str = "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

/// Longueur des extraits rendus dans le rapport (début des deux écritures).
pub const LONGUEUR_EXTRAIT: usize = 30;

/// Rapport de comparaison, recalculé à chaque appel (jamais mis en cache).
#[derive(Clone, Debug)]
pub struct Comparaison {
    pub calculee: ValeurDecimale,
    pub reference: ValeurDecimale,
    /// Caractères initiaux concordants, moins un (le chiffre entier partagé).
    /// Signé : une discordance immédiate donne −1.
    pub chiffres_concordants: i64,
    pub erreur_absolue: ValeurDecimale,
    pub erreur_relative: ValeurDecimale,
    pub extrait_calcule: String,
    pub extrait_reference: String,
}

/// Compare `valeur` au π de référence, aux décimales de `valeur`.
pub fn comparer_reference(valeur: &ValeurDecimale) -> ResultatPi<Comparaison> {
    let reference = ValeurDecimale::depuis_texte(PI_REFERENCE, valeur.chiffres())?;

    let texte_calcule = valeur.texte();
    let concordants = prefixe_commun(&texte_calcule, PI_REFERENCE) as i64 - 1;

    let erreur_absolue = valeur.ecart_absolu(&reference);
    let erreur_relative = erreur_absolue.quotient(&reference)?;

    Ok(Comparaison {
        extrait_calcule: texte_calcule.chars().take(LONGUEUR_EXTRAIT).collect(),
        extrait_reference: PI_REFERENCE.chars().take(LONGUEUR_EXTRAIT).collect(),
        calculee: valeur.clone(),
        reference,
        chiffres_concordants: concordants,
        erreur_absolue,
        erreur_relative,
    })
}

/// Nombre de caractères initiaux égaux (point décimal inclus).
fn prefixe_commun(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .count()
}
