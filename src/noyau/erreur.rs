// src/noyau/erreur.rs

use thiserror::Error;

/// Taxonomie d'erreurs du noyau.
///
/// Toutes les erreurs sont levées AVANT la sommation (validation d'entrée).
/// Le calcul lui-même ne peut pas échouer : une précision trop faible dégrade
/// la justesse du résultat sans lever d'erreur (avis via `tracing::warn!`).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErreurPi {
    #[error("précision invalide: {0} chiffre(s) (il en faut au moins 1)")]
    PrecisionInvalide(usize),

    #[error("argument invalide: {0}")]
    ArgumentInvalide(String),

    #[error("texte décimal illisible: {0:?}")]
    TexteInvalide(String),
}

pub type ResultatPi<T> = Result<T, ErreurPi>;
