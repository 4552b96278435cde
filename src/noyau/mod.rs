//! Noyau π base 64 — décomposition de type BBP en deux sous-séries
//!
//! Organisation interne :
//! - erreur.rs      : taxonomie d'erreurs (validation d'entrée seulement)
//! - precision.rs   : contexte de précision (échelle 10^chiffres, seuil d'arrêt)
//! - decimale.rs    : valeur décimale tronquée (entier scalé) + affichages
//! - serie.rs       : termes (−1)^n·coeff(n)/base^n + sommation à arrêt anticipé
//! - evaluateur.rs  : combinaison 4·(Σ₁/16 + Σ₂/256) + mode convergence
//! - comparaison.rs : concordance lexicale avec π de référence
//! - chiffres.rs    : extraction séquentielle de chiffres en base ≥ 2

pub mod chiffres;
pub mod comparaison;
pub mod decimale;
pub mod erreur;
pub mod evaluateur;
pub mod precision;
pub mod serie;

#[cfg(test)]
mod tests_numeriques;

// API publique minimale
pub use comparaison::{Comparaison, LONGUEUR_EXTRAIT, PI_REFERENCE};
pub use decimale::ValeurDecimale;
pub use erreur::{ErreurPi, ResultatPi};
pub use evaluateur::{
    nouvel_evaluateur, EvaluateurPi, PointConvergence, POINTS_CONVERGENCE, TERMES_EXTRACTION,
};
pub use precision::Precision;
