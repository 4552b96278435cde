// src/noyau/precision.rs
//
// Contexte de précision — porté par valeur, jamais global.
// ---------------------------------------------------------
// Chaque évaluation travaille en entier “scalé” : floor(valeur × 10^chiffres).
// Le contexte est passé explicitement à chaque appel, donc deux évaluations
// concurrentes à des précisions différentes ne partagent aucun état.

use num_bigint::BigInt;

use super::decimale::pow10;
use super::erreur::{ErreurPi, ResultatPi};

/// Marge du seuil d'arrêt : on s'arrête quand |terme| < 10^(MARGE − chiffres).
pub const MARGE_SEUIL: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Precision {
    chiffres: usize,
}

impl Precision {
    /// Fixe le budget de chiffres décimaux pour toute la session de calcul.
    pub fn nouvelle(chiffres: usize) -> ResultatPi<Self> {
        if chiffres == 0 {
            return Err(ErreurPi::PrecisionInvalide(chiffres));
        }
        Ok(Self { chiffres })
    }

    pub fn chiffres(&self) -> usize {
        self.chiffres
    }

    /// Échelle du point fixe : 10^chiffres.
    pub fn echelle(&self) -> BigInt {
        pow10(self.chiffres)
    }

    /// Seuil d'arrêt en unités scalées.
    ///
    /// |terme| < 10^(MARGE − chiffres), multiplié par 10^chiffres, devient
    /// |terme scalé| < 10^MARGE — indépendant de la précision. Si chiffres ≤ MARGE,
    /// le seuil dépasse 1 en absolu et l'arrêt peut survenir dès le premier terme
    /// (cas limite documenté, pas une faute).
    pub fn seuil_arret(&self) -> BigInt {
        BigInt::from(10).pow(MARGE_SEUIL)
    }
}
