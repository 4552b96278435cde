// src/noyau/evaluateur.rs
//
// Combinaison des deux sous-séries (identité fermée) :
//   π = 4 · (Σ₁/16 + Σ₂/256)
//   Σ₁ : base −64,   coeffs (8, 4, 1)
//   Σ₂ : base −1024, coeffs (32, 8, 1)
//
// Deux modes terminaux :
// - evaluer              : les deux sommes au même plafond, combinaison directe
// - evaluer_avec_convergence : Σ₂ une fois en entier (elle converge bien plus
//   vite, raison 1/1024 contre 1/64), Σ₁ terme à terme avec relevés aux points
//   de contrôle — vue honnête de l'apport des termes de la série dominante.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use super::chiffres;
use super::comparaison::{self, Comparaison};
use super::decimale::ValeurDecimale;
use super::erreur::{ErreurPi, ResultatPi};
use super::precision::Precision;
use super::serie::{sommer, Termes, SERIE_BASE_1024, SERIE_BASE_64};

/// Points de contrôle du mode convergence (nombre de termes de Σ₁).
pub const POINTS_CONVERGENCE: [usize; 7] = [10, 25, 50, 75, 100, 150, 200];

/// Plafond interne de termes par sous-série pour l'extraction de chiffres.
pub const TERMES_EXTRACTION: usize = 200;

/// Relevé (nombre de termes, approximation de π à ce point).
#[derive(Clone, Debug)]
pub struct PointConvergence {
    pub termes: usize,
    pub valeur: ValeurDecimale,
}

/// Évaluateur de π : porte sa propre précision, aucun état partagé.
#[derive(Clone, Debug)]
pub struct EvaluateurPi {
    precision: Precision,
}

/// Construit un évaluateur au budget de `chiffres` décimales.
pub fn nouvel_evaluateur(chiffres: usize) -> ResultatPi<EvaluateurPi> {
    EvaluateurPi::nouveau(chiffres)
}

impl EvaluateurPi {
    pub fn nouveau(chiffres: usize) -> ResultatPi<Self> {
        Ok(Self {
            precision: Precision::nouvelle(chiffres)?,
        })
    }

    pub fn precision(&self) -> &Precision {
        &self.precision
    }

    /// Mode A : approximation de π, déterministe pour (précision, plafond) donnés.
    pub fn evaluer(&self, max_termes: usize) -> ResultatPi<ValeurDecimale> {
        if max_termes == 0 {
            return Err(ErreurPi::ArgumentInvalide(
                "plafond de termes nul".to_string(),
            ));
        }

        let somme1 = sommer(&SERIE_BASE_64, &self.precision, max_termes)?;
        let somme2 = sommer(&SERIE_BASE_1024, &self.precision, max_termes)?;

        let valeur = self.combiner(&somme1.somme, &somme2.somme);
        tracing::debug!(
            termes_base_64 = somme1.termes_utilises,
            termes_base_1024 = somme2.termes_utilises,
            "π évalué"
        );
        Ok(valeur)
    }

    /// Mode B : Σ₂ en entier d'abord, puis Σ₁ terme à terme avec relevés aux
    /// points de contrôle atteints avant l'arrêt (relevé AVANT le test d'arrêt
    /// de la même itération). Rend la valeur finale + les relevés ordonnés.
    pub fn evaluer_avec_convergence(
        &self,
        max_termes: usize,
    ) -> ResultatPi<(ValeurDecimale, Vec<PointConvergence>)> {
        if max_termes == 0 {
            return Err(ErreurPi::ArgumentInvalide(
                "plafond de termes nul".to_string(),
            ));
        }

        let somme2 = sommer(&SERIE_BASE_1024, &self.precision, max_termes)?.somme;
        let seuil = self.precision.seuil_arret();

        let mut somme1 = BigInt::zero();
        let mut releves = Vec::new();

        for (indice, terme) in Termes::nouveaux(&SERIE_BASE_64, &self.precision)
            .take(max_termes)
            .enumerate()
        {
            somme1 += &terme;
            let termes = indice + 1;

            if POINTS_CONVERGENCE.contains(&termes) {
                releves.push(PointConvergence {
                    termes,
                    valeur: self.combiner(&somme1, &somme2),
                });
            }

            if terme.abs() < seuil {
                break;
            }
        }

        Ok((self.combiner(&somme1, &somme2), releves))
    }

    /// Compare une valeur (ou, à défaut, un calcul frais à `max_termes`) au π
    /// de référence. Rien n'est mis en cache.
    pub fn comparer_reference(
        &self,
        valeur: Option<&ValeurDecimale>,
        max_termes: usize,
    ) -> ResultatPi<Comparaison> {
        match valeur {
            Some(v) => comparaison::comparer_reference(v),
            None => comparaison::comparer_reference(&self.evaluer(max_termes)?),
        }
    }

    /// Chiffres `debut..debut+nombre` de la partie fractionnaire de π en base
    /// `base`. π est recalculé À CHAQUE appel, au plafond interne fixe.
    pub fn extraire_chiffres(
        &self,
        base: u32,
        debut: usize,
        nombre: usize,
    ) -> ResultatPi<Vec<u32>> {
        let pi = self.evaluer(TERMES_EXTRACTION)?;
        chiffres::extraire_chiffres(&pi, base, debut, nombre)
    }

    /// π = 4 · (Σ₁/16 + Σ₂/256), en entiers scalés.
    fn combiner(&self, somme1: &BigInt, somme2: &BigInt) -> ValeurDecimale {
        let partie1 = somme1 / BigInt::from(16);
        let partie2 = somme2 / BigInt::from(256);
        ValeurDecimale::nouvelle((partie1 + partie2) * BigInt::from(4), self.precision.chiffres())
    }
}
