// src/noyau/serie.rs
//
// Sous-séries alternées de la décomposition :
//   Σ[n≥0] (−1)^n · coeff(n) / base^n
//   coeff(n) = a/(4n+1) + b/(4n+2) + c/(4n+3)
//
// Chaque terme est calculé en rationnel EXACT (coeff(n)/base^n), puis tronqué
// UNE fois vers l'échelle 10^chiffres. base^n est une puissance entière exacte
// entretenue d'un terme à l'autre (aucun arrondi cumulé sur l'exposant).
// Ordre des termes strict : n = 0, 1, 2, … (la reproductibilité en dépend).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreur::{ErreurPi, ResultatPi};
use super::precision::Precision;

/// Description d'une sous-série : base de décroissance géométrique +
/// numérateurs (a, b, c) de coeff(n).
#[derive(Clone, Copy, Debug)]
pub struct ParamsSerie {
    pub base: u32,
    pub coeffs: [u32; 3],
}

/// Sous-série en base −64 : 8/(4n+1) + 4/(4n+2) + 1/(4n+3).
pub const SERIE_BASE_64: ParamsSerie = ParamsSerie {
    base: 64,
    coeffs: [8, 4, 1],
};

/// Sous-série en base −1024 : 32/(4n+1) + 8/(4n+2) + 1/(4n+3).
pub const SERIE_BASE_1024: ParamsSerie = ParamsSerie {
    base: 1024,
    coeffs: [32, 8, 1],
};

/// Résultat d'une sommation partielle.
#[derive(Clone, Debug)]
pub struct Sommation {
    /// Somme partielle scalée (×10^chiffres).
    pub somme: BigInt,
    /// Termes effectivement accumulés (le terme déclencheur inclus).
    pub termes_utilises: usize,
    /// true si le seuil a arrêté la boucle avant le plafond.
    pub arret_anticipe: bool,
}

/// Générateur de termes scalés, dans l'ordre n = 0, 1, 2, …
pub struct Termes {
    coeffs: [u32; 3],
    base: BigInt,
    puissance: BigInt, // base^n, exacte
    echelle: BigInt,
    n: u64,
    signe_positif: bool,
}

impl Termes {
    pub fn nouveaux(params: &ParamsSerie, precision: &Precision) -> Self {
        Self {
            coeffs: params.coeffs,
            base: BigInt::from(params.base),
            puissance: BigInt::from(1u32),
            echelle: precision.echelle(),
            n: 0,
            signe_positif: true,
        }
    }
}

impl Iterator for Termes {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        let quadruple = 4 * self.n;
        let fraction = |num: u32, denom: u64| {
            BigRational::new(BigInt::from(num), BigInt::from(denom))
        };

        let coeff = fraction(self.coeffs[0], quadruple + 1)
            + fraction(self.coeffs[1], quadruple + 2)
            + fraction(self.coeffs[2], quadruple + 3);

        // coeff(n)/base^n exact, puis troncature unique vers l'échelle
        let exact = coeff / BigRational::from_integer(self.puissance.clone());
        let mut scalee = (exact.numer() * &self.echelle) / exact.denom();
        if !self.signe_positif {
            scalee = -scalee;
        }

        self.puissance *= &self.base;
        self.signe_positif = !self.signe_positif;
        self.n += 1;

        Some(scalee)
    }
}

/// Somme la sous-série jusqu'au plafond `max_termes`, avec arrêt anticipé dès
/// que |terme| < seuil (le terme déclencheur est accumulé avant l'arrêt).
pub fn sommer(
    params: &ParamsSerie,
    precision: &Precision,
    max_termes: usize,
) -> ResultatPi<Sommation> {
    if max_termes == 0 {
        return Err(ErreurPi::ArgumentInvalide(
            "nombre de termes nul".to_string(),
        ));
    }

    let seuil = precision.seuil_arret();

    let mut somme = BigInt::zero();
    let mut termes_utilises = 0usize;
    let mut arret_anticipe = false;

    for terme in Termes::nouveaux(params, precision).take(max_termes) {
        somme += &terme;
        termes_utilises += 1;

        if terme.abs() < seuil {
            arret_anticipe = true;
            break;
        }
    }

    if arret_anticipe && termes_utilises == 1 {
        // précision épuisée : aucun chiffre résolu, on rend quand même la somme
        tracing::warn!(
            base = params.base,
            chiffres = precision.chiffres(),
            "précision épuisée dès le premier terme"
        );
    }
    tracing::debug!(
        base = params.base,
        termes = termes_utilises,
        arret_anticipe,
        "sous-série sommée"
    );

    Ok(Sommation {
        somme,
        termes_utilises,
        arret_anticipe,
    })
}
