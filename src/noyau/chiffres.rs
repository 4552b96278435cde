// src/noyau/chiffres.rs
//
// Extraction séquentielle de chiffres de la partie fractionnaire, en base
// quelconque ≥ 2 : on multiplie le reste par la base, on prend la partie
// entière comme chiffre, on soustrait, et on recommence. Lecture strictement
// séquentielle — rien d'un vrai BBP “chiffre d dès le départ”.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use super::decimale::{pow10, ValeurDecimale};
use super::erreur::{ErreurPi, ResultatPi};

/// Les chiffres `debut..debut+nombre` de la partie fractionnaire de `valeur`
/// en base `base`, chacun dans [0, base).
pub fn extraire_chiffres(
    valeur: &ValeurDecimale,
    base: u32,
    debut: usize,
    nombre: usize,
) -> ResultatPi<Vec<u32>> {
    if base < 2 {
        return Err(ErreurPi::ArgumentInvalide(format!(
            "base {base} (il faut au moins 2)"
        )));
    }
    if nombre == 0 {
        return Err(ErreurPi::ArgumentInvalide(
            "nombre de chiffres nul".to_string(),
        ));
    }

    let echelle = pow10(valeur.chiffres());

    // partie fractionnaire seule ; invariant de boucle : 0 ≤ reste < échelle
    let mut reste = valeur.scalee() % &echelle;

    let mut chiffres = Vec::with_capacity(debut + nombre);
    for _ in 0..debut + nombre {
        reste *= base;
        let chiffre = &reste / &echelle;
        reste -= &chiffre * &echelle;

        // 0 ≤ reste < échelle garantit chiffre < base
        let chiffre = chiffre.to_u32().expect("chiffre borné par la base");
        chiffres.push(chiffre);
    }

    Ok(chiffres.split_off(debut))
}
