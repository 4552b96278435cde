// src/noyau/decimale.rs
//
// Valeur décimale tronquée : entier signé “scalé” (×10^chiffres) + nombre de
// décimales. Aucun flottant binaire : tout passe par BigInt.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use super::erreur::{ErreurPi, ResultatPi};

use std::fmt;

pub(crate) fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// floor(valeur × 10^chiffres), avec le nombre de décimales retenu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValeurDecimale {
    scalee: BigInt,
    chiffres: usize,
}

impl ValeurDecimale {
    pub fn nouvelle(scalee: BigInt, chiffres: usize) -> Self {
        Self { scalee, chiffres }
    }

    /// Parse un texte décimal ("3.14159…", "-0.5", "42") en valeur scalée.
    /// La partie fractionnaire est tronquée ou complétée de zéros à `chiffres`.
    pub fn depuis_texte(texte: &str, chiffres: usize) -> ResultatPi<Self> {
        let illisible = || ErreurPi::TexteInvalide(texte.to_string());

        let s = texte.trim();
        let (negatif, s) = match s.strip_prefix('-') {
            Some(reste) => (true, reste),
            None => (false, s),
        };

        let (entier, frac) = match s.split_once('.') {
            Some((e, f)) => (e, f),
            None => (s, ""),
        };
        if entier.is_empty() || !entier.bytes().all(|b| b.is_ascii_digit()) {
            return Err(illisible());
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(illisible());
        }

        let partie_entiere = BigInt::parse_bytes(entier.as_bytes(), 10).ok_or_else(illisible)?;

        // fraction ajustée à `chiffres` décimales (troncature ou zéros à droite)
        let mut frac_ajustee: String = frac.chars().take(chiffres).collect();
        while frac_ajustee.len() < chiffres {
            frac_ajustee.push('0');
        }
        let partie_frac = if frac_ajustee.is_empty() {
            BigInt::zero()
        } else {
            BigInt::parse_bytes(frac_ajustee.as_bytes(), 10).ok_or_else(illisible)?
        };

        let mut scalee = partie_entiere * pow10(chiffres) + partie_frac;
        if negatif {
            scalee = -scalee;
        }
        Ok(Self::nouvelle(scalee, chiffres))
    }

    pub fn scalee(&self) -> &BigInt {
        &self.scalee
    }

    pub fn chiffres(&self) -> usize {
        self.chiffres
    }

    /// Texte décimal tronqué ("3.1415…"), fraction complétée de zéros à gauche.
    pub fn texte(&self) -> String {
        let negatif = self.scalee.is_negative();
        let mut abs = self.scalee.clone();
        if negatif {
            abs = -abs;
        }

        let echelle = pow10(self.chiffres);
        let partie_entiere = &abs / &echelle;
        let partie_frac = &abs % &echelle;

        if self.chiffres == 0 {
            return if negatif {
                format!("-{partie_entiere}")
            } else {
                format!("{partie_entiere}")
            };
        }

        let mut frac = partie_frac.to_str_radix(10);
        while frac.len() < self.chiffres {
            frac.insert(0, '0');
        }

        if negatif {
            format!("-{partie_entiere}.{frac}")
        } else {
            format!("{partie_entiere}.{frac}")
        }
    }

    /// Les `longueur` premiers caractères du texte décimal.
    pub fn prefixe(&self, longueur: usize) -> String {
        self.texte().chars().take(longueur).collect()
    }

    /// |self − autre|, aux mêmes décimales.
    pub fn ecart_absolu(&self, autre: &Self) -> Self {
        debug_assert_eq!(self.chiffres, autre.chiffres);
        Self::nouvelle((&self.scalee - &autre.scalee).abs(), self.chiffres)
    }

    /// self / autre en point fixe (troncature).
    pub fn quotient(&self, autre: &Self) -> ResultatPi<Self> {
        debug_assert_eq!(self.chiffres, autre.chiffres);
        if autre.scalee.is_zero() {
            return Err(ErreurPi::ArgumentInvalide("division par zéro".into()));
        }
        let scalee = (&self.scalee * pow10(self.chiffres)) / &autre.scalee;
        Ok(Self::nouvelle(scalee, self.chiffres))
    }

    /// Notation scientifique tronquée, `decimales` chiffres après le point
    /// (ex: 2 → "8.95e-140").
    pub fn notation_scientifique(&self, decimales: usize) -> String {
        if self.scalee.is_zero() {
            return "0e0".to_string();
        }

        let negatif = self.scalee.is_negative();
        let mut abs = self.scalee.clone();
        if negatif {
            abs = -abs;
        }

        let txt = abs.to_str_radix(10);
        let exposant = txt.len() as i64 - 1 - self.chiffres as i64;

        let mut mantisse: String = txt.chars().take(decimales + 1).collect();
        while mantisse.len() < decimales + 1 {
            mantisse.push('0');
        }

        let signe = if negatif { "-" } else { "" };
        if decimales == 0 {
            return format!("{signe}{mantisse}e{exposant}");
        }
        let (tete, reste) = mantisse.split_at(1);
        format!("{signe}{tete}.{reste}e{exposant}")
    }
}

impl fmt::Display for ValeurDecimale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.texte())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn val(texte: &str, chiffres: usize) -> ValeurDecimale {
        ValeurDecimale::depuis_texte(texte, chiffres)
            .unwrap_or_else(|e| panic!("depuis_texte({texte:?}) erreur: {e}"))
    }

    #[test]
    fn texte_et_retour() {
        assert_eq!(val("3.14", 5).texte(), "3.14000");
        assert_eq!(val("3.141592", 4).texte(), "3.1415"); // troncature, pas d'arrondi
        assert_eq!(val("-0.5", 3).texte(), "-0.500");
        assert_eq!(val("42", 0).texte(), "42");
    }

    #[test]
    fn zeros_de_tete_conserves() {
        // 1/100 à 4 décimales : la fraction doit garder ses zéros de tête
        let v = ValeurDecimale::nouvelle(BigInt::from(100), 4);
        assert_eq!(v.texte(), "0.0100");
    }

    #[test]
    fn textes_illisibles() {
        for mauvais in ["", "abc", "3.14.15", "3,14", ".5", "1e3"] {
            assert!(
                ValeurDecimale::depuis_texte(mauvais, 5).is_err(),
                "aurait dû être refusé: {mauvais:?}"
            );
        }
    }

    #[test]
    fn ecart_et_quotient() {
        let a = val("3.5", 6);
        let b = val("3.2", 6);
        assert_eq!(a.ecart_absolu(&b).texte(), "0.300000");
        assert_eq!(b.ecart_absolu(&a).texte(), "0.300000");

        let q = a.quotient(&b).unwrap();
        // 3.5/3.2 = 1.09375
        assert_eq!(q.texte(), "1.093750");

        let zero = ValeurDecimale::nouvelle(BigInt::from(0), 6);
        assert!(a.quotient(&zero).is_err());
    }

    #[test]
    fn notation_scientifique_basique() {
        // 895 × 10^-150 → 8.95e-148
        let v = ValeurDecimale::nouvelle(BigInt::from(895), 150);
        assert_eq!(v.notation_scientifique(2), "8.95e-148");

        assert_eq!(val("3.14159", 5).notation_scientifique(2), "3.14e0");
        assert_eq!(val("-0.25", 4).notation_scientifique(1), "-2.5e-1");

        let zero = ValeurDecimale::nouvelle(BigInt::from(0), 10);
        assert_eq!(zero.notation_scientifique(2), "0e0");
    }

    #[test]
    fn prefixe_inclut_le_point() {
        assert_eq!(val("3.14159", 5).prefixe(4), "3.14");
    }
}
