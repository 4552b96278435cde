//! Campagne numérique : propriétés de justesse + robustesse aux limites.
//!
//! But : vérifier les invariants du noyau sans faire chauffer la machine.
//! - budget temps global par test
//! - plancher de concordance : au moins (chiffres − 10) chiffres exacts
//! - monotonie : plus de termes ne dégrade JAMAIS la concordance
//! - déterminisme bit à bit
//! - précision 11 : seuil quasi dégénéré, doit terminer sans paniquer

use std::time::{Duration, Instant};

use super::comparaison::comparer_reference;
use super::evaluateur::EvaluateurPi;

fn evaluateur(chiffres: usize) -> EvaluateurPi {
    EvaluateurPi::nouveau(chiffres)
        .unwrap_or_else(|e| panic!("évaluateur({chiffres}) erreur: {e}"))
}

fn concordance(chiffres: usize, max_termes: usize) -> i64 {
    let pi = evaluateur(chiffres)
        .evaluer(max_termes)
        .unwrap_or_else(|e| panic!("evaluer({chiffres}, {max_termes}) erreur: {e}"));
    comparer_reference(&pi)
        .unwrap_or_else(|e| panic!("comparaison erreur: {e}"))
        .chiffres_concordants
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Plancher de concordance ------------------------ */

#[test]
fn num_plancher_de_concordance() {
    let t0 = Instant::now();

    // chiffres ≥ 20, plafond ≥ 50 → au moins (chiffres − 10) chiffres exacts
    for chiffres in [20usize, 40, 80] {
        let c = concordance(chiffres, 50);
        let plancher = chiffres as i64 - 10;
        assert!(
            c >= plancher,
            "chiffres={chiffres}: concordance {c} < plancher {plancher}"
        );
        budget(t0, Duration::from_secs(30));
    }
}

/* ------------------------ Monotonie en nombre de termes ------------------------ */

#[test]
fn num_monotonie_concordance() {
    let t0 = Instant::now();

    let mut precedente = i64::MIN;
    for plafond in [10usize, 25, 50, 75, 100] {
        let c = concordance(120, plafond);
        assert!(
            c >= precedente,
            "régression à plafond={plafond}: {c} < {precedente}"
        );
        precedente = c;
        budget(t0, Duration::from_secs(60));
    }
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn num_determinisme_bit_a_bit() {
    // deux évaluations indépendantes, mêmes entrées → même écriture décimale
    let a = evaluateur(100).evaluer(100).unwrap().texte();
    let b = evaluateur(100).evaluer(100).unwrap().texte();
    assert_eq!(a, b);

    let (va, ra) = evaluateur(100).evaluer_avec_convergence(100).unwrap();
    let (vb, rb) = evaluateur(100).evaluer_avec_convergence(100).unwrap();
    assert_eq!(va.texte(), vb.texte());
    assert_eq!(ra.len(), rb.len());
    for (x, y) in ra.iter().zip(rb.iter()) {
        assert_eq!(x.termes, y.termes);
        assert_eq!(x.valeur, y.valeur);
    }
}

/* ------------------------ Limite basse : précision 11 ------------------------ */

#[test]
fn num_precision_11_termine_sans_paniquer() {
    // seuil 10^(10−11) = 0.1 : l'arrêt survient dès les premiers termes
    let e = evaluateur(11);
    let pi = e.evaluer(200).unwrap();
    assert_eq!(pi.prefixe(4), "3.14");

    // dégradation silencieuse : résultat peu précis, jamais d'erreur
    let c = e.comparer_reference(Some(&pi), 200).unwrap();
    assert!(c.chiffres_concordants >= 3);
}

/* ------------------------ Extraction : fenêtres + plage ------------------------ */

#[test]
fn num_extraction_fenetres_et_bornes() {
    let t0 = Instant::now();

    let e = evaluateur(150);
    let tout = e.extraire_chiffres(64, 0, 10).unwrap();
    let gauche = e.extraire_chiffres(64, 0, 5).unwrap();
    let droite = e.extraire_chiffres(64, 5, 5).unwrap();

    assert_eq!(tout.len(), 10);
    assert_eq!(&tout[..5], gauche.as_slice());
    assert_eq!(&tout[5..], droite.as_slice());
    for c in &tout {
        assert!(*c < 64, "chiffre hors plage: {c}");
    }

    budget(t0, Duration::from_secs(60));
}

/* ------------------------ Scénario de référence ------------------------ */

#[test]
fn num_scenario_150_chiffres_100_termes() {
    let e = evaluateur(150);
    let pi = e.evaluer(100).unwrap();

    assert_eq!(pi.prefixe(15), "3.1415926535897");

    let c = e.comparer_reference(None, 100).unwrap();
    assert!(c.chiffres_concordants >= 14);
    assert_eq!(c.extrait_reference, "3.1415926535897932384626433832");

    // valeur passée et valeur recalculée : même rapport
    let c2 = e.comparer_reference(Some(&pi), 100).unwrap();
    assert_eq!(c.chiffres_concordants, c2.chiffres_concordants);
    assert_eq!(c.erreur_absolue, c2.erreur_absolue);
}
