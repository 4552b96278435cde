// src/main.rs
//
// π base 64 — démonstrateur console
// ---------------------------------
// But :
// - calculer π par la décomposition de type BBP (bases −64 et −1024)
// - confronter le résultat au π de référence (concordance + erreurs)
// - montrer la convergence de la série dominante aux points de contrôle
// - extraire les premiers chiffres base 64 de la partie fractionnaire
//
// Le noyau vit dans src/noyau/ ; ici, seulement la surface utilisateur.

use std::process;

use clap::Parser;

mod noyau;

use noyau::{nouvel_evaluateur, EvaluateurPi, ResultatPi};

#[derive(Parser)]
#[command(
    name = "pi-base64",
    version,
    about = "Formule de type BBP pour π en base 64 (noyau décimal exact)"
)]
struct Options {
    /// Chiffres décimaux retenus par toute l'arithmétique
    #[arg(long, default_value_t = 150)]
    precision: usize,

    /// Plafond de termes par sous-série
    #[arg(long, default_value_t = 100)]
    termes: usize,

    /// Nombre de chiffres base 64 extraits de la partie fractionnaire
    #[arg(long, default_value_t = 10)]
    extraction: usize,

    /// Sauter l'analyse de convergence
    #[arg(long)]
    sans_convergence: bool,

    /// Afficher les écritures décimales complètes (calcul + référence)
    #[arg(long)]
    complet: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into()),
        )
        .init();

    let options = Options::parse();
    if let Err(e) = lancer_demo(&options) {
        eprintln!("erreur: {e}");
        process::exit(1);
    }
}

fn lancer_demo(options: &Options) -> ResultatPi<()> {
    println!("π en base 64 — formule de type BBP");
    println!("{}", "=".repeat(50));
    println!("Formule : π/4 = (1/16) Σ[n≥0] (−1)^n / 64^n · (8/(4n+1) + 4/(4n+2) + 1/(4n+3))");
    println!("              + (1/256) Σ[n≥0] (−1)^n / 1024^n · (32/(4n+1) + 8/(4n+2) + 1/(4n+3))");
    println!();

    let evaluateur = nouvel_evaluateur(options.precision)?;

    /* ------------------------ Calcul + concordance ------------------------ */

    println!(
        "Calcul de π ({} chiffres, {} termes max)…",
        evaluateur.precision().chiffres(),
        options.termes
    );
    let pi = evaluateur.evaluer(options.termes)?;
    let rapport = evaluateur.comparer_reference(Some(&pi), options.termes)?;

    println!("Résultat      : {}…", rapport.extrait_calcule);
    println!("π (référence) : {}…", rapport.extrait_reference);
    println!("Chiffres concordants : {}", rapport.chiffres_concordants);
    println!(
        "Erreur absolue  : {}",
        rapport.erreur_absolue.notation_scientifique(2)
    );
    println!(
        "Erreur relative : {}",
        rapport.erreur_relative.notation_scientifique(2)
    );
    if options.complet {
        println!("Écriture complète : {}", rapport.calculee);
        println!("Référence scalée  : {}", rapport.reference);
    }
    println!();

    /* ------------------------ Convergence ------------------------ */

    if !options.sans_convergence {
        println!("Analyse de convergence :");
        println!("{}", "-".repeat(30));
        afficher_convergence(&evaluateur, options.termes.max(200))?;
        println!();
    }

    /* ------------------------ Chiffres base 64 ------------------------ */

    println!(
        "{} premiers chiffres base 64 de π (partie fractionnaire) :",
        options.extraction
    );
    let chiffres = evaluateur.extraire_chiffres(64, 0, options.extraction)?;
    println!("Base 64 : {chiffres:?}");

    let equivalents: Vec<String> = chiffres.iter().take(5).map(|c| format!("{c}/64")).collect();
    println!("Équivalents décimaux : {equivalents:?}");

    Ok(())
}

/// Une ligne par point de contrôle atteint : termes, concordance, début de la valeur.
fn afficher_convergence(evaluateur: &EvaluateurPi, max_termes: usize) -> ResultatPi<()> {
    let (_finale, releves) = evaluateur.evaluer_avec_convergence(max_termes)?;

    if releves.is_empty() {
        println!("(aucun point de contrôle atteint avant l'arrêt)");
        return Ok(());
    }

    for releve in &releves {
        let rapport = evaluateur.comparer_reference(Some(&releve.valeur), max_termes)?;
        println!(
            "Termes: {:3} | concordants: {:3} | valeur: {}…",
            releve.termes,
            rapport.chiffres_concordants,
            releve.valeur.prefixe(20)
        );
    }
    Ok(())
}
