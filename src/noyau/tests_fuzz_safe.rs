//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l’éditeur + le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - séquences d’édition bornées
//! - budget temps global
//! - invariant clé : l’expression reste canonique (alternance nombre / opérateur)
//! - "=" rend toujours un Result discriminé, jamais de panique

use std::time::{Duration, Instant};

use super::editeur::EtatEditeur;
use super::erreurs::ErreurCalc;
use super::jetons::Op;
use crate::reglages::Reglages;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Commandes ------------------------ */

#[derive(Clone, Copy, Debug)]
enum Commande {
    Chiffre(char),
    Operateur(Op),
    Point,
    Signe,
    Pourcent,
    Retour,
    Efface,
    Egal,
}

fn gen_commande(rng: &mut Rng) -> Commande {
    // chiffres surreprésentés : sinon on n’atteint jamais la limite
    match rng.pick(20) {
        0..=8 => Commande::Chiffre(char::from(b'0' + rng.pick(10) as u8)),
        9 => Commande::Operateur(Op::Plus),
        10 => Commande::Operateur(Op::Moins),
        11 => Commande::Operateur(Op::Fois),
        12 => Commande::Operateur(Op::Div),
        13 => Commande::Point,
        14 => Commande::Signe,
        15 => Commande::Pourcent,
        16 => Commande::Retour,
        17 => Commande::Efface,
        _ => Commande::Egal,
    }
}

/// Applique une commande comme le ferait l’hôte : un échec garde l’état précédent.
fn applique(
    e: &EtatEditeur,
    c: Commande,
    r: &Reglages,
) -> (EtatEditeur, Option<ErreurCalc>) {
    let res = match c {
        Commande::Chiffre(d) => e.append_digit(d, r),
        Commande::Operateur(op) => Ok(e.append_operator(op)),
        Commande::Point => Ok(e.append_dot()),
        Commande::Signe => Ok(e.toggle_sign()),
        Commande::Pourcent => Ok(e.apply_percent()),
        Commande::Retour => Ok(e.backspace()),
        Commande::Efface => Ok(e.clear()),
        Commande::Egal => e.evaluate(r),
    };
    match res {
        Ok(suivant) => (suivant, None),
        Err(err) => (e.clone(), Some(err)),
    }
}

/* ------------------------ Invariants ------------------------ */

fn est_operateur(s: &str) -> bool {
    matches!(s, "+" | "-" | "*" | "/")
}

fn check_forme_canonique(e: &EtatEditeur) {
    let morceaux: Vec<&str> = e.expression.split(' ').collect();
    for (i, m) in morceaux.iter().enumerate() {
        if i % 2 == 1 {
            assert!(
                est_operateur(m),
                "position {i} devrait être un opérateur: {:?}",
                e.expression
            );
        } else {
            assert!(
                !matches!(*m, "+" | "*" | "/"),
                "deux opérateurs consécutifs: {:?}",
                e.expression
            );
            assert!(
                m.matches('.').count() <= 1,
                "deux points dans un nombre: {:?}",
                e.expression
            );
        }
    }
}

fn partie_entiere(jeton: &str) -> usize {
    jeton
        .trim_start_matches('-')
        .split('.')
        .next()
        .map_or(0, str::len)
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_sequences_d_edition() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);
    // limite basse : avec 12 chiffres, une suite de 13 chiffres tirés au hasard est trop rare
    let r = Reglages {
        max_chiffres: 4,
        ..Reglages::default()
    };

    // Même seed => mêmes séquences => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;
    let mut seen_limite = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let mut e = EtatEditeur::default();
        for _ in 0..40 {
            let c = gen_commande(&mut rng);
            let (suivant, err) = applique(&e, c, &r);

            match (c, err) {
                (Commande::Egal, None) => seen_ok += 1,
                (Commande::Egal, Some(err)) => {
                    assert!(!err.est_avertissement(), "{err:?} sur '='");
                    seen_err += 1;
                }
                (Commande::Chiffre(_), Some(err)) => {
                    assert_eq!(err, ErreurCalc::LimiteChiffres);
                    assert_eq!(suivant, e, "refus => état inchangé");
                    seen_limite += 1;
                }
                (Commande::Chiffre(_), None) if !e.resultat_affiche => {
                    assert!(
                        partie_entiere(suivant.dernier_jeton()) <= r.max_chiffres,
                        "limite franchie: {:?}",
                        suivant.expression
                    );
                }
                (_, Some(err)) => panic!("erreur inattendue {err:?} pour {c:?}"),
                _ => {}
            }

            check_forme_canonique(&suivant);
            if matches!(c, Commande::Efface) {
                assert_eq!(suivant, EtatEditeur::default());
            }
            e = suivant;
        }
    }

    // On veut voir un mix, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
    assert!(seen_limite > 0, "limite de chiffres jamais atteinte");
}

#[test]
fn fuzz_safe_determinisme() {
    let r = Reglages::default();
    let joue = |seed: u64| {
        let mut rng = Rng::new(seed);
        let mut e = EtatEditeur::default();
        let mut trace = Vec::new();
        for _ in 0..300 {
            let (suivant, err) = applique(&e, gen_commande(&mut rng), &r);
            trace.push((suivant.expression.clone(), err));
            e = suivant;
        }
        trace
    };

    assert_eq!(joue(0xBADC0DE_u64), joue(0xBADC0DE_u64));
}

#[test]
fn fuzz_safe_longue_chaine_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);
    let r = Reglages::default();

    // 1 + 1 + ... (800 termes) : pile d’opérateurs jamais profonde (associativité gauche)
    let mut e = EtatEditeur::default();
    for i in 0..800 {
        if i > 0 {
            e = e.append_operator(Op::Plus);
        }
        e = e.append_digit('1', &r).unwrap();
    }
    budget(t0, max);

    let fin = e.evaluate(&r).unwrap_or_else(|err| panic!("err: {err}"));
    assert_eq!(fin.expression, "800");
}
