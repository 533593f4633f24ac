//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile f64 -> format
//!
//! Pipeline à un seul passage, sans état : on s’arrête au premier échec.

use tracing::debug;

use super::erreurs::ErreurCalc;
use super::format::format_resultat;
use super::jetons::{format_tokens, tokenize};
use super::rpn::{eval_rpn, to_rpn};
use crate::reglages::Reglages;

/// Trace des étapes d’une évaluation (panneau “Démarche” de l’hôte).
#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub resultat: String,
}

/// Précondition du pipeline : rien à évaluer si vide, si un opérateur
/// est en attente (espace final), ou si c’est le "0" initial.
pub fn verifie_complete(expr: &str) -> Result<(), ErreurCalc> {
    if expr.is_empty() || expr.ends_with(' ') || expr == "0" {
        return Err(ErreurCalc::ExpressionIncomplete);
    }
    Ok(())
}

/// API publique : évalue une expression canonique et retourne le résultat formaté.
pub fn eval_expression(expr: &str, reglages: &Reglages) -> Result<String, ErreurCalc> {
    eval_detaillee(expr, reglages).map(|d| d.resultat)
}

/// Comme `eval_expression`, mais garde jetons + RPN pour la démarche.
pub fn eval_detaillee(expr: &str, reglages: &Reglages) -> Result<Demarche, ErreurCalc> {
    // 0) Rien à évaluer
    verifie_complete(expr)?;

    // 1) Jetons
    let jetons = tokenize(expr)?;
    let jetons_txt = format_tokens(&jetons);

    // 2) RPN
    let rpn = to_rpn(&jetons);
    let rpn_txt = format_tokens(&rpn);
    debug!(jetons = %jetons_txt, rpn = %rpn_txt, "shunting-yard");

    // 3) Pile
    let valeur = eval_rpn(&rpn)?;

    // 4) Contrôle fini + budget d’affichage
    let resultat = format_resultat(valeur, reglages.limite_affichage)?;

    Ok(Demarche {
        jetons: jetons_txt,
        rpn: rpn_txt,
        resultat,
    })
}
