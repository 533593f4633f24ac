//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreurs.rs    : taxonomie des échecs (ErreurCalc)
//! - jetons.rs     : opérateurs + tokenisation
//! - rpn.rs        : shunting-yard + évaluation postfixe
//! - format.rs     : forme canonique d’un f64 + budget d’affichage
//! - eval.rs       : pipeline complet (+ démarche)
//! - editeur.rs    : transitions pures de l’état d’édition
//! - historique.rs : annuler / rétablir

pub mod editeur;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use editeur::EtatEditeur;
pub use erreurs::ErreurCalc;
pub use eval::{eval_detaillee, eval_expression, verifie_complete, Demarche};
pub use historique::Historique;
pub use jetons::Op;
