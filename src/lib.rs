//! Calculatrice simple — noyau d’évaluation (f64) + réglages.
//!
//! Le noyau ne dépend d’aucune UI : l’hôte (src/app, eframe) lui passe des touches
//! et affiche ce qu’il rend.

pub mod noyau;
pub mod reglages;

pub use noyau::{eval_expression, ErreurCalc, EtatEditeur, Historique, Op};
pub use reglages::Reglages;
