// src/noyau/erreurs.rs
//
// Taxonomie des échecs du noyau.
// Rien ne panique à travers la frontière du noyau : chaque opération rend
// une valeur ou un Result discriminé, l’hôte décide de la notification.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// Édition refusée (partie entière pleine). L’état reste inchangé.
    #[error("limite de chiffres atteinte")]
    LimiteChiffres,

    /// Expression vide, terminée par un opérateur, ou "0" initial.
    #[error("expression incomplète")]
    ExpressionIncomplete,

    #[error("jeton invalide: '{0}'")]
    JetonInvalide(String),

    /// Arité de la pile violée pendant l’évaluation postfixe.
    #[error("expression invalide")]
    ExpressionMalformee,

    #[error("division par zéro")]
    DivisionParZero,

    #[error("résultat trop long pour l’affichage")]
    ResultatTropLong,
}

impl ErreurCalc {
    /// Avertissement “doux” (édition refusée) vs échec d’évaluation.
    pub fn est_avertissement(&self) -> bool {
        matches!(self, ErreurCalc::LimiteChiffres)
    }
}
