//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter l’EtatEditeur courant, l’historique, les réglages, la dernière
//! démarche et la notification transitoire ; aiguiller chaque touche vers le noyau.
//!
//! Contrats :
//! - Aucune logique d’édition ici : tout passe par les transitions du noyau.
//! - Un échec (avertissement ou erreur d’évaluation) ne touche pas à l’affichage :
//!   il produit seulement une notification.
//! - Normalisation des glyphes (×, ÷, −) vers les opérateurs ASCII : ici, à la frontière.

use calculatrice_simple::noyau::{Demarche, ErreurCalc, EtatEditeur, Historique, Op};
use calculatrice_simple::Reglages;
use tracing::debug;

/// Durée d’affichage d’une notification (secondes, horloge egui).
const DUREE_NOTIFICATION: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Operateur(Op),
    Point,
    Signe,
    Pourcent,
    Retour,
    Efface,
    Egal,
    Annuler,
    Retablir,
}

impl Touche {
    /// Clavier / texte saisi. Accepte les glyphes d’affichage.
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '.' | ',' => Some(Touche::Point),
            '%' => Some(Touche::Pourcent),
            '=' => Some(Touche::Egal),
            _ => op_depuis_glyphe(c).map(Touche::Operateur),
        }
    }
}

/// Glyphes d’affichage -> opérateur canonique.
pub fn op_depuis_glyphe(c: char) -> Option<Op> {
    match c {
        '+' => Some(Op::Plus),
        '-' | '−' => Some(Op::Moins),
        '*' | 'x' | 'X' | '×' => Some(Op::Fois),
        '/' | '÷' => Some(Op::Div),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub avertissement: bool,
    pub depuis: f64,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub editeur: EtatEditeur,
    pub historique: Historique,
    pub reglages: Reglages,

    // --- démarche (panneau d’explication) ---
    pub demarche: Option<Demarche>,

    // --- UX ---
    pub notification: Option<Notification>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            editeur: EtatEditeur::default(),
            historique: Historique::default(),
            reglages,
            demarche: None,
            notification: None,
        }
    }

    /// Point d’entrée unique des boutons et du clavier.
    pub fn applique(&mut self, touche: Touche, maintenant: f64) {
        let avant = &self.editeur;

        let res = match touche {
            Touche::Chiffre(d) => avant.append_digit(d, &self.reglages),
            Touche::Operateur(op) => Ok(avant.append_operator(op)),
            Touche::Point => Ok(avant.append_dot()),
            Touche::Signe => Ok(avant.toggle_sign()),
            Touche::Pourcent => Ok(avant.apply_percent()),
            Touche::Retour => Ok(avant.backspace()),
            Touche::Efface => {
                self.demarche = None;
                Ok(avant.clear())
            }
            Touche::Egal => avant.evaluate_detaillee(&self.reglages).map(|(e, d)| {
                self.demarche = Some(d);
                e
            }),
            Touche::Annuler => {
                if let Some(e) = self.historique.annule(&self.editeur) {
                    self.editeur = e;
                }
                return;
            }
            Touche::Retablir => {
                if let Some(e) = self.historique.retablit(&self.editeur) {
                    self.editeur = e;
                }
                return;
            }
        };

        match res {
            Ok(suivant) => {
                if suivant != self.editeur {
                    let precedent = std::mem::replace(&mut self.editeur, suivant);
                    self.historique.enregistre(precedent);
                }
            }
            Err(e) => self.notifie(&e, maintenant),
        }
    }

    fn notifie(&mut self, e: &ErreurCalc, maintenant: f64) {
        debug!(erreur = %e, "notification");
        self.notification = Some(Notification {
            message: e.to_string(),
            avertissement: e.est_avertissement(),
            depuis: maintenant,
        });
    }

    /// Notification encore visible à l’instant `maintenant`.
    pub fn notification_active(&self, maintenant: f64) -> Option<&Notification> {
        self.notification
            .as_ref()
            .filter(|n| maintenant - n.depuis < DUREE_NOTIFICATION)
    }
}
