//! src/noyau/editeur.rs
//!
//! Éditeur d’expression : transitions pures `&EtatEditeur -> EtatEditeur`.
//!
//! Contrats :
//! - Jamais d’erreur fatale ici : une édition invalide est un no-op silencieux,
//!   sauf la limite de chiffres qui remonte un avertissement (état inchangé).
//! - Forme canonique : opérateurs entourés d’un seul espace ("12 + -3.5"),
//!   au plus un '.' par nombre, jamais deux opérateurs en attente.
//! - L’état initial est "0".

use tracing::{debug, trace};

use super::erreurs::ErreurCalc;
use super::eval::{eval_detaillee, Demarche};
use super::format::format_nombre;
use super::jetons::{lire_nombre, Op};
use crate::reglages::Reglages;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EtatEditeur {
    /// Texte affiché en direct.
    pub expression: String,
    /// Vrai juste après un "=" réussi, jusqu’à la prochaine édition.
    pub resultat_affiche: bool,
    /// Étiquette secondaire : l’expression qui a produit le résultat affiché.
    pub derniere_operation: String,
}

impl Default for EtatEditeur {
    fn default() -> Self {
        Self {
            expression: "0".to_string(),
            resultat_affiche: false,
            derniere_operation: String::new(),
        }
    }
}

/// Retire l’opérateur final et ses espaces : "5 + " -> "5".
/// Marche pour un glyphe de n’importe quelle largeur (pas de décalage fixe).
fn sans_operateur_final(expr: &str) -> &str {
    let s = expr.trim_end_matches(' ');
    match s.rfind(' ') {
        Some(i) => &s[..i],
        None => "",
    }
}

impl EtatEditeur {
    /// Position (octets) du début du dernier jeton.
    fn debut_dernier_jeton(&self) -> usize {
        self.expression.rfind(' ').map_or(0, |i| i + 1)
    }

    /// Jeton actif : après le dernier espace, ou toute l’expression.
    pub fn dernier_jeton(&self) -> &str {
        &self.expression[self.debut_dernier_jeton()..]
    }

    /// Pas d’opérande en cours (vide ou opérateur en attente).
    fn sans_operande(&self) -> bool {
        self.expression.is_empty() || self.expression.ends_with(' ')
    }

    fn avec_expression(&self, expression: String) -> Self {
        Self {
            expression,
            resultat_affiche: false,
            derniere_operation: self.derniere_operation.clone(),
        }
    }

    /* ------------------------ Opérations d’édition ------------------------ */

    pub fn append_digit(&self, d: char, reglages: &Reglages) -> Result<Self, ErreurCalc> {
        if !d.is_ascii_digit() {
            trace!(?d, "append_digit: pas un chiffre, ignoré");
            return Ok(self.clone());
        }

        if self.resultat_affiche {
            return Ok(self.avec_expression(d.to_string()));
        }

        let jeton = self.dernier_jeton();
        let partie_entiere = jeton
            .trim_start_matches('-')
            .split('.')
            .next()
            .unwrap_or_default();
        if partie_entiere.len() >= reglages.max_chiffres {
            debug!(jeton, max = reglages.max_chiffres, "limite de chiffres");
            return Err(ErreurCalc::LimiteChiffres);
        }

        let expression = if self.expression == "0" {
            d.to_string()
        } else {
            format!("{}{d}", self.expression)
        };
        Ok(self.avec_expression(expression))
    }

    pub fn append_operator(&self, op: Op) -> Self {
        if self.expression.is_empty() {
            return self.clone();
        }

        // après "=", avec_expression retire le drapeau : le résultat devient le premier opérande
        let base = if self.expression.ends_with(' ') {
            sans_operateur_final(&self.expression)
        } else {
            self.expression.as_str()
        };

        self.avec_expression(format!("{base} {op} "))
    }

    pub fn append_dot(&self) -> Self {
        if self.resultat_affiche {
            return self.avec_expression("0.".to_string());
        }

        if self.dernier_jeton().contains('.') {
            return self.clone();
        }

        let expression = if self.sans_operande() {
            format!("{}0.", self.expression)
        } else if self.expression == "0" {
            "0.".to_string()
        } else {
            format!("{}.", self.expression)
        };
        self.avec_expression(expression)
    }

    /// ± : commence un nombre négatif, ou inverse le signe du jeton actif.
    /// Ne touche pas au drapeau `resultat_affiche`.
    pub fn toggle_sign(&self) -> Self {
        let mut expression = self.expression.clone();

        if self.sans_operande() {
            expression.push('-');
        } else {
            let debut = self.debut_dernier_jeton();
            let jeton = &self.expression[debut..];
            let inverse = match jeton.strip_prefix('-') {
                Some(reste) => reste.to_string(),
                None => format!("-{jeton}"),
            };
            expression.truncate(debut);
            expression.push_str(&inverse);
        }

        Self {
            expression,
            ..self.clone()
        }
    }

    /// % : divise le jeton actif par 100. Jeton illisible => no-op.
    pub fn apply_percent(&self) -> Self {
        if self.sans_operande() {
            return self.clone();
        }

        let debut = self.debut_dernier_jeton();
        let Some(v) = lire_nombre(&self.expression[debut..]) else {
            trace!(jeton = self.dernier_jeton(), "apply_percent: jeton illisible");
            return self.clone();
        };

        let mut expression = self.expression[..debut].to_string();
        expression.push_str(&format_nombre(v / 100.0));

        Self {
            expression,
            ..self.clone()
        }
    }

    pub fn backspace(&self) -> Self {
        if self.resultat_affiche {
            return self.clear();
        }
        if self.expression.is_empty() || self.expression == "0" {
            return self.clone();
        }

        let mut expression = if self.expression.ends_with(' ') {
            sans_operateur_final(&self.expression).to_string()
        } else {
            let mut s = self.expression.clone();
            s.pop();
            s
        };

        if expression.is_empty() {
            expression.push('0');
        }
        self.avec_expression(expression)
    }

    pub fn clear(&self) -> Self {
        Self::default()
    }

    /* ------------------------ "=" ------------------------ */

    /// Évalue l’expression courante. En cas d’échec, l’appelant garde l’état précédent.
    pub fn evaluate(&self, reglages: &Reglages) -> Result<Self, ErreurCalc> {
        self.evaluate_detaillee(reglages).map(|(etat, _)| etat)
    }

    /// Comme `evaluate`, avec la démarche (jetons, RPN) pour l’affichage.
    pub fn evaluate_detaillee(&self, reglages: &Reglages) -> Result<(Self, Demarche), ErreurCalc> {
        let demarche = eval_detaillee(&self.expression, reglages)?;
        debug!(expression = %self.expression, resultat = %demarche.resultat, "évaluation");

        let etat = Self {
            expression: demarche.resultat.clone(),
            resultat_affiche: true,
            derniere_operation: self.expression.clone(),
        };
        Ok((etat, demarche))
    }
}
