// src/noyau/format.rs

use super::erreurs::ErreurCalc;

/// Forme canonique d’un f64 pour l’affichage et l’éditeur.
/// - partie fractionnaire nulle => entier sans point ("2", pas "2.0")
/// - -0 => "0"
/// - sinon : plus courte forme qui relit la même valeur, jamais d’exposant
///
/// NOTE: pas de `{:.0}` pour les entiers : il écrit l’expansion binaire exacte
/// (1e27 -> "1000000000000000013287555072"). Display n’ajoute jamais ".0".
pub fn format_nombre(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/// Dernière étape du pipeline : contrôle de finitude puis budget d’affichage.
pub fn format_resultat(v: f64, limite_affichage: usize) -> Result<String, ErreurCalc> {
    // infini / NaN venant d’ailleurs que d’un diviseur nul littéral
    if !v.is_finite() {
        return Err(ErreurCalc::DivisionParZero);
    }

    let s = format_nombre(v);
    if s.chars().count() > limite_affichage {
        return Err(ErreurCalc::ResultatTropLong);
    }
    Ok(s)
}
