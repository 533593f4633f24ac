// src/noyau/jetons.rs

use std::fmt;

use super::erreurs::ErreurCalc;

/// Les quatre opérateurs binaires, en ASCII canonique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Div,
}

impl Op {
    /// Symbole ASCII strict. Les glyphes d’affichage (×, ÷, −) sont
    /// normalisés côté UI, pas ici.
    pub fn depuis_symbole(s: &str) -> Option<Op> {
        match s {
            "+" => Some(Op::Plus),
            "-" => Some(Op::Moins),
            "*" => Some(Op::Fois),
            "/" => Some(Op::Div),
            _ => None,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Op::Plus => "+",
            Op::Moins => "-",
            Op::Fois => "*",
            Op::Div => "/",
        }
    }

    pub fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Div => 2,
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
}

/// Numéral décimal : '-' optionnel, chiffres, au plus un '.', au moins un chiffre.
/// Refuse volontairement "inf", "NaN", "1e5" que `f64::from_str` accepterait.
fn est_numeral(s: &str) -> bool {
    let corps = s.strip_prefix('-').unwrap_or(s);
    let mut chiffres = 0usize;
    let mut points = 0usize;

    for c in corps.chars() {
        match c {
            '0'..='9' => chiffres += 1,
            '.' => points += 1,
            _ => return false,
        }
    }

    chiffres > 0 && points <= 1
}

/// Lit un numéral en f64 fini.
pub fn lire_nombre(s: &str) -> Option<f64> {
    if !est_numeral(s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Tokenize une expression canonique (séparateur : un seul espace).
///
/// Exemple : "12 + -3.5" -> [Num(12), Op(+), Num(-3.5)]
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    s.split(' ')
        .map(|morceau| {
            if let Some(op) = Op::depuis_symbole(morceau) {
                Ok(Tok::Op(op))
            } else if let Some(v) = lire_nombre(morceau) {
                Ok(Tok::Num(v))
            } else {
                Err(ErreurCalc::JetonInvalide(morceau.to_string()))
            }
        })
        .collect()
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
