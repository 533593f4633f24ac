// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - Pas de parenthèses : flux strictement alterné nombre / opérateur.
// - Tous les opérateurs sont associatifs à gauche (comparaison >=).

use super::erreurs::ErreurCalc;
use super::jetons::{Op, Tok};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(3), Plus, Num(4), Fois, Num(2)]
///   rpn:    [Num(3), Num(4), Num(2), Fois, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Vec<Tok> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Op> = Vec::new();

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(op) => {
                while let Some(&top) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    out.push(Tok::Op(top));
                }
                ops.push(op);
            }
        }
    }

    // vide la pile ops (LIFO)
    while let Some(op) = ops.pop() {
        out.push(Tok::Op(op));
    }

    out
}

fn applique(op: Op, a: f64, b: f64) -> Result<f64, ErreurCalc> {
    match op {
        Op::Plus => Ok(a + b),
        Op::Moins => Ok(a - b),
        Op::Fois => Ok(a * b),
        Op::Div => {
            // refusé avant le calcul, sans compter sur l’infini IEEE
            if b == 0.0 {
                return Err(ErreurCalc::DivisionParZero);
            }
            Ok(a / b)
        }
    }
}

/// Évalue une RPN.
///
/// Pour chaque opérateur : b = premier dépilé, a = second, on empile a op b.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalc> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => st.push(v),
            Tok::Op(op) => {
                let b = st.pop().ok_or(ErreurCalc::ExpressionMalformee)?;
                let a = st.pop().ok_or(ErreurCalc::ExpressionMalformee)?;
                st.push(applique(op, a, b)?);
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalc::ExpressionMalformee),
    }
}
