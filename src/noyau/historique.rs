// src/noyau/historique.rs
//
// Annuler / rétablir.
// Les états étant des valeurs immuables, l’historique n’est qu’une pile de copies :
// aucune opération inverse à maintenir.

use std::collections::VecDeque;

use super::editeur::EtatEditeur;

/// Profondeur par défaut (les plus anciens sont oubliés).
pub const CAPACITE_DEFAUT: usize = 64;

#[derive(Clone, Debug)]
pub struct Historique {
    passe: VecDeque<EtatEditeur>,
    futur: Vec<EtatEditeur>,
    capacite: usize,
}

impl Default for Historique {
    fn default() -> Self {
        Self::avec_capacite(CAPACITE_DEFAUT)
    }
}

impl Historique {
    pub fn avec_capacite(capacite: usize) -> Self {
        Self {
            passe: VecDeque::new(),
            futur: Vec::new(),
            capacite: capacite.max(1),
        }
    }

    /// À appeler avec l’état AVANT une édition qui l’a réellement changé.
    /// Toute nouvelle édition invalide la pile “rétablir”.
    pub fn enregistre(&mut self, avant: EtatEditeur) {
        self.futur.clear();
        if self.passe.back() == Some(&avant) {
            return;
        }
        if self.passe.len() == self.capacite {
            self.passe.pop_front();
        }
        self.passe.push_back(avant);
    }

    pub fn annule(&mut self, courant: &EtatEditeur) -> Option<EtatEditeur> {
        let precedent = self.passe.pop_back()?;
        self.futur.push(courant.clone());
        Some(precedent)
    }

    pub fn retablit(&mut self, courant: &EtatEditeur) -> Option<EtatEditeur> {
        let suivant = self.futur.pop()?;
        self.passe.push_back(courant.clone());
        Some(suivant)
    }

    pub fn peut_annuler(&self) -> bool {
        !self.passe.is_empty()
    }

    pub fn peut_retablir(&self) -> bool {
        !self.futur.is_empty()
    }
}
