//! src/reglages.rs
//!
//! Réglages utilisateur (reglages.toml).
//!
//! Tout est optionnel dans le fichier : une clé absente garde sa valeur par défaut.
//! Fichier absent => défauts. Fichier illisible ou malformé => défauts + avertissement.
//! Valeurs bornées au chargement (voir `Reglages::bornes`).
//!
//! Exemple :
//! ```toml
//! max_chiffres = 12
//! limite_affichage = 28
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Chiffres max dans la partie entière d’un nombre saisi.
pub const MAX_CHIFFRES_DEFAUT: usize = 12;

/// Longueur max du résultat formaté.
pub const LIMITE_AFFICHAGE_DEFAUT: usize = 28;

/// Garde-fous : au-delà, f64 ne représente plus les entiers saisis de toute façon.
const MAX_CHIFFRES_BORNE: usize = 15;
const LIMITE_AFFICHAGE_MIN: usize = 8;
const LIMITE_AFFICHAGE_BORNE: usize = 64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Reglages {
    pub max_chiffres: usize,
    pub limite_affichage: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            max_chiffres: MAX_CHIFFRES_DEFAUT,
            limite_affichage: LIMITE_AFFICHAGE_DEFAUT,
        }
    }
}

#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture des réglages: {0}")]
    Io(#[from] io::Error),

    #[error("réglages malformés: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Reglages {
    /// Parse un contenu TOML puis borne les valeurs.
    pub fn depuis_toml(contenu: &str) -> Result<Self, ErreurReglages> {
        let brut: Reglages = toml::from_str(contenu)?;
        Ok(brut.bornes())
    }

    /// Ramène chaque valeur dans son intervalle utile.
    pub fn bornes(self) -> Self {
        Self {
            max_chiffres: self.max_chiffres.clamp(1, MAX_CHIFFRES_BORNE),
            limite_affichage: self
                .limite_affichage
                .clamp(LIMITE_AFFICHAGE_MIN, LIMITE_AFFICHAGE_BORNE),
        }
    }

    /// Charge un fichier précis. Absent => Ok(défauts).
    pub fn charger(chemin: &Path) -> Result<Self, ErreurReglages> {
        if !chemin.exists() {
            debug!("pas de réglages à {}, défauts", chemin.display());
            return Ok(Self::default());
        }
        let contenu = fs::read_to_string(chemin)?;
        let r = Self::depuis_toml(&contenu)?;
        info!("réglages chargés depuis {}", chemin.display());
        Ok(r)
    }

    /// Chargement “jamais bloquant” pour le démarrage de l’app.
    pub fn charger_ou_defaut() -> Self {
        let Some(chemin) = chemin_reglages() else {
            warn!("répertoire de configuration introuvable, réglages par défaut");
            return Self::default();
        };

        match Self::charger(&chemin) {
            Ok(r) => r,
            Err(e) => {
                warn!("{e}; réglages par défaut");
                Self::default()
            }
        }
    }
}

/// `<config_dir>/calculatrice/reglages.toml`
pub fn chemin_reglages() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("calculatrice").join("reglages.toml"))
}
