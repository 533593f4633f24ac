// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage : dernière opération (petit) + expression en cours (grand)
// - Pavé tactile 4 colonnes, glyphes × ÷ − (normalisés dans etat.rs)
// - Notification transitoire en bas de fenêtre (équivalent “toast”)

use eframe::egui;

use super::etat::{op_depuis_glyphe, AppCalc, Touche};

/// Pavé : (libellé, touche). None => touche déduite du libellé (chiffre ou glyphe).
const PAVE: [[(&str, Option<Touche>); 4]; 5] = [
    [
        ("C", Some(Touche::Efface)),
        ("±", Some(Touche::Signe)),
        ("%", Some(Touche::Pourcent)),
        ("÷", None),
    ],
    [("7", None), ("8", None), ("9", None), ("×", None)],
    [("4", None), ("5", None), ("6", None), ("−", None)],
    [("1", None), ("2", None), ("3", None), ("+", None)],
    [
        ("DEL", Some(Touche::Retour)),
        ("0", None),
        (".", Some(Touche::Point)),
        ("=", Some(Touche::Egal)),
    ],
];

/// Libellé d’une case sans touche explicite : chiffre ou glyphe d’opérateur.
fn touche_du_libelle(libelle: &str) -> Option<Touche> {
    let mut chars = libelle.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_digit() {
        return Some(Touche::Chiffre(c));
    }
    op_depuis_glyphe(c).map(Touche::Operateur)
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_affichage(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui, maintenant);

                ui.add_space(6.0);
                self.ui_historique(ui, maintenant);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            // dernière opération : toujours une ligne, même vide (pas de saut)
            let derniere = if self.editeur.derniere_operation.is_empty() {
                " "
            } else {
                self.editeur.derniere_operation.as_str()
            };
            ui.label(egui::RichText::new(derniere).monospace().weak());

            ui.label(
                egui::RichText::new(&self.editeur.expression)
                    .monospace()
                    .size(32.0)
                    .strong(),
            );
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        let largeur = ((ui.available_width() - 3.0 * 6.0) / 4.0).max(48.0);

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for (libelle, touche) in ligne {
                        let touche = touche.or_else(|| touche_du_libelle(libelle));
                        self.bouton(ui, libelle, touche, [largeur, 44.0], maintenant);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui, maintenant: f64) {
        ui.horizontal(|ui| {
            let annuler = ui
                .add_enabled(self.historique.peut_annuler(), egui::Button::new("Annuler"))
                .on_hover_text("Ctrl+Z");
            if annuler.clicked() {
                self.applique(Touche::Annuler, maintenant);
            }

            let retablir = ui
                .add_enabled(self.historique.peut_retablir(), egui::Button::new("Rétablir"))
                .on_hover_text("Ctrl+Y");
            if retablir.clicked() {
                self.applique(Touche::Retablir, maintenant);
            }
        });
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| match &self.demarche {
                Some(d) => {
                    Self::champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
                    Self::champ_demarche(ui, "RPN", "demarche_rpn", &d.rpn);
                    Self::champ_demarche(ui, "Résultat", "demarche_resultat", &d.resultat);
                }
                None => {
                    ui.weak("rien à montrer (appuyer sur =)");
                }
            });
    }

    /// Notification transitoire, ancrée en bas.
    pub fn ui_notification(&self, ctx: &egui::Context, maintenant: f64) {
        let Some(n) = self.notification_active(maintenant) else {
            return;
        };

        egui::Area::new(egui::Id::new("notification_calc"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -16.0))
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    let couleur = if n.avertissement {
                        ui.visuals().warn_fg_color
                    } else {
                        ui.visuals().error_fg_color
                    };
                    ui.colored_label(couleur, &n.message);
                });
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton(
        &mut self,
        ui: &mut egui::Ui,
        libelle: &str,
        touche: Option<Touche>,
        taille: [f32; 2],
        maintenant: f64,
    ) {
        let Some(touche) = touche else {
            ui.label("");
            return;
        };

        let texte = egui::RichText::new(libelle).size(20.0);
        let resp = ui.add_sized(taille, egui::Button::new(texte));
        if resp.clicked() {
            self.applique(touche, maintenant);
        }
    }
}
