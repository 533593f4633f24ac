// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Le clavier est lu ici (une seule fois par frame), les boutons dans vue.rs :
// les deux passent par AppCalc::applique, jamais directement par le noyau.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

use etat::Touche;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let maintenant = ctx.input(|i| i.time);

        for touche in ctx.input(touches_clavier) {
            self.applique(touche, maintenant);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui, maintenant);
        });

        self.ui_notification(ctx, maintenant);

        // la notification doit disparaître même sans interaction
        if self.notification_active(maintenant).is_some() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

/// Traduit les événements clavier de la frame en touches de calculatrice.
fn touches_clavier(i: &egui::InputState) -> Vec<Touche> {
    let mut out = Vec::new();

    for ev in &i.events {
        match ev {
            egui::Event::Text(t) => out.extend(t.chars().filter_map(Touche::depuis_caractere)),

            egui::Event::Key {
                key,
                pressed: true,
                modifiers,
                ..
            } => {
                let t = match key {
                    egui::Key::Enter => Some(Touche::Egal),
                    egui::Key::Backspace => Some(Touche::Retour),
                    egui::Key::Escape => Some(Touche::Efface),
                    egui::Key::Z if modifiers.command => Some(Touche::Annuler),
                    egui::Key::Y if modifiers.command => Some(Touche::Retablir),
                    _ => None,
                };
                out.extend(t);
            }

            _ => {}
        }
    }

    out
}
