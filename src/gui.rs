//! The desktop window.
//!
//! Only this module draws anything. It turns button clicks into calls on the
//! [`Desk`] controller, shows the returned [`Notice`] in a modal dialog and
//! renders whatever the controller currently displays.

use crate::activity::ActivityLog;
use crate::config::DeskSettings;
use crate::desk::{Desk, Notice, View};
use crate::theme;
use eframe::egui;
use serde::{Deserialize, Serialize};

mod table;

use table::render_customer_table;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Generate,
    Load,
    Filter,
}

impl Action {
    fn label(self) -> &'static str {
        match self {
            Self::Generate => "Generate Data",
            Self::Load => "Load Data",
            Self::Filter => "Filter by Rating",
        }
    }
}

// Only the activity log and panel toggle survive a restart; the dataset is
// always reloaded from disk by the user.
#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct CustomerApp {
    #[serde(skip)]
    desk: Desk,
    #[serde(skip)]
    notice: Option<Notice>,
    pub activity: ActivityLog,
    pub show_activity: bool,
}

impl Default for CustomerApp {
    fn default() -> Self {
        Self {
            desk: Desk::default(),
            notice: None,
            activity: ActivityLog::new(),
            show_activity: true,
        }
    }
}

impl CustomerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: DeskSettings) -> Self {
        theme::apply_desk_theme(&cc.egui_ctx);

        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        app.desk = Desk::new(settings);
        app
    }

    fn run_action(&mut self, action: Action) {
        log::debug!("{} clicked", action.label());
        let notice = match action {
            Action::Generate => self.desk.on_generate(),
            Action::Load => self.desk.on_load(),
            Action::Filter => self.desk.on_filter(),
        };

        let outcome = if notice.is_error() { "failed" } else { "ok" };
        self.activity.push(
            format!("{} ({outcome})", action.label()),
            notice.message.clone(),
        );
        self.notice = Some(notice);
    }

    fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };

        let mut dismissed = false;
        let response = egui::Modal::new(egui::Id::new("notice_modal")).show(ctx, |ui| {
            ui.set_width(340.0);
            let title = egui::RichText::new(&notice.title).heading().strong();
            if notice.is_error() {
                ui.label(title.color(theme::ERROR_COLOR));
            } else {
                ui.label(title);
            }
            ui.add_space(theme::SPACING_SMALL);
            ui.label(&notice.message);
            ui.add_space(theme::SPACING_MEDIUM);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        });

        if dismissed || response.should_close() {
            self.notice = None;
        }
    }

    fn render_activity_log(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("📜 Activity Log");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🗑 Clear").on_hover_text("Wipe history").clicked() {
                    self.activity.clear();
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .show(ui, |ui| {
                egui::Grid::new("activity_grid")
                    .num_columns(3)
                    .spacing([15.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for entry in self.activity.entries() {
                            let local = entry.timestamp.with_timezone(&chrono::Local);
                            ui.label(local.format("%H:%M:%S").to_string());
                            ui.label(egui::RichText::new(&entry.action).strong());
                            ui.label(&entry.details);
                            ui.end_row();
                        }
                    });
            });
    }

    fn view_caption(&self) -> String {
        let count = self.desk.displayed().len();
        match self.desk.view() {
            View::Empty => format!(
                "No data loaded. Generate a batch into '{}', then load it.",
                self.desk.settings().data_file.display()
            ),
            View::All => format!("Showing all {count} customers"),
            View::Filtered { threshold } => {
                format!("Showing {count} customers with rating >= {threshold}")
            }
        }
    }
}

impl eframe::App for CustomerApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel")
            .frame(theme::top_bar_frame())
            .show(ctx, |ui| {
                egui::MenuBar::new().ui(ui, |ui| {
                    ui.menu_button("File", |ui| {
                        if ui.button("Quit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                    ui.menu_button("View", |ui| {
                        ui.checkbox(&mut self.show_activity, "Activity Log");
                    });
                });
            });

        egui::TopBottomPanel::bottom("activity_pane")
            .resizable(true)
            .default_height(140.0)
            .show_animated(ctx, self.show_activity, |ui| {
                ui.add_space(theme::SPACING_SMALL);
                self.render_activity_log(ui);
            });

        let mut clicked = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(theme::SPACING_SMALL);
                ui.label(egui::RichText::new("Customer Management System").size(16.0));
                ui.add_space(theme::SPACING_MEDIUM);
            });

            ui.horizontal(|ui| {
                let total_width = theme::BUTTON_WIDTH * 3.0 + theme::SPACING_SMALL * 2.0;
                let start_space = (ui.available_width() - total_width) / 2.0;
                if start_space > 0.0 {
                    ui.add_space(start_space);
                }
                for action in [Action::Generate, Action::Load, Action::Filter] {
                    if ui
                        .add_sized(
                            [theme::BUTTON_WIDTH, 30.0],
                            egui::Button::new(action.label()),
                        )
                        .clicked()
                    {
                        clicked = Some(action);
                    }
                }
            });

            ui.add_space(theme::SPACING_MEDIUM);
            ui.label(egui::RichText::new(self.view_caption()).weak());
            ui.separator();

            let highlight_from = self.desk.settings().rating_threshold;
            egui::ScrollArea::horizontal().show(ui, |ui| {
                render_customer_table(ui, self.desk.displayed(), highlight_from);
            });
        });

        if let Some(action) = clicked {
            self.run_action(action);
        }

        self.render_notice(ctx);
    }
}
