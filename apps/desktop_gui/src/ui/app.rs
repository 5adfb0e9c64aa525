//! Main application: submit lifecycle, results screen, and HTML export.

use std::fs;
use std::time::Instant;

use client_core::SubmissionInput;
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use render::{CardLabel, ComboCard, RenderedResults, StickerCard};
use shared::domain::{PriceTier, SortOrder, TierThresholds};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::notifications::{NoticeBanner, NotificationPresenter};

/// Per-submission lifecycle. Transitions happen only in [`StickerFinderApp::submit`]
/// and [`StickerFinderApp::process_ui_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Loading,
    ShowingResults,
    ShowingEmpty,
    ShowingError,
}

pub struct StickerFinderApp {
    server_url: String,
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    name_input: String,
    sort_order: SortOrder,
    thresholds: TierThresholds,

    state: UiState,
    /// Normalized name of the submission currently loading or displayed.
    queried_name: Option<String>,
    results: Option<RenderedResults>,
    notifications: NotificationPresenter,
}

impl StickerFinderApp {
    pub fn new(
        server_url: String,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
    ) -> Self {
        Self {
            server_url,
            cmd_tx,
            ui_rx,
            name_input: String::new(),
            sort_order: SortOrder::default(),
            thresholds: TierThresholds::default(),
            state: UiState::Idle,
            queried_name: None,
            results: None,
            notifications: NotificationPresenter::default(),
        }
    }

    fn submit(&mut self) {
        if self.state == UiState::Loading {
            return;
        }
        let input = match SubmissionInput::parse(&self.name_input, self.sort_order) {
            Ok(input) => input,
            Err(err) => {
                self.notifications
                    .notify(NoticeBanner::info(format!("Please enter a valid name: {err}")));
                return;
            }
        };

        let queried_name = input.name().to_string();
        match dispatch_backend_command(&self.cmd_tx, BackendCommand::Generate { input }) {
            Ok(()) => {
                // Entering Loading clears any previously rendered results
                // and disables repeat submission until the outcome arrives.
                self.results = None;
                self.queried_name = Some(queried_name);
                self.state = UiState::Loading;
            }
            Err(message) => {
                self.notifications.notify(NoticeBanner::error(message));
            }
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::CombosGenerated { input, combos } => {
                    let rendered = render::render(&combos, input.name(), self.thresholds);
                    self.state = match &rendered {
                        RenderedResults::NoMatches { .. } => UiState::ShowingEmpty,
                        RenderedResults::Cards(_) => UiState::ShowingResults,
                    };
                    self.queried_name = Some(input.name().to_string());
                    self.results = Some(rendered);
                }
                UiEvent::GenerateFailed(message) => {
                    self.state = UiState::ShowingError;
                    self.results = None;
                    self.notifications.notify(NoticeBanner::error(format!(
                        "Error generating combinations: {message}. Please try again."
                    )));
                }
            }
        }
    }

    fn export_report(&mut self) {
        let Some(results) = &self.results else {
            return;
        };
        let queried = self.queried_name.clone().unwrap_or_default();
        let title = format!("Sticker combinations for \"{queried}\"");
        let Some(path) = rfd::FileDialog::new()
            .set_file_name("sticker-combos.html")
            .add_filter("HTML", &["html"])
            .save_file()
        else {
            return;
        };
        match fs::write(&path, results.to_html_document(&title)) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "saved html report");
                self.notifications.notify(NoticeBanner::info(format!(
                    "Saved report to {}",
                    path.display()
                )));
            }
            Err(err) => {
                self.notifications.notify(NoticeBanner::error(format!(
                    "Failed to save report: {err}"
                )));
            }
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Name:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.name_input)
                    .hint_text("e.g. dragon lore")
                    .desired_width(220.0),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            egui::ComboBox::from_label("Sort")
                .selected_text(self.sort_order.label())
                .show_ui(ui, |ui| {
                    for order in SortOrder::ALL {
                        ui.selectable_value(&mut self.sort_order, order, order.label());
                    }
                });

            let generate = ui
                .add_enabled(self.state != UiState::Loading, egui::Button::new("Generate"))
                .clicked();
            if submitted || generate {
                self.submit();
            }

            if self.state == UiState::Loading {
                ui.spinner();
                ui.label("Generating combinations...");
            }
        });
    }

    fn tier_color(tier: PriceTier) -> egui::Color32 {
        match tier {
            PriceTier::Low => egui::Color32::from_rgb(92, 184, 92),
            PriceTier::Medium => egui::Color32::from_rgb(240, 173, 78),
            PriceTier::High => egui::Color32::from_rgb(217, 83, 79),
        }
    }

    fn show_sticker(ui: &mut egui::Ui, sticker: &StickerCard) {
        ui.group(|ui| {
            ui.vertical(|ui| {
                ui.strong(&sticker.display_name);
                ui.weak(&sticker.full_name);
                if let Some(rarity) = &sticker.rarity {
                    ui.small(format!("Rarity: {rarity}"));
                }
                if let Some(tournament) = &sticker.tournament {
                    ui.small(format!("Tournament: {tournament}"));
                }
                match &sticker.price_display {
                    Some(price) => {
                        ui.label(
                            egui::RichText::new(price)
                                .color(Self::tier_color(sticker.tier))
                                .strong(),
                        );
                        ui.hyperlink_to("Steam Market", &sticker.market_url);
                    }
                    None => {
                        ui.weak("Price unavailable");
                        ui.hyperlink_to("Search Steam Market", &sticker.market_url);
                    }
                }
            });
        });
    }

    fn show_combo_card(ui: &mut egui::Ui, card: &ComboCard) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.strong(format!("Combination {}", card.number));
                match card.label {
                    CardLabel::ExactMatch => {
                        ui.label(
                            egui::RichText::new(card.label.heading())
                                .color(egui::Color32::from_rgb(92, 184, 92)),
                        );
                    }
                    CardLabel::Alternative | CardLabel::NoStickers => {
                        ui.weak(card.label.heading());
                    }
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.strong(format!("Total: ${}", card.total_display));
                });
            });
            if card.stickers.is_empty() {
                ui.weak("No stickers found for this combination.");
            } else {
                ui.horizontal_wrapped(|ui| {
                    for sticker in &card.stickers {
                        Self::show_sticker(ui, sticker);
                    }
                });
            }
        });
    }

    fn show_results(&mut self, ui: &mut egui::Ui) {
        let mut export_clicked = false;
        match &self.results {
            None => {
                if self.state == UiState::Idle {
                    ui.weak("Enter a name to generate sticker combinations.");
                }
            }
            Some(RenderedResults::NoMatches { queried_name }) => {
                ui.heading("No combinations found");
                ui.label(format!(
                    "Sorry, we couldn't generate any sticker combinations for \
                     \"{queried_name}\". Try a different name or check if the \
                     stickers database has matching entries."
                ));
            }
            Some(RenderedResults::Cards(cards)) => {
                ui.horizontal(|ui| {
                    if let Some(queried) = &self.queried_name {
                        ui.heading(format!("Combinations for \"{queried}\""));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        export_clicked = ui.button("Save HTML report...").clicked();
                    });
                });
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for card in cards {
                        Self::show_combo_card(ui, card);
                    }
                });
            }
        }
        if export_clicked {
            self.export_report();
        }
    }
}

impl eframe::App for StickerFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.notifications.tick(Instant::now());

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Sticker Combo Finder");
            ui.weak(format!("Service: {}", self.server_url));
            ui.add_space(4.0);
            self.notifications.show(ui);
            self.show_form(ui);
            ui.separator();
            self.show_results(ui);
        });

        // Keep polling the event channel while idle on the UI side.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
