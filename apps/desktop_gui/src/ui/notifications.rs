//! Transient notification banner.
//!
//! Single-slot policy: a new notice replaces the current one, which also
//! cancels the pending dismissal of whatever it replaced.

use std::time::{Duration, Instant};

use eframe::egui;

pub const NOTICE_TTL: Duration = Duration::from_secs(3);
const NOTICE_FADE: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct NoticeBanner {
    pub kind: NoticeKind,
    pub message: String,
    shown_at: Instant,
}

impl NoticeBanner {
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= NOTICE_TTL
    }

    /// 1.0 while fully visible, dropping to 0.0 over the exit fade.
    fn opacity(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed >= NOTICE_TTL {
            return 0.0;
        }
        let remaining = NOTICE_TTL - elapsed;
        if remaining >= NOTICE_FADE {
            1.0
        } else {
            remaining.as_secs_f32() / NOTICE_FADE.as_secs_f32()
        }
    }
}

#[derive(Default)]
pub struct NotificationPresenter {
    current: Option<NoticeBanner>,
}

impl NotificationPresenter {
    pub fn notify(&mut self, banner: NoticeBanner) {
        self.current = Some(banner);
    }

    pub fn current(&self) -> Option<&NoticeBanner> {
        self.current.as_ref()
    }

    /// Drops the banner once its lifetime has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if self
            .current
            .as_ref()
            .is_some_and(|banner| banner.expired(now))
        {
            self.current = None;
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui) {
        let Some(banner) = self.current.clone() else {
            return;
        };
        let opacity = banner.opacity(Instant::now());

        let (fill, stroke) = match banner.kind {
            NoticeKind::Error => (
                egui::Color32::from_rgb(111, 53, 53),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
            ),
            NoticeKind::Info => (
                egui::Color32::from_rgb(46, 77, 110),
                egui::Stroke::new(1.0, egui::Color32::from_rgb(96, 136, 175)),
            ),
        };

        egui::Frame::NONE
            .fill(fill.gamma_multiply(opacity))
            .stroke(egui::Stroke::new(stroke.width, stroke.color.gamma_multiply(opacity)))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(
                        egui::RichText::new(&banner.message)
                            .color(egui::Color32::WHITE.gamma_multiply(opacity)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.current = None;
                        }
                    });
                });
            });
    }
}
