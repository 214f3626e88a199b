use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subtitle: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card_bg: Color32,
    pub card_border: Color32,
    /// Cyan end of the original's gradient branding; historical line.
    pub accent: Color32,
    /// Purple end; projection line.
    pub accent_alt: Color32,
    pub correct: Color32,
    pub incorrect: Color32,
    pub warning: Color32,
    pub text_subdued: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_gray(200),
        heading: Color32::WHITE,
        subtitle: Color32::from_gray(160),
        central_panel: Color32::from_rgb(18, 20, 26),
        side_panel: Color32::from_rgb(28, 30, 38),
        card_bg: Color32::from_rgb(34, 37, 46),
        card_border: Color32::from_rgb(58, 62, 74),
        accent: Color32::from_rgb(0, 200, 255),
        accent_alt: Color32::from_rgb(170, 0, 255),
        correct: Color32::from_rgb(16, 185, 129),
        incorrect: Color32::from_rgb(239, 68, 68),
        warning: Color32::from_rgb(245, 158, 11),
        text_subdued: Color32::from_gray(130),
    },
};

impl UiConfig {
    /// Frame for the title bar (title + progress)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 10),
            ..Default::default()
        }
    }

    /// Frame for the bottom navigation bar (tighter vertical padding)
    pub fn bottom_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(16, 8),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(16),
            ..Default::default()
        }
    }

    /// Frame for info/question/recap cards
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card_bg,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(14),
            corner_radius: 8.into(),
            ..Default::default()
        }
    }
}
