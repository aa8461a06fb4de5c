//! Factoryテーマ本体
//!
//! ダーク/ライトの2バリアント。アクセント色はボタン・選択・スライダの
//! 塗りに共通で使う。

use eframe::egui::{self, Color32};
use serde::{Deserialize, Serialize};

/// Shared accent of both variants.
pub const ACCENT: Color32 = Color32::from_rgb(0, 120, 212);

const DARK_BASE: Color32 = Color32::from_rgb(28, 28, 28);
const DARK_RAISED: Color32 = Color32::from_rgb(43, 43, 43);
const DARK_FIELD: Color32 = Color32::from_rgb(20, 20, 20);
const LIGHT_BASE: Color32 = Color32::from_rgb(250, 250, 250);
const LIGHT_RAISED: Color32 = Color32::from_rgb(235, 235, 235);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Dark,
    Light,
}

impl std::str::FromStr for ThemePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" | "d" => Ok(ThemePreset::Dark),
            "light" | "l" => Ok(ThemePreset::Light),
            _ => Err(format!("Unknown theme: {}. Use dark or light", s)),
        }
    }
}

impl std::fmt::Display for ThemePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemePreset::Dark => write!(f, "dark"),
            ThemePreset::Light => write!(f, "light"),
        }
    }
}

/// Install the preset onto the context. Called once per theme change,
/// not per frame.
pub fn apply(ctx: &egui::Context, preset: ThemePreset) {
    let mut style = (*ctx.style()).clone();
    style.visuals = visuals_for_preset(preset);
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(10.0, 6.0);
    style.spacing.interact_size = egui::vec2(40.0, 24.0);
    ctx.set_style(style);
}

pub fn visuals_for_preset(preset: ThemePreset) -> egui::Visuals {
    let mut visuals = match preset {
        ThemePreset::Dark => {
            let mut v = egui::Visuals::dark();
            v.override_text_color = None;
            v.window_fill = DARK_BASE;
            v.panel_fill = DARK_BASE;
            v.extreme_bg_color = DARK_FIELD;
            v.faint_bg_color = DARK_RAISED;
            v
        }
        ThemePreset::Light => {
            let mut v = egui::Visuals::light();
            v.window_fill = LIGHT_BASE;
            v.panel_fill = LIGHT_BASE;
            v.extreme_bg_color = Color32::WHITE;
            v.faint_bg_color = LIGHT_RAISED;
            v
        }
    };

    visuals.selection.bg_fill = ACCENT;
    visuals.hyperlink_color = ACCENT;
    visuals.slider_trailing_fill = true;
    visuals.window_rounding = egui::Rounding::same(8.0);
    visuals.menu_rounding = egui::Rounding::same(8.0);
    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        widget.rounding = egui::Rounding::same(4.0);
    }
    visuals
}

/// アクセント塗りのボタン（ttkのAccent.TButton相当）
pub fn accent_button(text: impl Into<String>) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.into()).color(Color32::WHITE)).fill(ACCENT)
}

/// スイッチ（ttkのSwitch.TCheckbutton相当の描画ウィジェット）
pub fn switch(ui: &mut egui::Ui, on: &mut bool) -> egui::Response {
    let desired_size = egui::vec2(36.0, 18.0);
    let (rect, mut response) = ui.allocate_exact_size(desired_size, egui::Sense::click());
    if response.clicked() {
        *on = !*on;
        response.mark_changed();
    }

    if ui.is_rect_visible(rect) {
        let how_on = ui.ctx().animate_bool(response.id, *on);
        let visuals = ui.style().interact(&response);
        let radius = 0.5 * rect.height();
        let fill = if *on { ACCENT } else { visuals.bg_fill };
        ui.painter().rect(rect, radius, fill, visuals.bg_stroke);
        let knob_x = egui::lerp((rect.left() + radius)..=(rect.right() - radius), how_on);
        let center = egui::pos2(knob_x, rect.center().y);
        ui.painter()
            .circle(center, 0.75 * radius, visuals.fg_stroke.color, visuals.fg_stroke);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_differ_in_mode_and_fill() {
        let dark = visuals_for_preset(ThemePreset::Dark);
        let light = visuals_for_preset(ThemePreset::Light);
        assert!(dark.dark_mode);
        assert!(!light.dark_mode);
        assert_ne!(dark.window_fill, light.window_fill);
    }

    #[test]
    fn test_accent_applied_to_selection() {
        for preset in [ThemePreset::Dark, ThemePreset::Light] {
            let visuals = visuals_for_preset(preset);
            assert_eq!(visuals.selection.bg_fill, ACCENT);
            assert!(visuals.slider_trailing_fill);
        }
    }

    #[test]
    fn test_theme_round_trips_through_text() {
        for preset in [ThemePreset::Dark, ThemePreset::Light] {
            let parsed: ThemePreset = preset.to_string().parse().unwrap();
            assert_eq!(parsed, preset);
        }
        assert!("azure".parse::<ThemePreset>().is_err());
    }
}
