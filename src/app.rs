//! ギャラリーウィンドウ本体
//!
//! 全ウィジェットの配置とイベント配線。ロジックはファイル一覧の
//! 再スキャンとinclude列のトグルだけ。

use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};
use tracing::{debug, warn};

use crate::config::Config;
use crate::model::{
    FileRow, GalleryState, NotebookTab, COMBO_ITEMS, OPTION_MENU_ITEMS, READONLY_COMBO_ITEMS,
};
use crate::scanner;
use crate::theme::{self, ThemePreset};

/// Treeview column headers and widths of the original demo.
const TABLE_COLUMNS: &[(&str, f32)] = &[
    ("Include", 50.0),
    ("Subdirectory", 200.0),
    ("File Name", 200.0),
    ("Last Modified", 150.0),
];

const ROW_HEIGHT: f32 = 20.0;
const FIELD_WIDTH: f32 = 180.0;

pub struct GalleryApp {
    state: GalleryState,
    rows: Vec<FileRow>,
    scan_dir: PathBuf,
    config: Config,
    theme: ThemePreset,
    applied_theme: Option<ThemePreset>,
    status: String,
}

impl GalleryApp {
    pub fn new(
        config: Config,
        theme: ThemePreset,
        scan_dir: PathBuf,
        rows: Vec<FileRow>,
        status: String,
    ) -> Self {
        Self {
            state: GalleryState::default(),
            rows,
            scan_dir,
            config,
            theme,
            applied_theme: None,
            status,
        }
    }

    fn choose_directory(&mut self) {
        if let Some(dir) = rfd::FileDialog::new()
            .set_directory(&self.scan_dir)
            .pick_folder()
        {
            self.scan_dir = dir.clone();
            self.config.scan_dir = Some(dir);
            self.save_config();
            self.rescan();
        }
    }

    fn rescan(&mut self) {
        match scanner::scan_to_rows(&self.scan_dir) {
            Ok(rows) => {
                self.status = format!("{} files", rows.len());
                self.rows = rows;
            }
            Err(err) => {
                self.rows.clear();
                self.status = format!("Scan failed: {err}");
            }
        }
    }

    fn set_theme(&mut self, preset: ThemePreset) {
        if self.theme == preset {
            return;
        }
        self.theme = preset;
        self.config.theme = preset;
        self.save_config();
    }

    fn save_config(&mut self) {
        if let Err(err) = self.config.save() {
            warn!("設定を保存できません: {err}");
            self.status = format!("Config save failed: {err}");
        }
    }

    fn show_menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Choose Directory...").clicked() {
                    self.choose_directory();
                    ui.close_menu();
                }
                if ui.button("Rescan").clicked() {
                    self.rescan();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                let mut preset = self.theme;
                ui.radio_value(&mut preset, ThemePreset::Dark, "Dark theme");
                ui.radio_value(&mut preset, ThemePreset::Light, "Light theme");
                self.set_theme(preset);
                ui.separator();
                egui::gui_zoom::zoom_menu_buttons(ui);
            });
        });
    }

    fn show_checkbuttons(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Checkbuttons").strong());
        ui.group(|ui| {
            ui.checkbox(&mut self.state.check_unchecked, "Unchecked");
            ui.checkbox(&mut self.state.check_checked, "Checked");

            if self.state.third_state_resolved {
                ui.checkbox(&mut self.state.third_state_value, "Third state");
            } else {
                // 最初のクリックで通常の2状態に戻る（ttkのalternate相当）
                let mut value = self.state.third_state_value;
                let response =
                    ui.add(egui::Checkbox::new(&mut value, "Third state").indeterminate(true));
                if response.clicked() {
                    self.state.third_state_resolved = true;
                    self.state.third_state_value = true;
                }
            }

            let mut disabled = false;
            ui.add_enabled(false, egui::Checkbox::new(&mut disabled, "Disabled"));
        });
    }

    fn show_radiobuttons(&mut self, ui: &mut egui::Ui) {
        ui.label(RichText::new("Radiobuttons").strong());
        ui.group(|ui| {
            ui.radio_value(&mut self.state.radio_value, 1, "Unselected");
            ui.radio_value(&mut self.state.radio_value, 2, "Selected");
            ui.add_enabled(false, egui::RadioButton::new(false, "Disabled"));
        });
    }

    fn show_inputs_column(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);

        // Entry
        ui.add_sized(
            [FIELD_WIDTH, ROW_HEIGHT],
            egui::TextEdit::singleline(&mut self.state.entry_text),
        );

        // Spinbox
        ui.add(
            egui::DragValue::new(&mut self.state.spinbox_value)
                .clamp_range(0.0..=100.0)
                .speed(0.1),
        );

        // 編集可能コンボ: テキスト入力と候補リストの組
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.state.combo_text)
                    .desired_width(FIELD_WIDTH - 28.0),
            );
            egui::ComboBox::from_id_source("combo_suggestions")
                .selected_text("")
                .width(12.0)
                .show_ui(ui, |ui| {
                    for item in COMBO_ITEMS {
                        if ui
                            .selectable_label(self.state.combo_text == *item, *item)
                            .clicked()
                        {
                            self.state.combo_text = item.to_string();
                        }
                    }
                });
        });

        // Read-only combobox
        egui::ComboBox::from_id_source("readonly_combo")
            .width(FIELD_WIDTH)
            .selected_text(READONLY_COMBO_ITEMS[self.state.readonly_combo])
            .show_ui(ui, |ui| {
                for (index, item) in READONLY_COMBO_ITEMS.iter().enumerate() {
                    ui.selectable_value(&mut self.state.readonly_combo, index, *item);
                }
            });

        // Menubutton
        ui.menu_button("Menubutton", |ui| {
            for item in ["Menu item 1", "Menu item 2"] {
                if ui.button(item).clicked() {
                    debug!("menu item selected: {item}");
                    ui.close_menu();
                }
            }
            ui.separator();
            for item in ["Menu item 3", "Menu item 4"] {
                if ui.button(item).clicked() {
                    debug!("menu item selected: {item}");
                    ui.close_menu();
                }
            }
        });

        // OptionMenu
        egui::ComboBox::from_id_source("option_menu")
            .width(FIELD_WIDTH)
            .selected_text(self.state.option_value.clone())
            .show_ui(ui, |ui| {
                for item in OPTION_MENU_ITEMS {
                    ui.selectable_value(&mut self.state.option_value, item.to_string(), *item);
                }
            });

        let _ = ui.button("Button");
        let _ = ui.add(theme::accent_button("Accent button"));
        ui.toggle_value(&mut self.state.toggle_on, "Toggle button");
        ui.horizontal(|ui| {
            theme::switch(ui, &mut self.state.switch_on);
            ui.label("Switch");
        });
    }

    fn show_file_table(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (title, width) in TABLE_COLUMNS {
                ui.add_sized(
                    [*width, ROW_HEIGHT],
                    egui::Label::new(RichText::new(*title).strong()),
                );
            }
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show_rows(ui, ROW_HEIGHT, self.rows.len(), |ui, range| {
                for index in range {
                    let row = &mut self.rows[index];
                    ui.horizontal(|ui| {
                        // include列だけがクリック対象。他の列はラベルなので
                        // どこをクリックしてもフラグは変わらない。
                        let marker = if row.included { "✔" } else { " " };
                        if ui
                            .add_sized(
                                [TABLE_COLUMNS[0].1, ROW_HEIGHT],
                                egui::Button::new(marker).frame(false),
                            )
                            .clicked()
                        {
                            let included = row.toggle_include();
                            debug!(row = index, included, "include flag toggled");
                        }
                        ui.add_sized([TABLE_COLUMNS[1].1, ROW_HEIGHT], egui::Label::new(&row.subdir));
                        ui.add_sized([TABLE_COLUMNS[2].1, ROW_HEIGHT], egui::Label::new(&row.name));
                        ui.add_sized(
                            [TABLE_COLUMNS[3].1, ROW_HEIGHT],
                            egui::Label::new(&row.modified),
                        );
                    });
                }
            });
    }

    fn show_notebook(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.state.active_tab, NotebookTab::Tab1, "Tab 1");
            ui.selectable_value(&mut self.state.active_tab, NotebookTab::Tab2, "Tab 2");
            ui.selectable_value(&mut self.state.active_tab, NotebookTab::Tab3, "Tab 3");
        });
        ui.separator();

        match self.state.active_tab {
            NotebookTab::Tab1 => {
                ui.add_space(12.0);
                // スケールとプログレスバーは同じ値を共有する
                ui.columns(2, |columns| {
                    columns[0].add(
                        egui::Slider::new(&mut self.state.progress, 0.0..=100.0).show_value(false),
                    );
                    columns[1].add(
                        egui::ProgressBar::new(self.state.progress / 100.0).show_percentage(),
                    );
                });
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Factory theme for egui").size(15.0).strong());
                });
            }
            // タブ2と3は意図的に空
            NotebookTab::Tab2 | NotebookTab::Tab3 => {}
        }
    }

    fn show_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(self.scan_dir.display().to_string()).color(Color32::from_gray(170)),
            );
            ui.separator();
            let included = self.rows.iter().filter(|row| row.included).count();
            ui.label(format!("{} files / {} included", self.rows.len(), included));
            if !self.status.is_empty() {
                ui.separator();
                ui.label(RichText::new(&self.status).color(Color32::from_gray(170)));
            }
        });
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.applied_theme != Some(self.theme) {
            theme::apply(ctx, self.theme);
            self.applied_theme = Some(self.theme);
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.show_menu_bar(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.show_status_bar(ui);
        });

        egui::SidePanel::left("toggles")
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                self.show_checkbuttons(ui);
                ui.separator();
                self.show_radiobuttons(ui);
            });

        egui::SidePanel::left("inputs")
            .resizable(false)
            .show(ctx, |ui| {
                self.show_inputs_column(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::SidePanel::left("file_table")
                .resizable(true)
                .default_width(420.0)
                .width_range(280.0..=640.0)
                .show_inside(ui, |ui| {
                    self.show_file_table(ui);
                });
            egui::CentralPanel::default().show_inside(ui, |ui| {
                self.show_notebook(ui);
            });
        });
    }
}

pub fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();
    // ステータスバーに日本語のエラーメッセージが出ることがある
    let candidates = [
        r"C:\Windows\Fonts\meiryo.ttc",
        r"C:\Windows\Fonts\msgothic.ttc",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    ];

    for path in candidates {
        if let Ok(data) = std::fs::read(path) {
            fonts
                .font_data
                .insert("jp_fallback".to_string(), FontData::from_owned(data));
            fonts
                .families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, "jp_fallback".to_string());
            fonts
                .families
                .entry(FontFamily::Monospace)
                .or_default()
                .insert(0, "jp_fallback".to_string());
            ctx.set_fonts(fonts);
            return;
        }
    }
}
