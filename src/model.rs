//! ギャラリーの状態モデル
//!
//! ウィジェットに束縛される値と、ファイル一覧テーブルの行を定義する。

/// Items offered by the editable combobox.
pub const COMBO_ITEMS: &[&str] = &["Combobox", "Editable item 1", "Editable item 2"];

/// Items offered by the read-only combobox.
pub const READONLY_COMBO_ITEMS: &[&str] = &["Readonly combobox", "Item 1", "Item 2"];

/// Items offered by the option menu.
pub const OPTION_MENU_ITEMS: &[&str] = &["OptionMenu", "Option 1", "Option 2"];

/// One row of the file table.
///
/// The include flag is owned by the row itself, so toggling one row can
/// never affect another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    /// Directory of the file, relative to the scanned root (`.` for the root).
    pub subdir: String,
    pub name: String,
    /// Last-modified time, pre-formatted as `%Y-%m-%d %H:%M:%S`.
    pub modified: String,
    pub included: bool,
}

impl FileRow {
    pub fn new(subdir: String, name: String, modified: String) -> Self {
        Self {
            subdir,
            name,
            modified,
            included: false,
        }
    }

    /// Flip the include flag and return the new value.
    pub fn toggle_include(&mut self) -> bool {
        self.included = !self.included;
        self.included
    }
}

/// Which notebook tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotebookTab {
    #[default]
    Tab1,
    Tab2,
    Tab3,
}

/// Values bound to the showcase widgets.
///
/// One field per control, mirroring the widgets top to bottom. The
/// third-state checkbutton keeps a value plus a resolved flag: it is
/// drawn indeterminate until the user clicks it once.
#[derive(Debug, Clone)]
pub struct GalleryState {
    pub check_unchecked: bool,
    pub check_checked: bool,
    pub third_state_value: bool,
    pub third_state_resolved: bool,
    /// Selected radio value (1 or 2).
    pub radio_value: u8,
    pub entry_text: String,
    pub spinbox_value: f64,
    /// Free text of the editable combobox.
    pub combo_text: String,
    /// Index into [`READONLY_COMBO_ITEMS`].
    pub readonly_combo: usize,
    pub option_value: String,
    pub toggle_on: bool,
    pub switch_on: bool,
    /// Shared by the scale and the progress bar (0.0 - 100.0).
    pub progress: f32,
    pub active_tab: NotebookTab,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            check_unchecked: false,
            check_checked: true,
            third_state_value: false,
            third_state_resolved: false,
            radio_value: 2,
            entry_text: "Entry".to_string(),
            spinbox_value: 0.0,
            combo_text: COMBO_ITEMS[0].to_string(),
            readonly_combo: 0,
            option_value: OPTION_MENU_ITEMS[0].to_string(),
            toggle_on: false,
            switch_on: false,
            progress: 75.0,
            active_tab: NotebookTab::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> FileRow {
        FileRow::new(".".to_string(), name.to_string(), "2026-01-18 12:00:00".to_string())
    }

    #[test]
    fn new_rows_start_excluded() {
        assert!(!row("a.txt").included);
    }

    #[test]
    fn toggle_odd_times_flips() {
        let mut r = row("a.txt");
        assert!(r.toggle_include());
        assert!(r.included);

        r.toggle_include();
        r.toggle_include();
        assert!(r.included);
    }

    #[test]
    fn toggle_even_times_restores() {
        let mut r = row("a.txt");
        for _ in 0..4 {
            r.toggle_include();
        }
        assert!(!r.included);
    }

    #[test]
    fn toggle_only_touches_its_row() {
        let mut rows = vec![row("a.txt"), row("b.txt"), row("c.txt")];
        rows[1].toggle_include();

        assert!(!rows[0].included);
        assert!(rows[1].included);
        assert!(!rows[2].included);
    }

    #[test]
    fn defaults_match_the_demo() {
        let state = GalleryState::default();
        assert!(!state.check_unchecked);
        assert!(state.check_checked);
        assert!(!state.third_state_resolved);
        assert_eq!(state.radio_value, 2);
        assert_eq!(state.entry_text, "Entry");
        assert_eq!(state.option_value, "OptionMenu");
        assert_eq!(state.progress, 75.0);
        assert_eq!(state.active_tab, NotebookTab::Tab1);
    }
}
