use crate::theme::ThemePreset;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "widget-factory")]
#[command(about = "Factoryテーマのウィジェット展示デモ", long_about = None)]
pub struct Cli {
    /// 一覧表示するディレクトリ（省略時は設定ファイル→カレントディレクトリ）
    pub dir: Option<PathBuf>,

    /// テーマ (dark/light)、このセッションのみ有効
    #[arg(long)]
    pub theme: Option<ThemePreset>,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["widget-factory"]).unwrap();
        assert!(cli.dir.is_none());
        assert!(cli.theme.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_dir_and_flags() {
        let cli = Cli::try_parse_from([
            "widget-factory",
            "/tmp/photos",
            "--theme",
            "light",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/photos")));
        assert_eq!(cli.theme, Some(ThemePreset::Light));
        assert!(cli.verbose);
    }

    #[test]
    fn test_theme_is_case_insensitive() {
        let cli = Cli::try_parse_from(["widget-factory", "--theme", "DARK"]).unwrap();
        assert_eq!(cli.theme, Some(ThemePreset::Dark));
    }

    #[test]
    fn test_unknown_theme_names_the_accepted_set() {
        let err = Cli::try_parse_from(["widget-factory", "--theme", "azure"]).unwrap_err();
        assert!(err.to_string().contains("dark"));
        assert!(err.to_string().contains("light"));
    }
}
