use anyhow::Context as _;
use clap::Parser;
use eframe::egui;
use tracing::warn;

use widget_factory::app::{configure_fonts, GalleryApp};
use widget_factory::cli::Cli;
use widget_factory::config::Config;
use widget_factory::scanner;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "widget_factory=debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            warn!("設定ファイルを読めないため既定値を使用: {err}");
            Config::default()
        }
    };
    let theme = cli.theme.unwrap_or(config.theme);

    // ディレクトリの解決順: CLI > 設定ファイル > カレントディレクトリ
    let scan_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => match &config.scan_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().context("カレントディレクトリを取得できません")?,
        },
    };

    // CLIで明示されたディレクトリはウィンドウを開く前に検証する。
    // それ以外の走査失敗は空のテーブルとステータス表示に落とす。
    let (rows, status) = match scanner::scan_to_rows(&scan_dir) {
        Ok(rows) => {
            let status = format!("{} files", rows.len());
            (rows, status)
        }
        Err(err) if cli.dir.is_some() => {
            return Err(err).context("指定されたディレクトリを走査できません");
        }
        Err(err) => {
            warn!("初期スキャンに失敗: {err}");
            (Vec::new(), format!("Scan failed: {err}"))
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Widget Factory")
            .with_inner_size([1100.0, 680.0])
            .with_min_inner_size([900.0, 560.0]),
        centered: true,
        ..Default::default()
    };
    eframe::run_native(
        "Widget Factory",
        options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Box::new(GalleryApp::new(config, theme, scan_dir, rows, status))
        }),
    )
    .map_err(|err| anyhow::anyhow!("ウィンドウの起動に失敗: {err}"))?;

    Ok(())
}
