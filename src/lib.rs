//! Factoryテーマのウィジェット展示デモ
//!
//! 標準フォームコントロール一式を1枚のウィンドウに並べてスキンを
//! 確認するためのツール。ファイル一覧テーブルだけが実データ
//! （再帰ディレクトリ走査）を扱う。

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod scanner;
pub mod theme;
