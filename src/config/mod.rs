// src/config/mod.rs
//! レイアウト定数と、シェル側の見た目の設定。

pub mod layout;
pub mod settings;

pub use settings::{DeckColor, ShellSettings};
