// src/config/settings.rs
//! シェル (画面側) が持つ見た目の設定だよ。
//!
//! デッキの裏の色、ウィンドウの大きさと位置、ズーム倍率。
//! エンジンはこれを一切読まない。描画やレイアウト計算の時にシェルが渡すだけ！

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SettingsError;

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;
pub const ZOOM_STEP: f64 = 0.1;
/// ホイールの回転量をこれで割った分だけズームが変わる。
pub const WHEEL_DELTA_PER_ZOOM: f64 = 300.0;

/// カードの裏の色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DeckColor {
    #[default]
    Red,
    Blue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSettings {
    pub deck: DeckColor,
    pub window_size: (u32, u32),
    pub window_pos: (i32, i32),
    zoom_factor: f64,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            deck: DeckColor::Red,
            window_size: (800, 600),
            window_pos: (0, 0),
            zoom_factor: 1.0,
        }
    }
}

impl ShellSettings {
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// ズーム倍率を設定する。小数第1位に丸めてから [0.1, 10.0] に収める。
    pub fn set_zoom_factor(&mut self, factor: f64) {
        let rounded = (factor * 10.0).round() / 10.0;
        self.zoom_factor = if rounded <= 0.0 { MIN_ZOOM } else { rounded.min(MAX_ZOOM) };
        debug!("zoom factor set to {}", self.zoom_factor);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom_factor(self.zoom_factor + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom_factor(self.zoom_factor - ZOOM_STEP);
    }

    pub fn zoom_normal(&mut self) {
        self.set_zoom_factor(1.0);
    }

    /// マウスホイールの回転量 (angle delta) でズームする。
    pub fn apply_wheel(&mut self, angle_delta_y: f64) {
        self.set_zoom_factor(self.zoom_factor + angle_delta_y / WHEEL_DELTA_PER_ZOOM);
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// JSON から読み込む。足りない項目はデフォルト値、ズームは範囲に収め直す。
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: ShellSettings = serde_json::from_str(json)?;
        settings.set_zoom_factor(settings.zoom_factor);
        Ok(settings)
    }
}
