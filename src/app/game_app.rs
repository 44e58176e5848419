// src/app/game_app.rs

// --- 必要なものをインポート ---
use log::{error, info};
use wasm_bindgen::prelude::*;

use crate::app::event_handler::PressOutcome;
use crate::app::game_engine::GameEngine;
use crate::app::layout_calculator::{Layout, Point, Rect};
use crate::config::ShellSettings;
use crate::error::EngineError;

/// ドラッグ開始時のポインタ位置と、持ち上げたグループ先頭のカードの矩形。
#[derive(Debug, Clone, Copy)]
struct DragAnchor {
    pointer: Point,
    start_rect: Rect,
}

// --- JavaScript 側 (シェル) から使うアプリケーション本体 ---
// 盤面はエンジンが持つ。ここはシェルの都合 (ズーム・パン・座標のヒットテスト) と
// エラーを bool / None に変換する役目だけ。
#[wasm_bindgen]
pub struct GameApp {
    engine: GameEngine,
    settings: ShellSettings,
    // テーブル全体のパン量
    offset: Point,
    drag_anchor: Option<DragAnchor>,
}

/// エンジンのエラーをログに出して None にする。
fn report<T>(context: &str, result: Result<T, EngineError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("GameApp::{} failed: {}", context, e);
            None
        }
    }
}

fn to_index(value: i32) -> Option<usize> {
    usize::try_from(value).ok()
}

// GameApp 構造体のメソッドを実装していくよ！
#[wasm_bindgen]
impl GameApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        info!("GameApp: 初期化中...");
        Self::from_engine(GameEngine::new())
    }

    /// シード固定で作る (同じシードなら同じ配り方)。
    pub fn with_seed(seed: u64) -> GameApp {
        Self::from_engine(GameEngine::with_seed(seed))
    }

    // --- ゲーム操作 ---

    pub fn deal(&mut self) -> bool {
        report("deal", self.engine.deal()).is_some()
    }

    pub fn undo(&mut self) -> bool {
        report("undo", self.engine.undo()).unwrap_or(false)
    }

    pub fn has_pending_undo(&self) -> bool {
        self.engine.has_pending_undo()
    }

    pub fn pile_count(&self) -> u32 {
        self.engine.pile_count() as u32
    }

    pub fn is_won(&self) -> bool {
        self.engine.is_won()
    }

    /// 山 `pile` のカード `card` (空の場所なら -1) を押した。結果の名前を返す。
    pub fn press(&mut self, pile: u32, card: i32) -> String {
        let outcome = report("press", self.engine.press(pile as usize, to_index(card)));
        outcome.unwrap_or(PressOutcome::Ignored).as_str().to_string()
    }

    pub fn begin_lift(&mut self, pile: u32, card: u32) -> bool {
        report("begin_lift", self.engine.begin_lift(pile as usize, card as usize)).is_some()
    }

    /// `candidate` (-1 なら無し) を置き先候補にする。置けるなら山番号を返す。
    pub fn update_lift_target(&mut self, candidate: i32) -> Option<u32> {
        let resolved = report(
            "update_lift_target",
            self.engine.update_lift_target(to_index(candidate)),
        )?;
        resolved.map(|index| index as u32)
    }

    /// ドロップ。グループが積まれた山の番号を返す。
    pub fn end_lift(&mut self, committed: bool) -> Option<u32> {
        self.drag_anchor = None;
        report("end_lift", self.engine.end_lift(committed)).map(|index| index as u32)
    }

    pub fn try_auto_move(&mut self, pile: u32, card: u32) -> bool {
        report("try_auto_move", self.engine.try_auto_move(pile as usize, card as usize)).unwrap_or(false)
    }

    pub fn flip_if_face_down(&mut self, pile: u32, card: u32) -> bool {
        report("flip_if_face_down", self.engine.flip_if_face_down(pile as usize, card as usize))
            .unwrap_or(false)
    }

    /// 盤面のスナップショットを JSON で返す。
    pub fn state_json(&self) -> Option<String> {
        match self.engine.state_json() {
            Ok(json) => Some(json),
            Err(e) => {
                error!("GameApp::state_json failed: {}", e);
                None
            }
        }
    }

    // --- 座標ベースの操作 (シェルはポインタ座標を渡すだけ) ---

    /// 座標 (x, y) を押した。カードを持ち上げたら、ドラッグの基準を覚えておく。
    pub fn press_at(&mut self, x: i32, y: i32) -> String {
        let layout = self.layout();
        let pointer = Point::new(x, y);
        let Some((pile_index, card_index)) = layout.pile_and_card_at(self.engine.piles(), pointer) else {
            return PressOutcome::Ignored.as_str().to_string();
        };
        let start_rect = card_index
            .and_then(|card| self.engine.pile_at(pile_index).ok().map(|pile| layout.card_rect(pile, card)));

        let outcome =
            report("press_at", self.engine.press(pile_index, card_index)).unwrap_or(PressOutcome::Ignored);
        if let (PressOutcome::Lifted, Some(start_rect)) = (outcome, start_rect) {
            self.drag_anchor = Some(DragAnchor { pointer, start_rect });
        }
        outcome.as_str().to_string()
    }

    /// ドラッグ中のポインタ位置 (x, y)。置き先が決まれば山番号を返す。
    pub fn drag_to(&mut self, x: i32, y: i32) -> Option<u32> {
        let anchor = self.drag_anchor?;
        let reference =
            Layout::drag_reference_point(anchor.start_rect, x - anchor.pointer.x, y - anchor.pointer.y);
        let layout = self.layout();
        let resolved = report("drag_to", self.engine.update_lift_target_at(&layout, reference))?;
        resolved.map(|index| index as u32)
    }

    /// 座標 (x, y) のダブルクリック。
    pub fn double_click_at(&mut self, x: i32, y: i32) -> bool {
        let layout = self.layout();
        match layout.pile_and_card_at(self.engine.piles(), Point::new(x, y)) {
            Some((pile, Some(card))) => {
                report("double_click_at", self.engine.try_auto_move(pile, card)).unwrap_or(false)
            }
            _ => false,
        }
    }

    /// 何も持っていない時の背景ドラッグでテーブル全体をずらす。
    pub fn pan(&mut self, dx: i32, dy: i32) {
        if self.engine.is_lifting() {
            return;
        }
        self.offset = Point::new(self.offset.x + dx, self.offset.y + dy);
    }

    /// 山 `pile` のカード `card` の矩形 [x, y, width, height]。
    pub fn card_rect(&self, pile: u32, card: u32) -> Option<Vec<i32>> {
        let pile = self.engine.pile_at(pile as usize).ok()?;
        let rect = self.layout().card_rect(pile, card as usize);
        Some(vec![rect.x, rect.y, rect.width, rect.height])
    }

    /// 山そのものの矩形 [x, y, width, height]。
    pub fn pile_rect(&self, pile: u32) -> Option<Vec<i32>> {
        let rect = self.layout().pile_rect(pile as usize)?;
        Some(vec![rect.x, rect.y, rect.width, rect.height])
    }

    // --- 表示設定 ---

    pub fn zoom_factor(&self) -> f64 {
        self.settings.zoom_factor()
    }

    pub fn zoom_in(&mut self) {
        self.settings.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.settings.zoom_out();
    }

    pub fn zoom_normal(&mut self) {
        self.settings.zoom_normal();
    }

    pub fn apply_wheel(&mut self, angle_delta_y: f64) {
        self.settings.apply_wheel(angle_delta_y);
    }

    pub fn settings_json(&self) -> Option<String> {
        match self.settings.to_json() {
            Ok(json) => Some(json),
            Err(e) => {
                error!("GameApp::settings_json failed: {}", e);
                None
            }
        }
    }

    /// 保存しておいた設定を読み込む。壊れた JSON なら今の設定のまま false。
    pub fn load_settings(&mut self, json: &str) -> bool {
        match ShellSettings::from_json(json) {
            Ok(settings) => {
                self.settings = settings;
                true
            }
            Err(e) => {
                error!("GameApp::load_settings failed: {}", e);
                false
            }
        }
    }
}

impl GameApp {
    fn from_engine(engine: GameEngine) -> Self {
        Self {
            engine,
            settings: ShellSettings::default(),
            offset: Point::default(),
            drag_anchor: None,
        }
    }

    fn layout(&self) -> Layout {
        Layout::from_settings(&self.settings, self.offset)
    }
}

impl Default for GameApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::stack::{STOCK_INDEX, WASTE_INDEX};

    #[test]
    fn errors_become_false_or_none() {
        let mut app = GameApp::with_seed(3);
        assert!(!app.begin_lift(99, 0), "存在しない山");
        assert_eq!(app.end_lift(true), None, "持ち上げてないのにドロップ");
        assert_eq!(app.update_lift_target(6), None);
        assert!(!app.undo(), "元に戻す操作はまだ無い");
        assert_eq!(app.pile_count(), 13);
    }

    #[test]
    fn press_on_stock_draws() {
        let mut app = GameApp::with_seed(3);
        assert_eq!(app.press(STOCK_INDEX as u32, -1), "stock_drawn");
        assert!(app.has_pending_undo());
        assert!(app.undo());
        assert!(!app.has_pending_undo());
    }

    #[test]
    fn press_at_stock_and_drag_waste_back() {
        let mut app = GameApp::with_seed(11);
        let stock = app.pile_rect(STOCK_INDEX as u32).unwrap();
        assert_eq!(app.press_at(stock[0] + 5, stock[1] + 5), "stock_drawn");

        let waste = app.pile_rect(WASTE_INDEX as u32).unwrap();
        assert_eq!(app.press_at(waste[0] + 5, waste[1] + 5), "lifted");
        // 動かさずに離すと元の山へ
        assert_eq!(app.drag_to(waste[0] + 5, waste[1] + 5), None);
        assert_eq!(app.end_lift(true), Some(WASTE_INDEX as u32));
        assert!(!app.has_pending_undo());
    }

    #[test]
    fn pan_moves_the_table() {
        let mut app = GameApp::with_seed(1);
        let before = app.pile_rect(0).unwrap();
        app.pan(10, 20);
        let after = app.pile_rect(0).unwrap();
        assert_eq!(after[0], before[0] + 10);
        assert_eq!(after[1], before[1] + 20);
    }

    #[test]
    fn settings_round_trip_through_the_app() {
        let mut app = GameApp::with_seed(1);
        app.zoom_in();
        let json = app.settings_json().unwrap();
        let mut other = GameApp::with_seed(2);
        assert!(other.load_settings(&json));
        assert!((other.zoom_factor() - 1.1).abs() < 1e-9);
        assert!(!other.load_settings("{not json"));
        assert!((other.zoom_factor() - 1.1).abs() < 1e-9, "壊れた JSON では変わらない");
    }

    #[test]
    fn state_json_is_available() {
        let app = GameApp::with_seed(5);
        let json = app.state_json().unwrap();
        assert!(json.contains("\"piles\""));
    }
}
