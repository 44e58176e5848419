// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // エンジン本体と操作 (クリック、ドラッグ、元に戻す...)
pub mod components; // カード、山、持ち上げ中グループなどのデータ
pub mod config; // レイアウト定数とシェルの表示設定
pub mod error;
pub mod logic; // 置けるかどうかのルール、デッキ、自動移動
pub mod protocol; // シェルに渡すスナップショットの形
pub mod systems; // 配る処理

pub use app::{GameApp, GameEngine, Layout, Point, PressOutcome, Rect, StockClick};
pub use components::{Card, CardColor, DraggingInfo, GameStatus, Pile, Rank, RevealPolicy, StackType, Suit, UndoAction};
pub use config::{DeckColor, ShellSettings};
pub use error::{EngineError, SettingsError};
pub use protocol::TableStateData;

// JavaScript の console.log を Rust から呼び出すための準備 (extern ブロック)。
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    log("Panic hook set!");
}
