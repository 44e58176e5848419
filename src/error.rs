// src/error.rs
//! エンジンと設定まわりのエラー型をまとめるよ。
//!
//! どれもシェル側の「呼び出し方の間違い」を表すもので、
//! 普通にプレイしてる限りは発生しない。無効な手 (置けない場所へのドロップ) は
//! エラーじゃなくて「ターゲットなし」として扱うので、ここには出てこないよ。

use thiserror::Error;

/// GameEngine / Pile の操作が返すエラー。
///
/// `Err` を返した操作は、盤面を一切変更していないことが保証されてる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// 空の山からカードを取ろうとした。
    #[error("pile {pile} is empty")]
    EmptyPile { pile: usize },

    /// 山の範囲外のカード位置を指定した。
    #[error("card index {index} is out of range for a pile of {len} cards")]
    IndexOutOfRange { index: usize, len: usize },

    /// 存在しない山の番号 (0..13 以外)。
    #[error("no pile with index {0}")]
    NoSuchPile(usize),

    /// 今の状態では受け付けられない操作 (持ち上げ中じゃないのに end_lift とか)。
    #[error("invalid transition: {0}")]
    InvalidTransition(&'static str),

    /// check_invariants が盤面の不整合を見つけた。
    #[error("invariant violated: {0}")]
    InvariantViolated(String),
}

/// シェル設定 (ShellSettings) の読み書きで起きるエラー。
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to (de)serialize settings: {0}")]
    Json(#[from] serde_json::Error),
}
