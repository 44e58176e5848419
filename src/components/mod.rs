// src/components/mod.rs

// この components モジュールに属するサブモジュールを宣言するよ！
pub mod card;
pub mod dragging_info; // 持ち上げ中のグループ
pub mod game_state; // 元に戻す操作とゲーム状態
pub mod stack; // 山 (Pile) とその役割

pub use card::{Card, CardColor, Rank, Suit};
pub use dragging_info::DraggingInfo;
pub use game_state::{GameStatus, UndoAction};
pub use stack::{Pile, RevealPolicy, StackType};
