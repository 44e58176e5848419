// src/components/game_state.rs

// serde を使う宣言！スナップショットに「元に戻せるか」を載せるよ。
use serde::{Deserialize, Serialize};

/// 元に戻せる操作を1つだけ覚えておくための列挙型だよ！↩️
///
/// 新しい操作を記録すると上書きされ、元に戻せない操作 (裏返しクリックや、
/// 置き先なしのドロップ) をするとクリアされる。
/// 閉じた enum なので、undo() は全部のケースを match で処理できる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UndoAction {
    /// 元に戻すものはない。
    #[default]
    NoAction,
    /// `count` 枚を `source` から `target` へ動かした。
    MoveCards { source: usize, target: usize, count: usize },
    /// 山札から1枚めくって捨て札に置いた。
    StockToWaste,
    /// 空の山札に捨て札を全部戻した。
    WasteToStock,
}

impl UndoAction {
    pub fn is_pending(&self) -> bool {
        !matches!(self, UndoAction::NoAction)
    }
}

/// ゲーム全体の状態だよ！🏆
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// ゲームが進行中の状態
    Playing,
    /// 52枚全部が組札に乗った！🏆
    Won,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_undo_action_is_nothing() {
        let action = UndoAction::default();
        assert_eq!(action, UndoAction::NoAction);
        assert!(!action.is_pending());
    }

    #[test]
    fn every_recorded_action_is_pending() {
        assert!(UndoAction::StockToWaste.is_pending());
        assert!(UndoAction::WasteToStock.is_pending());
        assert!(UndoAction::MoveCards { source: 6, target: 2, count: 1 }.is_pending());
    }
}
