// src/app/undo_handler.rs
//! 元に戻す (1手だけ) のロジック。

use log::{info, warn};

use crate::app::game_engine::GameEngine;
use crate::components::game_state::UndoAction;
use crate::components::stack::{STOCK_INDEX, WASTE_INDEX};
use crate::error::EngineError;

impl GameEngine {
    /// 直前の操作を1つだけ元に戻す。
    ///
    /// 戻したら true、戻す操作が無ければ何もせず false。
    /// 戻したあとは `NoAction` になるので、続けて呼んでも2手前には戻らない。
    pub fn undo(&mut self) -> Result<bool, EngineError> {
        self.ensure_idle("undo while a card group is lifted")?;

        match self.undo_action {
            UndoAction::NoAction => {
                info!("Nothing to undo.");
                return Ok(false);
            }
            UndoAction::MoveCards { source, target, count } => self.undo_move_cards(source, target, count)?,
            UndoAction::StockToWaste => self.undo_stock_to_waste()?,
            UndoAction::WasteToStock => self.undo_waste_to_stock(),
        }
        self.undo_action = UndoAction::NoAction;
        Ok(true)
    }

    /// `target` の上から `count` 枚を、並びを保ったまま `source` の上へ戻す。
    fn undo_move_cards(&mut self, source: usize, target: usize, count: usize) -> Result<(), EngineError> {
        self.pile_at(source)?;
        let target_len = self.pile_at(target)?.len();
        let start = target_len.checked_sub(count).ok_or_else(|| {
            warn!("Undo: pile {} has {} cards, cannot take back {}.", target, target_len, count);
            EngineError::IndexOutOfRange { index: count, len: target_len }
        })?;

        let mut group = self.piles[target].extract_suffix(start)?;
        self.piles[source].merge_on_top(&mut group);
        info!("Undo: moved {} card(s) from pile {} back to pile {}.", count, target, source);
        Ok(())
    }

    fn undo_stock_to_waste(&mut self) -> Result<(), EngineError> {
        let mut card = self.piles[WASTE_INDEX].pop_top()?;
        card.is_face_up = false;
        info!("Undo: returning {} from Waste to Stock.", card);
        self.piles[STOCK_INDEX].push_top(card);
        Ok(())
    }

    /// 山札を上から順に捨て札へ戻す。山札の一番上が捨て札の一番下になる。
    fn undo_waste_to_stock(&mut self) {
        let mut count = 0;
        while let Ok(mut card) = self.piles[STOCK_INDEX].pop_top() {
            card.is_face_up = true;
            self.piles[WASTE_INDEX].push_top(card);
            count += 1;
        }
        info!("Undo: moved {} card(s) from Stock back to Waste.", count);
    }
}
