// src/app/stock_handler.rs
//! Handles logic related to clicking the Stock pile (dealing to Waste, resetting Waste).

use log::info;

use crate::app::game_engine::GameEngine;
use crate::components::game_state::UndoAction;
use crate::components::stack::{STOCK_INDEX, WASTE_INDEX};
use crate::error::EngineError;
use crate::logic::rules::stock_waste;

/// 山札をクリックした結果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockClick {
    /// 1枚めくって捨て札に置いた。
    Drawn,
    /// 捨て札を全部 (この枚数) 山札に戻した。
    Recycled(usize),
    /// 山札も捨て札も空で、何も起きなかった。
    Unchanged,
}

impl GameEngine {
    /// 山札のクリック。山札にカードがあれば1枚めくり、空なら捨て札を山札に戻す。
    pub fn click_stock(&mut self) -> Result<StockClick, EngineError> {
        self.ensure_idle("stock click while a card group is lifted")?;

        let stock_is_empty = self.piles[STOCK_INDEX].is_empty();
        let waste_is_empty = self.piles[WASTE_INDEX].is_empty();

        if stock_waste::can_deal_from_stock(stock_is_empty) {
            self.deal_one_card_from_stock()
        } else if stock_waste::can_reset_stock_from_waste(stock_is_empty, waste_is_empty) {
            Ok(self.reset_stock_from_waste())
        } else {
            info!("Stock and Waste are both empty. Nothing to do.");
            Ok(StockClick::Unchanged)
        }
    }

    /// Deals one card from the Stock pile to the Waste pile.
    fn deal_one_card_from_stock(&mut self) -> Result<StockClick, EngineError> {
        let mut card = self.piles[STOCK_INDEX].pop_top()?;
        card.is_face_up = true;
        info!("Dealing card {} from Stock to Waste.", card);
        self.piles[WASTE_INDEX].push_top(card);
        self.undo_action = UndoAction::StockToWaste;
        Ok(StockClick::Drawn)
    }

    /// Moves every Waste card back to the (empty) Stock, face down.
    ///
    /// 捨て札の下から順に山札の「一番下」へ差し込むので、最初にめくったカードが
    /// 山札の一番上になる。もう一度めくっていくと、前回と同じ順番で出てくるよ。
    fn reset_stock_from_waste(&mut self) -> StockClick {
        let waste_cards = self.piles[WASTE_INDEX].drain_all();
        let count = waste_cards.len();
        info!("Resetting {} cards from Waste to Stock.", count);

        for mut card in waste_cards {
            card.is_face_up = false;
            self.piles[STOCK_INDEX].push_bottom(card);
        }
        self.undo_action = UndoAction::WasteToStock;
        StockClick::Recycled(count)
    }
}
