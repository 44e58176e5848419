// src/app/event_handler.rs
//! ユーザー入力 (クリック・ダブルクリック) に関するロジック。

use log::{debug, info};

use crate::app::game_engine::GameEngine;
use crate::app::stock_handler::StockClick;
use crate::components::game_state::UndoAction;
use crate::components::stack::StackType;
use crate::error::EngineError;
use crate::logic::auto_move::find_automatic_foundation_move;

/// マウスを押した時に何が起きたか。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    StockDrawn,
    StockRecycled(usize),
    StockUnchanged,
    /// 裏向きの一番上のカードを表にした。
    Flipped,
    /// カードを持ち上げた (ドラッグ開始)。
    Lifted,
    /// 何もしなかった (空の場所や、一番上じゃない裏向きカード)。
    Ignored,
}

impl PressOutcome {
    /// シェルに返す短い名前。
    pub fn as_str(&self) -> &'static str {
        match self {
            PressOutcome::StockDrawn => "stock_drawn",
            PressOutcome::StockRecycled(_) => "stock_recycled",
            PressOutcome::StockUnchanged => "stock_unchanged",
            PressOutcome::Flipped => "flipped",
            PressOutcome::Lifted => "lifted",
            PressOutcome::Ignored => "ignored",
        }
    }
}

impl From<StockClick> for PressOutcome {
    fn from(click: StockClick) -> Self {
        match click {
            StockClick::Drawn => PressOutcome::StockDrawn,
            StockClick::Recycled(count) => PressOutcome::StockRecycled(count),
            StockClick::Unchanged => PressOutcome::StockUnchanged,
        }
    }
}

impl GameEngine {
    /// マウスを押した時の振り分け。
    ///
    /// `card_index` はシェルがヒットテストで見つけたカード (空の場所なら None)。
    /// - 山札: カードの有無に関係なく `click_stock`
    /// - 一番上が裏向きの山: 一番上を表にする
    /// - 表向きのカード: そこから上を持ち上げる
    /// - 埋もれた裏向きのカード: 何もしない
    pub fn press(&mut self, pile_index: usize, card_index: Option<usize>) -> Result<PressOutcome, EngineError> {
        self.ensure_idle("press while a card group is lifted")?;
        let pile = self.pile_at(pile_index)?;

        if pile.stack_type() == StackType::Stock {
            return self.click_stock().map(PressOutcome::from);
        }
        let Some(card_index) = card_index else {
            debug!("Press on empty area of pile {}.", pile_index);
            return Ok(PressOutcome::Ignored);
        };

        let clicked_face_up = pile.card(card_index)?.is_face_up;
        let top_index = pile.len() - 1;
        if pile.top().is_some_and(|top| !top.is_face_up) {
            // 一番上が裏なら、どこを押しても一番上を表にするだけ
            self.flip_if_face_down(pile_index, top_index)?;
            return Ok(PressOutcome::Flipped);
        }
        if !clicked_face_up {
            debug!("Press on a buried face-down card in pile {}.", pile_index);
            return Ok(PressOutcome::Ignored);
        }

        self.begin_lift(pile_index, card_index)?;
        Ok(PressOutcome::Lifted)
    }

    /// 山札以外の山で、一番上の裏向きカードを表にする。
    ///
    /// 表にしたら true。一番上じゃない、もう表向き、などの場合は何もせず false。
    /// 表にすると元に戻す操作はクリアされる (裏返しは元に戻せない)。
    pub fn flip_if_face_down(&mut self, pile_index: usize, card_index: usize) -> Result<bool, EngineError> {
        self.ensure_idle("flip while a card group is lifted")?;
        let pile = self.pile_at(pile_index)?;
        pile.card(card_index)?;

        if pile.stack_type() == StackType::Stock || !pile.is_top_card(card_index) {
            return Ok(false);
        }
        match self.piles[pile_index].top_mut() {
            Some(card) if !card.is_face_up => {
                card.is_face_up = true;
                info!("Flipped {} on pile {}.", card, pile_index);
            }
            _ => return Ok(false),
        }
        self.undo_action = UndoAction::NoAction;
        Ok(true)
    }

    /// ダブルクリック: 捨て札か場札の一番上の表向きカードを、置ける組札へ送る。
    ///
    /// 送れたら true (元に戻す操作は `MoveCards`)。
    /// 送り先が無ければ何も動かさず false (元に戻す操作はクリアされる)。
    pub fn try_auto_move(&mut self, pile_index: usize, card_index: usize) -> Result<bool, EngineError> {
        self.ensure_idle("auto-move while a card group is lifted")?;
        let pile = self.pile_at(pile_index)?;
        let card = pile.card(card_index)?;

        let eligible_pile = matches!(pile.stack_type(), StackType::Waste | StackType::Tableau(_));
        if !eligible_pile || !pile.is_top_card(card_index) || !card.is_face_up {
            debug!("Double-click on pile {} card {} is not auto-movable.", pile_index, card_index);
            return Ok(false);
        }

        let target = find_automatic_foundation_move(card, &self.piles);
        self.begin_lift(pile_index, card_index)?;
        self.update_lift_target(target)?;
        let landed = self.end_lift(true)?;
        Ok(landed != pile_index)
    }
}
