// src/app/drag_handler.rs
//! Handles card dragging logic (start, update, end).

use log::{debug, info, warn};

use crate::app::game_engine::GameEngine;
use crate::app::layout_calculator::{Layout, Point};
use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::UndoAction;
use crate::components::stack::{RevealPolicy, StackType};
use crate::error::EngineError;
use crate::logic::rules;

impl GameEngine {
    /// ドラッグ開始。山 `pile_index` の `card_index` から上を全部持ち上げる。
    ///
    /// - 持ち上げ中に呼ぶと InvalidTransition
    /// - 山札のカードは持ち上げられない (クリックでめくるだけ)
    /// - 裏向きのカードは持ち上げられない
    /// - 捨て札・組札 (一番上しか見えない山) は一番上の1枚だけ
    pub fn begin_lift(&mut self, pile_index: usize, card_index: usize) -> Result<(), EngineError> {
        self.ensure_idle("begin_lift while another group is lifted")?;

        let pile = self.pile_at(pile_index)?;
        if pile.stack_type() == StackType::Stock {
            warn!("Rejected lift from Stock (pile {}).", pile_index);
            return Err(EngineError::InvalidTransition("stock cards cannot be lifted"));
        }
        let card = pile.card(card_index)?;
        if !card.is_face_up {
            warn!("Rejected lift of face-down card {} in pile {}.", card, pile_index);
            return Err(EngineError::InvalidTransition("face-down cards cannot be lifted"));
        }
        if pile.reveal_policy() == RevealPolicy::TopOnly && !pile.is_top_card(card_index) {
            warn!("Rejected lift below the top of pile {}.", pile_index);
            return Err(EngineError::InvalidTransition("only the top card of this pile can be lifted"));
        }

        let group = self.piles[pile_index].extract_suffix(card_index)?;
        info!(
            "Lifted {} card(s) from pile {} starting at {}.",
            group.len(),
            pile_index,
            card_index
        );
        self.lifted = Some(DraggingInfo::new(pile_index, card_index, group));
        Ok(())
    }

    /// ドラッグ中の置き先判定。シェルがポインタの下にある山 (`candidate`) を渡すと、
    /// その山に今のグループを置けるなら置き先として覚えて返す。置けなければ None。
    ///
    /// 何度呼んでも盤面は変わらない (置き先の候補が上書きされるだけ)。
    pub fn update_lift_target(&mut self, candidate: Option<usize>) -> Result<Option<usize>, EngineError> {
        let lifted = self
            .lifted
            .as_ref()
            .ok_or(EngineError::InvalidTransition("no lifted group to move"))?;

        let resolved = match candidate {
            Some(index) => {
                let target = self.pile_at(index)?;
                rules::is_valid_target(target, &lifted.dragged_group).then_some(index)
            }
            None => None,
        };
        self.set_lift_target(resolved);
        Ok(resolved)
    }

    /// ドラッグ中の置き先判定 (座標版)。
    ///
    /// `reference` はグループ先頭のカードの中心 (シェルが動かしている位置)。
    /// 全部の山について「一番上のカードの矩形」に `reference` が入っているかを見て、
    /// その中で置ける山を置き先にする。複数あれば山番号が大きい方が勝つ。
    pub fn update_lift_target_at(
        &mut self,
        layout: &Layout,
        reference: Point,
    ) -> Result<Option<usize>, EngineError> {
        let lifted = self
            .lifted
            .as_ref()
            .ok_or(EngineError::InvalidTransition("no lifted group to move"))?;

        let resolved = self
            .piles
            .iter()
            .filter(|pile| layout.top_card_rect(pile).contains(reference))
            .filter(|pile| rules::is_valid_target(pile, &lifted.dragged_group))
            .map(|pile| pile.index())
            .last();
        self.set_lift_target(resolved);
        Ok(resolved)
    }

    fn set_lift_target(&mut self, target: Option<usize>) {
        if let Some(lifted) = self.lifted.as_mut() {
            if lifted.target_pile != target {
                debug!("Lift target changed: {:?} -> {:?}", lifted.target_pile, target);
            }
            lifted.target_pile = target;
        }
    }

    /// ドラッグ終了 (ドロップ)。
    ///
    /// `committed` が true で置き先が決まっていれば、グループをそこへ積んで
    /// `MoveCards` を元に戻す操作として記録する。
    /// それ以外 (置き先なし、キャンセル、置き先が元の山) は元の山にそのまま戻し、
    /// 元に戻す操作はクリアする。
    ///
    /// 戻り値はグループが最終的に積まれた山の番号。
    pub fn end_lift(&mut self, committed: bool) -> Result<usize, EngineError> {
        let mut lifted = self
            .lifted
            .take()
            .ok_or(EngineError::InvalidTransition("end_lift without a lifted group"))?;

        let source = lifted.source_pile;
        let count = lifted.card_count();
        let target = lifted.target_pile.filter(|&target| committed && target != source);

        match target {
            Some(target) => {
                self.piles[target].merge_on_top(&mut lifted.dragged_group);
                self.undo_action = UndoAction::MoveCards { source, target, count };
                info!("Moved {} card(s) from pile {} to pile {}.", count, source, target);
                Ok(target)
            }
            None => {
                self.piles[source].merge_on_top(&mut lifted.dragged_group);
                self.undo_action = UndoAction::NoAction;
                info!("Returned {} card(s) to pile {}.", count, source);
                Ok(source)
            }
        }
    }
}
