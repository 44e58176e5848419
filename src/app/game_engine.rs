// src/app/game_engine.rs
//! ゲームの状態を丸ごと持つエンジン本体だよ！🃏
//!
//! 13個の山、持ち上げ中のグループ、元に戻す操作1つ、乱数生成器を持つ。
//! 操作ごとの処理は役割ごとにファイルを分けて `impl GameEngine` で書いてある:
//! - `stock_handler.rs`: 山札クリック (めくる / 捨て札を戻す)
//! - `drag_handler.rs`: 持ち上げ・ドラッグ中の判定・ドロップ
//! - `event_handler.rs`: クリックの振り分け、裏返し、ダブルクリック
//! - `undo_handler.rs`: 元に戻す
//! - `state_getter.rs`: シェル向けのスナップショット
//!
//! シングルスレッド前提で、全部 `&mut self` で同期的に動く。
//! ロックも裏で動くタスクも無いよ。

use std::collections::HashSet;

use itertools::Itertools;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::components::card::{Card, Rank};
use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::{GameStatus, UndoAction};
use crate::components::stack::{Pile, StackType, STOCK_INDEX};
use crate::error::EngineError;
use crate::logic::deck::{create_standard_deck, DECK_SIZE};
use crate::logic::rules;
use crate::systems::DealInitialCardsSystem;

/// ゲームエンジン。シェルはこれを1つ持って、入力イベントごとにメソッドを呼ぶ。
///
/// 状態は2つだけ:
/// - **Idle**: `lifted` が None。
/// - **LiftedGroup**: `lifted` が Some。この間に受け付けるのは
///   `update_lift_target*` と `end_lift` だけで、他の変更操作は
///   `InvalidTransition` で断る (盤面は変えない)。
#[derive(Debug)]
pub struct GameEngine {
    pub(crate) piles: Vec<Pile>,
    pub(crate) lifted: Option<DraggingInfo>,
    pub(crate) undo_action: UndoAction,
    rng: StdRng,
    deal_system: DealInitialCardsSystem,
}

impl GameEngine {
    /// OS のエントロピーでシードした乱数で、配り終わった状態のエンジンを作る。
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// シード固定で作る。同じシードなら同じ配り方になる。
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        info!("GameEngine: Initializing...");
        let mut piles = Pile::new_table();
        // 52枚はここで一度だけ作る。以降の deal は同じカードを集め直して配り直すだけ。
        for card in create_standard_deck() {
            piles[STOCK_INDEX].push_top(card);
        }
        let mut engine = Self {
            piles,
            lifted: None,
            undo_action: UndoAction::NoAction,
            rng,
            deal_system: DealInitialCardsSystem,
        };
        if let Err(e) = engine.deal() {
            warn!("GameEngine: initial deal failed: {}", e);
        }
        info!("GameEngine: Initialization complete.");
        engine
    }

    /// テスト用: 山の中身を直接指定してエンジンを作る。
    #[cfg(test)]
    pub(crate) fn from_piles(piles: Vec<Pile>, seed: u64) -> Self {
        Self {
            piles,
            lifted: None,
            undo_action: UndoAction::NoAction,
            rng: StdRng::seed_from_u64(seed),
            deal_system: DealInitialCardsSystem,
        }
    }

    /// 新しいゲームを配る。全部の山からカードを集めてシャッフルし、配り直す。
    /// 元に戻す操作もクリアされる。
    pub fn deal(&mut self) -> Result<(), EngineError> {
        self.ensure_idle("deal while a card group is lifted")?;

        let mut cards: Vec<Card> = self.piles.iter_mut().flat_map(Pile::drain_all).collect();
        if let Err(e) = self.deal_system.execute(&mut cards, &mut self.piles, &mut self.rng) {
            // 配れなかったカードは山札に戻して、枚数を保つ
            for card in cards {
                self.piles[STOCK_INDEX].push_top(card);
            }
            return Err(e);
        }
        self.undo_action = UndoAction::NoAction;
        info!("New game dealt.");
        Ok(())
    }

    /// 山の数 (常に 13)。
    pub fn pile_count(&self) -> usize {
        self.piles.len()
    }

    /// 山番号 `index` の山を見る。カード列と役割 (StackType)・見せ方が分かる。
    pub fn pile_at(&self, index: usize) -> Result<&Pile, EngineError> {
        self.piles.get(index).ok_or(EngineError::NoSuchPile(index))
    }

    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    pub fn has_pending_undo(&self) -> bool {
        self.undo_action.is_pending()
    }

    pub fn pending_undo(&self) -> UndoAction {
        self.undo_action
    }

    pub fn is_lifting(&self) -> bool {
        self.lifted.is_some()
    }

    /// 持ち上げ中のグループ (無ければ None)。
    pub fn lifted_group(&self) -> Option<&DraggingInfo> {
        self.lifted.as_ref()
    }

    /// 山と持ち上げ中グループのカードの合計。ゲーム中は常に 52。
    pub fn total_cards(&self) -> usize {
        let in_piles: usize = self.piles.iter().map(Pile::len).sum();
        in_piles + self.lifted.as_ref().map_or(0, DraggingInfo::card_count)
    }

    pub fn status(&self) -> GameStatus {
        let on_foundations = self
            .piles
            .iter()
            .filter(|pile| matches!(pile.stack_type(), StackType::Foundation(_)))
            .map(Pile::len)
            .sum();
        if rules::check_win_condition(on_foundations) {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    pub fn is_won(&self) -> bool {
        self.status() == GameStatus::Won
    }

    /// 盤面の不変条件を全部チェックする。
    ///
    /// - カードは52枚で、(suit, rank) の重複なし
    /// - 組札は A から始まる同じスートの昇順で、全部表向き
    /// - 山札は全部裏向き、捨て札は全部表向き
    /// - 場札では、表向きのカードの上に裏向きのカードが乗っていない
    pub fn check_invariants(&self) -> Result<(), EngineError> {
        let total = self.total_cards();
        if total != DECK_SIZE {
            return Err(EngineError::InvariantViolated(format!("expected 52 cards, found {}", total)));
        }

        let all_cards = self
            .piles
            .iter()
            .flat_map(|pile| pile.cards())
            .chain(self.lifted.iter().flat_map(|lifted| lifted.dragged_group.cards()));
        let unique: HashSet<_> = all_cards.map(Card::identity).collect();
        if unique.len() != total {
            return Err(EngineError::InvariantViolated("duplicate card identity".to_string()));
        }

        for pile in &self.piles {
            let cards = pile.cards();
            let ok = match pile.stack_type() {
                StackType::Stock => cards.iter().all(|c| !c.is_face_up),
                StackType::Waste => cards.iter().all(|c| c.is_face_up),
                StackType::Foundation(_) => {
                    cards.first().map_or(true, |c| c.rank == Rank::Ace)
                        && cards.iter().all(|c| c.is_face_up)
                        && cards
                            .iter()
                            .tuple_windows()
                            .all(|(below, above)| below.suit == above.suit && above.rank.is_one_above(below.rank))
                }
                StackType::Tableau(_) => cards
                    .iter()
                    .tuple_windows()
                    .all(|(below, above)| !below.is_face_up || above.is_face_up),
            };
            if !ok {
                return Err(EngineError::InvariantViolated(format!(
                    "pile {} ({:?}) is malformed",
                    pile.index(),
                    pile.stack_type()
                )));
            }
        }
        Ok(())
    }

    /// 持ち上げ中なら `InvalidTransition` を返す。
    pub(crate) fn ensure_idle(&self, context: &'static str) -> Result<(), EngineError> {
        if self.lifted.is_some() {
            warn!("Rejected: {}", context);
            return Err(EngineError::InvalidTransition(context));
        }
        Ok(())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
