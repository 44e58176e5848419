// src/protocol.rs

// このファイルは、エンジン (WASM) からシェル (JavaScript) へ渡す
// 盤面スナップショットの形式を定義するよ！💌
// `serde` で JSON にして `GameApp::state_json` から返す。
// シェルはこれを見て描画するだけで、盤面を直接いじることはないよ。
use serde::{Deserialize, Serialize};

use crate::components::card::{Card, Rank, Suit};
use crate::components::dragging_info::DraggingInfo;
use crate::components::game_state::{GameStatus, UndoAction};
use crate::components::stack::Pile;
pub use crate::components::stack::{RevealPolicy, StackType};

/// カード1枚の状態。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CardData {
    pub suit: Suit,
    pub rank: Rank,
    /// 1 (A) から 13 (K)。シェルが画像を選ぶ時に使う。
    pub rank_value: u8,
    pub is_face_up: bool,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self {
            suit: card.suit,
            rank: card.rank,
            rank_value: card.rank.value(),
            is_face_up: card.is_face_up,
        }
    }
}

/// 山1つ分。`cards` は下 (0) から上の順。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PileData {
    pub index: usize,
    pub stack_type: StackType,
    /// `Cascade` なら全部ずらして描く、`TopOnly` なら一番上だけ描く。
    pub reveal_policy: RevealPolicy,
    pub cards: Vec<CardData>,
}

impl From<&Pile> for PileData {
    fn from(pile: &Pile) -> Self {
        Self {
            index: pile.index(),
            stack_type: pile.stack_type(),
            reveal_policy: pile.reveal_policy(),
            cards: pile.cards().iter().map(CardData::from).collect(),
        }
    }
}

/// ドラッグ中のグループ。シェルはポインタに合わせてこれを描く。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LiftedData {
    pub source_pile: usize,
    pub original_position_in_stack: usize,
    /// 今ドロップしたら置かれる山 (置けなければ None)。
    pub target_pile: Option<usize>,
    pub cards: Vec<CardData>,
}

impl From<&DraggingInfo> for LiftedData {
    fn from(info: &DraggingInfo) -> Self {
        Self {
            source_pile: info.source_pile,
            original_position_in_stack: info.original_position_in_stack,
            target_pile: info.target_pile,
            cards: info.dragged_group.cards().iter().map(CardData::from).collect(),
        }
    }
}

/// 盤面全体のスナップショット。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TableStateData {
    pub piles: Vec<PileData>,
    pub lifted: Option<LiftedData>,
    pub has_pending_undo: bool,
    pub pending_undo: UndoAction,
    pub status: GameStatus,
}
