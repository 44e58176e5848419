// src/components/stack.rs

// serde を使うためにインポート！スナップショットで役割をそのまま JSON に出すよ。
use serde::{Deserialize, Serialize};

use crate::components::card::Card;
use crate::error::EngineError;

/// 山の総数。山札1 + 捨て札1 + 組札4 + 場札7 = 13！
pub const PILE_COUNT: usize = 13;
pub const STOCK_INDEX: usize = 0;
pub const WASTE_INDEX: usize = 1;
/// 組札 (Foundation) の山番号の範囲。
pub const FOUNDATION_INDICES: std::ops::Range<usize> = 2..6;
/// 場札 (Tableau) の山番号の範囲。
pub const TABLEAU_INDICES: std::ops::Range<usize> = 6..13;

/// 山の役割を示す Enum だよ。
/// ルール判定はこの役割で分岐する。山番号の数字で直接分岐しないこと！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackType {
    /// 山札 (Stock)。裏向きのカードを引く元の場所。
    Stock,
    /// 山札からめくったカードを置く場所 (Waste)。
    Waste,
    /// 組札 (Foundation)。4つあって、番号 (0-3) を持つ。
    /// スートは最初の A が置かれた時に決まる (最初から割り当てない)。
    Foundation(u8),
    /// 場札 (Tableau)。7列あるので、列番号 (0-6) を持つ。
    Tableau(u8),
}

impl StackType {
    /// 山番号 (0..13) から役割を引く。範囲外なら None。
    pub fn from_pile_index(index: usize) -> Option<Self> {
        match index {
            STOCK_INDEX => Some(StackType::Stock),
            WASTE_INDEX => Some(StackType::Waste),
            i if FOUNDATION_INDICES.contains(&i) => {
                Some(StackType::Foundation((i - FOUNDATION_INDICES.start) as u8))
            }
            i if TABLEAU_INDICES.contains(&i) => {
                Some(StackType::Tableau((i - TABLEAU_INDICES.start) as u8))
            }
            _ => None,
        }
    }

    /// 役割から山番号へ戻す。
    pub fn pile_index(self) -> usize {
        match self {
            StackType::Stock => STOCK_INDEX,
            StackType::Waste => WASTE_INDEX,
            StackType::Foundation(i) => FOUNDATION_INDICES.start + i as usize,
            StackType::Tableau(i) => TABLEAU_INDICES.start + i as usize,
        }
    }

    /// この役割の山をシェルがどう見せるか。
    pub fn reveal_policy(self) -> RevealPolicy {
        match self {
            StackType::Tableau(_) => RevealPolicy::Cascade,
            StackType::Stock | StackType::Waste | StackType::Foundation(_) => RevealPolicy::TopOnly,
        }
    }
}

/// 見せ方の属性。エンジンのルールでは使わず、シェル (と持ち上げ可能な位置の判定) が参照する。
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPolicy {
    /// 下のカードが少しずつずれて見える (場札)。
    Cascade,
    /// 一番上のカードだけ見える (山札・捨て札・組札)。
    TopOnly,
}

/// カードの山だよ。index 0 が一番下、最後が一番上。
///
/// 純粋な入れ物で、移動ルールは一切知らない。
/// カードは所有権ごと山から山へ移るので、同じカードが2つの山に同時に入ることはないよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pile {
    index: usize,
    stack_type: StackType,
    cards: Vec<Card>,
}

impl Pile {
    /// 山番号から空の山を作る。範囲外は NoSuchPile。
    pub fn new(index: usize) -> Result<Self, EngineError> {
        let stack_type = StackType::from_pile_index(index).ok_or(EngineError::NoSuchPile(index))?;
        Ok(Self { index, stack_type, cards: Vec::new() })
    }

    /// 13個の空の山を、山番号順に作る。
    pub fn new_table() -> Vec<Pile> {
        (0..PILE_COUNT).filter_map(|index| Pile::new(index).ok()).collect()
    }

    fn detached(index: usize, stack_type: StackType, cards: Vec<Card>) -> Self {
        Self { index, stack_type, cards }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn stack_type(&self) -> StackType {
        self.stack_type
    }

    pub fn reveal_policy(&self) -> RevealPolicy {
        self.stack_type.reveal_policy()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// 一番上のカード。
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// 一番下のカード。持ち上げたグループでは「先頭」のカードになる。
    pub fn bottom(&self) -> Option<&Card> {
        self.cards.first()
    }

    pub fn card(&self, index: usize) -> Result<&Card, EngineError> {
        self.cards
            .get(index)
            .ok_or(EngineError::IndexOutOfRange { index, len: self.cards.len() })
    }

    /// `index` が一番上のカードなら true。空の山では常に false。
    pub fn is_top_card(&self, index: usize) -> bool {
        !self.cards.is_empty() && index == self.cards.len() - 1
    }

    pub fn push_top(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn pop_top(&mut self) -> Result<Card, EngineError> {
        self.cards.pop().ok_or(EngineError::EmptyPile { pile: self.index })
    }

    /// 一番下に差し込む。捨て札を山札に戻す時だけ使う。
    pub fn push_bottom(&mut self, card: Card) {
        self.cards.insert(0, card);
    }

    /// `start` から上を全部切り離して、新しい山として返す。
    /// 並び順はそのまま、元の山は `start` の手前まで縮む。
    pub fn extract_suffix(&mut self, start: usize) -> Result<Pile, EngineError> {
        if start >= self.cards.len() {
            return Err(EngineError::IndexOutOfRange { index: start, len: self.cards.len() });
        }
        let suffix = self.cards.split_off(start);
        Ok(Pile::detached(self.index, self.stack_type, suffix))
    }

    /// `other` のカードを順番どおりに上へ積む。`other` は空になる。
    pub fn merge_on_top(&mut self, other: &mut Pile) {
        self.cards.append(&mut other.cards);
    }

    /// 全部取り出す (配り直し用)。
    pub fn drain_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}
