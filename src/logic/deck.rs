// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use rand::seq::SliceRandom;
use rand::Rng;

/// 1組のデッキの枚数。
pub const DECK_SIZE: usize = 52;

/// 標準的な52枚のカードデッキを生成する関数だよ！🃏
///
/// スートとランクの組み合わせで全種類作る。向きは配る時に決めるので、
/// ここでは全部裏向き (`is_face_up: false`) にしておく。
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);

    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。
///
/// `SliceRandom::shuffle` は Fisher–Yates なので、どの並びも同じ確率で出る。
/// 乱数生成器は呼び出し側から渡す (テストではシード固定の StdRng を渡す)。
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        assert_eq!(deck.len(), 52, "デッキのカード数が52枚じゃない！");

        let unique: HashSet<_> = deck.iter().map(Card::identity).collect();
        assert_eq!(unique.len(), 52, "デッキに重複したカードが見つかりました！");

        assert!(deck.iter().all(|card| !card.is_face_up), "デッキに表向きのカードが含まれています！");
        println!("create_standard_deck 関数のテスト、成功！🎉");
    }

    #[test]
    fn shuffle_keeps_the_same_cards() {
        let initial_deck = create_standard_deck();
        let mut shuffled_deck = initial_deck.clone();
        let mut rng = StdRng::seed_from_u64(7);
        shuffle_deck(&mut shuffled_deck, &mut rng);

        assert_eq!(initial_deck.len(), shuffled_deck.len(), "シャッフルでカード数が変わった！");
        let before: HashSet<_> = initial_deck.iter().map(Card::identity).collect();
        let after: HashSet<_> = shuffled_deck.iter().map(Card::identity).collect();
        assert_eq!(before, after);
        // 52! 通りのうち元の並びに戻る確率は無視できる
        assert_ne!(initial_deck, shuffled_deck, "シャッフルしても順番が変わってない");
    }

    #[test]
    fn same_seed_gives_same_order() {
        let mut a = create_standard_deck();
        let mut b = create_standard_deck();
        shuffle_deck(&mut a, &mut StdRng::seed_from_u64(42));
        shuffle_deck(&mut b, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
