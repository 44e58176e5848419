// src/systems/deal_system.rs

use log::info;
use rand::Rng;

use crate::components::card::Card;
use crate::components::stack::{Pile, PILE_COUNT, STOCK_INDEX, TABLEAU_INDICES};
use crate::error::EngineError;
use crate::logic::deck::shuffle_deck;

/// 初期カード配置システム！
/// 52枚をシャッフルして、7つの場札と山札に配る役割を担うよ。
#[derive(Default, Debug, Clone, Copy)]
pub struct DealInitialCardsSystem;

impl DealInitialCardsSystem {
    /// ゲームの初期カード配置を実行する関数だよ！ 🎉
    ///
    /// 1. `cards` をシャッフル
    /// 2. 13個の山を全部空にする
    /// 3. 場札 `6+i` に `i+1` 枚ずつ (1,2,...,7 枚) 順番に配る。一番上だけ表向き
    /// 4. 残りの 24 枚は裏向きのまま、シャッフル順で山札へ
    ///
    /// `cards` は配り終わると空になる (カードは全部どこかの山に移る)。
    pub fn execute<R: Rng + ?Sized>(
        &self,
        cards: &mut Vec<Card>,
        piles: &mut [Pile],
        rng: &mut R,
    ) -> Result<(), EngineError> {
        if piles.len() != PILE_COUNT {
            return Err(EngineError::InvalidTransition("deal needs exactly 13 piles"));
        }
        let needed: usize = (1..=TABLEAU_INDICES.len()).sum();
        if cards.len() < needed {
            return Err(EngineError::IndexOutOfRange { index: needed, len: cards.len() });
        }

        shuffle_deck(cards, rng);
        for pile in piles.iter_mut() {
            pile.clear();
        }

        let mut deck = cards.drain(..);
        for (column, pile_index) in TABLEAU_INDICES.enumerate() {
            for row in 0..=column {
                // drain の長さは上でチェック済み
                let Some(mut card) = deck.next() else { break };
                card.is_face_up = row == column;
                piles[pile_index].push_top(card);
            }
        }
        for mut card in deck {
            card.is_face_up = false;
            piles[STOCK_INDEX].push_top(card);
        }

        info!(
            "Dealt: stock {} cards, tableau {:?}",
            piles[STOCK_INDEX].len(),
            TABLEAU_INDICES.map(|i| piles[i].len()).collect::<Vec<_>>()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::stack::{FOUNDATION_INDICES, WASTE_INDEX};
    use crate::logic::deck::create_standard_deck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn deal_lays_out_triangle_and_stock() {
        let mut cards = create_standard_deck();
        let mut piles = Pile::new_table();
        let mut rng = StdRng::seed_from_u64(1);

        DealInitialCardsSystem.execute(&mut cards, &mut piles, &mut rng).expect("deal は成功するはず");

        assert!(cards.is_empty(), "カードは全部山に移るはず");
        assert_eq!(piles[STOCK_INDEX].len(), 24);
        assert!(piles[STOCK_INDEX].cards().iter().all(|c| !c.is_face_up), "山札は全部裏向き");
        assert!(piles[WASTE_INDEX].is_empty());
        for i in FOUNDATION_INDICES {
            assert!(piles[i].is_empty(), "組札 {} は空のはず", i);
        }
        for (column, pile_index) in TABLEAU_INDICES.enumerate() {
            let pile = &piles[pile_index];
            assert_eq!(pile.len(), column + 1, "場札 {} の枚数", pile_index);
            let face_up: Vec<bool> = pile.cards().iter().map(|c| c.is_face_up).collect();
            let mut expected = vec![false; column];
            expected.push(true);
            assert_eq!(face_up, expected, "一番上だけ表向きのはず");
        }
        let total: usize = piles.iter().map(Pile::len).sum();
        assert_eq!(total, 52);
        println!("配札テスト、成功！🎉");
    }

    #[test]
    fn deal_clears_previous_contents() {
        let mut cards = create_standard_deck();
        let mut piles = Pile::new_table();
        let stray = cards.pop().expect("52枚ある");
        piles[3].push_top(stray);

        DealInitialCardsSystem
            .execute(&mut cards, &mut piles, &mut StdRng::seed_from_u64(2))
            .expect("51枚でも配れる");

        assert!(piles[3].is_empty(), "前の組札の中身は消えるはず");
        assert_eq!(piles[STOCK_INDEX].len(), 51 - 28);
    }

    #[test]
    fn deal_rejects_too_few_cards_without_touching_piles() {
        let mut cards: Vec<Card> = create_standard_deck().into_iter().take(10).collect();
        let mut piles = Pile::new_table();
        piles[STOCK_INDEX].push_top(Card::new(crate::components::Suit::Club, crate::components::Rank::Ace));

        let result = DealInitialCardsSystem.execute(&mut cards, &mut piles, &mut StdRng::seed_from_u64(3));
        assert!(result.is_err());
        assert_eq!(cards.len(), 10);
        assert_eq!(piles[STOCK_INDEX].len(), 1);
    }
}
