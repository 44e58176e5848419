// src/logic/auto_move.rs
//! カードの自動移動に関するロジックだよ！🪄
//! ダブルクリックされたカードを、どの組札 (Foundation) に送れるか探すんだ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::{Pile, StackType};
use crate::logic::rules::{self, common::established_foundation_suit};

/// `card` を自動で送れる組札の山番号を探す関数だよ。
///
/// - A なら、山番号順 (2→5) で最初に見つかった空の組札。
/// - それ以外なら、空じゃなくて、スートが同じで、一番上のランクが `card` の1つ下の組札。
/// - どっちも無ければ None (ダブルクリックは何もしない)。
pub fn find_automatic_foundation_move(card: &Card, piles: &[Pile]) -> Option<usize> {
    debug!("[AutoMove] Finding automatic foundation move for {}...", card);

    let mut foundations = piles
        .iter()
        .filter(|pile| matches!(pile.stack_type(), StackType::Foundation(_)));

    let found = if card.rank == Rank::Ace {
        foundations.find(|pile| pile.is_empty())
    } else {
        foundations.find(|pile| {
            established_foundation_suit(pile) == Some(card.suit)
                && rules::can_place_on_foundation(card, pile)
        })
    };

    match found {
        Some(pile) => {
            debug!("  Found valid foundation [{}] for {}.", pile.index(), card);
            Some(pile.index())
        }
        None => {
            debug!("  No suitable foundation found for {}.", card);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Suit;

    fn up(suit: Suit, rank: Rank) -> Card {
        Card { suit, rank, is_face_up: true }
    }

    fn table_with_foundations(foundations: &[(usize, &[(Suit, Rank)])]) -> Vec<Pile> {
        let mut piles = Pile::new_table();
        for &(index, cards) in foundations {
            for &(suit, rank) in cards {
                piles[index].push_top(up(suit, rank));
            }
        }
        piles
    }

    #[test]
    fn ace_goes_to_first_empty_foundation() {
        // --- シナリオ 1: 全 Foundation が空 ---
        let piles = table_with_foundations(&[]);
        assert_eq!(find_automatic_foundation_move(&up(Suit::Heart, Rank::Ace), &piles), Some(2));
        assert_eq!(find_automatic_foundation_move(&up(Suit::Spade, Rank::Ace), &piles), Some(2));

        // --- シナリオ 2: 先頭2つが埋まってる ---
        let piles = table_with_foundations(&[
            (2, &[(Suit::Club, Rank::Ace)]),
            (3, &[(Suit::Heart, Rank::Ace)]),
        ]);
        assert_eq!(find_automatic_foundation_move(&up(Suit::Spade, Rank::Ace), &piles), Some(4));
    }

    #[test]
    fn ace_with_all_foundations_begun_has_no_target() {
        let piles = table_with_foundations(&[
            (2, &[(Suit::Club, Rank::Ace)]),
            (3, &[(Suit::Heart, Rank::Ace)]),
            (4, &[(Suit::Spade, Rank::Ace)]),
            (5, &[(Suit::Diamond, Rank::Ace), (Suit::Diamond, Rank::Two)]),
        ]);
        assert_eq!(find_automatic_foundation_move(&up(Suit::Diamond, Rank::Ace), &piles), None);
    }

    #[test]
    fn non_ace_follows_its_suit() {
        let piles = table_with_foundations(&[
            (2, &[(Suit::Heart, Rank::Ace)]),
            (4, &[(Suit::Club, Rank::Ace), (Suit::Club, Rank::Two)]),
        ]);
        assert_eq!(find_automatic_foundation_move(&up(Suit::Heart, Rank::Two), &piles), Some(2));
        assert_eq!(find_automatic_foundation_move(&up(Suit::Club, Rank::Three), &piles), Some(4));
        assert_eq!(
            find_automatic_foundation_move(&up(Suit::Club, Rank::Five), &piles),
            None,
            "5♣ は 2♣ の上には行けない"
        );
        assert_eq!(
            find_automatic_foundation_move(&up(Suit::Spade, Rank::Two), &piles),
            None,
            "♠ の組札はまだ無い"
        );
    }
}
