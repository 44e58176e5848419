//! 組札 (Foundation) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::components::stack::Pile;

use super::common::established_foundation_suit;

/// 1枚のカード `card` が、組札 `foundation` の一番上に置けるかチェックする。
///
/// - 空の組札に置けるのは A だけ。
/// - 空じゃなければ、同じスートで、一番上のランクのちょうど1つ上のカードだけ。
pub fn can_place_on_foundation(card: &Card, foundation: &Pile) -> bool {
    let result = match foundation.top() {
        None => card.rank == Rank::Ace,
        Some(top) => {
            established_foundation_suit(foundation) == Some(card.suit)
                && card.rank.is_one_above(top.rank)
        }
    };
    debug!(
        "[Foundation Rule] {} onto pile {} (top: {:?}) -> {}",
        card,
        foundation.index(),
        foundation.top().map(ToString::to_string),
        result
    );
    result
}

/// 持ち上げたグループ全体が組札に置けるかチェックする。
/// 組札に置けるのは1枚ずつだけ。2枚以上のグループは常に不可！🙅‍♀️
pub fn can_move_to_foundation(group: &Pile, foundation: &Pile) -> bool {
    match group.cards() {
        [single] => can_place_on_foundation(single, foundation),
        _ => false,
    }
}
