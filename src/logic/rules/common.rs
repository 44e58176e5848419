//! ルール判定で共通して使うヘルパー関数を置くよ。

use crate::components::card::{Card, Suit};
use crate::components::stack::Pile;

/// 組札 (Foundation) に既に決まっているスートを返す。
/// 組札のスートは最初の A が置かれた時に決まるので、空なら None。
pub(crate) fn established_foundation_suit(foundation: &Pile) -> Option<Suit> {
    foundation.bottom().map(|card| card.suit)
}

/// 持ち上げたグループの一番下 (先頭) のカード。置き先の判定はこのカードで行う。
pub(crate) fn group_lead_card(group: &Pile) -> Option<&Card> {
    group.bottom()
}
