//! 場札 (Tableau) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::Rank;
use crate::components::stack::Pile;

use super::common::group_lead_card;

/// 持ち上げたグループが、場札 `tableau` の一番上に置けるかチェックする。
///
/// - 空の列に置けるのは、グループの先頭が K の時だけ。
/// - 空じゃなければ、一番上のカードと先頭のカードの色が違って、
///   一番上のランクが先頭のランクのちょうど1つ上であること。
pub fn can_move_to_tableau(group: &Pile, tableau: &Pile) -> bool {
    let Some(lead) = group_lead_card(group) else {
        return false;
    };

    match tableau.top() {
        None => {
            let is_king = lead.rank == Rank::King;
            debug!("[Tableau Rule] {} onto empty pile {}. Is King: {}", lead, tableau.index(), is_king);
            is_king
        }
        Some(top) => {
            let colors_different = top.color() != lead.color();
            let rank_fits = top.rank.is_one_above(lead.rank);
            debug!(
                "[Tableau Rule] {} onto {} (pile {}). Colors different: {}. Rank fits: {}",
                lead,
                top,
                tableau.index(),
                colors_different,
                rank_fits
            );
            colors_different && rank_fits
        }
    }
}
