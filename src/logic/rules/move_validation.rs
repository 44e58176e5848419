// src/logic/rules/move_validation.rs
//! 持ち上げたグループを置けるかどうかの全体的な妥当性チェックを行う。

use crate::components::stack::{Pile, StackType};

use super::{foundation, tableau};

/// 持ち上げたグループ `group` を、山 `target` に置けるか検証する。
///
/// 判定は山の役割 (StackType) で分岐するよ。山札と捨て札には絶対に置けない。
pub fn is_valid_target(target: &Pile, group: &Pile) -> bool {
    if group.is_empty() {
        return false;
    }
    match target.stack_type() {
        StackType::Stock | StackType::Waste => false,
        StackType::Foundation(_) => foundation::can_move_to_foundation(group, target),
        StackType::Tableau(_) => tableau::can_move_to_tableau(group, target),
    }
}
