// src/components/dragging_info.rs

use crate::components::stack::Pile;

/// 持ち上げ中のカードグループの情報だよ！🖱️➡️🃏
///
/// ドラッグ (やダブルクリック) の間だけ存在して、ジェスチャーの終わりに
/// 元の山か、置き先の山のどちらかに必ず合流する。
/// グループ内のカードはこの構造体だけが持ってるので、他の山と共有されることはないよ。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraggingInfo {
    /// どの山から持ち上げたか (山番号)。
    pub source_pile: usize,
    /// 元の山で、グループの一番下のカードがあった位置。
    pub original_position_in_stack: usize,
    /// 切り離したカードたち (順番そのまま)。
    pub dragged_group: Pile,
    /// 今のところ置けると判定されている山。無ければ None。
    pub target_pile: Option<usize>,
}

impl DraggingInfo {
    pub fn new(source_pile: usize, original_position_in_stack: usize, dragged_group: Pile) -> Self {
        Self { source_pile, original_position_in_stack, dragged_group, target_pile: None }
    }

    /// グループの枚数。
    pub fn card_count(&self) -> usize {
        self.dragged_group.len()
    }
}
