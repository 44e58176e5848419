// src/app/layout_calculator.rs
//! Calculates the drawing position of piles and cards.
//!
//! エンジンは座標を持たないので、シェルはここで矩形を計算してヒットテストするよ。
//! 1段目: 山札, 捨て札, (1つ空き), 組札 x4
//! 2段目: 場札 x7

use serde::{Deserialize, Serialize};

use crate::components::stack::{Pile, RevealPolicy, PILE_COUNT};
use crate::config::layout::{
    BASE_CARD_WIDTH, BORDER_DIVISOR, CARD_RATIO, FACE_DOWN_OFFSET_DIVISOR, MIN_FACE_DOWN_OFFSET,
    TABLEAU_VISIBILITY,
};
use crate::config::ShellSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// 左上 (x, y) と幅・高さの矩形。右端・下端は含まない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Rect {
        Rect { x: self.x + dx, y: self.y + dy, ..*self }
    }
}

/// 13個の山の矩形と、カードの大きさ。
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    card_width: i32,
    card_height: i32,
    border: i32,
    pile_rects: [Rect; PILE_COUNT],
}

impl Layout {
    /// カード幅 `card_width` と、テーブル全体のずらし量 `offset` から配置を計算する。
    pub fn with_card_width(card_width: i32, offset: Point) -> Self {
        let card_width = card_width.max(1);
        let card_height = (card_width as f64 * CARD_RATIO).round() as i32;
        let border = card_width / BORDER_DIVISOR;

        let mut pile_rects = [Rect::default(); PILE_COUNT];
        let mut x = border + offset.x;
        let mut y = border + offset.y;
        for (index, rect) in pile_rects.iter_mut().enumerate() {
            *rect = Rect::new(x, y, card_width, card_height);
            match index {
                // 捨て札の次は1つ分空ける
                1 => x += 2 * (card_width + border),
                // 組札の最後で2段目へ
                5 => {
                    x = border + offset.x;
                    y += card_height + border;
                }
                _ => x += card_width + border,
            }
        }

        Self { card_width, card_height, border, pile_rects }
    }

    /// 設定のズーム倍率からカード幅を決めて配置を計算する。
    pub fn from_settings(settings: &ShellSettings, offset: Point) -> Self {
        let card_width = (BASE_CARD_WIDTH * settings.zoom_factor()).round() as i32;
        Self::with_card_width(card_width, offset)
    }

    pub fn card_width(&self) -> i32 {
        self.card_width
    }

    pub fn card_height(&self) -> i32 {
        self.card_height
    }

    pub fn border(&self) -> i32 {
        self.border
    }

    /// 山そのものの矩形 (空の山の枠、一番下のカードの位置)。範囲外なら None。
    pub fn pile_rect(&self, pile_index: usize) -> Option<Rect> {
        self.pile_rects.get(pile_index).copied()
    }

    /// 山 `pile` の `card_index` 番目のカードを描く矩形。
    ///
    /// 場札は下から順にずらして重ねる。表の上に表ならカード幅の 12%、
    /// それ以外 (裏が絡む) ならその 1/3 (最低 2px) だけ下へずれる。
    /// 一番上しか見せない山は全部のカードが山の矩形と同じ位置。
    pub fn card_rect(&self, pile: &Pile, card_index: usize) -> Rect {
        let base = self.pile_rects.get(pile.index()).copied().unwrap_or_default();
        if pile.reveal_policy() == RevealPolicy::TopOnly {
            return base;
        }

        let face_up_offset = (self.card_width as f64 * TABLEAU_VISIBILITY).round() as i32;
        let face_down_offset = ((self.card_width as f64 * TABLEAU_VISIBILITY / FACE_DOWN_OFFSET_DIVISOR).round()
            as i32)
            .max(MIN_FACE_DOWN_OFFSET);

        let dy: i32 = pile
            .cards()
            .windows(2)
            .take(card_index)
            .map(|pair| {
                if pair[0].is_face_up && pair[1].is_face_up {
                    face_up_offset
                } else {
                    face_down_offset
                }
            })
            .sum();
        base.translated(0, dy)
    }

    /// 一番上のカードの矩形。空の山なら山の矩形。ドロップ先の判定に使う。
    pub fn top_card_rect(&self, pile: &Pile) -> Rect {
        self.card_rect(pile, pile.len().saturating_sub(1))
    }

    /// `point` にあるカードの位置 (一番手前のもの)。
    pub fn card_at(&self, pile: &Pile, point: Point) -> Option<usize> {
        (0..pile.len())
            .rev()
            .find(|&index| self.card_rect(pile, index).contains(point))
    }

    /// `point` の下にある山とカード。空の山の枠なら `(山, None)`。
    pub fn pile_and_card_at(&self, piles: &[Pile], point: Point) -> Option<(usize, Option<usize>)> {
        piles.iter().find_map(|pile| {
            if pile.is_empty() {
                self.pile_rect(pile.index())
                    .filter(|rect| rect.contains(point))
                    .map(|_| (pile.index(), None))
            } else {
                self.card_at(pile, point).map(|card| (pile.index(), Some(card)))
            }
        })
    }

    /// ドラッグ中のグループ先頭のカードの中心。
    /// `start` は持ち上げた時の先頭カードの矩形、`dx`/`dy` はポインタの移動量。
    pub fn drag_reference_point(start: Rect, dx: i32, dy: i32) -> Point {
        start.translated(dx, dy).center()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::with_card_width(BASE_CARD_WIDTH.round() as i32, Point::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};

    fn card(suit: Suit, rank: Rank, is_face_up: bool) -> Card {
        Card { suit, rank, is_face_up }
    }

    #[test]
    fn pile_rects_follow_two_rows() {
        let layout = Layout::with_card_width(100, Point::default());
        assert_eq!(layout.card_height(), 145);
        assert_eq!(layout.border(), 20);

        assert_eq!(layout.pile_rect(0), Some(Rect::new(20, 20, 100, 145)));
        assert_eq!(layout.pile_rect(1), Some(Rect::new(140, 20, 100, 145)));
        // 捨て札の右は1つ空いて組札
        assert_eq!(layout.pile_rect(2), Some(Rect::new(380, 20, 100, 145)));
        assert_eq!(layout.pile_rect(5), Some(Rect::new(740, 20, 100, 145)));
        // 2段目の場札
        assert_eq!(layout.pile_rect(6), Some(Rect::new(20, 185, 100, 145)));
        assert_eq!(layout.pile_rect(12), Some(Rect::new(740, 185, 100, 145)));
        assert_eq!(layout.pile_rect(13), None);
    }

    #[test]
    fn offset_shifts_everything() {
        let layout = Layout::with_card_width(100, Point::new(5, -7));
        assert_eq!(layout.pile_rect(0), Some(Rect::new(25, 13, 100, 145)));
        assert_eq!(layout.pile_rect(6), Some(Rect::new(25, 178, 100, 145)));
    }

    #[test]
    fn tableau_cascade_offsets() {
        let layout = Layout::with_card_width(100, Point::default());
        let mut pile = Pile::new(6).unwrap();
        pile.push_top(card(Suit::Spade, Rank::Nine, false));
        pile.push_top(card(Suit::Heart, Rank::Eight, false));
        pile.push_top(card(Suit::Club, Rank::King, true));
        pile.push_top(card(Suit::Diamond, Rank::Queen, true));

        let base = layout.pile_rect(6).unwrap();
        // 裏→裏: round(100 * 0.12 / 3) = 4
        assert_eq!(layout.card_rect(&pile, 0), base);
        assert_eq!(layout.card_rect(&pile, 1), base.translated(0, 4));
        // 裏→表: 4
        assert_eq!(layout.card_rect(&pile, 2), base.translated(0, 8));
        // 表→表: round(100 * 0.12) = 12
        assert_eq!(layout.card_rect(&pile, 3), base.translated(0, 20));
        assert_eq!(layout.top_card_rect(&pile), base.translated(0, 20));
    }

    #[test]
    fn face_down_offset_has_a_minimum() {
        let layout = Layout::with_card_width(10, Point::default());
        let mut pile = Pile::new(6).unwrap();
        pile.push_top(card(Suit::Spade, Rank::Nine, false));
        pile.push_top(card(Suit::Heart, Rank::Eight, true));
        let base = layout.pile_rect(6).unwrap();
        assert_eq!(layout.card_rect(&pile, 1), base.translated(0, 2));
    }

    #[test]
    fn top_only_piles_stack_in_place() {
        let layout = Layout::with_card_width(100, Point::default());
        let mut waste = Pile::new(1).unwrap();
        waste.push_top(card(Suit::Spade, Rank::Nine, true));
        waste.push_top(card(Suit::Heart, Rank::Eight, true));
        assert_eq!(layout.card_rect(&waste, 1), layout.pile_rect(1).unwrap());
        assert_eq!(layout.card_at(&waste, Point::new(150, 30)), Some(1), "一番上が当たる");
    }

    #[test]
    fn hit_testing_finds_topmost_card() {
        let layout = Layout::with_card_width(100, Point::default());
        let mut piles = Pile::new_table();
        piles[6].push_top(card(Suit::Spade, Rank::Nine, true));
        piles[6].push_top(card(Suit::Heart, Rank::Eight, true));

        // 2枚目は y=197 から。上端の 12px だけ1枚目が見えている
        assert_eq!(layout.pile_and_card_at(&piles, Point::new(30, 190)), Some((6, Some(0))));
        assert_eq!(layout.pile_and_card_at(&piles, Point::new(30, 200)), Some((6, Some(1))));
        // 空の場札の枠
        assert_eq!(layout.pile_and_card_at(&piles, Point::new(150, 190)), Some((7, None)));
        // 捨て札と組札の間の隙間
        assert_eq!(layout.pile_and_card_at(&piles, Point::new(300, 30)), None);
    }

    #[test]
    fn drag_reference_point_is_the_moved_center() {
        let start = Rect::new(20, 185, 100, 145);
        assert_eq!(Layout::drag_reference_point(start, 10, -5), Point::new(80, 252));
        assert!(start.contains(Point::new(20, 185)));
        assert!(!start.contains(Point::new(120, 185)), "右端は含まない");
    }

    #[test]
    fn zoom_scales_card_width() {
        let mut settings = ShellSettings::default();
        settings.set_zoom_factor(1.5);
        let layout = Layout::from_settings(&settings, Point::default());
        assert_eq!(layout.card_width(), 180);
        assert_eq!(layout.card_height(), 261);
    }
}
