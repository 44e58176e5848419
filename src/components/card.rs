// src/components/card.rs

// serde を使う宣言！盤面のスナップショットを JSON にしてシェルに渡す時に使うよ。
use serde::{Deserialize, Serialize};
use std::fmt;

/// カードのスート（マーク）を表す列挙型だよ！♣️♦️❤️♠️
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,    // ♣️
    Diamond, // ♦️
    Heart,   // ❤️
    Spade,   // ♠️
}

impl Suit {
    fn symbol(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord も付けて、ランクの大小比較 (`<`, `>`) もできるようにしてある。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

impl Rank {
    /// 1 (Ace) から 13 (King) までの数値を返すよ。
    pub fn value(self) -> u8 {
        self as u8
    }

    /// 数値からランクを作る。1..=13 以外なら None。
    pub fn from_value(value: u8) -> Option<Rank> {
        ALL_RANKS.get(usize::from(value).checked_sub(1)?).copied()
    }

    /// `self` が `other` のちょうど1つ上なら true (例: Queen は Jack の1つ上)。
    pub fn is_one_above(self, other: Rank) -> bool {
        self.value() == other.value() + 1
    }
}

/// 全スートの一覧。デッキ生成のループで使う。
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

/// 全ランクの一覧 (Ace から King の順)。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードの色（赤か黒か）だよ。場札 (Tableau) の「色違い」ルールで使う！❤️🖤
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。
    pub fn from_suit(suit: Suit) -> Self {
        match suit {
            Suit::Heart | Suit::Diamond => CardColor::Red,
            Suit::Club | Suit::Spade => CardColor::Black,
        }
    }
}

/// カードそのものだよ！🃏
///
/// - `suit`, `rank`: カードの正体。作った後は変わらない。
/// - `is_face_up`: 表向きかどうか。これを書き換えるのはエンジンの操作だけ
///   (配る、山札をめくる、山札に戻す、元に戻す、裏返しクリック)。
///
/// Copy は付けてないよ。52枚それぞれが山から山へ「移動」する持ち物だからね。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    pub is_face_up: bool,
}

impl Card {
    /// 裏向きのカードを作る。
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank, is_face_up: false }
    }

    pub fn color(&self) -> CardColor {
        CardColor::from_suit(self.suit)
    }

    /// (suit, rank) の組。向きを無視してカードを識別したい時用。
    pub fn identity(&self) -> (Suit, Rank) {
        (self.suit, self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self.rank {
            Rank::Ace => "A".to_string(),
            Rank::Jack => "J".to_string(),
            Rank::Queen => "Q".to_string(),
            Rank::King => "K".to_string(),
            other => other.value().to_string(),
        };
        write!(f, "{}{}", rank, self.suit.symbol())?;
        if !self.is_face_up {
            write!(f, "(裏)")?;
        }
        Ok(())
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_card() {
        let card = Card::new(Suit::Spade, Rank::Ace);

        assert_eq!(card.suit, Suit::Spade);
        assert_eq!(card.rank, Rank::Ace);
        assert!(!card.is_face_up, "new() は裏向きで作るはず");
        println!("作成したカード: {}", card);
    }

    #[test]
    fn rank_comparison() {
        assert!(Rank::Ace < Rank::Two);
        assert!(Rank::Ten < Rank::Jack);
        assert!(Rank::Queen < Rank::King);
        assert!(Rank::King.is_one_above(Rank::Queen));
        assert!(!Rank::Queen.is_one_above(Rank::King));
        assert!(!Rank::Ace.is_one_above(Rank::King));
        println!("Rank の比較テスト、成功！🎉");
    }

    #[test]
    fn rank_values_round_trip_through_table() {
        for rank in ALL_RANKS {
            assert_eq!(Rank::from_value(rank.value()), Some(rank));
        }
        assert_eq!(Rank::from_value(0), None);
        assert_eq!(Rank::from_value(14), None);
        assert_eq!(Rank::King.value(), 13);
    }

    #[test]
    fn card_color() {
        assert_eq!(CardColor::from_suit(Suit::Heart), CardColor::Red);
        assert_eq!(CardColor::from_suit(Suit::Diamond), CardColor::Red);
        assert_eq!(CardColor::from_suit(Suit::Club), CardColor::Black);
        assert_eq!(CardColor::from_suit(Suit::Spade), CardColor::Black);
        assert_eq!(Card::new(Suit::Diamond, Rank::Queen).color(), CardColor::Red);
    }

    #[test]
    fn display_shows_rank_suit_and_orientation() {
        let mut ten = Card::new(Suit::Spade, Rank::Ten);
        assert_eq!(ten.to_string(), "10♠(裏)");
        ten.is_face_up = true;
        assert_eq!(ten.to_string(), "10♠");
        let queen = Card { suit: Suit::Heart, rank: Rank::Queen, is_face_up: true };
        assert_eq!(queen.to_string(), "Q♥");
    }
}
