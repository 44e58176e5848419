// src/config/layout.rs
//! ゲーム画面のレイアウトに関する定数を定義するよ！
//! カードの縦横比や、山同士の間隔、場札のずらし幅など。

/// カード画像の縦横比 (高さ / 幅)。
pub const CARD_RATIO: f64 = 485.0 / 334.0;

/// ズーム 1.0 の時のカードの幅 (px)。
pub const BASE_CARD_WIDTH: f64 = 120.0;

/// 山同士の間隔は、カード幅のこの分の1。
pub const BORDER_DIVISOR: i32 = 5;

/// 場札で下のカードがどれだけ見えるか (カード幅に対する割合)。
pub const TABLEAU_VISIBILITY: f64 = 0.12;

/// 裏向きカードのずらし幅は、表向きのこの分の1。
pub const FACE_DOWN_OFFSET_DIVISOR: f64 = 3.0;

/// 裏向きカードのずらし幅の最小値 (px)。
pub const MIN_FACE_DOWN_OFFSET: i32 = 2;
