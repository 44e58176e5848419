// src/logic/mod.rs
//! 状態を持たない純粋なゲームロジック (デッキ、ルール、自動移動) をまとめるよ。

pub mod auto_move;
pub mod deck;
pub mod rules;
