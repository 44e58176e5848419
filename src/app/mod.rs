// src/app/mod.rs
//! ゲームエンジン本体と、その操作を役割ごとに分割して置くモジュールだよ！

pub mod drag_handler;
pub mod event_handler;
pub mod game_app;
pub mod game_engine;
pub mod layout_calculator;
pub mod state_getter;
pub mod stock_handler;
pub mod undo_handler;


pub use event_handler::PressOutcome;
pub use game_app::GameApp;
pub use game_engine::GameEngine;
pub use layout_calculator::{Layout, Point, Rect};
pub use stock_handler::StockClick;
