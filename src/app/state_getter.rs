// src/app/state_getter.rs
//! Gets the current table state from the engine and converts it to JSON.

use log::info;

use crate::app::game_engine::GameEngine;
use crate::protocol::{LiftedData, PileData, TableStateData};

impl GameEngine {
    /// 今の盤面をシェル向けの DTO にする。
    pub fn snapshot(&self) -> TableStateData {
        TableStateData {
            piles: self.piles.iter().map(PileData::from).collect(),
            lifted: self.lifted.as_ref().map(LiftedData::from),
            has_pending_undo: self.has_pending_undo(),
            pending_undo: self.pending_undo(),
            status: self.status(),
        }
    }

    /// スナップショットを JSON 文字列にして返す。
    pub fn state_json(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(&self.snapshot())?;
        info!("Table state serialized ({} bytes).", json.len());
        Ok(json)
    }
}
