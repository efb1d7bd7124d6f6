use serde::{Deserialize, Serialize};

use crate::core::{AxisOrientation, VisibleTick};
use crate::error::{AxisError, AxisResult};

use super::TickInterval;

pub const VISIBLE_TICKS_JSON_SCHEMA_V1: u32 = 1;

/// Outcome of one selection pass, for fixtures and cross-runtime diffs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleTicksSnapshot {
    pub orientation: AxisOrientation,
    pub interval: TickInterval,
    pub ticks: Vec<VisibleTick>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleTicksJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: VisibleTicksSnapshot,
}

impl VisibleTicksSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> AxisResult<String> {
        let payload = VisibleTicksJsonContractV1 {
            schema_version: VISIBLE_TICKS_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            AxisError::InvalidData(format!("failed to serialize visible ticks contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> AxisResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<VisibleTicksSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: VisibleTicksJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            AxisError::InvalidData(format!("failed to parse visible ticks json payload: {e}"))
        })?;
        if payload.schema_version != VISIBLE_TICKS_JSON_SCHEMA_V1 {
            return Err(AxisError::InvalidData(format!(
                "unsupported visible ticks schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
