use serde::{Deserialize, Serialize};

use crate::error::{FigureError, FigureResult};

use super::Figure;

pub const FIGURE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureJsonContractV1 {
    pub schema_version: u32,
    pub figure: Figure,
}

impl Figure {
    /// Compact JSON of the bare figure, as embedded by the HTML renderer.
    pub fn to_json(&self) -> FigureResult<String> {
        serde_json::to_string(self)
            .map_err(|e| FigureError::Serialization(format!("failed to serialize figure: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> FigureResult<String> {
        let payload = FigureJsonContractV1 {
            schema_version: FIGURE_JSON_SCHEMA_V1,
            figure: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            FigureError::Serialization(format!("failed to serialize figure contract v1: {e}"))
        })
    }

    /// Reads either a bare figure or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> FigureResult<Self> {
        let bare_error = match serde_json::from_str::<Figure>(input) {
            Ok(figure) => return Ok(figure),
            Err(e) => e,
        };
        let versioned = serde_json::from_str::<serde_json::Value>(input)
            .is_ok_and(|value| value.get("schema_version").is_some());
        if !versioned {
            return Err(FigureError::InvalidData(format!(
                "failed to parse figure json: {bare_error}"
            )));
        }
        let payload: FigureJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            FigureError::InvalidData(format!("failed to parse figure json payload: {e}"))
        })?;
        if payload.schema_version != FIGURE_JSON_SCHEMA_V1 {
            return Err(FigureError::InvalidData(format!(
                "unsupported figure schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.figure)
    }
}
