use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Direction, FunnelGeometry, FunnelGeometrySource, PercentageMode, Viewport};
use crate::error::{FunnelError, FunnelResult};
use crate::render::Renderer;

use super::{ChartState, FunnelChart, StageInfo};

pub const FUNNEL_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelSnapshot {
    pub direction: Direction,
    pub pct_mode: PercentageMode,
    pub plot: Viewport,
    pub data_size: usize,
    pub sub_data_size: usize,
    pub percentages: Vec<f64>,
    pub percentages_2d: Vec<Vec<f64>>,
    pub geometry: FunnelGeometry,
    pub info: Vec<StageInfo>,
    pub metadata: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: FunnelSnapshot,
}

impl ChartState {
    #[must_use]
    pub fn snapshot(&self) -> FunnelSnapshot {
        let mut metadata = IndexMap::new();
        metadata.insert("graph_type".to_owned(), self.graph_type().to_owned());
        metadata.insert(
            "gradient_direction".to_owned(),
            format!("{:?}", self.gradient_direction()).to_lowercase(),
        );
        metadata.insert("labels".to_owned(), self.labels().len().to_string());
        metadata.insert("sub_labels".to_owned(), self.sub_labels().len().to_string());

        FunnelSnapshot {
            direction: self.direction(),
            pct_mode: self.pct_mode(),
            plot: Viewport::new(self.width(false), self.height(false)),
            data_size: self.data_size(),
            sub_data_size: self.sub_data_size(),
            percentages: self.percentages(),
            percentages_2d: self.percentages_2d(),
            geometry: self.geometry(),
            info: self.info(),
            metadata,
        }
    }
}

impl<R: Renderer> FunnelChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> FunnelSnapshot {
        self.state().snapshot()
    }
}

impl FunnelSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> FunnelResult<String> {
        let payload = FunnelSnapshotJsonContractV1 {
            schema_version: FUNNEL_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            FunnelError::Serialization(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> FunnelResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<FunnelSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: FunnelSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            FunnelError::Serialization(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != FUNNEL_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(FunnelError::Serialization(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
