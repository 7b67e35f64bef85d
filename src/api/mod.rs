mod chart;
mod chart_state;
mod colors;
mod config;
mod info;
mod snapshot;
mod update;
mod validation;

pub use chart::FunnelChart;
pub use chart_state::ChartState;
pub use colors::{ColorSpec, DEFAULT_PALETTE};
pub use config::FunnelChartConfig;
pub use info::{InfoLayout, StageInfo};
pub use snapshot::{FUNNEL_SNAPSHOT_JSON_SCHEMA_V1, FunnelSnapshot, FunnelSnapshotJsonContractV1};
pub use update::FunnelUpdate;
