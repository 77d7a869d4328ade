// ==========================================
// 工程劳动力计划生成系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与值类型
// 红线: 不含引擎逻辑, 不含 I/O
// ==========================================

pub mod config;
pub mod month;
pub mod plan;
pub mod types;
pub mod work_type;

// 重导出核心类型
pub use config::{ModuleConfig, ProjectConfig, WinterBreakWindow, WorkTypeSetting};
pub use month::Month;
pub use plan::{AggregatedPlan, ModulePlan, PlanRow, PlanTable};
pub use types::{DistributionMode, ProjectKind};
pub use work_type::{aggregated_work_types, default_headcount, TUNNEL_WORK_TYPES, WORK_TYPES};
