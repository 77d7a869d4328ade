// ==========================================
// 工程劳动力计划生成系统 - 引擎层
// ==========================================
// 职责: 劳动力计划生成与汇总的业务规则
// 红线: 纯同步计算, 无 I/O, 无跨调用共享状态
// ==========================================

pub mod aggregator;
pub mod distribution;
pub mod error;
pub mod module_plan;
pub mod scaler;
pub mod sequence;
pub mod winter_break;

// 重导出核心引擎
pub use aggregator::PlanAggregator;
pub use distribution::DistributionEngine;
pub use error::EngineError;
pub use module_plan::ModulePlanBuilder;
pub use scaler::{OutputScaler, MAX_CONVERSION_FACTOR, MIN_CONVERSION_FACTOR};
pub use sequence::month_sequence;
pub use winter_break::is_in_winter_break;
