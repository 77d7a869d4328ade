// ==========================================
// 工程劳动力计划生成系统 - 核心库
// ==========================================
// 系统定位: 按月劳动力计划的生成与汇总引擎
// 数据流: 配置 → 模块计划 → 跨项目汇总 → 折算 → 渲染/导出
// 红线: 核心为纯同步计算, 无持久化, 无并发, 无网络 I/O
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 配置层 - 项目目录与配置快照
pub mod config;

// 导出层 - CSV 协作方
pub mod export;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AggregatedPlan, DistributionMode, ModuleConfig, ModulePlan, Month, PlanRow, PlanTable,
    ProjectConfig, ProjectKind, WinterBreakWindow, WorkTypeSetting,
};

// 引擎
pub use engine::{
    is_in_winter_break, month_sequence, DistributionEngine, EngineError, ModulePlanBuilder,
    OutputScaler, PlanAggregator,
};

// API
pub use api::{ApiError, ApiResult, PlanApi};

// 配置与导出
pub use config::PlanConfigFile;
pub use export::CsvExporter;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "工程劳动力计划生成系统";
