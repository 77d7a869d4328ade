// ==========================================
// 工程劳动力计划生成系统 - 配置层
// ==========================================
// 职责: 内置工程类型目录 + 配置快照读写
// ==========================================

pub mod catalog;
pub mod loader;

// 重导出核心类型
pub use catalog::{default_module_config, default_projects, ProjectTypeSpec, PROJECT_CATALOG};
pub use loader::{ConfigError, PlanConfigFile};
