// ==========================================
// 工程劳动力计划生成系统 - API 层
// ==========================================
// 职责: 面向调用方 (UI / 导出层) 的生成接口
// ==========================================

pub mod error;
pub mod plan_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use plan_api::PlanApi;
