// ==========================================
// 工程劳动力计划生成系统 - API 层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::engine::EngineError;
use thiserror::Error;

/// API 层统一结果类型
pub type ApiResult<T> = Result<T, ApiError>;

/// API 层错误类型
///
/// 校验失败向调用方如实上报, 不做静默纠正;
/// "无可生成内容" 是独立的可报告条件, 不是崩溃。
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("未启用任何工程项目或时间范围为空, 无法生成计划")]
    NothingToGenerate,

    #[error("月份取值错误 (project={project}, module={module}, field={field}): {value} 不在 1-12 范围内")]
    InvalidMonthValue {
        project: String,
        module: String,
        field: &'static str,
        value: u32,
    },

    #[error("隧道工程不支持冬休期设置 (project={project})")]
    WinterBreakNotAllowed { project: String },

    #[error(transparent)]
    Engine(#[from] EngineError),
}
