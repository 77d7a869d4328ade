// ==========================================
// 工程劳动力计划生成系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
///
/// 业务性空结果 (如无启用工种) 不在此列, 引擎只对前置条件违规报错。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("无效的日期范围 (module={module}): 开始 {start} 晚于结束 {end}")]
    InvalidDateRange {
        module: String,
        start: String,
        end: String,
    },
}
