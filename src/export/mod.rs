// ==========================================
// 工程劳动力计划生成系统 - 导出层
// ==========================================
// 职责: 输出表格的外部序列化 (核心流水线之外的协作方)
// ==========================================

pub mod csv_exporter;

// 重导出核心类型
pub use csv_exporter::{CsvExporter, ExportError};
