// ==========================================
// 工程劳动力计划生成系统 - CSV 导出器
// ==========================================
// 职责: 将输出表格写为带 BOM 的 UTF-8 逗号分隔文件
// 表头: 工种 + 逐月 "{年}年{月}月" 列标签
// BOM: 兼容电子表格软件识别 UTF-8 中文
// ==========================================

use crate::domain::plan::PlanTable;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// 导出层错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("导出文件写入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV 序列化失败: {0}")]
    Csv(#[from] csv::Error),
}

// ==========================================
// CsvExporter - CSV 导出器
// ==========================================
pub struct CsvExporter;

impl CsvExporter {
    /// 导出计划表: 一行一工种, 一列一月份
    pub fn export(table: &PlanTable, path: &Path) -> Result<(), ExportError> {
        let mut file = File::create(path)?;
        // UTF-8 BOM
        file.write_all("\u{feff}".as_bytes())?;

        let mut writer = csv::Writer::from_writer(file);

        let mut header = vec!["工种".to_string()];
        header.extend(table.month_labels());
        writer.write_record(&header)?;

        for row in &table.rows {
            let mut record = vec![row.work_type.clone()];
            record.extend(row.counts.iter().map(|c| c.to_string()));
            writer.write_record(&record)?;
        }

        writer.flush()?;
        info!(
            path = %path.display(),
            rows = table.rows.len(),
            months = table.months.len(),
            "计划表导出完成"
        );
        Ok(())
    }
}
