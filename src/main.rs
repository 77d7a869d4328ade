// ==========================================
// 工程劳动力计划生成系统 - 命令行入口
// ==========================================
// 用法:
//   workforce-plan [配置文件.json]
// 未指定配置文件时, 以示例配置 (启用路基工程, 一年期, 启发式曲线) 演示生成。
// ==========================================

use anyhow::{Context, Result};
use chrono::Local;
use std::path::Path;
use tracing::info;
use workforce_plan::config::PlanConfigFile;
use workforce_plan::domain::Month;
use workforce_plan::export::CsvExporter;
use workforce_plan::{logging, PlanApi, APP_NAME, VERSION};

fn main() -> Result<()> {
    logging::init();
    info!("{} v{}", APP_NAME, VERSION);

    let config = match std::env::args().nth(1) {
        Some(path) => PlanConfigFile::load(Path::new(&path))
            .with_context(|| format!("载入配置失败: {}", path))?,
        None => {
            info!("未指定配置文件, 使用示例配置");
            demo_config()
        }
    };

    let table = PlanApi::generate(&config.projects, config.conversion_factor)
        .context("生成劳动力计划失败")?;

    let output = Path::new(&config.output_path);
    CsvExporter::export(&table, output).context("导出 CSV 失败")?;

    info!(
        output = %output.display(),
        months = table.months.len(),
        work_types = table.rows.len(),
        "计划已生成"
    );
    Ok(())
}

/// 示例配置: 启用路基工程, 各阶段排满当年, 无启用工种 (走启发式默认曲线)
fn demo_config() -> PlanConfigFile {
    let now = Month::from_date(Local::now().date_naive());
    let mut config = PlanConfigFile::with_defaults(now);

    if let Some(project) = config.projects.get_mut("roadbed") {
        project.enabled = true;
        for module in project.modules.values_mut() {
            module.start_month = 1;
            module.end_month = 12;
        }
    }

    config
}
