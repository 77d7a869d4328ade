// ==========================================
// 工程劳动力计划生成系统 - 配置文件读写
// ==========================================
// 职责: 项目配置快照的 JSON 载入与保存
// 存储: JSON 文件 (serde_json)
// ==========================================

use crate::config::catalog::default_projects;
use crate::domain::config::ProjectConfig;
use crate::domain::month::Month;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件读写失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}

fn default_conversion_factor() -> f64 {
    1.0
}

fn default_output_path() -> String {
    "工程劳动力计划.csv".to_string()
}

// ==========================================
// PlanConfigFile - 计划配置快照
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfigFile {
    /// 全局折算系数 (生成时钳位到 [0.1, 5.0])
    #[serde(default = "default_conversion_factor")]
    pub conversion_factor: f64,

    /// CSV 输出路径
    #[serde(default = "default_output_path")]
    pub output_path: String,

    /// 项目键 -> 项目配置
    pub projects: BTreeMap<String, ProjectConfig>,
}

impl PlanConfigFile {
    /// 出厂配置: 内置目录, 起止月份为给定月份
    pub fn with_defaults(initial: Month) -> Self {
        Self {
            conversion_factor: default_conversion_factor(),
            output_path: default_output_path(),
            projects: default_projects(initial),
        }
    }

    /// 从 JSON 文件载入配置快照
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        info!(path = %path.display(), "配置载入完成");
        Ok(config)
    }

    /// 保存配置快照到 JSON 文件
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!(path = %path.display(), "配置保存完成");
        Ok(())
    }
}
