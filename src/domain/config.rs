// ==========================================
// 工程劳动力计划生成系统 - 计划配置实体
// ==========================================
// 职责: 模块/项目配置的纯数据定义
// 红线: 配置为只读快照, 每次生成按值消费, 不做原地修改
// ==========================================

use crate::domain::types::{DistributionMode, ProjectKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// WinterBreakWindow - 冬休期窗口
// ==========================================
// 按月份循环判定, 支持跨年 (如 11月-4月)
// 仅对非隧道工程有效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinterBreakWindow {
    pub enabled: bool,
    pub start_month: u32, // 1-12
    pub end_month: u32,   // 1-12
}

impl Default for WinterBreakWindow {
    fn default() -> Self {
        // 默认不启用, 窗口预置为 11月-4月
        Self {
            enabled: false,
            start_month: 11,
            end_month: 4,
        }
    }
}

// ==========================================
// WorkTypeSetting - 单工种配置
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkTypeSetting {
    pub enabled: bool,
    pub count: u32, // Constant 模式的恒定值 / Normal 模式的峰值
}

// ==========================================
// ModuleConfig - 施工阶段(模块)配置
// ==========================================
// 一个模块对应一个项目的一个施工阶段, 拥有独立的时间范围
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub start_year: i32,
    pub start_month: u32,
    pub end_year: i32,
    pub end_month: u32,
    /// 平行班组数量, 对每月人数做整乘
    pub team_count: u32,
    #[serde(default)]
    pub distribution_mode: DistributionMode,
    /// 工种 -> (是否启用, 配置人数)
    pub workforce: BTreeMap<String, WorkTypeSetting>,
}

impl ModuleConfig {
    /// 启用的工种及其配置数量
    pub fn enabled_work_types(&self) -> Vec<(&str, u32)> {
        self.workforce
            .iter()
            .filter(|(_, s)| s.enabled)
            .map(|(wt, s)| (wt.as_str(), s.count))
            .collect()
    }

    /// 是否存在任何启用的工种
    pub fn has_enabled_work_types(&self) -> bool {
        self.workforce.values().any(|s| s.enabled)
    }
}

// ==========================================
// ProjectConfig - 项目配置
// ==========================================
// 冬休期为项目级配置, 作用于其全部模块
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub enabled: bool,
    pub name: String,
    pub kind: ProjectKind,
    #[serde(default)]
    pub winter_break: WinterBreakWindow,
    /// 模块名 -> 阶段配置
    pub modules: BTreeMap<String, ModuleConfig>,
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_module() -> ModuleConfig {
        let mut workforce = BTreeMap::new();
        workforce.insert(
            "模板工".to_string(),
            WorkTypeSetting {
                enabled: true,
                count: 80,
            },
        );
        workforce.insert(
            "电工".to_string(),
            WorkTypeSetting {
                enabled: false,
                count: 5,
            },
        );
        ModuleConfig {
            start_year: 2025,
            start_month: 1,
            end_year: 2025,
            end_month: 6,
            team_count: 1,
            distribution_mode: DistributionMode::Constant,
            workforce,
        }
    }

    #[test]
    fn test_enabled_work_types_filters_disabled() {
        let module = sample_module();
        let enabled = module.enabled_work_types();
        assert_eq!(enabled, vec![("模板工", 80)]);
        assert!(module.has_enabled_work_types());
    }

    #[test]
    fn test_winter_break_defaults() {
        let wb = WinterBreakWindow::default();
        assert!(!wb.enabled);
        assert_eq!(wb.start_month, 11);
        assert_eq!(wb.end_month, 4);
    }

    #[test]
    fn test_module_config_json_round_trip() {
        let module = sample_module();
        let json = serde_json::to_string(&module).unwrap();
        let back: ModuleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, module);
    }
}
