// ==========================================
// 工程劳动力计划生成系统 - 模块计划构建引擎
// ==========================================
// 职责: 按模块配置组合 月份序列 + 分布策略 + 冬休期 + 班组系数
// 红线: 日期范围倒置在进入序列引擎前拒绝, 不做静默纠正
// ==========================================

use crate::domain::config::{ModuleConfig, WinterBreakWindow};
use crate::domain::month::Month;
use crate::domain::plan::ModulePlan;
use crate::domain::types::{DistributionMode, ProjectKind};
use crate::engine::distribution::DistributionEngine;
use crate::engine::error::EngineError;
use crate::engine::sequence::month_sequence;
use std::collections::BTreeMap;
use tracing::debug;

// ==========================================
// ModulePlanBuilder - 模块计划构建器
// ==========================================
pub struct ModulePlanBuilder;

impl ModulePlanBuilder {
    /// 构建单模块的完整计划
    ///
    /// 步骤:
    /// 1. 校验日期范围 (start <= end), 倒置即报错
    /// 2. 展开模块自身的月份序列
    /// 3. 逐启用工种按配置的分布策略生成人数序列;
    ///    无任何启用工种时, 对工程类型的完整词表套用启发式默认曲线
    /// 4. 对每月人数整乘 max(1, team_count)
    pub fn build(
        module_name: &str,
        config: &ModuleConfig,
        kind: ProjectKind,
        winter_break: &WinterBreakWindow,
    ) -> Result<ModulePlan, EngineError> {
        let start = Month::new(config.start_year, config.start_month);
        let end = Month::new(config.end_year, config.end_month);

        if start > end {
            return Err(EngineError::InvalidDateRange {
                module: module_name.to_string(),
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        let months = month_sequence(start, end);

        let mut workforce: BTreeMap<String, Vec<u32>> = if config.has_enabled_work_types() {
            let mut plan = BTreeMap::new();
            for (wt, count) in config.enabled_work_types() {
                let counts = match config.distribution_mode {
                    DistributionMode::Constant => {
                        DistributionEngine::constant_plan(&months, count, winter_break)
                    }
                    DistributionMode::Normal => {
                        DistributionEngine::normal_plan(&months, count, winter_break)
                    }
                };
                plan.insert(wt.to_string(), counts);
            }
            plan
        } else {
            // 兜底: 最简配置的模块也要产出可用计划
            debug!(module = module_name, "模块未启用任何工种, 套用启发式默认曲线");
            DistributionEngine::default_plan(&months, kind.work_types())
        };

        // 班组系数: 整乘, 不回退基础值
        let team_count = config.team_count.max(1);
        if team_count > 1 {
            for counts in workforce.values_mut() {
                for c in counts.iter_mut() {
                    *c *= team_count;
                }
            }
        }

        Ok(ModulePlan { months, workforce })
    }
}
