// ==========================================
// 工程劳动力计划生成系统 - 计划汇总引擎
// ==========================================
// 职责: 将任意多个模块计划合并到统一月份轴并按工种求和
// 算法: 月份并集排序作为全局轴, 按日历键对齐, 不按下标对齐
// 红线: 各模块时间范围可不重叠, 缺失月份按 0 计入
// ==========================================

use crate::domain::month::Month;
use crate::domain::plan::{AggregatedPlan, ModulePlan};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

// ==========================================
// PlanAggregator - 计划汇总器
// ==========================================
pub struct PlanAggregator;

impl PlanAggregator {
    /// 汇总所有参与模块的计划
    ///
    /// 月份轴 = 各模块月份序列的排序并集 (并集, 非交集)。
    /// 每个工种在轴上每个月的总数 = 覆盖该月的各模块贡献之和。
    /// 空输入产出空计划, 不是错误。
    pub fn aggregate(plans: &[ModulePlan]) -> AggregatedPlan {
        // 全局月份轴: BTreeSet 按 (年, 月) 全序自然排序
        let axis: BTreeSet<Month> = plans
            .iter()
            .flat_map(|p| p.months.iter().copied())
            .collect();
        let months: Vec<Month> = axis.into_iter().collect();

        let mut totals: BTreeMap<String, BTreeMap<Month, u32>> = BTreeMap::new();

        for plan in plans {
            for (work_type, counts) in &plan.workforce {
                let entry = totals.entry(work_type.clone()).or_default();
                for (month, count) in plan.months.iter().zip(counts.iter()) {
                    *entry.entry(*month).or_insert(0) += count;
                }
            }
        }

        // 每个工种对轴上每个月补齐显式 0
        for entry in totals.values_mut() {
            for month in &months {
                entry.entry(*month).or_insert(0);
            }
        }

        debug!(
            modules = plans.len(),
            months = months.len(),
            work_types = totals.len(),
            "计划汇总完成"
        );

        AggregatedPlan { months, totals }
    }
}
