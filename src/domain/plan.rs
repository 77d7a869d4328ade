// ==========================================
// 工程劳动力计划生成系统 - 计划结果实体
// ==========================================
// 职责: 模块计划 / 汇总计划 / 输出表格的纯数据定义
// 不变式: 每个工种的人数序列长度 == 所属月份轴长度
// ==========================================

use crate::domain::month::Month;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// ModulePlan - 单模块计划
// ==========================================
// 自带月份轴, 人数序列与之按下标 1:1 对齐
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePlan {
    /// 模块自身的月份序列 (严格递增, 无缺口)
    pub months: Vec<Month>,
    /// 工种 -> 按月人数
    pub workforce: BTreeMap<String, Vec<u32>>,
}

impl ModulePlan {
    /// 某工种在某月的人数, 未覆盖该月时为 0
    pub fn count_at(&self, work_type: &str, month: Month) -> u32 {
        let Some(counts) = self.workforce.get(work_type) else {
            return 0;
        };
        match self.months.iter().position(|m| *m == month) {
            Some(idx) => counts[idx],
            None => 0,
        }
    }
}

// ==========================================
// AggregatedPlan - 跨模块汇总计划
// ==========================================
// 月份轴 = 所有参与模块月份序列的排序并集
// 每个工种对轴上每个月都有一个显式总数 (未覆盖按 0 计入)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregatedPlan {
    pub months: Vec<Month>,
    pub totals: BTreeMap<String, BTreeMap<Month, u32>>,
}

impl AggregatedPlan {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

// ==========================================
// PlanTable - 输出表格
// ==========================================
// 外部渲染/导出层消费的最终形态: 一行一工种, 一列一月份
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanTable {
    pub months: Vec<Month>,
    pub rows: Vec<PlanRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRow {
    pub work_type: String,
    /// 与 months 按下标对齐的最终整数人数
    pub counts: Vec<u32>,
}

impl PlanTable {
    /// 报表列标签, 形如 "2025年1月"
    pub fn month_labels(&self) -> Vec<String> {
        self.months.iter().map(|m| m.label()).collect()
    }

    /// 机读列键, 形如 "2025-1"
    pub fn month_keys(&self) -> Vec<String> {
        self.months.iter().map(|m| m.key()).collect()
    }

    /// 某工种在某月的最终人数
    pub fn count_at(&self, work_type: &str, month: Month) -> Option<u32> {
        let col = self.months.iter().position(|m| *m == month)?;
        self.rows
            .iter()
            .find(|r| r.work_type == work_type)
            .map(|r| r.counts[col])
    }
}
