// ==========================================
// 工程劳动力计划生成系统 - 折算系数引擎
// ==========================================
// 职责: 对汇总结果应用全局折算系数并取整
// 红线: 系数静默钳位到 [0.1, 5.0], 不报错 (兼容性策略, 不得收紧或放宽)
// 取整: 四舍五入 (远离零), 全流水线唯一的非向下取整步骤
// ==========================================

use crate::domain::plan::AggregatedPlan;
use tracing::warn;

/// 折算系数下限
pub const MIN_CONVERSION_FACTOR: f64 = 0.1;
/// 折算系数上限
pub const MAX_CONVERSION_FACTOR: f64 = 5.0;

// ==========================================
// OutputScaler - 输出折算器
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct OutputScaler {
    factor: f64,
}

impl OutputScaler {
    /// 创建折算器, 越界系数钳位到 [0.1, 5.0]
    pub fn new(factor: f64) -> Self {
        let clamped = factor.clamp(MIN_CONVERSION_FACTOR, MAX_CONVERSION_FACTOR);
        if clamped != factor {
            warn!(factor, clamped, "折算系数越界, 已钳位");
        }
        Self { factor: clamped }
    }

    /// 钳位后的实际系数
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// 单元格折算: round(total * factor), 四舍五入
    pub fn scale(&self, total: u32) -> u32 {
        (total as f64 * self.factor).round() as u32
    }

    /// 对汇总计划逐单元格折算, 返回新结构
    pub fn scale_plan(&self, plan: &AggregatedPlan) -> AggregatedPlan {
        let totals = plan
            .totals
            .iter()
            .map(|(wt, by_month)| {
                let scaled = by_month.iter().map(|(m, c)| (*m, self.scale(*c))).collect();
                (wt.clone(), scaled)
            })
            .collect();

        AggregatedPlan {
            months: plan.months.clone(),
            totals,
        }
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::month::Month;
    use std::collections::BTreeMap;

    #[test]
    fn test_factor_clamped_to_range() {
        assert_eq!(OutputScaler::new(0.0).factor(), 0.1);
        assert_eq!(OutputScaler::new(-2.0).factor(), 0.1);
        assert_eq!(OutputScaler::new(9.9).factor(), 5.0);
        assert_eq!(OutputScaler::new(1.5).factor(), 1.5);
    }

    #[test]
    fn test_factor_one_is_identity() {
        // scale(total, 1.0) == total, 对任意非负整数
        let scaler = OutputScaler::new(1.0);
        for total in [0, 1, 7, 80, 12345] {
            assert_eq!(scaler.scale(total), total);
        }
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        // 0.5 档位向上进位: 3 * 0.5 = 1.5 → 2
        let half = OutputScaler::new(0.5);
        assert_eq!(half.scale(3), 2);
        assert_eq!(half.scale(5), 3); // 2.5 → 3
        assert_eq!(half.scale(4), 2);

        let scaler = OutputScaler::new(1.2);
        assert_eq!(scaler.scale(10), 12);
        assert_eq!(scaler.scale(7), 8); // 8.4 → 8
    }

    #[test]
    fn test_scale_plan_preserves_axis() {
        let months = vec![Month::new(2025, 1), Month::new(2025, 2)];
        let mut by_month = BTreeMap::new();
        by_month.insert(months[0], 10);
        by_month.insert(months[1], 0);
        let mut totals = BTreeMap::new();
        totals.insert("普工".to_string(), by_month);
        let plan = AggregatedPlan {
            months: months.clone(),
            totals,
        };

        let scaled = OutputScaler::new(2.0).scale_plan(&plan);

        assert_eq!(scaled.months, months);
        assert_eq!(scaled.totals["普工"][&months[0]], 20);
        assert_eq!(scaled.totals["普工"][&months[1]], 0);
        // 原结构不被修改
        assert_eq!(plan.totals["普工"][&months[0]], 10);
    }
}
