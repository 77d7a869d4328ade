// ==========================================
// 工程劳动力计划生成系统 - 人数分布引擎
// ==========================================
// 职责: 按三种策略生成单工种/全工种的逐月人数序列
// 策略: 恒定值 / 正态分布 / 启发式默认曲线
// 不变式: 输出为非负整数, 长度与月份序列一致
// ==========================================

use crate::domain::config::WinterBreakWindow;
use crate::domain::month::Month;
use crate::engine::winter_break::is_in_winter_break;
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// 正态模式下曲线两端保底系数: 人数不低于峰值的 30%
const MIN_FACTOR: f64 = 0.3;
/// 正态模式标准差系数: std_dev = 月数 * 0.3
const STD_DEV_FACTOR: f64 = 0.3;

// ==========================================
// DistributionEngine - 人数分布引擎
// ==========================================
pub struct DistributionEngine;

impl DistributionEngine {
    // ==========================================
    // 恒定值模式
    // ==========================================

    /// 每月人数恒定为配置值; 冬休期月份置 0
    pub fn constant_plan(
        months: &[Month],
        count: u32,
        winter_break: &WinterBreakWindow,
    ) -> Vec<u32> {
        months
            .iter()
            .map(|m| {
                if Self::in_break(*m, winter_break) {
                    0
                } else {
                    count
                }
            })
            .collect()
    }

    // ==========================================
    // 正态分布模式
    // ==========================================

    /// 以配置值为峰值的钟形曲线
    ///
    /// mean = (N-1)/2, std_dev = N * 0.3; 按序列内最大密度归一化后
    /// 映射到 `floor(peak * (0.3 + v * 0.7))`, 峰值月恰为 floor(peak),
    /// 两端不低于 30% 保底。冬休期月份置 0, 优先于保底。
    /// N == 1 时退化为单月 floor(peak)。
    pub fn normal_plan(
        months: &[Month],
        peak: u32,
        winter_break: &WinterBreakWindow,
    ) -> Vec<u32> {
        let n = months.len();
        if n == 0 {
            return Vec::new();
        }

        let mean = (n as f64 - 1.0) / 2.0;
        let std_dev = n as f64 * STD_DEV_FACTOR;

        // 序列内各下标的密度及最大值
        let densities: Vec<f64> = (0..n)
            .map(|i| Self::normal_density(i as f64, mean, std_dev))
            .collect();
        let max_density = densities.iter().cloned().fold(f64::MIN, f64::max);

        months
            .iter()
            .zip(densities.iter())
            .map(|(m, d)| {
                if Self::in_break(*m, winter_break) {
                    return 0;
                }
                let normalized = d / max_density;
                let scaled = peak as f64 * (MIN_FACTOR + normalized * (1.0 - MIN_FACTOR));
                scaled.floor() as u32
            })
            .collect()
    }

    /// 正态密度函数
    fn normal_density(x: f64, mean: f64, std_dev: f64) -> f64 {
        let coefficient = 1.0 / (std_dev * (2.0 * PI).sqrt());
        let exponent = -((x - mean).powi(2)) / (2.0 * std_dev.powi(2));
        coefficient * exponent.exp()
    }

    // ==========================================
    // 启发式默认曲线
    // ==========================================

    /// 模块未启用任何工种时的兜底计划: 对给定词表逐工种套用经验曲线
    ///
    /// progress = 下标 / (N-1), 单月序列取 1.0。
    /// 各工种曲线形状与基数是经验整定值, 见 HEURISTIC_CURVES 表。
    /// 该路径不应用冬休期清零。
    pub fn default_plan(months: &[Month], work_types: &[&str]) -> BTreeMap<String, Vec<u32>> {
        let n = months.len();
        let mut plan = BTreeMap::new();

        for wt in work_types {
            let counts = (0..n)
                .map(|idx| {
                    let progress = if n > 1 {
                        idx as f64 / (n as f64 - 1.0)
                    } else {
                        1.0
                    };
                    Self::heuristic_count(wt, progress)
                })
                .collect();
            plan.insert(wt.to_string(), counts);
        }

        plan
    }

    /// 单工种单月的启发式人数: floor(基数 * 进度系数), 下限 0
    fn heuristic_count(work_type: &str, progress: f64) -> u32 {
        let (base, factor_fn) = HEURISTIC_CURVES
            .iter()
            .find(|c| c.work_type == work_type)
            .map(|c| (c.base, c.factor))
            .unwrap_or((crate::domain::work_type::default_headcount(work_type) as f64, flat));

        let count = (base * factor_fn(progress)).floor();
        if count < 0.0 {
            0
        } else {
            count as u32
        }
    }

    fn in_break(month: Month, wb: &WinterBreakWindow) -> bool {
        wb.enabled && is_in_winter_break(month, wb.start_month, wb.end_month)
    }
}

// ==========================================
// 启发式曲线表
// ==========================================
// 工种 -> (基数, 进度系数函数), 数据驱动而非分支链
// 红线: 曲线形状与基数为观测行为的一部分, 不得重新推导或"简化"
struct HeuristicCurve {
    work_type: &'static str,
    base: f64,
    factor: fn(f64) -> f64,
}

const HEURISTIC_CURVES: [HeuristicCurve; 16] = [
    HeuristicCurve { work_type: "模板工", base: 80.0, factor: formwork_factor },
    HeuristicCurve { work_type: "混凝土工", base: 90.0, factor: concrete_factor },
    HeuristicCurve { work_type: "钢筋工", base: 100.0, factor: rebar_factor },
    HeuristicCurve { work_type: "支架工", base: 40.0, factor: scaffold_factor },
    HeuristicCurve { work_type: "测量工", base: 10.0, factor: survey_factor },
    HeuristicCurve { work_type: "电焊工", base: 35.0, factor: welder_factor },
    HeuristicCurve { work_type: "泥瓦工", base: 25.0, factor: mason_factor },
    HeuristicCurve { work_type: "电工", base: 5.0, factor: electrician_factor },
    HeuristicCurve { work_type: "普工", base: 50.0, factor: laborer_factor },
    HeuristicCurve { work_type: "出渣工", base: 60.0, factor: mucking_factor },
    HeuristicCurve { work_type: "防水工", base: 30.0, factor: waterproof_factor },
    HeuristicCurve { work_type: "开挖工", base: 100.0, factor: excavation_factor },
    HeuristicCurve { work_type: "喷砼工", base: 90.0, factor: shotcrete_factor },
    HeuristicCurve { work_type: "普通工", base: 70.0, factor: general_labor_factor },
    HeuristicCurve { work_type: "司机", base: 30.0, factor: driver_factor },
    HeuristicCurve { work_type: "支护工", base: 30.0, factor: support_factor },
];

// 模板工: 前期和中期需求较高
fn formwork_factor(p: f64) -> f64 {
    if p < 0.7 {
        (p * 2.0).min(1.0)
    } else {
        1.0 - (p - 0.7) * 3.33
    }
}

// 混凝土工: 中期需求最高
fn concrete_factor(p: f64) -> f64 {
    if p < 0.3 {
        (p * 3.0).min(1.0)
    } else if p < 0.8 {
        (2.0 - p * 2.0).min(1.0)
    } else {
        1.0 - (p - 0.8) * 5.0
    }
}

// 钢筋工: 前期和中期需求较高
fn rebar_factor(p: f64) -> f64 {
    if p < 0.6 {
        (p * 2.5).min(1.0)
    } else {
        1.0 - (p - 0.6) * 2.5
    }
}

// 支架工: 前期和中期需求较高
fn scaffold_factor(p: f64) -> f64 {
    if p < 0.5 {
        (p * 2.0).min(1.0)
    } else {
        1.0 - (p - 0.5) * 2.0
    }
}

// 测量工: 前期和后期需求较高
fn survey_factor(p: f64) -> f64 {
    0.6 + 0.4 * (1.0 - (p - 0.2).abs() * 2.5) * (1.0 - (p - 0.8).abs() * 2.5)
}

// 电焊工: 中期需求较高
fn welder_factor(p: f64) -> f64 {
    if p < 0.4 {
        (p * 3.0).min(1.0)
    } else {
        (1.5 - p * 1.5).min(1.0)
    }
}

// 泥瓦工: 后期需求较高
fn mason_factor(p: f64) -> f64 {
    if p < 0.2 {
        (p * 5.0).min(1.0)
    } else if p < 0.8 {
        1.0
    } else {
        1.0 - (p - 0.8) * 5.0
    }
}

// 电工: 均匀分布, 略中后期增加
fn electrician_factor(p: f64) -> f64 {
    0.5 + 0.5 * p
}

// 普工: 全程都需要, 中期需求最高
fn laborer_factor(p: f64) -> f64 {
    0.7 + 0.3 * (1.0 - (p - 0.5).abs() * 2.0)
}

// 出渣工: 掘进中前期需求较高
fn mucking_factor(p: f64) -> f64 {
    if p < 0.3 {
        (p * 3.0).min(1.0)
    } else {
        (1.5 - p * 1.5).min(1.0)
    }
}

// 防水工: 中期平台
fn waterproof_factor(p: f64) -> f64 {
    if p < 0.4 {
        (p * 2.0).min(1.0)
    } else if p < 0.7 {
        1.0
    } else {
        1.0 - (p - 0.7) * 3.33
    }
}

// 开挖工: 前中期平台, 后期收尾
fn excavation_factor(p: f64) -> f64 {
    if p < 0.2 {
        (p * 4.0).min(1.0)
    } else if p < 0.6 {
        1.0
    } else {
        1.0 - (p - 0.6) * 2.5
    }
}

// 喷砼工: 中期平台
fn shotcrete_factor(p: f64) -> f64 {
    if p < 0.3 {
        (p * 3.0).min(1.0)
    } else if p < 0.7 {
        1.0
    } else {
        1.0 - (p - 0.7) * 3.33
    }
}

// 普通工: 中前段偏重
fn general_labor_factor(p: f64) -> f64 {
    0.6 + 0.4 * (1.0 - (p - 0.4).abs() * 2.0)
}

// 司机: 中期峰值对称
fn driver_factor(p: f64) -> f64 {
    if p < 0.5 {
        (p * 2.0).min(1.0)
    } else {
        1.0 - (p - 0.5) * 2.0
    }
}

// 支护工: 中段平台
fn support_factor(p: f64) -> f64 {
    if p < 0.4 {
        (p * 2.5).min(1.0)
    } else if p < 0.8 {
        1.0
    } else {
        1.0 - (p - 0.8) * 5.0
    }
}

// 未收录工种: 全程按基数满额投入
fn flat(_p: f64) -> f64 {
    1.0
}
