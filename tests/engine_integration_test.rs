// ==========================================
// 引擎间集成测试
// ==========================================
// 职责: 验证 序列/分布/构建/汇总/折算 引擎之间的协作
// 场景: ModulePlanBuilder → PlanAggregator → OutputScaler 组合
// ==========================================

use std::collections::BTreeMap;
use workforce_plan::domain::{
    DistributionMode, ModuleConfig, Month, ProjectKind, WinterBreakWindow, WorkTypeSetting,
};
use workforce_plan::engine::{ModulePlanBuilder, OutputScaler, PlanAggregator};

// ==========================================
// 测试辅助函数
// ==========================================

/// 创建单工种 Constant 模块配置
fn constant_module(
    start: (i32, u32),
    end: (i32, u32),
    work_type: &str,
    count: u32,
) -> ModuleConfig {
    let mut workforce = BTreeMap::new();
    workforce.insert(
        work_type.to_string(),
        WorkTypeSetting {
            enabled: true,
            count,
        },
    );
    ModuleConfig {
        start_year: start.0,
        start_month: start.1,
        end_year: end.0,
        end_month: end.1,
        team_count: 1,
        distribution_mode: DistributionMode::Constant,
        workforce,
    }
}

fn no_break() -> WinterBreakWindow {
    WinterBreakWindow::default()
}

// ==========================================
// 汇总对齐回归测试
// ==========================================

#[test]
fn test_aggregation_aligns_by_calendar_not_by_index() {
    // 两个模块时间范围错位: 按下标对齐会错月, 按日历键对齐才正确
    let m1 = constant_module((2025, 1), (2025, 4), "普工", 10);
    let m2 = constant_module((2025, 3), (2025, 6), "普工", 100);

    let p1 = ModulePlanBuilder::build("一期", &m1, ProjectKind::Roadbed, &no_break()).unwrap();
    let p2 = ModulePlanBuilder::build("二期", &m2, ProjectKind::Roadbed, &no_break()).unwrap();

    let agg = PlanAggregator::aggregate(&[p1, p2]);

    assert_eq!(agg.months.len(), 6);
    let totals = &agg.totals["普工"];
    assert_eq!(totals[&Month::new(2025, 1)], 10);
    assert_eq!(totals[&Month::new(2025, 2)], 10);
    assert_eq!(totals[&Month::new(2025, 3)], 110, "重叠月必须求和");
    assert_eq!(totals[&Month::new(2025, 4)], 110);
    assert_eq!(totals[&Month::new(2025, 5)], 100);
    assert_eq!(totals[&Month::new(2025, 6)], 100);
}

#[test]
fn test_disjoint_modules_contribute_independent_months() {
    // 并集律: 不相交范围的轴长 = 两序列长度之和
    let m1 = constant_module((2024, 10), (2024, 12), "模板工", 40);
    let m2 = constant_module((2025, 6), (2025, 8), "模板工", 60);

    let p1 = ModulePlanBuilder::build("一期", &m1, ProjectKind::Bridge, &no_break()).unwrap();
    let p2 = ModulePlanBuilder::build("二期", &m2, ProjectKind::Bridge, &no_break()).unwrap();
    let len1 = p1.months.len();
    let len2 = p2.months.len();

    let agg = PlanAggregator::aggregate(&[p1, p2]);

    assert_eq!(agg.months.len(), len1 + len2);
    assert_eq!(agg.totals["模板工"][&Month::new(2024, 11)], 40);
    assert_eq!(agg.totals["模板工"][&Month::new(2025, 7)], 60);
}

// ==========================================
// 冬休期贯穿测试
// ==========================================

#[test]
fn test_winter_break_zeroing_through_builder_and_aggregation() {
    // 跨年窗口 11月-2月, 序列 2024-10 .. 2025-03
    let module = constant_module((2024, 10), (2025, 3), "混凝土工", 90);
    let wb = WinterBreakWindow {
        enabled: true,
        start_month: 11,
        end_month: 2,
    };

    let plan = ModulePlanBuilder::build("一期", &module, ProjectKind::Roadbed, &wb).unwrap();
    let agg = PlanAggregator::aggregate(&[plan]);

    let totals = &agg.totals["混凝土工"];
    assert_eq!(totals[&Month::new(2024, 10)], 90);
    assert_eq!(totals[&Month::new(2024, 11)], 0);
    assert_eq!(totals[&Month::new(2024, 12)], 0);
    assert_eq!(totals[&Month::new(2025, 1)], 0);
    assert_eq!(totals[&Month::new(2025, 2)], 0);
    assert_eq!(totals[&Month::new(2025, 3)], 90);
}

#[test]
fn test_normal_mode_peak_with_team_multiplier() {
    // Normal 模式 + 班组系数: floor 后整乘
    let mut module = constant_module((2025, 1), (2025, 3), "钢筋工", 100);
    module.distribution_mode = DistributionMode::Normal;
    module.team_count = 2;

    let plan = ModulePlanBuilder::build("一期", &module, ProjectKind::Roadbed, &no_break()).unwrap();

    // N=3 基线 [67, 100, 67], 乘 2
    assert_eq!(plan.workforce["钢筋工"], vec![134, 200, 134]);
}

// ==========================================
// 启发式兜底贯穿测试
// ==========================================

#[test]
fn test_heuristic_fallback_aggregates_with_explicit_modules() {
    // 模块A 显式配置, 模块B 无启用工种走兜底, 两者按月相加
    let explicit = constant_module((2025, 1), (2025, 3), "普工", 10);

    let mut fallback = constant_module((2025, 1), (2025, 3), "普工", 999);
    fallback.workforce.get_mut("普工").unwrap().enabled = false;

    let pa =
        ModulePlanBuilder::build("一期", &explicit, ProjectKind::Roadbed, &no_break()).unwrap();
    let pb =
        ModulePlanBuilder::build("二期", &fallback, ProjectKind::Roadbed, &no_break()).unwrap();

    let agg = PlanAggregator::aggregate(&[pa, pb]);

    // 兜底普工曲线 N=3: [35, 50, 35]
    let totals = &agg.totals["普工"];
    assert_eq!(totals[&Month::new(2025, 1)], 45);
    assert_eq!(totals[&Month::new(2025, 2)], 60);
    assert_eq!(totals[&Month::new(2025, 3)], 45);
    // 兜底模块贡献了完整词表
    assert!(agg.totals.contains_key("测量工"));
}

// ==========================================
// 折算贯穿测试
// ==========================================

#[test]
fn test_scaling_applied_per_cell_after_aggregation() {
    let m1 = constant_module((2025, 1), (2025, 2), "电焊工", 7);
    let m2 = constant_module((2025, 2), (2025, 3), "电焊工", 6);

    let p1 = ModulePlanBuilder::build("一期", &m1, ProjectKind::Pavement, &no_break()).unwrap();
    let p2 = ModulePlanBuilder::build("二期", &m2, ProjectKind::Pavement, &no_break()).unwrap();

    let agg = PlanAggregator::aggregate(&[p1, p2]);
    let scaled = OutputScaler::new(0.5).scale_plan(&agg);

    let totals = &scaled.totals["电焊工"];
    // 7 * 0.5 = 3.5 → 4 (四舍五入); 13 * 0.5 = 6.5 → 7; 6 * 0.5 = 3
    assert_eq!(totals[&Month::new(2025, 1)], 4);
    assert_eq!(totals[&Month::new(2025, 2)], 7);
    assert_eq!(totals[&Month::new(2025, 3)], 3);
}
