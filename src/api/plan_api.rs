// ==========================================
// 工程劳动力计划生成系统 - 计划生成 API
// ==========================================
// 职责: 校验 -> 逐模块构建 -> 跨项目汇总 -> 折算 -> 输出表格
// 数据流: 配置 → ModulePlanBuilder → PlanAggregator → OutputScaler → PlanTable
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::config::{ModuleConfig, ProjectConfig};
use crate::domain::plan::{AggregatedPlan, ModulePlan, PlanRow, PlanTable};
use crate::domain::work_type::aggregated_work_types;
use crate::engine::{ModulePlanBuilder, OutputScaler, PlanAggregator};
use std::collections::BTreeMap;
use tracing::{info, instrument};

// ==========================================
// PlanApi - 计划生成接口
// ==========================================
pub struct PlanApi;

impl PlanApi {
    /// 生成跨项目的汇总劳动力计划表
    ///
    /// 只消费启用的项目与其模块; 配置按只读快照消费, 不被修改。
    /// 折算系数越界时钳位到 [0.1, 5.0], 其余校验失败立即报错。
    #[instrument(skip(projects), fields(projects = projects.len(), factor = conversion_factor))]
    pub fn generate(
        projects: &BTreeMap<String, ProjectConfig>,
        conversion_factor: f64,
    ) -> ApiResult<PlanTable> {
        Self::validate(projects)?;

        let mut plans: Vec<ModulePlan> = Vec::new();
        for (project_key, project) in projects.iter().filter(|(_, p)| p.enabled) {
            for (module_name, module) in &project.modules {
                let plan = ModulePlanBuilder::build(
                    &format!("{}-{}", project_key, module_name),
                    module,
                    project.kind,
                    &project.winter_break,
                )?;
                plans.push(plan);
            }
        }

        if plans.is_empty() {
            return Err(ApiError::NothingToGenerate);
        }

        let aggregated = PlanAggregator::aggregate(&plans);
        if aggregated.is_empty() {
            return Err(ApiError::NothingToGenerate);
        }

        let scaler = OutputScaler::new(conversion_factor);
        let scaled = scaler.scale_plan(&aggregated);
        let table = Self::to_table(&scaled);

        info!(
            months = table.months.len(),
            work_types = table.rows.len(),
            factor = scaler.factor(),
            "劳动力计划生成完成"
        );
        Ok(table)
    }

    // ==========================================
    // 配置校验
    // ==========================================

    /// 对所有启用项目做生成前校验
    ///
    /// - 月份字段必须在 1-12
    /// - 隧道工程不得携带启用的冬休期
    ///
    /// 日期范围倒置由 ModulePlanBuilder 在进入序列引擎前拒绝。
    fn validate(projects: &BTreeMap<String, ProjectConfig>) -> ApiResult<()> {
        for (project_key, project) in projects.iter().filter(|(_, p)| p.enabled) {
            if project.winter_break.enabled && !project.kind.allows_winter_break() {
                return Err(ApiError::WinterBreakNotAllowed {
                    project: project_key.clone(),
                });
            }

            if project.winter_break.enabled {
                Self::check_month_of_year(
                    project_key,
                    "(project)",
                    "winter_break.start_month",
                    project.winter_break.start_month,
                )?;
                Self::check_month_of_year(
                    project_key,
                    "(project)",
                    "winter_break.end_month",
                    project.winter_break.end_month,
                )?;
            }

            for (module_name, module) in &project.modules {
                Self::validate_module_months(project_key, module_name, module)?;
            }
        }
        Ok(())
    }

    fn validate_module_months(
        project: &str,
        module_name: &str,
        module: &ModuleConfig,
    ) -> ApiResult<()> {
        Self::check_month_of_year(project, module_name, "start_month", module.start_month)?;
        Self::check_month_of_year(project, module_name, "end_month", module.end_month)?;
        Ok(())
    }

    fn check_month_of_year(
        project: &str,
        module: &str,
        field: &'static str,
        value: u32,
    ) -> ApiResult<()> {
        if !(1..=12).contains(&value) {
            return Err(ApiError::InvalidMonthValue {
                project: project.to_string(),
                module: module.to_string(),
                field,
                value,
            });
        }
        Ok(())
    }

    // ==========================================
    // 输出表格组装
    // ==========================================

    /// 按规范工种行序组装输出表格
    fn to_table(plan: &AggregatedPlan) -> PlanTable {
        let mut ordered: Vec<&str> = aggregated_work_types();
        // 规范词表之外的工种 (理论上不出现) 追加在尾部, 保持确定性
        for wt in plan.totals.keys() {
            if !ordered.contains(&wt.as_str()) {
                ordered.push(wt.as_str());
            }
        }

        let rows = ordered
            .into_iter()
            .filter_map(|wt| {
                plan.totals.get(wt).map(|by_month| PlanRow {
                    work_type: wt.to_string(),
                    counts: plan.months.iter().map(|m| by_month[m]).collect(),
                })
            })
            .collect();

        PlanTable {
            months: plan.months.clone(),
            rows,
        }
    }
}
