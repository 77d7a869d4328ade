// ==========================================
// 工程劳动力计划生成系统 - 内置工程类型目录
// ==========================================
// 职责: 五种工程类型及其施工阶段的出厂配置
// ==========================================

use crate::domain::config::{ModuleConfig, ProjectConfig, WinterBreakWindow, WorkTypeSetting};
use crate::domain::month::Month;
use crate::domain::types::{DistributionMode, ProjectKind};
use crate::domain::work_type::default_headcount;
use std::collections::BTreeMap;

// ==========================================
// ProjectTypeSpec - 工程类型条目
// ==========================================
pub struct ProjectTypeSpec {
    pub key: &'static str,
    pub kind: ProjectKind,
    pub modules: &'static [&'static str],
}

/// 内置工程类型目录
pub const PROJECT_CATALOG: [ProjectTypeSpec; 5] = [
    ProjectTypeSpec {
        key: "roadbed",
        kind: ProjectKind::Roadbed,
        modules: &["路基填筑开挖阶段", "路基防排水阶段", "涵洞工程"],
    },
    ProjectTypeSpec {
        key: "bridge",
        kind: ProjectKind::Bridge,
        modules: &[
            "基础施工阶段",
            "墩柱施工阶段",
            "梁板预制及安装阶段",
            "桥面系及附属施工阶段",
        ],
    },
    ProjectTypeSpec {
        key: "pavement",
        kind: ProjectKind::Pavement,
        modules: &["路面基层施工阶段", "路面面层施工阶段"],
    },
    ProjectTypeSpec {
        key: "tunnel",
        kind: ProjectKind::Tunnel,
        modules: &[
            "洞口施工阶段",
            "洞身施工阶段",
            "初支施工阶段",
            "二衬施工阶段",
            "附属施工阶段",
        ],
    },
    ProjectTypeSpec {
        key: "building",
        kind: ProjectKind::Building,
        modules: &[
            "基础施工阶段",
            "主体施工阶段",
            "装饰装修施工阶段",
            "机电安装工程",
        ],
    },
];

/// 单模块的出厂配置: 起止均为给定月份, 1 个班组, 正态模式,
/// 词表内全部工种预置默认人数且未启用
pub fn default_module_config(kind: ProjectKind, initial: Month) -> ModuleConfig {
    let workforce: BTreeMap<String, WorkTypeSetting> = kind
        .work_types()
        .iter()
        .map(|wt| {
            (
                wt.to_string(),
                WorkTypeSetting {
                    enabled: false,
                    count: default_headcount(wt),
                },
            )
        })
        .collect();

    ModuleConfig {
        start_year: initial.year,
        start_month: initial.month,
        end_year: initial.year,
        end_month: initial.month,
        team_count: 1,
        distribution_mode: DistributionMode::Normal,
        workforce,
    }
}

/// 全部工程类型的出厂项目配置, 默认全部未启用
pub fn default_projects(initial: Month) -> BTreeMap<String, ProjectConfig> {
    PROJECT_CATALOG
        .iter()
        .map(|spec| {
            let modules = spec
                .modules
                .iter()
                .map(|name| (name.to_string(), default_module_config(spec.kind, initial)))
                .collect();
            (
                spec.key.to_string(),
                ProjectConfig {
                    enabled: false,
                    name: spec.kind.display_name().to_string(),
                    kind: spec.kind,
                    winter_break: WinterBreakWindow::default(),
                    modules,
                },
            )
        })
        .collect()
}
