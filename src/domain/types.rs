// ==========================================
// 工程劳动力计划生成系统 - 领域类型定义
// ==========================================
// 职责: 分布模式与工程类型的枚举定义
// ==========================================

use crate::domain::work_type::{TUNNEL_WORK_TYPES, WORK_TYPES};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 分布模式 (Distribution Mode)
// ==========================================
// Constant: 每月人数恒定为配置值
// Normal: 以配置值为峰值的钟形曲线
// 序列化格式: 小写 (与配置文件一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionMode {
    Constant, // 数量恒定
    Normal,   // 正态分布
}

impl Default for DistributionMode {
    fn default() -> Self {
        DistributionMode::Normal
    }
}

impl fmt::Display for DistributionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionMode::Constant => write!(f, "constant"),
            DistributionMode::Normal => write!(f, "normal"),
        }
    }
}

// ==========================================
// 工程类型 (Project Kind)
// ==========================================
// 每种工程类型绑定固定的工种词表
// 红线: 隧道工程不允许启用冬休期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Roadbed,  // 路基工程
    Bridge,   // 桥梁工程
    Pavement, // 路面工程
    Tunnel,   // 隧道工程
    Building, // 房建工程
}

impl ProjectKind {
    /// 工程类型显示名
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectKind::Roadbed => "路基工程",
            ProjectKind::Bridge => "桥梁工程",
            ProjectKind::Pavement => "路面工程",
            ProjectKind::Tunnel => "隧道工程",
            ProjectKind::Building => "房建工程",
        }
    }

    /// 该工程类型的固定工种词表
    pub fn work_types(&self) -> &'static [&'static str] {
        match self {
            ProjectKind::Tunnel => &TUNNEL_WORK_TYPES,
            _ => &WORK_TYPES,
        }
    }

    /// 是否允许设置冬休期
    pub fn allows_winter_break(&self) -> bool {
        !matches!(self, ProjectKind::Tunnel)
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
