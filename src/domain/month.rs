// ==========================================
// 工程劳动力计划生成系统 - 月份值类型
// ==========================================
// 职责: 定义 (年, 月) 值类型及全序比较
// 红线: 月份取值 1-12, 越界视为契约违规, 立即失败
// ==========================================

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Month - 日历月份
// ==========================================
// 全序: 先比年份, 再比月份 (字段顺序派生)
// 用途: 月份序列元素 + 聚合合并键
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    pub month: u32, // 1-12
}

impl Month {
    /// 创建月份值
    ///
    /// # Panics
    /// 月份不在 1-12 范围内时 panic（契约违规, 上层校验负责拦截业务输入）
    pub fn new(year: i32, month: u32) -> Self {
        assert!(
            (1..=12).contains(&month),
            "月份取值越界: {} (合法范围 1-12)",
            month
        );
        Self { year, month }
    }

    /// 从日历日期取所在月份
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// 下一个日历月份（12月翻年）
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// 机读合并键, 形如 "2025-1"
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// 报表列标签, 形如 "2025年1月"
    pub fn label(&self) -> String {
        format!("{}年{}月", self.year, self.month)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}
