// ==========================================
// 工程劳动力计划生成系统 - 冬休期判定引擎
// ==========================================
// 职责: 判定某月份是否落在冬休期窗口内
// 算法: 循环区间包含, 单次分支 start <= end, 不做日期减法
// ==========================================

use crate::domain::month::Month;

/// 判定月份是否在冬休期内（按月份循环, 支持跨年窗口）
///
/// 两种情形:
/// - start <= end: 同年窗口, `start <= m <= end`
/// - start > end: 跨年窗口, `m >= start || m <= end` (如 11月-4月)
///
/// 判定完全忽略年份, 每个日历年按相同窗口循环生效。
/// start == end 表示单月窗口。
pub fn is_in_winter_break(month: Month, start_month: u32, end_month: u32) -> bool {
    let m = month.month;

    if start_month > end_month {
        // 跨年度: 从 start 到 12月, 以及从 1月到 end
        m >= start_month || m <= end_month
    } else {
        // 同年度: 从 start 到 end
        m >= start_month && m <= end_month
    }
}
