// ==========================================
// 工程劳动力计划生成系统 - 月份序列引擎
// ==========================================
// 职责: 将起止月份展开为连续的日历月份序列
// 契约: start <= end 时产出闭区间内全部月份, 否则产出空序列
// ==========================================

use crate::domain::month::Month;

/// 生成从 start 到 end（含两端）的日历月份序列
///
/// 按月步进, 12月自动翻年。纯函数, 无副作用。
/// start > end 时返回空序列, 调用方应在校验层拦截该输入。
pub fn month_sequence(start: Month, end: Month) -> Vec<Month> {
    let mut months = Vec::new();
    let mut current = start;

    while current <= end {
        months.push(current);
        current = current.next();
    }

    months
}
