// ==========================================
// 工程劳动力计划生成系统 - 工种词表
// ==========================================
// 职责: 固定工种词表 + 默认人数基数
// 红线: 词表与基数是观测行为的一部分, 不得增删改
// ==========================================

/// 通用工程工种词表（路基/桥梁/路面/房建）
pub const WORK_TYPES: [&str; 9] = [
    "模板工",
    "混凝土工",
    "钢筋工",
    "支架工",
    "测量工",
    "电焊工",
    "泥瓦工",
    "电工",
    "普工",
];

/// 隧道工程专用工种词表
pub const TUNNEL_WORK_TYPES: [&str; 11] = [
    "出渣工",
    "防水工",
    "钢筋工",
    "混凝土工",
    "开挖工",
    "模板工",
    "喷砼工",
    "普通工",
    "司机",
    "支护工",
    "电焊工",
];

/// 工种默认人数基数
///
/// 经验整定常量, 同时作为启发式曲线的峰值基数和配置面板的默认值。
/// 未收录的工种按 50 处理。
pub fn default_headcount(work_type: &str) -> u32 {
    match work_type {
        "模板工" => 80,
        "混凝土工" => 90,
        "钢筋工" => 100,
        "支架工" => 40,
        "测量工" => 10,
        "电焊工" => 35,
        "泥瓦工" => 25,
        "电工" => 5,
        "普工" => 50,
        "出渣工" => 60,
        "防水工" => 30,
        "开挖工" => 100,
        "喷砼工" => 90,
        "普通工" => 70,
        "司机" => 30,
        "支护工" => 30,
        _ => 50,
    }
}

/// 汇总报表的规范工种行序: 通用词表在前, 隧道新增工种在后, 去重
pub fn aggregated_work_types() -> Vec<&'static str> {
    let mut types: Vec<&'static str> = WORK_TYPES.to_vec();
    for wt in TUNNEL_WORK_TYPES {
        if !types.contains(&wt) {
            types.push(wt);
        }
    }
    types
}
