/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::info;

/// 记录程序启动信息
///
/// # 参数
/// - `source_range`: 问卷回复区域
/// - `max_attempts`: 每道题最多查询次数
pub fn log_startup(source_range: &str, max_attempts: u32) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 问卷代码题自动评测");
    info!("📄 读取区域: {}", source_range);
    info!("🔁 每道题最多查询 {} 次评测结果", max_attempts);
    info!("{}", "=".repeat(60));
}

/// 记录目录加载信息
pub fn log_catalogs_loaded(languages: usize, statuses: usize) {
    info!("✓ 语言目录: {} 项, 状态目录: {} 项", languages, statuses);
}

/// 记录提交记录加载信息
///
/// # 参数
/// - `total`: 记录总数
/// - `skipped_header_rows`: 跳过的表头行数
pub fn log_records_loaded(total: usize, skipped_header_rows: usize) {
    info!("✓ 找到 {} 条待评测的记录", total);
    info!("📋 已跳过 {} 行表头，按顺序逐条评测\n", skipped_header_rows);
}

/// 打印最终统计信息
///
/// # 参数
/// - `graded`: 全部评测成功的记录数
/// - `failed`: 含失败代码题的记录数
/// - `total`: 总数
/// - `failure_log_path`: 失败记录文件路径
pub fn print_final_stats(graded: usize, failed: usize, total: usize, failure_log_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部评测完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", graded, total);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
    if failed > 0 {
        info!("\n失败记录已保存至: {}", failure_log_path);
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
