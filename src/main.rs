// ==========================================
// 游乐园设备维护管理系统 - 主入口
// ==========================================
// 技术栈: Rust + SQLite
// 系统定位: 安全工作流核心 (角色门禁状态机)
// ==========================================

use lunapark_maintenance::app::{get_default_db_path, AppState};

fn main() {
    // 初始化日志系统
    lunapark_maintenance::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", lunapark_maintenance::APP_NAME);
    tracing::info!("系统版本: {}", lunapark_maintenance::VERSION);
    tracing::info!("==================================================");

    // 获取数据库路径
    let db_path = get_default_db_path();
    tracing::info!("使用数据库: {}", db_path);

    // 创建AppState
    let app_state = match AppState::new(db_path) {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("无法初始化AppState: {}", e);
            std::process::exit(1);
        }
    };

    // 命令行模式: 备份/报表导出
    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("export-json") => match app_state.export_api.export_store_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!("JSON 导出失败: {}", e);
                std::process::exit(1);
            }
        },
        Some("export-csv") => match app_state.export_api.export_maintenance_csv() {
            Ok(csv) => print!("{}", csv),
            Err(e) => {
                tracing::error!("CSV 导出失败: {}", e);
                std::process::exit(1);
            }
        },
        _ => {
            // 默认: 打印存储快照概览
            let store = app_state.store_repo.load_or_seed();
            tracing::info!("设备总数: {}", store.units.len());
            for unit in &store.units {
                tracing::info!(
                    "  [{}] {} - {}",
                    unit.unit_id,
                    unit.name,
                    unit.tag
                );
            }
            tracing::info!(
                "维护记录: {}, 开放签字: {}, 事故: {}, 便签: {}",
                store.logs.len(),
                store.openings.len(),
                store.incidents.len(),
                store.tech_notes.len()
            );
            tracing::info!("可用命令: export-json | export-csv");
        }
    }
}
