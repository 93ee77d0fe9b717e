// ==========================================
// 导入导出集成测试
// ==========================================
// 测试范围:
// 1. JSON 备份导出与恢复
// 2. 坏备份拒绝且不破坏现有数据
// 3. CSV 报表列结构与签字并入
// ==========================================


use lunapark_maintenance::engine::opening::OpeningInput;
use lunapark_maintenance::{Lang, UnitTag};
use test_helpers::*;

#[test]
fn test_json备份恢复() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.workflow_api
        .record_maintenance(&tech("Tech1"), daily_input(1, true))
        .expect("签核失败");
    env.workflow_api
        .open_incident(&operator("Op1"), 2)
        .expect("开启事故失败");

    let backup = env.export_api.export_store_json().expect("导出失败");

    // 另一个环境恢复备份
    let other = TestEnv::new().expect("无法创建测试环境");
    other
        .export_api
        .import_store_json(&backup)
        .expect("导入失败");

    let store = other.workflow_api.snapshot();
    assert_eq!(store.logs.len(), 1);
    assert_eq!(store.find_unit(2).unwrap().tag, UnitTag::Red);
    assert!(store.incidents[0].is_open());
}

#[test]
fn test_坏备份拒绝() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.workflow_api
        .record_maintenance(&tech("Tech1"), daily_input(1, true))
        .expect("签核失败");

    assert!(env.export_api.import_store_json("not json at all").is_err());
    // 现有数据保持原样
    assert_eq!(env.workflow_api.snapshot().logs.len(), 1);
}

#[test]
fn test_csv列结构() {
    let env = TestEnv::new().expect("无法创建测试环境");

    let mut input = daily_input(1, true);
    input.items[2].checked = false;
    input.notes = Some("2x M8 cıvata değiştirildi".to_string());
    env.workflow_api
        .record_maintenance(&tech("Tech1"), input)
        .expect("签核失败");

    let csv = env.export_api.export_maintenance_csv().expect("导出失败");
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "unit_id,date,item_id,item_text,done,notes,supervisor_signed,operator_signed"
    );
    // 表头 + 三条检查项
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("1,2026-08-30,1,"));
    assert!(lines[3].contains(",0,"), "未勾选项 done=0");
    assert!(csv.contains("2x M8 cıvata değiştirildi"));
}

#[test]
fn test_csv并入开放签字() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.workflow_api
        .record_maintenance(&tech("Tech1"), daily_input(1, true))
        .expect("签核失败");
    env.workflow_api
        .sign_opening(
            &supervisor("Jane"),
            OpeningInput {
                unit_id: 1,
                date: today(),
            },
        )
        .expect("主管签字失败");
    env.workflow_api
        .sign_opening(
            &operator("Mehmet"),
            OpeningInput {
                unit_id: 1,
                date: today(),
            },
        )
        .expect("操作员签字失败");

    let csv = env.export_api.export_maintenance_csv().expect("导出失败");
    let data_line = csv.lines().nth(1).expect("应该有数据行");
    assert!(data_line.ends_with("Jane,Mehmet"));
}

#[test]
fn test_csv按语言渲染条目文案() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.workflow_api
        .record_maintenance(&tech("Tech1"), daily_input(1, true))
        .expect("签核失败");

    let csv_tr = env.export_api.export_maintenance_csv().expect("导出失败");
    assert!(csv_tr.contains("Emniyet kemerleri"));

    env.workflow_api.set_lang(Lang::En).expect("语言设置失败");
    let csv_en = env.export_api.export_maintenance_csv().expect("导出失败");
    assert!(csv_en.contains("Restraints checked"));
}
