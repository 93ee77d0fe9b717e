// ==========================================
// 维护签核集成测试
// ==========================================
// 测试范围:
// 1. 角色门禁: 拒绝时不落库
// 2. 同键幂等覆写
// 3. 标签派生: 全勾转绿 / 部分勾转蓝 / 月检年检不动标签
// ==========================================


use lunapark_maintenance::domain::checklist::ItemCheck;
use lunapark_maintenance::engine::error::{WorkflowError, WorkflowErrorKind};
use lunapark_maintenance::{Frequency, StoreRepository, UnitTag};
use test_helpers::*;

#[test]
fn test_record_maintenance_成功落库() {
    let env = TestEnv::new().expect("无法创建测试环境");

    // 3 号设备为红牌种子（无事故）,全勾日检派生绿牌
    let receipt = env
        .workflow_api
        .record_maintenance(&tech("Tech1"), daily_input(3, true))
        .expect("签核失败");

    assert_eq!(receipt.derived_tag, Some(UnitTag::Green));
    assert!(!receipt.reasons.is_empty(), "派生决策应该输出原因");

    let store = env.workflow_api.snapshot();
    assert_eq!(store.logs.len(), 1);
    assert_eq!(store.logs[0].signer_name, "Tech1");
    assert_eq!(store.find_unit(3).unwrap().tag, UnitTag::Green);
}

#[test]
fn test_标签已达目标时不变更() {
    let env = TestEnv::new().expect("无法创建测试环境");

    // 1 号设备种子即绿牌,全勾日检不产生标签变更
    let receipt = env
        .workflow_api
        .record_maintenance(&tech("Tech1"), daily_input(1, true))
        .expect("签核失败");

    assert_eq!(receipt.derived_tag, None);
    assert!(receipt.reasons.iter().any(|r| r.contains("无变更")));
}

#[test]
fn test_无权角色拒绝且不落库() {
    let env = TestEnv::new().expect("无法创建测试环境");

    for actor in [operator("Op1"), supervisor("Sup1")] {
        let err = env
            .workflow_api
            .record_maintenance(&actor, daily_input(1, true))
            .unwrap_err();
        assert_eq!(err.workflow_kind(), Some(WorkflowErrorKind::NotAuthorized));
    }

    assert!(env.workflow_api.snapshot().logs.is_empty(), "拒绝后不应有记录");
}

#[test]
fn test_同键覆写保留最新() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.workflow_api
        .record_maintenance(&tech("Tech1"), daily_input(2, false))
        .expect("首次签核失败");
    env.workflow_api
        .record_maintenance(&tech("Tech2"), daily_input(2, true))
        .expect("覆写签核失败");

    let store = env.workflow_api.snapshot();
    assert_eq!(store.logs.len(), 1, "同键应该只剩一条记录");
    assert_eq!(store.logs[0].signer_name, "Tech2");
    assert!(store.logs[0].items.iter().all(|c| c.checked));
}

#[test]
fn test_部分勾选转蓝牌() {
    let env = TestEnv::new().expect("无法创建测试环境");

    let mut input = daily_input(1, true);
    input.items[1].checked = false;

    let receipt = env
        .workflow_api
        .record_maintenance(&tech("Tech1"), input)
        .expect("签核失败");

    assert_eq!(receipt.derived_tag, Some(UnitTag::Blue));
    assert_eq!(
        env.workflow_api.snapshot().find_unit(1).unwrap().tag,
        UnitTag::Blue
    );
}

#[test]
fn test_月检不驱动标签() {
    let env = TestEnv::new().expect("无法创建测试环境");

    // 3 号设备为红牌种子
    let receipt = env
        .workflow_api
        .record_maintenance(&tech("Tech1"), monthly_input(3))
        .expect("签核失败");

    assert_eq!(receipt.derived_tag, None);
    let store = env.workflow_api.snapshot();
    assert_eq!(store.find_unit(3).unwrap().tag, UnitTag::Red);
    assert_eq!(store.logs.len(), 1, "记录本身照常写入");
}

#[test]
fn test_空模板频率不给绿牌() {
    let env = TestEnv::new().expect("无法创建测试环境");

    // 清空日检模板后全勾也不算完成
    let mut store = env.workflow_api.snapshot();
    store.templates.insert(Frequency::Daily, Vec::new());
    env.repo.save(&store).expect("保存失败");

    let receipt = env
        .workflow_api
        .record_maintenance(
            &tech("Tech1"),
            lunapark_maintenance::engine::maintenance::MaintenanceInput {
                unit_id: 1,
                frequency: Frequency::Daily,
                date: today(),
                items: Vec::new(),
                notes: None,
            },
        )
        .expect("签核失败");

    assert_eq!(receipt.derived_tag, Some(UnitTag::Blue));
}

#[test]
fn test_未知设备拒绝() {
    let env = TestEnv::new().expect("无法创建测试环境");

    let err = env
        .workflow_api
        .record_maintenance(&tech("Tech1"), daily_input(99, true))
        .unwrap_err();
    match err {
        lunapark_maintenance::api::ApiError::WorkflowDenied(WorkflowError::UnitNotFound {
            unit_id,
        }) => assert_eq!(unit_id, 99),
        other => panic!("期望 UnitNotFound，实际: {:?}", other),
    }
}

#[test]
fn test_检查表回显() {
    let env = TestEnv::new().expect("无法创建测试环境");

    let mut input = daily_input(1, true);
    input.items = vec![ItemCheck { item_id: 1, checked: true }];
    input.notes = Some("2x M8 cıvata değiştirildi".to_string());
    env.workflow_api
        .record_maintenance(&tech("Tech1"), input)
        .expect("签核失败");

    let record = env
        .workflow_api
        .get_maintenance_record(1, Frequency::Daily, today())
        .expect("应该能按键回显记录");
    assert_eq!(record.notes.as_deref(), Some("2x M8 cıvata değiştirildi"));
}
