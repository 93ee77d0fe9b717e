// ==========================================
// 开放签字集成测试
// ==========================================
// 测试范围:
// 1. 绿牌门禁: 非绿牌设备拒绝签字
// 2. 同 (设备, 日期, 角色) 去重
// 3. 主管与操作员各自独立签字
// ==========================================


use lunapark_maintenance::engine::error::{WorkflowError, WorkflowErrorKind};
use lunapark_maintenance::engine::opening::OpeningInput;
use lunapark_maintenance::{ApiError, Role, UnitTag};
use test_helpers::*;

fn opening(unit_id: i64) -> OpeningInput {
    OpeningInput {
        unit_id,
        date: today(),
    }
}

#[test]
fn test_绿牌设备双角色签字() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.workflow_api
        .sign_opening(&supervisor("Jane"), opening(1))
        .expect("主管签字失败");
    env.workflow_api
        .sign_opening(&operator("Mehmet"), opening(1))
        .expect("操作员签字失败");

    let store = env.workflow_api.snapshot();
    assert_eq!(store.openings.len(), 2);
    let names: Vec<&str> = store.openings.iter().map(|s| s.name.as_str()).collect();
    assert!(names.contains(&"Jane"));
    assert!(names.contains(&"Mehmet"));
}

#[test]
fn test_红牌设备拒绝签字() {
    let env = TestEnv::new().expect("无法创建测试环境");

    // 3 号设备为红牌种子
    let err = env
        .workflow_api
        .sign_opening(&supervisor("Jane"), opening(3))
        .unwrap_err();
    match err {
        ApiError::WorkflowDenied(WorkflowError::TechnicalApprovalRequired { unit_id, tag }) => {
            assert_eq!(unit_id, 3);
            assert_eq!(tag, UnitTag::Red);
        }
        other => panic!("期望 TechnicalApprovalRequired，实际: {:?}", other),
    }
    assert!(env.workflow_api.snapshot().openings.is_empty(), "签字日志不应被触碰");
}

#[test]
fn test_蓝牌设备同样拒绝() {
    let env = TestEnv::new().expect("无法创建测试环境");

    // 部分勾选的日检把 1 号压为蓝牌
    let mut input = daily_input(1, true);
    input.items[0].checked = false;
    env.workflow_api
        .record_maintenance(&tech("Tech1"), input)
        .expect("签核失败");

    let err = env
        .workflow_api
        .sign_opening(&operator("Mehmet"), opening(1))
        .unwrap_err();
    assert_eq!(err.workflow_kind(), Some(WorkflowErrorKind::PreconditionFailed));
}

#[test]
fn test_同键重复签字拒绝() {
    let env = TestEnv::new().expect("无法创建测试环境");

    env.workflow_api
        .sign_opening(&supervisor("Jane"), opening(1))
        .expect("首次签字失败");

    // 同角色不同人也算重复
    let err = env
        .workflow_api
        .sign_opening(&supervisor("Ali"), opening(1))
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::WorkflowDenied(WorkflowError::AlreadySigned { unit_id: 1, .. })
    ));
    assert_eq!(env.workflow_api.snapshot().openings.len(), 1);
}

#[test]
fn test_技术角色不能签开放() {
    let env = TestEnv::new().expect("无法创建测试环境");

    for role in [Role::Tech, Role::TechManager, Role::Ops] {
        let actor = lunapark_maintenance::Actor::new("Kişi", role);
        let err = env
            .workflow_api
            .sign_opening(&actor, opening(1))
            .unwrap_err();
        assert_eq!(err.workflow_kind(), Some(WorkflowErrorKind::NotAuthorized));
    }
}

#[test]
fn test_空姓名拒绝() {
    let env = TestEnv::new().expect("无法创建测试环境");

    let err = env
        .workflow_api
        .sign_opening(&supervisor("   "), opening(1))
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::WorkflowDenied(WorkflowError::SignerRequired)
    ));
}
