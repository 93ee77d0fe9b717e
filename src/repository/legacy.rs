// ==========================================
// 游乐园设备维护管理系统 - 历史文档迁移
// ==========================================
// 背景: 历史版本以两态标签 (Aktif / Kırmızı Etiket) 和
//       camelCase 键名持久化; 读取时一次性迁移为当前模型。
// 约束: 迁移只在读取路径发生,保存永远写当前格式。
// ==========================================

use serde_json::Value;

/// 是否为历史两态文档
///
/// 判据: 任一设备带 "status" 键,或任一日志带 "unitId" 键。
pub fn is_legacy_document(value: &Value) -> bool {
    let unit_has_status = value
        .get("units")
        .and_then(Value::as_array)
        .map(|units| units.iter().any(|u| u.get("status").is_some()))
        .unwrap_or(false);
    let log_has_camel = value
        .get("logs")
        .and_then(Value::as_array)
        .map(|logs| logs.iter().any(|l| l.get("unitId").is_some()))
        .unwrap_or(false);
    unit_has_status || log_has_camel
}

/// 就地迁移历史文档
pub fn migrate_legacy_document(value: &mut Value) {
    migrate_units(value);
    migrate_templates(value);
    migrate_logs(value);
    migrate_openings(value);
    migrate_tech_notes(value);
}

fn rename_key(obj: &mut serde_json::Map<String, Value>, from: &str, to: &str) {
    if let Some(v) = obj.remove(from) {
        obj.insert(to.to_string(), v);
    }
}

fn migrate_units(value: &mut Value) {
    let Some(units) = value.get_mut("units").and_then(Value::as_array_mut) else {
        return;
    };
    for unit in units {
        let Some(obj) = unit.as_object_mut() else { continue };
        rename_key(obj, "id", "unit_id");
        rename_key(obj, "ndtDate", "ndt_date");
        rename_key(obj, "imageDataUrl", "photo_ref");
        if let Some(status) = obj.remove("status") {
            let tag = match status.as_str() {
                Some("Kırmızı Etiket") => "RED",
                // 两态方案中 "Aktif" 即可开放
                _ => "GREEN",
            };
            obj.insert("tag".to_string(), Value::String(tag.to_string()));
        }
    }
}

fn migrate_templates(value: &mut Value) {
    let Some(templates) = value.get_mut("templates").and_then(Value::as_object_mut) else {
        return;
    };
    for items in templates.values_mut() {
        let Some(items) = items.as_array_mut() else { continue };
        for item in items {
            let Some(obj) = item.as_object_mut() else { continue };
            rename_key(obj, "id", "item_id");
            rename_key(obj, "titleTR", "title_tr");
            rename_key(obj, "titleEN", "title_en");
        }
    }
}

fn migrate_logs(value: &mut Value) {
    let Some(logs) = value.get_mut("logs").and_then(Value::as_array_mut) else {
        return;
    };
    for log in logs {
        let Some(obj) = log.as_object_mut() else { continue };
        rename_key(obj, "unitId", "unit_id");
        if let Some(items) = obj.get_mut("items").and_then(Value::as_array_mut) {
            for item in items {
                if let Some(item_obj) = item.as_object_mut() {
                    rename_key(item_obj, "id", "item_id");
                }
            }
        }
        // 历史记录无签核人信息,补占位字段
        inject_signature_fields(obj);
        obj.entry("signer_role")
            .or_insert_with(|| Value::String("TECH".to_string()));
    }
}

fn migrate_openings(value: &mut Value) {
    let Some(openings) = value.get_mut("openings").and_then(Value::as_array_mut) else {
        return;
    };
    for signature in openings {
        let Some(obj) = signature.as_object_mut() else { continue };
        rename_key(obj, "unitId", "unit_id");
        inject_signature_fields(obj);
    }
}

fn migrate_tech_notes(value: &mut Value) {
    let Some(root) = value.as_object_mut() else { return };
    rename_key(root, "techNotes", "tech_notes");
    let Some(notes) = root.get_mut("tech_notes").and_then(Value::as_array_mut) else {
        return;
    };
    for note in notes {
        let Some(obj) = note.as_object_mut() else { continue };
        rename_key(obj, "id", "note_id");
        rename_key(obj, "unitId", "unit_id");
        rename_key(obj, "from", "author");
    }
}

/// 历史记录缺时间戳/姓名时按日期零点补齐
fn inject_signature_fields(obj: &mut serde_json::Map<String, Value>) {
    if !obj.contains_key("signed_at") {
        let midnight = obj
            .get("date")
            .and_then(Value::as_str)
            .map(|d| format!("{}T00:00:00Z", d))
            .unwrap_or_else(|| "1970-01-01T00:00:00Z".to_string());
        obj.insert("signed_at".to_string(), Value::String(midnight));
    }
    if !obj.contains_key("signer_name") && !obj.contains_key("name") {
        obj.insert(
            "signer_name".to_string(),
            Value::String("(legacy)".to_string()),
        );
    }
}
