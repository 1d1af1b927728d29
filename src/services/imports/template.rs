//! 导入模板生成

use csv::Writer;

use super::validator::{optional_columns, required_columns};
use crate::errors::Result;
use crate::models::imports::entities::EntityType;

// 示例行，列顺序与表头一致
fn sample_row(entity: EntityType) -> &'static [&'static str] {
    match entity {
        EntityType::Students => &["Jane Doe", "jane.doe@example.edu", "S2025001", "active", ""],
        EntityType::Faculty => &[
            "Alan Smith",
            "alan.smith@example.edu",
            "F1001",
            "Computer Science",
            "PhD",
            "active",
        ],
        EntityType::Courses => &[
            "CS101",
            "Introduction to Programming",
            "4",
            "Computer Science",
            "1",
            "active",
        ],
        EntityType::Grades => &["S2025001", "42.5", ""],
        _ => &[],
    }
}

/// 模板表头：必填列在前，可选列在后
pub fn template_columns(entity: EntityType) -> Vec<&'static str> {
    required_columns(entity)
        .iter()
        .chain(optional_columns(entity))
        .copied()
        .collect()
}

/// 生成 CSV 模板
pub fn build_template(entity: EntityType) -> Result<Vec<u8>> {
    let mut wtr = Writer::from_writer(vec![]);
    wtr.write_record(template_columns(entity))?;
    wtr.write_record(sample_row(entity))?;
    wtr.into_inner()
        .map_err(|e| crate::errors::PortalError::csv_operation(format!("CSV 生成失败: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::imports::parser::{parse_table, require_columns};
    use crate::services::imports::validator::{ValidationRules, validate_record};

    #[test]
    fn test_templates_parse_and_validate() {
        for entity in [EntityType::Students, EntityType::Faculty, EntityType::Courses] {
            let bytes = build_template(entity).unwrap();
            let text = String::from_utf8(bytes).unwrap();
            let table = parse_table(&text).unwrap();

            assert!(require_columns(&table, required_columns(entity)).is_ok());
            assert_eq!(table.records.len(), 1);
            let verdict = validate_record(entity, &table.records[0], &ValidationRules::default());
            assert!(verdict.valid, "{entity}: {:?}", verdict.reasons);
        }
    }

    #[test]
    fn test_grade_template_columns() {
        assert_eq!(
            template_columns(EntityType::Grades),
            vec!["student_id", "obtained_marks", "remarks"]
        );
    }
}
