/// 转义 LIKE 模式中的通配符，防止搜索词中的 `%` `_` 被当作通配符
pub fn escape_like_pattern(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// 判断存储错误是否为唯一约束冲突（SQLite / PostgreSQL / MySQL）
pub fn is_unique_violation(message: &str) -> bool {
    message.contains("UNIQUE constraint failed")
        || message.contains("duplicate key value")
        || message.contains("Duplicate entry")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_violation_messages() {
        assert!(is_unique_violation(
            "数据库操作失败: UNIQUE constraint failed: students.student_id"
        ));
        assert!(is_unique_violation(
            "duplicate key value violates unique constraint \"courses_course_code_key\""
        ));
        assert!(!is_unique_violation("FOREIGN KEY constraint failed"));
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_like_pattern("Computer Science"), "Computer Science");
    }

    #[test]
    fn test_wildcards_escaped() {
        assert_eq!(escape_like_pattern("50%_off"), "50\\%\\_off");
        assert_eq!(escape_like_pattern("a\\b"), "a\\\\b");
    }
}
