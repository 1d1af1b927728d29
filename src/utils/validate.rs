use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：local@domain.tld
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 校验整数是否落在闭区间内
pub fn validate_int_range(value: i32, min: i32, max: i32) -> Result<(), String> {
    if value < min || value > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

/// 解析整数字段，失败时返回说明
pub fn parse_int(value: &str) -> Result<i32, String> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| format!("'{value}' is not a whole number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("a@x.com").is_ok());
        assert!(validate_email("first.last+tag@dept.uni.edu").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("bad-email").is_err());
        assert!(validate_email("a@x").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("a b@x.com").is_err());
    }

    #[test]
    fn test_int_range_bounds_inclusive() {
        assert!(validate_int_range(1, 1, 10).is_ok());
        assert!(validate_int_range(10, 1, 10).is_ok());
        assert!(validate_int_range(0, 1, 10).is_err());
        assert!(validate_int_range(11, 1, 10).is_err());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("4"), Ok(4));
        assert!(parse_int("4.5").is_err());
        assert!(parse_int("four").is_err());
    }
}
