//! 报表过滤规则

use chrono::{DateTime, NaiveDate};

use crate::models::reports::entities::{ReportFilter, UnparseableDatePolicy};

/// 解析记录日期，支持 `YYYY-MM-DD` 和 RFC 3339 时间戳
pub fn parse_record_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// 日期区间过滤（闭区间；只给一端时单侧过滤）
pub fn date_in_range(raw: &str, filter: &ReportFilter, policy: UnparseableDatePolicy) -> bool {
    if filter.from.is_none() && filter.to.is_none() {
        return true;
    }

    let Some(date) = parse_record_date(raw) else {
        return policy == UnparseableDatePolicy::Include;
    };

    filter.from.is_none_or(|from| date >= from) && filter.to.is_none_or(|to| date <= to)
}

/// 院系过滤：未指定或 "all" 放行全部，否则精确匹配
pub fn department_matches(department: &str, filter: &ReportFilter) -> bool {
    match filter.department.as_deref() {
        None => true,
        Some(wanted) if wanted.eq_ignore_ascii_case("all") => true,
        Some(wanted) => wanted == department,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(from: Option<&str>, to: Option<&str>) -> ReportFilter {
        let parse = |s: &str| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap();
        ReportFilter {
            from: from.map(parse),
            to: to.map(parse),
            department: None,
        }
    }

    #[test]
    fn test_inclusive_bounds() {
        let filter = range(Some("2025-01-01"), Some("2025-01-31"));
        let policy = UnparseableDatePolicy::Include;

        assert!(date_in_range("2025-01-01", &filter, policy));
        assert!(date_in_range("2025-01-31", &filter, policy));
        assert!(!date_in_range("2024-12-31", &filter, policy));
        assert!(!date_in_range("2025-02-01", &filter, policy));
    }

    #[test]
    fn test_one_sided_bounds() {
        let policy = UnparseableDatePolicy::Include;

        let from_only = range(Some("2025-03-01"), None);
        assert!(date_in_range("2030-01-01", &from_only, policy));
        assert!(!date_in_range("2025-02-28", &from_only, policy));

        let to_only = range(None, Some("2025-03-01"));
        assert!(date_in_range("1999-01-01", &to_only, policy));
        assert!(!date_in_range("2025-03-02", &to_only, policy));
    }

    #[test]
    fn test_unparseable_date_follows_policy() {
        let filter = range(Some("2025-01-01"), Some("2025-01-31"));

        assert!(date_in_range("not a date", &filter, UnparseableDatePolicy::Include));
        assert!(!date_in_range("not a date", &filter, UnparseableDatePolicy::Exclude));
    }

    #[test]
    fn test_no_range_passes_everything() {
        let filter = range(None, None);
        assert!(date_in_range("garbage", &filter, UnparseableDatePolicy::Exclude));
    }

    #[test]
    fn test_rfc3339_timestamps_use_date_part() {
        assert_eq!(
            parse_record_date("2025-01-15T10:30:00+00:00"),
            NaiveDate::from_ymd_opt(2025, 1, 15)
        );
    }

    #[test]
    fn test_department_filter() {
        let mut filter = ReportFilter::default();
        assert!(department_matches("Physics", &filter));

        filter.department = Some("ALL".to_string());
        assert!(department_matches("Physics", &filter));

        filter.department = Some("Computer Science".to_string());
        assert!(department_matches("Computer Science", &filter));
        assert!(!department_matches("computer science", &filter));
        assert!(!department_matches("Physics", &filter));
    }
}
