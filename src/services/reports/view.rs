//! 报表预览与下载

use actix_web::{HttpResponse, Result as ActixResult};
use chrono::Utc;
use tracing::error;

use super::ReportService;
use super::aggregator::{ReportSnapshot, build_report};
use super::export::{export_csv, export_filename};
use crate::errors::Result;
use crate::models::reports::{entities::ReportType, requests::ReportQuery, responses::Report};
use crate::models::{ApiResponse, ErrorCode};
use crate::runtime::AppContext;
use crate::storage::Storage;

/// 读取报表快照
pub async fn load_snapshot(storage: &dyn Storage) -> Result<ReportSnapshot> {
    Ok(ReportSnapshot {
        students: storage.list_all_students().await?,
        faculty: storage.list_all_faculty().await?,
        courses: storage.list_all_courses().await?,
        enrollments: storage.list_enrollments(Default::default()).await?,
        attendance: storage.list_attendance(Default::default()).await?,
        grades: storage.list_grades(Default::default()).await?,
    })
}

// 解析参数并生成报表；失败时直接返回错误响应
async fn generate(
    ctx: &AppContext,
    report_type: &str,
    query: ReportQuery,
) -> std::result::Result<Report, HttpResponse> {
    let report_type = report_type.parse::<ReportType>().map_err(|msg| {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::ReportTypeInvalid, msg))
    })?;

    let filter = query.into_filter().map_err(|msg| {
        HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ReportFilterInvalid, msg))
    })?;

    let snapshot = load_snapshot(ctx.storage.as_ref()).await.map_err(|e| {
        error!("读取报表数据失败: {}", e);
        HttpResponse::InternalServerError().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("读取报表数据失败: {e}"),
        ))
    })?;

    Ok(build_report(
        &snapshot,
        report_type,
        &filter,
        ctx.config.report.unparseable_dates,
    ))
}

pub async fn preview_report(
    _service: &ReportService,
    ctx: &AppContext,
    report_type: &str,
    query: ReportQuery,
) -> ActixResult<HttpResponse> {
    match generate(ctx, report_type, query).await {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(report, "报表生成成功"))),
        Err(response) => Ok(response),
    }
}

pub async fn export_report(
    _service: &ReportService,
    ctx: &AppContext,
    report_type: &str,
    query: ReportQuery,
) -> ActixResult<HttpResponse> {
    let report = match generate(ctx, report_type, query).await {
        Ok(report) => report,
        Err(response) => return Ok(response),
    };

    let data = match export_csv(&report) {
        Ok(data) => data,
        Err(e) => {
            error!("报表导出失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ReportExportFailed,
                    format!("报表导出失败: {e}"),
                )),
            );
        }
    };

    let filename = export_filename(&report, Utc::now().date_naive());
    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::{entities::AttendanceStatus, requests::CreateAttendanceRequest};
    use crate::models::courses::requests::CreateCourseRequest;
    use crate::models::reports::entities::{ReportFilter, ReportStatistic, UnparseableDatePolicy};
    use crate::models::students::requests::CreateStudentRequest;
    use crate::storage::sea_orm_storage::memory_storage;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_snapshot_from_storage_feeds_attendance_report() {
        let storage = memory_storage().await;
        let student = storage
            .create_student(CreateStudentRequest {
                full_name: "Ann".into(),
                email: "ann@example.edu".into(),
                student_id: "S1".into(),
                status: None,
                account_ref: None,
            })
            .await
            .unwrap();
        let course = storage
            .create_course(CreateCourseRequest {
                course_code: "CS101".into(),
                course_name: "Intro".into(),
                credits: 4,
                department: "Computer Science".into(),
                semester: 1,
                faculty_id: None,
                status: None,
            })
            .await
            .unwrap();
        for (day, status) in [
            ("2025-01-10", AttendanceStatus::Present),
            ("2025-01-11", AttendanceStatus::Absent),
            ("2025-02-01", AttendanceStatus::Present),
        ] {
            storage
                .create_attendance(CreateAttendanceRequest {
                    student_id: student.id,
                    course_id: course.id,
                    date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
                    status,
                    remarks: None,
                })
                .await
                .unwrap();
        }

        let snapshot = load_snapshot(storage.as_ref()).await.unwrap();
        let report = build_report(
            &snapshot,
            ReportType::Attendance,
            &ReportFilter {
                from: NaiveDate::from_ymd_opt(2025, 1, 1),
                to: NaiveDate::from_ymd_opt(2025, 1, 31),
                department: Some("Computer Science".into()),
            },
            UnparseableDatePolicy::Exclude,
        );

        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0][1], "S1");
        assert_eq!(
            report.summary.statistic,
            ReportStatistic::PresentRate {
                present: 1,
                total: 2,
                rate: 50.0
            }
        );
    }
}
