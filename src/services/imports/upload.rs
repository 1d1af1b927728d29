//! CSV 导入入口

use std::collections::HashMap;

use actix_multipart::Multipart;
use actix_web::{HttpResponse, Result as ActixResult};
use futures_util::StreamExt;
use tracing::error;

use super::ImportService;
use super::orchestrator::{run_grade_import, run_import};
use super::parser::{ImportFormatError, check_row_limit, parse_table, require_columns};
use super::template::build_template;
use super::validator::{ValidationRules, required_columns};
use crate::config::ImportConfig;
use crate::errors::PortalError;
use crate::models::enrollments::{entities::EnrollmentStatus, requests::EnrollmentListQuery};
use crate::models::grades::entities::check_marks;
use crate::models::imports::{
    entities::EntityType, requests::GradeImportParams, responses::ImportReport,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::runtime::AppContext;
use crate::storage::Storage;

/// 导入失败（整批中止）
#[derive(Debug)]
pub enum ImportError {
    Unsupported(String),
    Format(ImportFormatError),
    CourseNotFound(i64),
    InvalidParams(String),
    Storage(PortalError),
}

impl From<ImportFormatError> for ImportError {
    fn from(err: ImportFormatError) -> Self {
        Self::Format(err)
    }
}

impl From<PortalError> for ImportError {
    fn from(err: PortalError) -> Self {
        Self::Storage(err)
    }
}

impl ImportError {
    fn into_response(self) -> HttpResponse {
        match self {
            Self::Unsupported(entity) => HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ImportEntityUnsupported,
                format!("Import is not supported for '{entity}'"),
            )),
            Self::Format(e) => {
                HttpResponse::BadRequest().json(ApiResponse::error_empty(e.error_code(), e.to_string()))
            }
            Self::CourseNotFound(id) => HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                format!("Course {id} not found"),
            )),
            Self::InvalidParams(msg) => {
                HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, msg))
            }
            Self::Storage(e) => {
                error!("导入失败: {}", e);
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    e.to_string(),
                ))
            }
        }
    }
}

// 解析 + 格式检查，任何格式错误都在提交前返回
fn prepare_table(
    text: &str,
    entity: EntityType,
    config: &ImportConfig,
) -> Result<super::parser::ParsedTable, ImportFormatError> {
    let table = parse_table(text)?;
    require_columns(&table, required_columns(entity))?;
    check_row_limit(&table, config.max_rows)?;
    Ok(table)
}

/// 导入学生 / 教师 / 课程
pub async fn import_csv(
    storage: &dyn Storage,
    entity: EntityType,
    text: &str,
    config: &ImportConfig,
) -> Result<ImportReport, ImportError> {
    if !entity.is_importable() {
        return Err(ImportError::Unsupported(entity.to_string()));
    }

    let table = prepare_table(text, entity, config)?;
    let rules = ValidationRules::from(config);
    Ok(run_import(storage, entity, &table, &rules).await)
}

/// 按课程导入成绩
pub async fn import_grade_csv(
    storage: &dyn Storage,
    course_id: i64,
    params: &GradeImportParams,
    text: &str,
    config: &ImportConfig,
) -> Result<ImportReport, ImportError> {
    if params.assessment_name.trim().is_empty() || params.assessment_type.trim().is_empty() {
        return Err(ImportError::InvalidParams(
            "assessment_name and assessment_type are required".to_string(),
        ));
    }
    // 用 0 分检查满分本身是否合法
    check_marks(0.0, params.max_marks).map_err(ImportError::InvalidParams)?;

    if storage.get_course_by_id(course_id).await?.is_none() {
        return Err(ImportError::CourseNotFound(course_id));
    }

    let table = prepare_table(text, EntityType::Grades, config)?;

    // 已选课学生名单：学号 → 内部 ID
    let enrolled = storage
        .list_enrollments(EnrollmentListQuery {
            course_id: Some(course_id),
            status: Some(EnrollmentStatus::Enrolled),
            ..Default::default()
        })
        .await?;
    let students: HashMap<i64, String> = storage
        .list_all_students()
        .await?
        .into_iter()
        .map(|s| (s.id, s.student_id))
        .collect();
    let roster: HashMap<String, i64> = enrolled
        .iter()
        .filter_map(|e| students.get(&e.student_id).map(|key| (key.clone(), e.student_id)))
        .collect();

    Ok(run_grade_import(storage, course_id, params, &roster, &table).await)
}

// 读取上传文件内容
async fn read_file_from_multipart(
    payload: &mut Multipart,
    max_size: usize,
) -> Result<Vec<u8>, String> {
    let mut file_bytes = Vec::new();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| format!("Failed to read multipart field: {e}"))?;

        if field.name().map(|n| n == "file").unwrap_or(false) {
            while let Some(chunk) = field.next().await {
                let data = chunk.map_err(|e| format!("Failed to read file data: {e}"))?;
                if file_bytes.len() + data.len() > max_size {
                    return Err(format!("File exceeds the {max_size} byte limit"));
                }
                file_bytes.extend_from_slice(&data);
            }
        }
    }

    if file_bytes.is_empty() {
        return Err("No file field found in upload".to_string());
    }

    Ok(file_bytes)
}

async fn read_upload_text(
    payload: &mut Multipart,
    config: &ImportConfig,
) -> Result<String, HttpResponse> {
    let bytes = read_file_from_multipart(payload, config.max_file_size)
        .await
        .map_err(|msg| {
            HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::FileUploadFailed, msg))
        })?;

    String::from_utf8(bytes).map_err(|_| {
        HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ImportFileParseFailed,
            "File must be UTF-8 encoded CSV",
        ))
    })
}

pub async fn import_entity(
    _service: &ImportService,
    ctx: &AppContext,
    entity_type: &str,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let entity = match entity_type.parse::<EntityType>() {
        Ok(entity) => entity,
        Err(msg) => {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::ImportEntityUnsupported, msg)));
        }
    };

    let text = match read_upload_text(&mut payload, &ctx.config.import).await {
        Ok(text) => text,
        Err(response) => return Ok(response),
    };

    match import_csv(ctx.storage.as_ref(), entity, &text, &ctx.config.import).await {
        Ok(report) => {
            let message = report.summary.clone();
            Ok(HttpResponse::Ok().json(ApiResponse::success(report, message)))
        }
        Err(e) => Ok(e.into_response()),
    }
}

pub async fn import_grades(
    _service: &ImportService,
    ctx: &AppContext,
    course_id: i64,
    params: GradeImportParams,
    mut payload: Multipart,
) -> ActixResult<HttpResponse> {
    let text = match read_upload_text(&mut payload, &ctx.config.import).await {
        Ok(text) => text,
        Err(response) => return Ok(response),
    };

    match import_grade_csv(
        ctx.storage.as_ref(),
        course_id,
        &params,
        &text,
        &ctx.config.import,
    )
    .await
    {
        Ok(report) => {
            let message = report.summary.clone();
            Ok(HttpResponse::Ok().json(ApiResponse::success(report, message)))
        }
        Err(e) => Ok(e.into_response()),
    }
}

/// 下载导入模板
pub async fn download_template(
    _service: &ImportService,
    entity_type: &str,
) -> ActixResult<HttpResponse> {
    let entity = match entity_type.parse::<EntityType>() {
        Ok(entity) if entity.is_importable() || entity == EntityType::Grades => entity,
        _ => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::ImportEntityUnsupported,
                format!("No import template for '{entity_type}'"),
            )));
        }
    };

    match build_template(entity) {
        Ok(data) => Ok(HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                "Content-Disposition",
                format!("attachment; filename=\"{entity}_import_template.csv\""),
            ))
            .body(data)),
        Err(e) => {
            error!("模板生成失败: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    e.to_string(),
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::requests::CreateCourseRequest;
    use crate::models::enrollments::requests::CreateEnrollmentRequest;
    use crate::models::grades::requests::GradeListQuery;
    use crate::models::imports::entities::{ImportStatus, RowOutcome};
    use crate::models::students::requests::{CreateStudentRequest, StudentListQuery};
    use crate::storage::sea_orm_storage::memory_storage;

    fn student(name: &str, key: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            full_name: name.to_string(),
            email: format!("{}@example.edu", key.to_lowercase()),
            student_id: key.to_string(),
            status: None,
            account_ref: None,
        }
    }

    #[tokio::test]
    async fn test_student_import_persists_valid_rows() {
        let storage = memory_storage().await;
        let text = "full_name,email,student_id\nA,a@x.com,S1\nB,bad-email,S2\n,c@x.com,S3";

        let report = import_csv(
            storage.as_ref(),
            EntityType::Students,
            text,
            &ImportConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(report.submitted, 1);
        assert_eq!(report.skipped_invalid, 2);
        let listed = storage
            .list_students_with_pagination(StudentListQuery::default())
            .await
            .unwrap();
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].student_id, "S1");
    }

    #[tokio::test]
    async fn test_duplicate_business_key_counts_as_submit_failure() {
        let storage = memory_storage().await;
        storage.create_student(student("Existing", "S1")).await.unwrap();
        let text = "full_name,email,student_id\nA,a@x.com,S1\nB,b@x.com,S2\n";

        let report = import_csv(
            storage.as_ref(),
            EntityType::Students,
            text,
            &ImportConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(report.submitted, 1);
        assert_eq!(report.failed_on_submit, 1);
        assert_eq!(report.skipped_invalid, 0);
        assert_eq!(report.status, ImportStatus::Partial);
        assert!(matches!(report.rows[0].outcome, RowOutcome::SubmitFailed { .. }));
    }

    #[tokio::test]
    async fn test_missing_column_aborts_before_submission() {
        let storage = memory_storage().await;
        let text = "full_name,email\nA,a@x.com\n";

        let err = import_csv(
            storage.as_ref(),
            EntityType::Students,
            text,
            &ImportConfig::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            ImportError::Format(ImportFormatError::MissingColumns(_))
        ));
        assert!(storage.list_all_students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repeated_header_aborts_before_submission() {
        let storage = memory_storage().await;
        let text = "email,full_name,student_id,email\nreal@x.com,A,S1,\n";

        let err = import_csv(
            storage.as_ref(),
            EntityType::Students,
            text,
            &ImportConfig::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            ImportError::Format(ImportFormatError::DuplicateColumns(_))
        ));
        assert!(storage.list_all_students().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_entity_rejected() {
        let storage = memory_storage().await;

        let err = import_csv(
            storage.as_ref(),
            EntityType::Attendance,
            "a\n1\n",
            &ImportConfig::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ImportError::Unsupported(_)));
    }

    #[tokio::test]
    async fn test_grade_import_against_roster() {
        let storage = memory_storage().await;
        let enrolled = storage.create_student(student("Ann", "S1")).await.unwrap();
        let outsider = storage.create_student(student("Bob", "S2")).await.unwrap();
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
        storage
            .create_enrollment(CreateEnrollmentRequest {
                student_id: enrolled.id,
                course_id: course.id,
                status: None,
                enrollment_date: None,
            })
            .await
            .unwrap();

        let params = GradeImportParams {
            assessment_name: "Quiz 1".into(),
            assessment_type: "quiz".into(),
            max_marks: 20.0,
            graded_on: None,
        };
        let text = "student_id,obtained_marks\nS1,18\nS2,25\n";

        let report = import_grade_csv(
            storage.as_ref(),
            course.id,
            &params,
            text,
            &ImportConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(report.submitted, 1);
        assert_eq!(report.skipped_not_found, 1);

        let grades = storage
            .list_grades(GradeListQuery {
                course_id: Some(course.id),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(grades.len(), 1);
        assert_eq!(grades[0].student_id, enrolled.id);
        assert_ne!(grades[0].student_id, outsider.id);
        assert_eq!(grades[0].percentage, 90.0);
        assert_eq!(grades[0].letter_grade, "A+");
    }

    #[tokio::test]
    async fn test_grade_import_unknown_course() {
        let storage = memory_storage().await;
        let params = GradeImportParams {
            assessment_name: "Quiz".into(),
            assessment_type: "quiz".into(),
            max_marks: 10.0,
            graded_on: None,
        };

        let err = import_grade_csv(
            storage.as_ref(),
            42,
            &params,
            "student_id,obtained_marks\nS1,5\n",
            &ImportConfig::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, ImportError::CourseNotFound(42)));
    }
}
