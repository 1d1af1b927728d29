//! 外键存在性检查：选课、考勤、成绩写入前确认学生与课程存在

use actix_web::HttpResponse;

use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

pub(crate) async fn check_student_and_course(
    storage: &dyn Storage,
    student_id: i64,
    course_id: i64,
) -> Result<(), HttpResponse> {
    match storage.get_student_by_id(student_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                format!("Student {student_id} not found"),
            )));
        }
        Err(e) => return Err(lookup_failed(e)),
    }

    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            format!("Course {course_id} not found"),
        ))),
        Err(e) => Err(lookup_failed(e)),
    }
}

fn lookup_failed(e: crate::errors::PortalError) -> HttpResponse {
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        format!("Failed to check references: {e}"),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::requests::CreateCourseRequest;
    use crate::models::students::requests::CreateStudentRequest;
    use crate::storage::sea_orm_storage::memory_storage;

    #[tokio::test]
    async fn test_missing_parent_rejected() {
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

        let missing_course = check_student_and_course(storage.as_ref(), student.id, 99).await;
        assert_eq!(
            missing_course.unwrap_err().status(),
            actix_web::http::StatusCode::NOT_FOUND
        );

        let course = storage
            .create_course(CreateCourseRequest {
                course_code: "CS101".into(),
                course_name: "Intro".into(),
                credits: 3,
                department: "Computer Science".into(),
                semester: 1,
                faculty_id: None,
                status: None,
            })
            .await
            .unwrap();

        assert!(check_student_and_course(storage.as_ref(), student.id, course.id).await.is_ok());
        assert!(check_student_and_course(storage.as_ref(), 99, course.id).await.is_err());
    }
}
