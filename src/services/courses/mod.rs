pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::config::ImportConfig;
use crate::models::courses::entities::{SEMESTER_MAX, SEMESTER_MIN};
use crate::models::courses::requests::{CourseListParams, CreateCourseRequest, UpdateCourseRequest};
use crate::runtime::AppContext;
use crate::storage::Storage;
use crate::utils::validate::validate_int_range;

pub struct CourseService;

impl CourseService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn list_courses(
        &self,
        ctx: &AppContext,
        query: CourseListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_courses(self, ctx, query).await
    }

    pub async fn create_course(
        &self,
        ctx: &AppContext,
        course_data: CreateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, ctx, course_data).await
    }

    pub async fn update_course(
        &self,
        ctx: &AppContext,
        id: i64,
        update_data: UpdateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_course(self, ctx, id, update_data).await
    }

    pub async fn delete_course(&self, ctx: &AppContext, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_course(self, ctx, id).await
    }
}

/// 学分与学期范围检查，导入与表单使用同一组学分上下限
pub(crate) fn check_course_numbers(
    credits: Option<i32>,
    semester: Option<i32>,
    config: &ImportConfig,
) -> Result<(), String> {
    if let Some(credits) = credits {
        validate_int_range(credits, config.course_credit_min, config.course_credit_max)
            .map_err(|msg| format!("credits: {msg}"))?;
    }
    if let Some(semester) = semester {
        validate_int_range(semester, SEMESTER_MIN, SEMESTER_MAX)
            .map_err(|msg| format!("semester: {msg}"))?;
    }
    Ok(())
}

/// 授课教师必须存在
pub(crate) async fn check_faculty_ref(
    storage: &dyn Storage,
    faculty_id: Option<i64>,
) -> Result<(), String> {
    let Some(faculty_id) = faculty_id else {
        return Ok(());
    };
    match storage.get_faculty_by_id(faculty_id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(format!("Faculty member {faculty_id} not found")),
        Err(e) => Err(format!("Failed to check faculty member: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::faculty::requests::CreateFacultyRequest;
    use crate::storage::sea_orm_storage::memory_storage;

    #[test]
    fn test_credit_range_shared_with_import() {
        let config = ImportConfig::default();

        assert!(check_course_numbers(Some(1), Some(1), &config).is_ok());
        assert!(check_course_numbers(Some(10), Some(8), &config).is_ok());
        assert!(check_course_numbers(None, None, &config).is_ok());

        let err = check_course_numbers(Some(11), None, &config).unwrap_err();
        assert!(err.starts_with("credits"));
        let err = check_course_numbers(Some(3), Some(9), &config).unwrap_err();
        assert!(err.starts_with("semester"));
    }

    #[tokio::test]
    async fn test_faculty_reference_must_exist() {
        let storage = memory_storage().await;
        assert!(check_faculty_ref(storage.as_ref(), None).await.is_ok());
        assert!(check_faculty_ref(storage.as_ref(), Some(42)).await.is_err());

        let faculty = storage
            .create_faculty(CreateFacultyRequest {
                full_name: "Alan Smith".into(),
                email: "alan@example.edu".into(),
                faculty_id: "F1".into(),
                department: "Computer Science".into(),
                qualification: None,
                status: None,
            })
            .await
            .unwrap();
        assert!(check_faculty_ref(storage.as_ref(), Some(faculty.id)).await.is_ok());
    }
}
