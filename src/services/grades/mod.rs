pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::grades::requests::{CreateGradeRequest, GradeListQuery};
use crate::runtime::AppContext;

pub struct GradeService;

impl GradeService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn list_grades(
        &self,
        ctx: &AppContext,
        query: GradeListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, ctx, query).await
    }

    // 录入单条成绩
    pub async fn create_grade(
        &self,
        ctx: &AppContext,
        grade_data: CreateGradeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_grade(self, ctx, grade_data).await
    }

    pub async fn delete_grade(&self, ctx: &AppContext, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_grade(self, ctx, id).await
    }
}
