pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::enrollments::requests::{
    CreateEnrollmentRequest, EnrollmentListQuery, UpdateEnrollmentRequest,
};
use crate::runtime::AppContext;

pub struct EnrollmentService;

impl EnrollmentService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn list_enrollments(
        &self,
        ctx: &AppContext,
        query: EnrollmentListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_enrollments(self, ctx, query).await
    }

    pub async fn create_enrollment(
        &self,
        ctx: &AppContext,
        enrollment_data: CreateEnrollmentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_enrollment(self, ctx, enrollment_data).await
    }

    // 退课 / 重新选课
    pub async fn update_enrollment(
        &self,
        ctx: &AppContext,
        id: i64,
        update_data: UpdateEnrollmentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_enrollment(self, ctx, id, update_data).await
    }

    pub async fn delete_enrollment(&self, ctx: &AppContext, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_enrollment(self, ctx, id).await
    }
}
