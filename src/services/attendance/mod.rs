pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::attendance::requests::{AttendanceListQuery, CreateAttendanceRequest};
use crate::runtime::AppContext;

pub struct AttendanceService;

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn list_attendance(
        &self,
        ctx: &AppContext,
        query: AttendanceListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_attendance(self, ctx, query).await
    }

    // 记录考勤
    pub async fn create_attendance(
        &self,
        ctx: &AppContext,
        attendance_data: CreateAttendanceRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_attendance(self, ctx, attendance_data).await
    }

    pub async fn delete_attendance(&self, ctx: &AppContext, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_attendance(self, ctx, id).await
    }
}
