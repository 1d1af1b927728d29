use actix_web::{HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::attendance::requests::{AttendanceListQuery, CreateAttendanceRequest};
use crate::runtime::AppContext;
use crate::services::AttendanceService;

static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn list_attendance(
    ctx: web::Data<AppContext>,
    query: web::Query<AttendanceListQuery>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .list_attendance(&ctx, query.into_inner())
        .await
}

pub async fn create_attendance(
    ctx: web::Data<AppContext>,
    attendance_data: web::Json<CreateAttendanceRequest>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .create_attendance(&ctx, attendance_data.into_inner())
        .await
}

pub async fn delete_attendance(
    ctx: web::Data<AppContext>,
    id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .delete_attendance(&ctx, id.into_inner())
        .await
}

pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .route("", web::get().to(list_attendance))
            .route("", web::post().to(create_attendance))
            .route("/{id}", web::delete().to(delete_attendance)),
    );
}
