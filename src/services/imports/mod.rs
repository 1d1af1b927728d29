//! CSV 批量导入：解析 → 校验 → 逐行提交

pub mod orchestrator;
pub mod parser;
pub mod template;
pub mod upload;
pub mod validator;

use actix_multipart::Multipart;
use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::imports::requests::GradeImportParams;
use crate::runtime::AppContext;

pub struct ImportService;

impl ImportService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 导入学生 / 教师 / 课程
    pub async fn import_entity(
        &self,
        ctx: &AppContext,
        entity_type: &str,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        upload::import_entity(self, ctx, entity_type, payload).await
    }

    // 按课程导入成绩
    pub async fn import_grades(
        &self,
        ctx: &AppContext,
        course_id: i64,
        params: GradeImportParams,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        upload::import_grades(self, ctx, course_id, params, payload).await
    }

    // 下载导入模板
    pub async fn download_template(&self, entity_type: &str) -> ActixResult<HttpResponse> {
        upload::download_template(self, entity_type).await
    }
}
