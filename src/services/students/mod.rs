pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::students::requests::{
    CreateStudentRequest, StudentListParams, UpdateStudentRequest,
};
use crate::runtime::AppContext;

pub struct StudentService;

impl StudentService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 获取学生列表
    pub async fn list_students(
        &self,
        ctx: &AppContext,
        query: StudentListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_students(self, ctx, query).await
    }

    // 创建学生
    pub async fn create_student(
        &self,
        ctx: &AppContext,
        student_data: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_student(self, ctx, student_data).await
    }

    // 根据ID获取学生
    pub async fn get_student(&self, ctx: &AppContext, id: i64) -> ActixResult<HttpResponse> {
        get::get_student(self, ctx, id).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        ctx: &AppContext,
        id: i64,
        update_data: UpdateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_student(self, ctx, id, update_data).await
    }

    // 删除学生
    pub async fn delete_student(&self, ctx: &AppContext, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_student(self, ctx, id).await
    }
}
