pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::models::faculty::requests::{
    CreateFacultyRequest, FacultyListParams, UpdateFacultyRequest,
};
use crate::runtime::AppContext;

pub struct FacultyService;

impl FacultyService {
    pub fn new_lazy() -> Self {
        Self
    }

    pub async fn list_faculty(
        &self,
        ctx: &AppContext,
        query: FacultyListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_faculty(self, ctx, query).await
    }

    pub async fn create_faculty(
        &self,
        ctx: &AppContext,
        faculty_data: CreateFacultyRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_faculty(self, ctx, faculty_data).await
    }

    pub async fn update_faculty(
        &self,
        ctx: &AppContext,
        id: i64,
        update_data: UpdateFacultyRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_faculty(self, ctx, id, update_data).await
    }

    pub async fn delete_faculty(&self, ctx: &AppContext, id: i64) -> ActixResult<HttpResponse> {
        delete::delete_faculty(self, ctx, id).await
    }
}
