pub mod health;
pub mod settings;

use actix_web::{HttpResponse, Result as ActixResult};

use crate::runtime::AppContext;

pub struct SystemService;

impl SystemService {
    pub fn new_lazy() -> Self {
        Self
    }

    // 健康检查
    pub async fn health(&self, ctx: &AppContext) -> ActixResult<HttpResponse> {
        health::health(self, ctx).await
    }

    // 导入与报表相关设置
    pub async fn get_settings(&self, ctx: &AppContext) -> ActixResult<HttpResponse> {
        settings::get_settings(self, ctx).await
    }
}
