//! 应用上下文：启动时构造，经 `web::Data` 注入各处理函数

use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::AppStartTime;
use crate::storage::Storage;

#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub storage: Arc<dyn Storage>,
    pub started_at: AppStartTime,
}

impl AppContext {
    pub fn new(config: AppConfig, storage: Arc<dyn Storage>, started_at: AppStartTime) -> Self {
        Self {
            config: Arc::new(config),
            storage,
            started_at,
        }
    }

    /// 运行时长（秒）
    pub fn uptime_seconds(&self) -> i64 {
        chrono::Utc::now()
            .signed_duration_since(self.started_at.start_datetime)
            .num_seconds()
    }
}
