use tracing::warn;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::AppStartTime;
use crate::runtime::AppContext;

/// 准备服务器启动的上下文
/// 连接存储并执行迁移，然后组装 AppContext
pub async fn prepare_server_startup(
    config: AppConfig,
    started_at: AppStartTime,
) -> Result<AppContext> {
    let storage = crate::storage::create_storage(&config).await?;
    warn!("Storage backend initialized and migrations completed");

    Ok(AppContext::new(config, storage, started_at))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_startup_with_in_memory_database() {
        let mut config = AppConfig::load().unwrap();
        config.database.url = ":memory:".to_string();
        config.database.pool_size = 1;

        let ctx = prepare_server_startup(
            config,
            AppStartTime {
                start_datetime: chrono::Utc::now(),
            },
        )
        .await
        .unwrap();

        assert!(ctx.storage.list_all_students().await.unwrap().is_empty());
        assert!(ctx.uptime_seconds() >= 0);
    }
}
