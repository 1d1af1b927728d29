use config::{Config, ConfigError, Environment, File};

use super::{AppConfig, ImportConfig};

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证空环境也能启动
            .set_default("app.system_name", "Institute Portal")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("server.unix_socket_path", "")?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 16)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 75)?
            .set_default("server.limits.max_payload_size", 10 * 1024 * 1024)?
            .set_default("database.url", "portal.db")?
            .set_default("database.pool_size", 8)?
            .set_default("database.timeout", 30)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .set_default("cors.max_age", 3600)?
            .set_default("import.max_rows", 1000)?
            .set_default("import.max_file_size", 5 * 1024 * 1024)?
            .set_default("import.course_credit_min", 1)?
            .set_default("import.course_credit_max", 10)?
            .set_default("report.unparseable_dates", "include")?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("PORTAL")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从常用环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        app_config.import.check()?;

        Ok(app_config)
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

impl ImportConfig {
    /// 学分区间必须非空且为正
    fn check(&self) -> Result<(), ConfigError> {
        if self.course_credit_min < 1 || self.course_credit_min > self.course_credit_max {
            return Err(ConfigError::Message(format!(
                "invalid course credit range [{}, {}]",
                self.course_credit_min, self.course_credit_max
            )));
        }
        if self.max_rows == 0 {
            return Err(ConfigError::Message(
                "import.max_rows must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_rows: 1000,
            max_file_size: 5 * 1024 * 1024,
            course_credit_min: 1,
            course_credit_max: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import_config_is_valid() {
        let config = ImportConfig::default();
        assert!(config.check().is_ok());
        assert_eq!(config.course_credit_min, 1);
        assert_eq!(config.course_credit_max, 10);
    }

    #[test]
    fn test_inverted_credit_range_rejected() {
        let config = ImportConfig {
            course_credit_min: 6,
            course_credit_max: 1,
            ..ImportConfig::default()
        };
        assert!(config.check().is_err());
    }

    #[test]
    fn test_zero_max_rows_rejected() {
        let config = ImportConfig {
            max_rows: 0,
            ..ImportConfig::default()
        };
        assert!(config.check().is_err());
    }
}
