/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 测验 API 基础地址
    pub quiz_api_base_url: String,
    /// 要加载的测验ID
    pub quiz_id: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiz_api_base_url: "http://127.0.0.1:8000".to_string(),
            quiz_id: String::new(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            quiz_api_base_url: std::env::var("QUIZ_API_BASE_URL")
                .unwrap_or(default.quiz_api_base_url),
            quiz_id: std::env::var("QUIZ_ID").unwrap_or(default.quiz_id),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
        }
    }
}
