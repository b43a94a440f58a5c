/// 测验 API 客户端
///
/// 封装所有与测验 API 相关的调用逻辑
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::Quiz;
use tracing::debug;

/// 测验 API 客户端
pub struct QuizClient {
    base_url: String,
    http: reqwest::Client,
}

impl QuizClient {
    /// 创建新的测验客户端
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.quiz_api_base_url.clone(),
            http: reqwest::Client::new(),
        }
    }

    /// 直接指定基础地址创建客户端（测试用）
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
        }
    }

    /// 按ID获取测验文档
    ///
    /// 只发起一次请求：不重试、不缓存、不设超时。
    /// ID 是不透明字符串，格式校验是服务端的责任。
    ///
    /// # 参数
    /// - `quiz_id`: 测验ID
    ///
    /// # 返回
    /// 解析好的 Quiz；非成功状态码或响应体无法解析时返回错误
    pub async fn fetch_quiz(&self, quiz_id: &str) -> AppResult<Quiz> {
        let endpoint = format!("{}/api/quiz/{}", self.base_url, quiz_id);

        debug!("请求测验: {}", endpoint);

        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint.clone(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::api_bad_status(endpoint, status.as_u16()));
        }

        let quiz: Quiz = response
            .json()
            .await
            .map_err(AppError::json_parse_failed)?;

        debug!("测验获取成功，共 {} 道题", quiz.question_count());

        Ok(quiz)
    }
}
