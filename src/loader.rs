//! 测验加载模块
//!
//! 负责按ID取回测验，并做过期响应防护：
//! 如果在一次请求还在途中时又发起了新的加载，
//! 先前那次的结果到达后必须被丢弃，不能覆盖更新的测验。

use crate::clients::QuizClient;
use crate::error::AppResult;
use crate::models::Quiz;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info, warn};

/// 加载凭据
///
/// 每次 `begin` 发出一张新凭据，同时让之前所有凭据作废。
/// 持有凭据的一方在应用结果前必须确认凭据仍然有效。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

/// 加载代数追踪器
///
/// 只记录最近一次加载请求的代数，不做真正的取消：
/// 在途请求继续执行，只是结果到达时被判定为过期
#[derive(Debug, Default)]
pub struct LoadTracker {
    generation: AtomicU64,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 登记一次新的加载请求
    ///
    /// # 返回
    /// 返回本次请求的凭据；此前发出的所有凭据随即失效
    pub fn begin(&self) -> LoadTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        LoadTicket { generation }
    }

    /// 判断凭据是否仍对应最近一次加载
    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.generation
    }
}

/// 测验加载器
///
/// 组合 API 客户端与代数追踪器，调用方拿到的结果有三种：
/// - `Ok(Some(quiz))`: 获取成功且仍是最新请求
/// - `Ok(None)`: 获取完成但已被更新的请求取代，结果必须丢弃
/// - `Err(_)`: 获取失败，调用方记录日志并保持测验为空即可
pub struct QuizLoader {
    client: QuizClient,
    tracker: LoadTracker,
}

impl QuizLoader {
    pub fn new(client: QuizClient) -> Self {
        Self {
            client,
            tracker: LoadTracker::new(),
        }
    }

    /// 加载指定ID的测验
    ///
    /// # 参数
    /// - `quiz_id`: 测验ID
    pub async fn load(&self, quiz_id: &str) -> AppResult<Option<Quiz>> {
        let ticket = self.tracker.begin();

        debug!("开始加载测验: {}", quiz_id);

        let result = self.client.fetch_quiz(quiz_id).await;

        if !self.tracker.is_current(&ticket) {
            // 已有更新的加载请求，本次结果作废
            warn!("测验 {} 的响应已过期，丢弃", quiz_id);
            return Ok(None);
        }

        let quiz = result?;
        info!("✓ 测验 {} 加载完成，共 {} 道题", quiz_id, quiz.question_count());
        Ok(Some(quiz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_valid_until_next_begin() {
        let tracker = LoadTracker::new();

        let first = tracker.begin();
        assert!(tracker.is_current(&first));

        let second = tracker.begin();
        assert!(!tracker.is_current(&first));
        assert!(tracker.is_current(&second));
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let tracker = LoadTracker::new();

        let tickets: Vec<_> = (0..5).map(|_| tracker.begin()).collect();

        for stale in &tickets[..4] {
            assert!(!tracker.is_current(stale));
        }
        assert!(tracker.is_current(&tickets[4]));
    }
}
