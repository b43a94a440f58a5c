//! 端到端测试：本地起一个 axum 服务模拟测验后端，
//! 覆盖获取成功、错误状态、坏响应体、过期响应丢弃四条路径

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tokio_test::assert_ok;

use quiz_taker::clients::QuizClient;
use quiz_taker::error::{ApiError, AppError};
use quiz_taker::loader::QuizLoader;
use quiz_taker::session::QuizSession;

/// 模拟测验后端
///
/// - `math-1`: 正常返回一道题的测验
/// - `slow-math`: 延迟 300ms 后返回（用于过期响应测试）
/// - `broken`: 返回无法解析为测验的响应体
/// - 其他ID: 404
async fn serve_quiz(Path(id): Path<String>) -> impl IntoResponse {
    match id.as_str() {
        "math-1" => Json(json!({
            "mcqs": [
                { "statement": "2+2?", "choices": ["3", "4", "5"], "answer": "b" },
                { "statement": "3*3?", "choices": ["6", "9"], "answer": "b" }
            ]
        }))
        .into_response(),
        "slow-math" => {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Json(json!({
                "mcqs": [
                    { "statement": "慢测验", "choices": ["甲", "乙"], "answer": "a" }
                ]
            }))
            .into_response()
        }
        "broken" => (StatusCode::OK, "这不是JSON").into_response(),
        _ => (StatusCode::NOT_FOUND, "quiz not found").into_response(),
    }
}

/// 在随机端口上启动模拟后端，返回基础地址
async fn spawn_server() -> String {
    let app = Router::new().route("/api/quiz/:id", get(serve_quiz));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_fetch_quiz_success() {
    let base_url = spawn_server().await;
    let client = QuizClient::with_base_url(base_url);

    let quiz = tokio_test::assert_ok!(client.fetch_quiz("math-1").await);

    assert_eq!(quiz.question_count(), 2);
    assert_eq!(quiz.question(0).unwrap().statement, "2+2?");
    assert_eq!(quiz.question(1).unwrap().answer_label(), Some('b'));
}

#[tokio::test]
async fn test_fetch_quiz_not_found() {
    let base_url = spawn_server().await;
    let client = QuizClient::with_base_url(base_url);

    // 非成功状态：返回错误而不是 panic，测验保持未加载
    let err = client.fetch_quiz("abc").await.unwrap_err();

    match err {
        AppError::Api(ApiError::BadStatus { status, .. }) => assert_eq!(status, 404),
        other => panic!("预期 BadStatus，得到: {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_quiz_malformed_body() {
    let base_url = spawn_server().await;
    let client = QuizClient::with_base_url(base_url);

    let err = client.fetch_quiz("broken").await.unwrap_err();

    assert!(matches!(
        err,
        AppError::Api(ApiError::JsonParseFailed { .. })
            | AppError::Api(ApiError::RequestFailed { .. })
    ));
}

#[tokio::test]
async fn test_loader_reports_failure_without_panic() {
    let base_url = spawn_server().await;
    let loader = QuizLoader::new(QuizClient::with_base_url(base_url));

    assert!(loader.load("abc").await.is_err());
}

#[tokio::test]
async fn test_stale_response_is_discarded() {
    // ID 先换成 slow-math 再换成 math-1：
    // 慢的那次响应后到，必须被丢弃，最终生效的是 math-1
    let base_url = spawn_server().await;
    let loader = Arc::new(QuizLoader::new(QuizClient::with_base_url(base_url)));

    let stale_loader = loader.clone();
    let stale = tokio::spawn(async move { stale_loader.load("slow-math").await });

    // 确保慢请求已经登记后再发起新的加载
    tokio::time::sleep(Duration::from_millis(50)).await;
    let fresh = loader.load("math-1").await.unwrap();

    let stale_result = stale.await.unwrap().unwrap();

    assert!(stale_result.is_none(), "过期响应应该被丢弃");
    let quiz = fresh.expect("最新一次加载应该生效");
    assert_eq!(quiz.question(0).unwrap().statement, "2+2?");
}

#[tokio::test]
async fn test_full_quiz_flow() {
    // 获取 → 建会话 → 作答 → 判分
    let base_url = spawn_server().await;
    let loader = QuizLoader::new(QuizClient::with_base_url(base_url));

    let quiz = loader.load("math-1").await.unwrap().unwrap();
    let mut session = QuizSession::new(quiz);

    session.select(0, 'b').unwrap();
    session.select(1, 'a').unwrap();
    session.select(1, 'b').unwrap();

    let report = session.grade();
    assert_eq!(report.score, 2);
    assert_eq!(report.total, 2);
}
