use crate::clients::QuizClient;
use crate::config::Config;
use crate::loader::QuizLoader;
use crate::models::label_for_position;
use crate::session::{ChoiceMark, QuizSession, SessionState};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{error, info, warn};

/// 应用主结构
///
/// 持有一份已加载测验的答题会话，驱动终端交互循环
pub struct App {
    quiz_id: String,
    session: QuizSession,
}

impl App {
    /// 初始化应用：加载配置指定的测验并建立会话
    ///
    /// # 返回
    /// 获取失败时记录原因并返回 Ok(None)，不让错误中断程序；
    /// 成功时返回可运行的 App
    pub async fn initialize(config: Config) -> Result<Option<Self>> {
        log_startup(&config);

        let quiz_id = config.quiz_id.clone();
        if quiz_id.is_empty() {
            warn!("⚠️ 未指定测验ID（设置 QUIZ_ID 环境变量或命令行参数），程序结束");
            return Ok(None);
        }

        let loader = QuizLoader::new(QuizClient::new(&config));

        let quiz = match loader.load(&quiz_id).await {
            Ok(Some(quiz)) => quiz,
            Ok(None) => {
                // 单次加载不会被取代，但按约定过期结果一律丢弃
                warn!("⚠️ 测验 {} 的加载结果已过期", quiz_id);
                return Ok(None);
            }
            Err(e) => {
                error!("❌ 测验 {} 获取失败: {}", quiz_id, e);
                return Ok(None);
            }
        };

        if quiz.is_empty() {
            warn!("⚠️ 测验 {} 没有题目，程序结束", quiz_id);
            return Ok(None);
        }

        Ok(Some(Self {
            quiz_id,
            session: QuizSession::new(quiz),
        }))
    }

    /// 运行交互循环
    ///
    /// 命令格式：
    /// - `<题号> <标签>` 选择答案（题号从 1 开始），如 `1 b`
    /// - `submit` 提交判分
    /// - `quit` 退出
    pub fn run(&mut self) -> Result<()> {
        self.print_quiz();

        let stdin = io::stdin();
        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                // EOF
                break;
            }

            match self.handle_command(line.trim()) {
                Command::Continue => {}
                Command::Quit => break,
            }
        }

        Ok(())
    }

    /// 处理一条输入命令
    fn handle_command(&mut self, line: &str) -> Command {
        match line {
            "" => Command::Continue,
            "quit" | "q" | "exit" => Command::Quit,
            "submit" => {
                self.submit();
                Command::Continue
            }
            _ => {
                self.try_select(line);
                Command::Continue
            }
        }
    }

    /// 解析并执行一次选择
    fn try_select(&mut self, line: &str) {
        let mut parts = line.split_whitespace();
        let number = parts.next().and_then(|s| s.parse::<usize>().ok());
        let label = parts.next().and_then(|s| {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        });

        let (Some(number), Some(label)) = (number, label) else {
            warn!("无法识别的命令: {} （格式：`题号 标签`、`submit` 或 `quit`）", line);
            return;
        };

        if number == 0 {
            warn!("题号从 1 开始");
            return;
        }

        // 界面题号从 1 开始，内部索引从 0 开始
        match self.session.select(number - 1, label) {
            Ok(()) => {
                info!("✓ 第 {} 题已选择 {}", number, label);
            }
            Err(e) => {
                warn!("⚠️ 选择被拒绝: {}", e);
            }
        }
    }

    /// 提交判分并展示结果
    ///
    /// 重复提交不会重新计分，只会再次展示同一份报告
    fn submit(&mut self) {
        let already_graded = self.session.state() == SessionState::Graded;
        let score = self.session.grade().score;

        if already_graded {
            info!("会话已判分，分数不变");
        }

        self.print_results();
        log_final_score(&self.quiz_id, score, self.session.quiz().question_count());
    }

    // ========== 展示辅助函数 ==========

    /// 打印全部题目与选项
    fn print_quiz(&self) {
        println!();
        for (index, question) in self.session.quiz().mcqs.iter().enumerate() {
            println!("{}. {}", index + 1, question.statement);
            for (position, choice) in question.choices.iter().enumerate() {
                if let Some(label) = label_for_position(position) {
                    println!("   {}. {}", label, choice);
                }
            }
            println!();
        }
        println!("输入 `题号 标签` 作答，`submit` 提交，`quit` 退出");
    }

    /// 打印判分结果，逐选项标注中性 / 正确 / 选错
    fn print_results(&self) {
        let Some(report) = self.session.report() else {
            return;
        };

        println!();
        for (index, (question, result)) in self
            .session
            .quiz()
            .mcqs
            .iter()
            .zip(&report.questions)
            .enumerate()
        {
            let verdict = if result.correct { "✓" } else { "✗" };
            println!("{}. {} {}", index + 1, question.statement, verdict);

            for (position, choice) in question.choices.iter().enumerate() {
                let Some(label) = label_for_position(position) else {
                    continue;
                };
                let mark = match result.marks[position] {
                    ChoiceMark::Correct => "✓",
                    ChoiceMark::SelectedWrong => "✗",
                    ChoiceMark::Neutral => " ",
                };
                let selected = if self.session.is_selected(index, label) {
                    "→"
                } else {
                    " "
                };
                println!(" {}{} {}. {}", selected, mark, label, choice);
            }
            println!();
        }
        println!("得分: {} / {}", report.score, report.total);
    }
}

/// 命令处理结果
enum Command {
    Continue,
    Quit,
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 测验答题模式");
    info!("📡 API 地址: {}", config.quiz_api_base_url);
    info!("{}", "=".repeat(60));
}

fn log_final_score(quiz_id: &str, score: usize, total: usize) {
    info!("{}", "─".repeat(60));
    info!("📊 测验 {} 判分完成: {}/{}", quiz_id, score, total);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "─".repeat(60));
}
