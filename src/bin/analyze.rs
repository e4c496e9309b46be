//! 命令行展示端
//!
//! 运行方式：
//! ```bash
//! analyze "I hate you, you are worthless"
//! echo "Have a nice day" | analyze --server http://localhost:3001
//! ```

use std::io::Read;
use std::process::ExitCode;

use clap::Parser;
use cyberbully_analysis::presentation::render::LOADING_MESSAGE;
use cyberbully_analysis::presentation::{render_error, render_response, AnalyzeClient};
use cyberbully_analysis::utils::logging;

#[derive(Parser, Debug)]
#[command(name = "analyze", about = "Cyberbullying analysis tool")]
struct Args {
    /// 待分析文本，省略时从标准输入读取
    text: Option<String>,

    /// 分析服务地址
    #[arg(long, env = "ANALYZE_SERVER_URL", default_value = "http://localhost:3001")]
    server: String,

    /// 请求超时（秒）
    #[arg(long, default_value_t = 60)]
    timeout: u64,

    /// 输出详细日志
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
                eprintln!("Analysis failed: {}", e);
                return ExitCode::FAILURE;
            }
            buffer
        }
    };

    let client = match AnalyzeClient::new(&args.server, args.timeout) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", render_error(&e));
            return ExitCode::FAILURE;
        }
    };

    if !text.trim().is_empty() {
        eprintln!("{}", LOADING_MESSAGE);
    }

    match client.submit(&text).await {
        Ok(response) => {
            print!("{}", render_response(&response));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", render_error(&e));
            ExitCode::FAILURE
        }
    }
}
