use std::cmp::Ordering;
use std::process::ExitCode;

use tool_dashboard::services::{version_catalog, ConfigService};
use tool_dashboard::utils::{logger, version};
use tool_dashboard::AppState;

const USAGE: &str = "用法:
  tool-dashboard-client compare <版本1> <版本2>
  tool-dashboard-client describe <版本>
  tool-dashboard-client latest <工具ID>";

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志系统
    if let Err(e) = logger::init() {
        eprintln!("日志系统初始化失败: {}", e);
        return ExitCode::FAILURE;
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "命令执行失败");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["compare", v1, v2] => {
            let symbol = match version::compare_versions(v1, v2)? {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            println!("{} {} {}", v1, symbol, v2);
        }
        ["describe", v] => println!("{}", version::get_version_description(v)),
        ["latest", tool_id] => {
            let tool_id: i64 = tool_id.parse()?;
            let state = AppState::headless(ConfigService::load()?)?;

            let tool = state.tool_api.detail(tool_id).await?;
            let files = state.file_api.by_tool(tool_id).await?;
            let latest = version_catalog::latest_version(&files, tool.current_version.as_deref());

            println!("{}: {}", tool.name, latest.as_deref().unwrap_or("-"));
        }
        _ => return Err(USAGE.into()),
    }
    Ok(())
}
