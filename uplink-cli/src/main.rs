//! 代理上行通道命令行客户端
//!
//! 用法：`uplink-cli <token> <command> [args...]`
//! - `send [file]` 上传文件内容（省略或 `-` 时读取标准输入）
//! - `db-list` 打印本会话可用的数据库清单（JSON）

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use common::config::AppConfig;
use tokio::io::AsyncReadExt;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uplink_client::Session;

const SERVICE_NAME: &str = "uplink-cli";

/// The process argument surface: argv[1] is the token consumed by the
/// handshake; everything after it is captured verbatim.
#[derive(Debug)]
struct Invocation {
    token: String,
    args: Vec<String>,
}

impl Invocation {
    fn from_args(mut argv: impl Iterator<Item = String>) -> Result<Self> {
        let _program = argv.next();
        let token = argv
            .next()
            .context("usage: uplink-cli <token> <command> [args...]")?;
        Ok(Self {
            token,
            args: argv.collect(),
        })
    }

    /// Arguments after the token, uninterpreted by the session layer.
    fn passthrough_args(&self) -> &[String] {
        &self.args
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // 初始化日志追踪
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(service = SERVICE_NAME, error = %err, "command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let invocation = Invocation::from_args(std::env::args())?;

    // 加载配置
    let config = AppConfig::load();

    // 建立会话；握手被拒绝时由这里结束进程，而不是在库里
    let mut session = Session::connect(&config, &invocation.token)
        .await
        .context("failed to establish agent session")?;

    match invocation.passthrough_args().split_first() {
        Some((cmd, rest)) if cmd == "send" => {
            let payload = read_payload(rest.first().map(String::as_str)).await?;
            session.send(&payload).await?;
            info!(bytes = payload.len(), "payload accepted by agent");
        }
        Some((cmd, rest)) if cmd == "db-list" => {
            if !rest.is_empty() {
                bail!("db-list takes no arguments");
            }
            let descriptors = session.list_databases().await?;
            println!("{}", serde_json::to_string_pretty(&descriptors)?);
        }
        Some((cmd, _)) => bail!("unknown command: {cmd}"),
        None => bail!("missing command (send | db-list)"),
    }
    Ok(())
}

/// Reads the upload payload from a file, or from stdin for `-`/absent.
async fn read_payload(source: Option<&str>) -> Result<Vec<u8>> {
    match source {
        Some(path) if path != "-" => tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {path}")),
        _ => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
