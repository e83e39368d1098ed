use tracing_subscriber::EnvFilter;

/// 安装 tracing 订阅者，输出到 stderr，stdout 只留给问候内容。
///
/// `RUST_LOG` 优先，否则使用 `default_level`。宿主已安装订阅者时返回 `false`。
pub fn init(default_level: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
