use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 預設過濾：領域層只輸出拒絕建構的警告，設定層報告載入的行程。
/// verbose 時顯示每個航段的建構細節。
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "info,flight_booking=debug"
    } else {
        "flight_booking::domain=warn,flight_booking::config=info,flight_booking=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(verbose)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// JSON 日誌保留 target，讓 `flight_booking::domain::composite` 的拒絕紀錄
/// 可以和 `flight_booking::config` 的載入紀錄分開查詢。
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}
