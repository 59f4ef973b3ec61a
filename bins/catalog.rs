use std::collections::BTreeMap;
use std::process::ExitCode;

use configs::{AppConfig, LogFormat};
use dotenvy::dotenv;
use models::Category;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => common::utils::logging::init_logging_default(),
        LogFormat::Json => common::utils::logging::init_logging_json(),
    }
    info!(service = "catalog", event = "logger_init", ?format, "tracing subscriber initialized");
}

/// Dump the activated catalogs as JSON on stdout. An optional category
/// argument narrows the dump to that catalog.
fn main() -> ExitCode {
    // 提前加载 .env，使得 RUST_LOG / CONFIG_PATH 等环境变量生效
    dotenv().ok();

    let cfg = match AppConfig::load_and_validate() {
        Ok(cfg) => {
            init_logging(cfg.logging.format);
            cfg
        }
        Err(e) => {
            init_logging(LogFormat::Compact);
            error!(service = "catalog", event = "config_invalid", error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    let only: Option<Category> = match std::env::args().nth(1).map(|arg| arg.parse::<Category>()) {
        None => None,
        Some(Ok(category)) => Some(category),
        Some(Err(e)) => {
            error!(service = "catalog", event = "bad_argument", error = %e, "expected one of sake|wine|beer|cocktail");
            return ExitCode::FAILURE;
        }
    };

    let session_id = Uuid::new_v4();
    info!(service = "catalog", event = "start", %session_id, version = env!("CARGO_PKG_VERSION"), "catalog session starting");

    // 单线程运行时：与移动端单一 UI 线程的模型一致
    let rt = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "catalog", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return ExitCode::FAILURE;
        }
    };

    rt.block_on(async move {
        let (registry, _report) = match service::runtime::bootstrap(&cfg).await {
            Ok(ready) => ready,
            Err(e) => {
                error!(service = "catalog", event = "bootstrap_failed", error = %e, "could not open catalogs");
                return ExitCode::FAILURE;
            }
        };

        let mut dump = BTreeMap::new();
        for (category, store) in registry.iter() {
            if only.map_or(true, |c| c == category) {
                dump.insert(category.as_str(), serde_json::to_value(&*store.current_list()).unwrap_or_default());
            }
        }
        if only.is_none() {
            dump.insert("recipes", serde_json::to_value(&*registry.recipes().current_list()).unwrap_or_default());
        }

        match serde_json::to_string_pretty(&dump) {
            Ok(out) => {
                println!("{out}");
                info!(service = "catalog", event = "stop", %session_id, "catalog session finished");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "catalog", event = "dump_failed", error = %e, "failed to render catalogs");
                ExitCode::FAILURE
            }
        }
    })
}
