use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

use configs::{AppConfig, LogFormat};

fn init_logging(format: LogFormat) {
    // Load .env first so RUST_LOG takes effect
    dotenv().ok();
    match format {
        LogFormat::Json => common::utils::logging::init_logging_json(),
        LogFormat::Compact => common::utils::logging::init_logging_default(),
    }
    info!(service = "reviews", event = "logger_init", "tracing subscriber initialized");
}

fn load_config() -> (AppConfig, Option<anyhow::Error>) {
    match AppConfig::load_and_validate() {
        Ok(cfg) => (cfg, None),
        Err(e) => {
            let mut cfg = AppConfig::default();
            cfg.storage.normalize_from_env();
            (cfg, Some(e))
        }
    }
}

fn main() -> std::process::ExitCode {
    let (cfg, config_error) = load_config();
    init_logging(cfg.logging.format);
    if let Some(e) = config_error {
        warn!(service = "reviews", event = "config_fallback", error = %e, "using default configuration");
    }

    let run_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(service = "reviews", event = "panic", %run_id, pid, message = %info, "unhandled panic occurred");
    }));

    info!(service = "reviews", event = "start", %run_id, pid, version, backend = ?cfg.storage.backend, "starting");

    let reviews = match service::runtime::review_service(&cfg.storage) {
        Ok(svc) => svc,
        Err(e) => {
            error!(service = "reviews", event = "bootstrap_failed", error = %e, "cannot build review service");
            return std::process::ExitCode::FAILURE;
        }
    };

    match reviews.get_all() {
        Ok(all) => {
            let approved = all.iter().filter(|r| r.approved).count();
            info!(service = "reviews", event = "inventory", total = all.len(), approved, "reviews loaded");
            for r in &all {
                info!(id = ?r.id, pos_id = r.pos_id, author_id = r.author_id, approved = r.approved, "review");
            }
            info!(service = "reviews", event = "stop", %run_id, "done");
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            error!(service = "reviews", event = "list_failed", error = %e, code = e.code(), "cannot list reviews");
            std::process::ExitCode::FAILURE
        }
    }
}
