use std::{io, process, sync::OnceLock};

use application::{quote, Args, Config, Request, Service};
use service::infra::Memory;
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() {
    // Standard output is reserved for the `Summary`.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || LOG_LEVEL.get().copied().unwrap_or(log::Level::INFO)
                            >= *meta.level()
                })),
        )
        .init();

    if start().is_err() {
        process::exit(1);
    }
}

fn start() -> Result<(), ()> {
    let Args { config, request } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config { service, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let request = Request::load(&request).map_err(|e| {
        log::error!("failed to load `Request` from `{request}`: {e}");
    })?;

    let service = Service::new(service.into(), Memory::new());

    let summary = quote(&service, &request).map_err(|e| {
        log::error!("failed to quote `Request`: {e}");
    })?;
    log::info!(
        lines = summary.lines.len(),
        skipped = summary.skipped.len(),
        "quoted `Request`",
    );

    let json = serde_json::to_string_pretty(&summary).map_err(|e| {
        log::error!("failed to serialize `Summary`: {e}");
    })?;
    println!("{json}");
    Ok(())
}
