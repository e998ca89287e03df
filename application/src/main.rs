use std::{io, process::ExitCode, sync::OnceLock};

use application::{AsError as _, Args, Config, Error, Report, Service};
use common::Date;
use service::{infra::Json, query, Query as _};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::WARN)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::WARN)
                                >= *meta.level()
                })),
        )
        .init();

    match start().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

async fn start() -> Result<(), ()> {
    let args = Args::parse().map_err(|e| {
        if e.use_stderr() {
            log::error!("failed to parse command line arguments: {e}");
        } else {
            _ = e.print();
        }
    })?;

    let Config {
        data,
        service,
        rates,
        log,
    } = Config::new(&args.config).map_err(|e| {
        log::error!("failed to load `Config`: {}", e.into_error());
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let member_id = args.member_id(data.member.as_deref()).map_err(|e| {
        log::error!("{}", Error::from(e));
    })?;
    let target = args.target().map_err(|e| {
        log::error!("{}", Error::from(e));
    })?;

    let database = Json::open(&data.path).map_err(|e| {
        log::error!("{}", e.into_error());
    })?;
    let service = Service::new(service.into(), database);

    let salary = service
        .execute(query::report::Salary {
            member_id: member_id.clone(),
            target,
            today: Date::today(),
            fallback_rates: rates.fallback(),
        })
        .await
        .map_err(|e| {
            log::error!("failed to calculate salary: {}", e.into_error());
        })?;

    println!(
        "{}",
        Report {
            member_id: &member_id,
            salary: &salary,
        },
    );

    Ok(())
}
