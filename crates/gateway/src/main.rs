use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{header, HeaderValue, Method};
use clap::Parser;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig as _;

use ta_domain::config::{Config, CorsConfig, LogFormat, ObservabilityConfig};
use ta_gateway::api;
use ta_gateway::bootstrap;
use ta_gateway::cli::{self, Cli, Command, ConfigCommand};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Command::Serve) => {
            let (config, _) = cli::load_config()?;
            let tracer_provider = init_tracing(&config.observability);
            run_server(Arc::new(config), tracer_provider).await
        }
        Some(Command::Chat { session, lang }) => {
            init_cli_tracing();
            let (config, _) = cli::load_config()?;
            cli::chat::chat(Arc::new(config), session, lang).await
        }
        Some(Command::Run { message, session, lang, json }) => {
            init_cli_tracing();
            let (config, _) = cli::load_config()?;
            cli::run::run(Arc::new(config), message, session, lang, json).await
        }
        Some(Command::Config(ConfigCommand::Validate)) => {
            let (config, config_path) = cli::load_config()?;
            if !cli::config::validate(&config, &config_path) {
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Command::Config(ConfigCommand::Show)) => {
            let (config, _) = cli::load_config()?;
            cli::config::show(&config)
        }
        Some(Command::Version) => {
            println!("travel-assistant {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Tracing for `serve`: JSON or pretty lines on stdout, plus an OTLP
/// exporter when `observability.otlp_endpoint` is set. The returned
/// provider must be shut down on exit to flush pending spans.
fn init_tracing(obs: &ObservabilityConfig) -> Option<opentelemetry_sdk::trace::SdkTracerProvider> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&obs.log_filter));
    let (json_layer, pretty_layer) = match obs.log_format {
        LogFormat::Json => (Some(tracing_subscriber::fmt::layer().json()), None),
        LogFormat::Pretty => (None, Some(tracing_subscriber::fmt::layer().pretty())),
    };
    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer);

    let Some(endpoint) = obs.otlp_endpoint.as_deref() else {
        registry.init();
        return None;
    };

    let exporter = match opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()
    {
        Ok(e) => e,
        Err(e) => {
            registry.init();
            tracing::warn!(endpoint, error = %e, "OTLP exporter unavailable, tracing locally only");
            return None;
        }
    };

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(obs.service_name.clone())
        .build();
    let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_sampler(opentelemetry_sdk::trace::Sampler::TraceIdRatioBased(obs.sample_rate))
        .with_resource(resource)
        .build();
    let otel_layer =
        tracing_opentelemetry::layer().with_tracer(tracer_provider.tracer("travel-assistant"));

    registry.with(otel_layer).init();

    Some(tracer_provider)
}

/// Compact stderr tracing at `warn` for terminal commands.
fn init_cli_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

async fn run_server(
    config: Arc<Config>,
    tracer_provider: Option<opentelemetry_sdk::trace::SdkTracerProvider>,
) -> anyhow::Result<()> {
    tracing::info!("travel assistant starting");

    let state = bootstrap::build_app_state(config.clone())?;
    bootstrap::spawn_background_tasks(&state);

    let cors_layer = build_cors_layer(&config.server.cors);
    let max_concurrent = config.server.max_concurrent_requests;
    tracing::info!(max_concurrent, "concurrency limit set");

    // ── Per-IP rate limiting ─────────────────────────────────────────
    let governor_layer = config
        .server
        .rate_limit
        .as_ref()
        .map(|rl| {
            use tower_governor::governor::GovernorConfigBuilder;
            use tower_governor::GovernorLayer;

            tracing::info!(
                requests_per_second = rl.requests_per_second,
                burst_size = rl.burst_size,
                "per-IP rate limiting enabled"
            );
            GovernorConfigBuilder::default()
                .per_second(rl.requests_per_second)
                .burst_size(rl.burst_size)
                .finish()
                .map(|gov| GovernorLayer {
                    config: Arc::new(gov),
                })
                .context("rate_limit: requests_per_second and burst_size must be > 0")
        })
        .transpose()?;

    let router = api::router(state.clone())
        .layer(cors_layer)
        .layer(tower::limit::ConcurrencyLimitLayer::new(max_concurrent));
    let app = match governor_layer {
        Some(gov) => router.layer(gov).with_state(state.clone()),
        None => router.with_state(state.clone()),
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding to {addr}"))?;
    tracing::info!(addr = %addr, "travel assistant listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("axum server error")?;

    tracing::info!(sessions = state.sessions.len(), "server stopped");
    if let Some(provider) = tracer_provider {
        if let Err(e) = provider.shutdown() {
            tracing::warn!(error = ?e, "OpenTelemetry tracer provider shutdown failed");
        }
    }
    Ok(())
}

/// Resolve on SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => tokio::select! {
                _ = ctrl_c => tracing::info!("received SIGINT, shutting down"),
                _ = sigterm.recv() => tracing::info!("received SIGTERM, shutting down"),
            },
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        let _ = ctrl_c.await;
        tracing::info!("received SIGINT, shutting down");
    }
}

/// CORS from `server.cors.allowed_origins`. Entries ending in `:*` match
/// any numeric port on that host; a lone `"*"` allows every origin.
fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    let methods = [Method::GET, Method::POST, Method::OPTIONS];
    let headers = [header::CONTENT_TYPE, header::AUTHORIZATION];

    if cors.allowed_origins.iter().any(|o| o == "*") {
        tracing::warn!("CORS configured with wildcard \"*\"; all origins allowed");
        return CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(headers);
    }

    let mut exact: Vec<HeaderValue> = Vec::new();
    let mut port_wildcards: Vec<String> = Vec::new();
    for origin in &cors.allowed_origins {
        if let Some(prefix) = origin.strip_suffix('*').filter(|p| p.ends_with(':')) {
            port_wildcards.push(prefix.to_owned());
        } else if let Ok(hv) = origin.parse::<HeaderValue>() {
            exact.push(hv);
        } else {
            tracing::warn!(origin = %origin, "invalid CORS origin, skipping");
        }
    }

    let allow_origin = if port_wildcards.is_empty() {
        AllowOrigin::list(exact)
    } else {
        AllowOrigin::predicate(move |origin, _| {
            if exact.iter().any(|e| e == origin) {
                return true;
            }
            let origin = origin.to_str().unwrap_or("");
            port_wildcards.iter().any(|prefix| {
                origin
                    .strip_prefix(prefix.as_str())
                    .is_some_and(|port| !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()))
            })
        })
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(true)
}
