use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use support_desk::config::AppConfig;
use support_desk::error::AppError;
use support_desk::support::{
    suggestions_for, support_router, NewTicket, SupportDesk, TicketCategory, TicketFilter,
    TicketOrigin, TicketPriority, TicketStatus, TracingNotifier,
};
use support_desk::telemetry;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Support Desk",
    about = "Run the job portal support-ticket service or demo its triage view",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print a triage overview over a seeded sample queue
    Triage(TriageArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug, Default)]
struct TriageArgs {
    /// Only show tickets with this status (open, in-progress, resolved, closed)
    #[arg(long)]
    status: Option<String>,
    /// Only show tickets with this priority (low, medium, high, critical)
    #[arg(long)]
    priority: Option<String>,
    /// Case-insensitive search over subject and requester contact
    #[arg(long, default_value = "")]
    search: String,
    /// Include each ticket's suggested replies in the output
    #[arg(long)]
    suggestions: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Triage(args) => run_triage(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let desk = Arc::new(SupportDesk::new(Arc::new(TracingNotifier)));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(support_router(desk))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "support desk ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_triage(args: TriageArgs) -> Result<(), AppError> {
    let desk = SupportDesk::new(Arc::new(TracingNotifier));
    seed_sample_queue(&desk);

    let filter = TicketFilter {
        status: args.status.as_deref().and_then(TicketStatus::from_label),
        priority: args
            .priority
            .as_deref()
            .and_then(TicketPriority::from_label),
        search: args.search,
    };

    println!("Support desk triage demo");
    let summaries = desk.list(&filter);
    if summaries.is_empty() {
        println!("No tickets match the given filter.");
        return Ok(());
    }

    for summary in &summaries {
        println!(
            "- {} | {} | {} | {} | {} | opened by {}",
            summary.id.0,
            summary.subject,
            summary.requester_contact,
            summary.status.label(),
            summary.priority.label(),
            summary.created_by.label()
        );

        if args.suggestions {
            if let Ok(detail) = desk.get(&summary.id) {
                for suggestion in suggestions_for(detail.ticket.category) {
                    println!("    suggested: {suggestion}");
                }
            }
        }
    }

    println!("\n{} ticket(s) shown", summaries.len());
    Ok(())
}

fn seed_sample_queue(desk: &SupportDesk<TracingNotifier>) {
    let samples = [
        NewTicket {
            subject: "Login issues".to_string(),
            requester_contact: "john@example.com".to_string(),
            initial_message: Some("I can't sign in to my employer account.".to_string()),
            priority: TicketPriority::High,
            category: TicketCategory::AccountIssues,
            created_by: TicketOrigin::User,
        },
        NewTicket {
            subject: "Payment problem".to_string(),
            requester_contact: "sarah@example.com".to_string(),
            initial_message: Some("We were charged twice for the premium plan.".to_string()),
            priority: TicketPriority::Medium,
            category: TicketCategory::BillingQuestions,
            created_by: TicketOrigin::User,
        },
        NewTicket {
            subject: "Job posting not visible".to_string(),
            requester_contact: "hiring@acme.example".to_string(),
            initial_message: None,
            priority: TicketPriority::Low,
            category: TicketCategory::JobPostingHelp,
            created_by: TicketOrigin::Admin,
        },
    ];

    for intake in samples {
        if let Err(err) = desk.create_ticket(intake) {
            eprintln!("failed to seed sample ticket: {err}");
        }
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
