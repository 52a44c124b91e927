// Widget Calculators - Web Server
// HTML forms + JSON API with Axum

use anyhow::{Context, Result};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use widget_calculators::logging::env_filter;
use widget_calculators::{CorsMode, ErrorBody, Form, Outcome, ServerConfig, WidgetKind};

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(error: ErrorBody) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Widget descriptor for the page
#[derive(Serialize)]
struct WidgetResponse {
    kind: WidgetKind,
    title: String,
    instructions: String,
    fields: Vec<&'static str>,
    submit_label: String,
}

impl From<WidgetKind> for WidgetResponse {
    fn from(kind: WidgetKind) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            instructions: kind.instructions().to_string(),
            fields: kind.field_labels().to_vec(),
            submit_label: kind.submit_label().to_string(),
        }
    }
}

/// Outcome plus the banner text the page shows
#[derive(Serialize)]
struct OutcomeResponse {
    message: String,
    #[serde(flatten)]
    outcome: Outcome,
}

// Field values arrive as the raw text typed into the form; bare JSON
// numbers are accepted and read back as text
#[derive(Deserialize)]
struct GradeRequest {
    #[serde(default)]
    score: Value,
}

#[derive(Deserialize)]
struct TicketRequest {
    #[serde(default)]
    age: Value,
}

#[derive(Deserialize)]
struct TriangleRequest {
    #[serde(default)]
    a: Value,
    #[serde(default)]
    b: Value,
    #[serde(default)]
    c: Value,
}

/// Anything other than a string or number reads as an empty field
fn field_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        _ => String::new(),
    }
}

/// Malformed bodies still answer with an `ApiResponse`
fn reject_body(rejection: JsonRejection) -> Response {
    let body = ErrorBody {
        kind: "bad_request",
        message: rejection.body_text(),
        field: None,
    };
    (
        rejection.status(),
        Json(ApiResponse::<OutcomeResponse>::err(body)),
    )
        .into_response()
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/widgets - Describe the three forms
async fn list_widgets() -> impl IntoResponse {
    let widgets: Vec<WidgetResponse> = WidgetKind::ALL.iter().map(|kind| (*kind).into()).collect();
    Json(ApiResponse::ok(widgets))
}

/// POST /api/grade
async fn submit_grade(body: Result<Json<GradeRequest>, JsonRejection>) -> Response {
    match body {
        Ok(Json(req)) => evaluate(WidgetKind::Grade, &[field_text(&req.score)]),
        Err(rejection) => reject_body(rejection),
    }
}

/// POST /api/ticket
async fn submit_ticket(body: Result<Json<TicketRequest>, JsonRejection>) -> Response {
    match body {
        Ok(Json(req)) => evaluate(WidgetKind::Ticket, &[field_text(&req.age)]),
        Err(rejection) => reject_body(rejection),
    }
}

/// POST /api/triangle
async fn submit_triangle(body: Result<Json<TriangleRequest>, JsonRejection>) -> Response {
    match body {
        Ok(Json(req)) => evaluate(
            WidgetKind::Triangle,
            &[field_text(&req.a), field_text(&req.b), field_text(&req.c)],
        ),
        Err(rejection) => reject_body(rejection),
    }
}

/// One fresh form per request; nothing is shared between submissions
fn evaluate(kind: WidgetKind, values: &[String]) -> Response {
    let values: Vec<&str> = values.iter().map(String::as_str).collect();
    let mut form = Form::with_fields(kind, &values);
    form.submit();

    if let Some(outcome) = form.result() {
        tracing::debug!(widget = ?kind, "Submission classified");
        let body = OutcomeResponse {
            message: outcome.to_string(),
            outcome: *outcome,
        };
        return (StatusCode::OK, Json(ApiResponse::ok(body))).into_response();
    }

    match form.error() {
        Some(err) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::<OutcomeResponse>::err(err.into())),
        )
            .into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

/// GET / - Serve index.html
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

// ============================================================================
// Main Server
// ============================================================================

fn build_router(config: &ServerConfig) -> Router {
    // Build API routes
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/widgets", get(list_widgets))
        .route("/grade", post(submit_grade))
        .route("/ticket", post(submit_ticket))
        .route("/triangle", post(submit_triangle));

    // Build main router
    let app = Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http());

    match config.cors {
        CorsMode::Permissive => app.layer(CorsLayer::permissive()),
        CorsMode::Off => app,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(tracing::Level::INFO))
        .init();

    let config = ServerConfig::from_env()?;
    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.addr))?;

    tracing::info!(addr = %config.addr, cors = ?config.cors, "🚀 Widget server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to start server")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
    }
}

// ============================================================================
// Tests
// ============================================================================
