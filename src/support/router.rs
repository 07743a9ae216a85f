use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::{TicketCategory, TicketId, TicketOrigin, TicketPriority, TicketStatus};
use super::lifecycle::TicketError;
use super::registry::{NewTicket, TicketFilter};
use super::service::{SupportDesk, SupportError, TicketNotifier};

/// Router builder exposing the help-desk HTTP endpoints.
pub fn support_router<N>(desk: Arc<SupportDesk<N>>) -> Router
where
    N: TicketNotifier + 'static,
{
    Router::new()
        .route(
            "/api/v1/support/tickets",
            get(list_handler::<N>).post(create_handler::<N>),
        )
        .route("/api/v1/support/tickets/:ticket_id", get(detail_handler::<N>))
        .route(
            "/api/v1/support/tickets/:ticket_id/status",
            put(status_handler::<N>),
        )
        .route(
            "/api/v1/support/tickets/:ticket_id/replies",
            post(reply_handler::<N>),
        )
        .route(
            "/api/v1/support/tickets/:ticket_id/escalate",
            post(escalate_handler::<N>),
        )
        .with_state(desk)
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateTicketRequest {
    subject: String,
    requester_contact: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    created_by: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct ListQuery {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    priority: Option<String>,
    #[serde(default)]
    search: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatusChangeRequest {
    status: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReplyRequest {
    text: String,
}

fn error_response(status: StatusCode, error: impl std::fmt::Display) -> Response {
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

fn support_error_response(error: SupportError) -> Response {
    match error {
        SupportError::Ticket(TicketError::NotFound) => {
            error_response(StatusCode::NOT_FOUND, TicketError::NotFound)
        }
        SupportError::Ticket(validation) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, validation)
        }
        other => error_response(StatusCode::INTERNAL_SERVER_ERROR, other),
    }
}

pub(crate) async fn create_handler<N>(
    State(desk): State<Arc<SupportDesk<N>>>,
    axum::Json(request): axum::Json<CreateTicketRequest>,
) -> Response
where
    N: TicketNotifier + 'static,
{
    let priority = match request.priority.as_deref() {
        None | Some("") => TicketPriority::Medium,
        Some(label) => match TicketPriority::from_label(label) {
            Some(priority) => priority,
            None => {
                return error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("'{label}' is not a recognized ticket priority"),
                )
            }
        },
    };
    let created_by = match request.created_by.as_deref() {
        None | Some("") => TicketOrigin::User,
        Some(label) => match TicketOrigin::from_label(label) {
            Some(origin) => origin,
            None => {
                return error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("'{label}' is not a recognized ticket origin"),
                )
            }
        },
    };
    let category = TicketCategory::from_label(request.category.as_deref().unwrap_or_default());

    let intake = NewTicket {
        subject: request.subject,
        requester_contact: request.requester_contact,
        initial_message: request.message,
        priority,
        category,
        created_by,
    };

    match desk.create_ticket(intake) {
        Ok(ticket) => (StatusCode::CREATED, axum::Json(ticket.summary())).into_response(),
        Err(error) => support_error_response(error),
    }
}

pub(crate) async fn list_handler<N>(
    State(desk): State<Arc<SupportDesk<N>>>,
    Query(query): Query<ListQuery>,
) -> Response
where
    N: TicketNotifier + 'static,
{
    let status = match query.status.as_deref() {
        None | Some("") | Some("all") => None,
        Some(label) => match TicketStatus::from_label(label) {
            Some(status) => Some(status),
            None => {
                return error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    TicketError::InvalidStatus(label.to_string()),
                )
            }
        },
    };
    let priority = match query.priority.as_deref() {
        None | Some("") | Some("all") => None,
        Some(label) => match TicketPriority::from_label(label) {
            Some(priority) => Some(priority),
            None => {
                return error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("'{label}' is not a recognized ticket priority"),
                )
            }
        },
    };

    let filter = TicketFilter {
        status,
        priority,
        search: query.search.unwrap_or_default(),
    };

    (StatusCode::OK, axum::Json(desk.list(&filter))).into_response()
}

pub(crate) async fn detail_handler<N>(
    State(desk): State<Arc<SupportDesk<N>>>,
    Path(ticket_id): Path<String>,
) -> Response
where
    N: TicketNotifier + 'static,
{
    match desk.get(&TicketId(ticket_id)) {
        Ok(detail) => (StatusCode::OK, axum::Json(detail)).into_response(),
        Err(error) => support_error_response(error),
    }
}

pub(crate) async fn status_handler<N>(
    State(desk): State<Arc<SupportDesk<N>>>,
    Path(ticket_id): Path<String>,
    axum::Json(request): axum::Json<StatusChangeRequest>,
) -> Response
where
    N: TicketNotifier + 'static,
{
    let Some(next) = TicketStatus::from_label(&request.status) else {
        return error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            TicketError::InvalidStatus(request.status),
        );
    };

    match desk.set_status(&TicketId(ticket_id), next) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => support_error_response(error),
    }
}

pub(crate) async fn reply_handler<N>(
    State(desk): State<Arc<SupportDesk<N>>>,
    Path(ticket_id): Path<String>,
    axum::Json(request): axum::Json<ReplyRequest>,
) -> Response
where
    N: TicketNotifier + 'static,
{
    match desk.append_reply(&TicketId(ticket_id), &request.text) {
        Ok(message) => (StatusCode::CREATED, axum::Json(message)).into_response(),
        Err(error) => support_error_response(error),
    }
}

pub(crate) async fn escalate_handler<N>(
    State(desk): State<Arc<SupportDesk<N>>>,
    Path(ticket_id): Path<String>,
) -> Response
where
    N: TicketNotifier + 'static,
{
    match desk.escalate(&TicketId(ticket_id)) {
        Ok(summary) => (StatusCode::OK, axum::Json(summary)).into_response(),
        Err(error) => support_error_response(error),
    }
}
