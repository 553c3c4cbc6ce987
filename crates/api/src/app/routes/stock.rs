use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use stockbook_core::MovementId;
use stockbook_ledger::MovementKind;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/entries", post(record_entry))
        .route("/exits", post(record_exit))
        .route("/adjustments", post(record_adjustment))
}

pub fn movements_router() -> Router {
    Router::new()
        .route("/", get(list_movements))
        .route("/:id", get(get_movement))
}

fn parse_kind(s: &str) -> Result<MovementKind, axum::response::Response> {
    match s.to_lowercase().as_str() {
        "entry" => Ok(MovementKind::Entry),
        "exit" => Ok(MovementKind::Exit),
        "adjustment" => Ok(MovementKind::Adjustment),
        _ => Err(errors::json_error(
            StatusCode::BAD_REQUEST,
            "invalid_kind",
            "kind must be one of: entry, exit, adjustment",
        )),
    }
}

pub async fn record_entry(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::StockEntryRequest>,
) -> axum::response::Response {
    match services.ledger.record_entry(
        body.product_id,
        body.quantity,
        body.unit_cost,
        None,
        body.comment,
    ) {
        Ok(id) => created_movement(&services, id),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn record_exit(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::StockExitRequest>,
) -> axum::response::Response {
    match services
        .ledger
        .record_exit(body.product_id, body.quantity, body.reference, body.comment)
    {
        Ok(id) => created_movement(&services, id),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn record_adjustment(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::StockAdjustmentRequest>,
) -> axum::response::Response {
    match services
        .ledger
        .record_adjustment(body.product_id, body.delta, body.reference, body.comment)
    {
        Ok(id) => created_movement(&services, id),
        Err(e) => errors::service_error_to_response(e),
    }
}

fn created_movement(services: &AppServices, id: MovementId) -> axum::response::Response {
    match services.ledger.movement(id) {
        Ok(m) => (StatusCode::CREATED, Json(dto::movement_to_json(&m))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn list_movements(
    Extension(services): Extension<Arc<AppServices>>,
    Query(filter): Query<dto::MovementFilter>,
) -> axum::response::Response {
    let kind = match filter.kind.as_deref().map(parse_kind).transpose() {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    let mut items = match services.ledger.movements() {
        Ok(v) => v,
        Err(e) => return errors::service_error_to_response(e),
    };
    if let Some(product_id) = filter.product_id {
        items.retain(|m| m.product_id == product_id);
    }
    if let Some(order_id) = filter.order_id {
        items.retain(|m| m.order_id == Some(order_id));
    }
    if let Some(kind) = kind {
        items.retain(|m| m.kind == kind);
    }

    let items: Vec<_> = items.iter().map(dto::movement_to_json).collect();
    (StatusCode::OK, Json(serde_json::json!({ "items": items }))).into_response()
}

pub async fn get_movement(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: MovementId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid movement id")
        }
    };
    match services.ledger.movement(id) {
        Ok(m) => (StatusCode::OK, Json(dto::movement_to_json(&m))).into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}
