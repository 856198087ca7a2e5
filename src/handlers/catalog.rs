use crate::catalog::{AddonGroup, EventTypeDefinition};
use crate::error::AppError;
use crate::estimator::RangeFactors;
use crate::handlers::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

/// Bounds for the guest-count widget
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestRange {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse<'a> {
    pub default_event_type_id: Option<&'a str>,
    pub event_types: &'a [EventTypeDefinition],
    pub addon_groups: &'a [AddonGroup],
    pub guest_range: GuestRange,
    pub range_factors: RangeFactors,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeResponse<'a> {
    pub event_type: &'a EventTypeDefinition,
    pub addon_groups: Vec<&'a AddonGroup>,
}

/// GET /api/catalog
pub async fn get_catalog(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let catalog = state.estimator.catalog();
    let cfg = &state.estimator_config;

    let response = CatalogResponse {
        default_event_type_id: catalog.default_event_type().map(|e| e.id.as_str()),
        event_types: &catalog.event_types,
        addon_groups: &catalog.addon_groups,
        guest_range: GuestRange {
            min: cfg.min_guests,
            max: cfg.max_guests,
            step: cfg.guest_step,
            default: cfg.default_guests,
        },
        range_factors: state.estimator.factors(),
    };
    Ok(Json(serde_json::to_value(response)?))
}

/// GET /api/catalog/event-types/:id
pub async fn get_event_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let catalog = state.estimator.catalog();
    let event_type = catalog
        .event_type(&id)
        .ok_or_else(|| AppError::NotFound(format!("event type '{}'", id)))?;

    let response = EventTypeResponse {
        event_type,
        addon_groups: catalog.applicable_groups(event_type).collect(),
    };
    Ok(Json(serde_json::to_value(response)?))
}
