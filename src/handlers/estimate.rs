use crate::estimator::{render_quote, EstimateRequest, EstimateResult, QUOTE_FILE_NAME};
use crate::handlers::AppState;
use crate::metrics::record_estimate;
use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};

fn run_estimate(state: &AppState, request: &EstimateRequest) -> EstimateResult {
    let result = state.estimator.estimate(request);
    record_estimate(&result);
    result
}

/// POST /api/estimate
pub async fn post_estimate(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Json<EstimateResult> {
    Json(run_estimate(&state, &request))
}

/// POST /api/estimate/summary
pub async fn post_estimate_summary(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Response {
    let result = run_estimate(&state, &request);
    let today = chrono::Local::now().date_naive();
    let body = render_quote(&result, &state.content.brand, today);

    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", QUOTE_FILE_NAME),
            ),
        ],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::build_app_state;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn test_junk_event_type_ids_do_not_grow_metric_series() {
        let state = build_app_state(&Config::default()).unwrap();
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            for i in 0..200 {
                run_estimate(&state, &EstimateRequest::new(format!("junk-{}", i), 100));
            }
            for event_type in &state.estimator.catalog().event_types {
                run_estimate(&state, &EstimateRequest::new(event_type.id.clone(), 100));
            }
        });

        let series = handle
            .render()
            .lines()
            .filter(|l| l.starts_with("kasha_estimates_total{"))
            .count();
        // one per catalog event type plus the shared unknown series
        assert_eq!(series, state.estimator.catalog().event_types.len() + 1);
    }
}
