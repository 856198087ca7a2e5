use crate::catalog::{Catalog, EventTypeDefinition, Money};
use crate::estimator::models::{
    AddonLine, EstimateError, EstimateRequest, EstimateResult, RangeFactors,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Compute an estimate. An unknown event type yields an all-zero result.
pub fn compute_estimate(
    catalog: &Catalog,
    request: &EstimateRequest,
    factors: RangeFactors,
) -> EstimateResult {
    match catalog.event_type(&request.event_type_id) {
        Some(event_type) => estimate_for(catalog, event_type, request, factors),
        None => {
            warn!("No catalog entry for event type: {}", request.event_type_id);
            EstimateResult::zero(request)
        }
    }
}

/// Same as [`compute_estimate`] but an unknown event type is an error
pub fn try_compute_estimate(
    catalog: &Catalog,
    request: &EstimateRequest,
    factors: RangeFactors,
) -> Result<EstimateResult, EstimateError> {
    let event_type = catalog
        .event_type(&request.event_type_id)
        .ok_or_else(|| EstimateError::UnknownEventType(request.event_type_id.clone()))?;
    Ok(estimate_for(catalog, event_type, request, factors))
}

fn estimate_for(
    catalog: &Catalog,
    event_type: &EventTypeDefinition,
    request: &EstimateRequest,
    factors: RangeFactors,
) -> EstimateResult {
    let guests = request.guest_count;
    let base_cost = event_type.base_cost;
    let guest_cost = event_type.guest_cost(guests);

    // Only items reachable through the applicable groups are priced;
    // stale ids from a previous event type fall out here.
    let mut line_items = Vec::new();
    let mut addons_cost: Money = 0;
    for group in catalog.applicable_groups(event_type) {
        for item in &group.items {
            if !request.selected_addon_ids.contains(&item.id) {
                continue;
            }
            let cost = item.cost_for(guests);
            addons_cost = addons_cost.saturating_add(cost);
            line_items.push(AddonLine {
                id: item.id.clone(),
                name: item.name.clone(),
                category: group.category_label.clone(),
                per_guest: item.per_guest,
                unit_cost: item.unit_cost,
                cost,
            });
        }
    }

    let subtotal = base_cost
        .saturating_add(guest_cost)
        .saturating_add(addons_cost);
    let (range_low, range_high) = factors.apply(subtotal);

    debug!(
        "Estimate for {} ({} guests): subtotal={} addons={}",
        event_type.id,
        guests,
        subtotal,
        line_items.len()
    );

    EstimateResult {
        event_type_id: event_type.id.clone(),
        event_type_name: event_type.name.clone(),
        guest_count: guests,
        per_guest_cost: event_type.per_guest_cost,
        base_cost,
        guest_cost,
        addons_cost,
        subtotal,
        range_low,
        range_high,
        line_items,
    }
}

/// Estimator bound to a loaded catalog and the configured range factors
#[derive(Debug, Clone)]
pub struct CostEstimator {
    catalog: Arc<Catalog>,
    factors: RangeFactors,
}

impl CostEstimator {
    pub fn new(catalog: Arc<Catalog>, factors: RangeFactors) -> Self {
        Self { catalog, factors }
    }

    pub fn estimate(&self, request: &EstimateRequest) -> EstimateResult {
        compute_estimate(&self.catalog, request, self.factors)
    }

    pub fn try_estimate(&self, request: &EstimateRequest) -> Result<EstimateResult, EstimateError> {
        try_compute_estimate(&self.catalog, request, self.factors)
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn factors(&self) -> RangeFactors {
        self.factors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AddonGroup, AddonItem};

    fn item(id: &str, unit_cost: Money, per_guest: bool) -> AddonItem {
        AddonItem {
            id: id.to_string(),
            name: id.to_uppercase(),
            unit_cost,
            per_guest,
        }
    }

    fn test_catalog() -> Catalog {
        Catalog {
            event_types: vec![
                EventTypeDefinition {
                    id: "wedding".to_string(),
                    name: "Wedding".to_string(),
                    description: String::new(),
                    base_cost: 500_000,
                    per_guest_cost: 7_500,
                    applicable_addon_group_ids: vec!["decor".to_string(), "gifts".to_string()],
                },
                EventTypeDefinition {
                    id: "meetup".to_string(),
                    name: "Meetup".to_string(),
                    description: String::new(),
                    base_cost: 10_000,
                    per_guest_cost: 100,
                    applicable_addon_group_ids: vec!["av".to_string()],
                },
            ],
            addon_groups: vec![
                AddonGroup {
                    group_id: "decor".to_string(),
                    category_label: "Decor".to_string(),
                    items: vec![item("floral", 150_000, false)],
                },
                AddonGroup {
                    group_id: "gifts".to_string(),
                    category_label: "Gifting".to_string(),
                    items: vec![item("hampers", 1_500, true)],
                },
                AddonGroup {
                    group_id: "av".to_string(),
                    category_label: "AV".to_string(),
                    items: vec![item("projector", 20_000, false)],
                },
            ],
        }
    }

    #[test]
    fn test_base_and_guest_cost() {
        let catalog = test_catalog();
        let request = EstimateRequest::new("wedding", 100);
        let result = compute_estimate(&catalog, &request, RangeFactors::default());

        assert_eq!(result.base_cost, 500_000);
        assert_eq!(result.guest_cost, 750_000);
        assert_eq!(result.addons_cost, 0);
        assert_eq!(result.subtotal, 1_250_000);
        assert!((result.range_low - 1_125_000.0).abs() < 1e-6);
        assert!((result.range_high - 1_375_000.0).abs() < 1e-6);
        assert!(result.line_items.is_empty());
    }

    #[test]
    fn test_flat_and_per_guest_addons() {
        let catalog = test_catalog();
        let request = EstimateRequest::new("wedding", 100)
            .with_addon("floral")
            .with_addon("hampers");
        let result = compute_estimate(&catalog, &request, RangeFactors::default());

        assert_eq!(result.addons_cost, 300_000);
        assert_eq!(result.subtotal, 1_550_000);
        assert_eq!(result.line_items.len(), 2);
        assert_eq!(result.line_items[0].category, "Decor");
        assert_eq!(result.line_items[1].cost, 150_000);
    }

    #[test]
    fn test_foreign_addon_is_ignored() {
        let catalog = test_catalog();
        let request = EstimateRequest::new("wedding", 100).with_addon("projector");
        let result = compute_estimate(&catalog, &request, RangeFactors::default());

        assert_eq!(result.addons_cost, 0);
        assert_eq!(result.subtotal, 1_250_000);
    }

    #[test]
    fn test_unknown_event_type_is_zero() {
        let catalog = test_catalog();
        let request = EstimateRequest::new("moon-landing", 100).with_addon("floral");
        let result = compute_estimate(&catalog, &request, RangeFactors::default());

        assert!(!result.is_resolved());
        assert_eq!(result.subtotal, 0);
        assert_eq!(result.range_high, 0.0);
        assert_eq!(result.guest_count, 100);
    }

    #[test]
    fn test_try_estimate_rejects_unknown_event_type() {
        let estimator = CostEstimator::new(Arc::new(test_catalog()), RangeFactors::default());
        let err = estimator
            .try_estimate(&EstimateRequest::new("moon-landing", 10))
            .unwrap_err();
        assert_eq!(err, EstimateError::UnknownEventType("moon-landing".to_string()));
    }

    #[test]
    fn test_custom_range_factors() {
        let estimator = CostEstimator::new(
            Arc::new(test_catalog()),
            RangeFactors::new(0.8, 1.25).unwrap(),
        );
        let result = estimator.estimate(&EstimateRequest::new("meetup", 0));
        assert_eq!(result.subtotal, 10_000);
        assert!((result.range_low - 8_000.0).abs() < 1e-6);
        assert!((result.range_high - 12_500.0).abs() < 1e-6);
    }

    #[test]
    fn test_huge_inputs_saturate() {
        let mut catalog = test_catalog();
        catalog.event_types[0].base_cost = Money::MAX - 1;
        let request = EstimateRequest::new("wedding", u32::MAX).with_addon("hampers");
        let result = compute_estimate(&catalog, &request, RangeFactors::default());
        assert_eq!(result.subtotal, Money::MAX);
    }
}
