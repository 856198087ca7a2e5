use crate::catalog::{Catalog, GuestCount, Money};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Guest count the form starts with
pub const DEFAULT_GUEST_COUNT: GuestCount = 100;

/// Multipliers applied to the subtotal to produce the displayed range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeFactors {
    pub low: f64,
    pub high: f64,
}

impl Default for RangeFactors {
    fn default() -> Self {
        Self {
            low: 0.9,
            high: 1.1,
        }
    }
}

impl RangeFactors {
    pub fn new(low: f64, high: f64) -> Result<Self, EstimateError> {
        let factors = Self { low, high };
        factors.validate()?;
        Ok(factors)
    }

    /// `0 <= low <= 1 <= high`, both finite
    pub fn validate(&self) -> Result<(), EstimateError> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(EstimateError::InvalidRangeFactors(*self));
        }
        if self.low < 0.0 || self.low > 1.0 || self.high < 1.0 {
            return Err(EstimateError::InvalidRangeFactors(*self));
        }
        Ok(())
    }

    pub fn apply(&self, subtotal: Money) -> (f64, f64) {
        let subtotal = subtotal as f64;
        (subtotal * self.low, subtotal * self.high)
    }
}

/// Snapshot of the form, rebuilt on every interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub event_type_id: String,
    pub guest_count: GuestCount,
    #[serde(default)]
    pub selected_addon_ids: BTreeSet<String>,
}

impl EstimateRequest {
    pub fn new(event_type_id: impl Into<String>, guest_count: GuestCount) -> Self {
        Self {
            event_type_id: event_type_id.into(),
            guest_count,
            selected_addon_ids: BTreeSet::new(),
        }
    }

    /// The reset state of the form: first event type, `default_guests`
    /// (the configured `estimator.default_guests`), nothing selected
    pub fn initial(catalog: &Catalog, default_guests: GuestCount) -> Self {
        let event_type_id = catalog
            .default_event_type()
            .map(|e| e.id.clone())
            .unwrap_or_default();
        Self::new(event_type_id, default_guests)
    }

    pub fn with_addon(mut self, addon_id: impl Into<String>) -> Self {
        self.selected_addon_ids.insert(addon_id.into());
        self
    }

    pub fn with_guests(mut self, guest_count: GuestCount) -> Self {
        self.guest_count = guest_count;
        self
    }

    /// Switch event type. The selection is cleared, as the form does.
    pub fn with_event_type(mut self, event_type_id: impl Into<String>) -> Self {
        self.event_type_id = event_type_id.into();
        self.selected_addon_ids.clear();
        self
    }

    /// Flip one add-on on or off
    pub fn toggle_addon(mut self, addon_id: &str) -> Self {
        if !self.selected_addon_ids.remove(addon_id) {
            self.selected_addon_ids.insert(addon_id.to_string());
        }
        self
    }
}

/// An add-on that contributed to the total
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonLine {
    pub id: String,
    pub name: String,
    pub category: String,
    pub per_guest: bool,
    pub unit_cost: Money,
    pub cost: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResult {
    pub event_type_id: String,
    /// Empty when the event type did not resolve
    pub event_type_name: String,
    pub guest_count: GuestCount,
    pub per_guest_cost: Money,
    pub base_cost: Money,
    pub guest_cost: Money,
    pub addons_cost: Money,
    pub subtotal: Money,
    pub range_low: f64,
    pub range_high: f64,
    pub line_items: Vec<AddonLine>,
}

impl EstimateResult {
    /// All-zero result for a request whose event type is unknown
    pub fn zero(request: &EstimateRequest) -> Self {
        Self {
            event_type_id: request.event_type_id.clone(),
            event_type_name: String::new(),
            guest_count: request.guest_count,
            per_guest_cost: 0,
            base_cost: 0,
            guest_cost: 0,
            addons_cost: 0,
            subtotal: 0,
            range_low: 0.0,
            range_high: 0.0,
            line_items: Vec::new(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        !self.event_type_name.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("unknown event type '{0}'")]
    UnknownEventType(String),
    #[error("invalid range factors {0:?}: expected 0 <= low <= 1 <= high")]
    InvalidRangeFactors(RangeFactors),
}
