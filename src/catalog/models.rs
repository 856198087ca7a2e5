use serde::{Deserialize, Serialize};

/// Whole rupees. Costs are integral everywhere; only the display range is
/// ever floating point.
pub type Money = u64;

pub type GuestCount = u32;

/// An optional priced service line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonItem {
    pub id: String,
    pub name: String,
    pub unit_cost: Money,
    /// When true `unit_cost` is charged once per guest
    #[serde(default)]
    pub per_guest: bool,
}

impl AddonItem {
    /// Cost of this item when selected for `guests` attendees
    pub fn cost_for(&self, guests: GuestCount) -> Money {
        if self.per_guest {
            self.unit_cost.saturating_mul(Money::from(guests))
        } else {
            self.unit_cost
        }
    }
}

/// A category of add-ons shown together on the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddonGroup {
    pub group_id: String,
    pub category_label: String,
    pub items: Vec<AddonItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeDefinition {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub base_cost: Money,
    pub per_guest_cost: Money,
    /// Ordered; the form renders groups in this order
    #[serde(default)]
    pub applicable_addon_group_ids: Vec<String>,
}

impl EventTypeDefinition {
    pub fn guest_cost(&self, guests: GuestCount) -> Money {
        self.per_guest_cost.saturating_mul(Money::from(guests))
    }
}

/// The full price table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub event_types: Vec<EventTypeDefinition>,
    pub addon_groups: Vec<AddonGroup>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addon_cost_per_guest_and_flat() {
        let catering = AddonItem {
            id: "catering".to_string(),
            name: "Catering".to_string(),
            unit_cost: 3000,
            per_guest: true,
        };
        let cake = AddonItem {
            id: "cake".to_string(),
            name: "Cake".to_string(),
            unit_cost: 50000,
            per_guest: false,
        };

        assert_eq!(catering.cost_for(100), 300_000);
        assert_eq!(catering.cost_for(0), 0);
        assert_eq!(cake.cost_for(0), 50000);
        assert_eq!(cake.cost_for(2000), 50000);
    }

    #[test]
    fn test_per_guest_flag_defaults_to_flat() {
        let item: AddonItem =
            serde_json::from_str(r#"{"id":"dj","name":"DJ","unitCost":80000}"#).unwrap();
        assert!(!item.per_guest);
    }

    #[test]
    fn test_guest_cost_saturates() {
        let event = EventTypeDefinition {
            id: "huge".to_string(),
            name: "Huge".to_string(),
            description: String::new(),
            base_cost: 0,
            per_guest_cost: Money::MAX,
            applicable_addon_group_ids: vec![],
        };
        assert_eq!(event.guest_cost(GuestCount::MAX), Money::MAX);
    }
}
