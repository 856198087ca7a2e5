use anyhow::Result;
use colored::Colorize;
use kasha_site::catalog::{load_catalog, Catalog, GuestCount};
use kasha_site::config::{self, EstimatorConfig};
use kasha_site::content::SiteContent;
use kasha_site::estimator::{render_quote, CostEstimator, EstimateRequest};
use std::path::Path;
use std::sync::Arc;

/// Compute an estimate from command-line selections and print it.
/// Unlike the HTTP API an unknown event type is an error here.
pub fn execute(
    config_path: &Path,
    event_type: Option<String>,
    guests: Option<GuestCount>,
    addons: Vec<String>,
    json: bool,
) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let catalog = Arc::new(load_catalog(cfg.catalog.path.as_deref())?);
    let estimator = CostEstimator::new(catalog.clone(), cfg.estimator.range_factors());

    let request = build_request(&catalog, &cfg.estimator, event_type, guests, addons);
    let result = estimator.try_estimate(&request)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        let content = SiteContent::builtin()?;
        let today = chrono::Local::now().date_naive();
        print!("{}", render_quote(&result, &content.brand, today));
    }

    Ok(())
}

/// Start from the form's reset state and apply the command-line selections
fn build_request(
    catalog: &Catalog,
    estimator: &EstimatorConfig,
    event_type: Option<String>,
    guests: Option<GuestCount>,
    addons: Vec<String>,
) -> EstimateRequest {
    let mut request = EstimateRequest::initial(catalog, estimator.default_guests);
    if let Some(id) = event_type {
        request = request.with_event_type(id);
    }
    if let Some(count) = guests {
        request = request.with_guests(count);
    }
    for addon in addons {
        if catalog.addon_item(&addon).is_none() {
            eprintln!("{} unknown add-on '{}' ignored", "warning:".yellow(), addon);
        }
        request = request.with_addon(addon);
    }

    let count = request.guest_count;
    if count < estimator.min_guests || count > estimator.max_guests {
        eprintln!(
            "{} {} guests is outside the advertised range {}..={}",
            "note:".yellow(),
            count,
            estimator.min_guests,
            estimator.max_guests
        );
    }

    request
}
