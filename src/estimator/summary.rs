//! Plain-text export of a finished estimate.

use crate::catalog::Money;
use crate::content::BrandInfo;
use crate::estimator::models::EstimateResult;
use chrono::NaiveDate;

pub const QUOTE_FILE_NAME: &str = "KaSha_Event_Estimate.txt";

pub const QUOTE_DISCLAIMER: &str =
    "This is a preliminary estimate. Please contact us for a detailed quote.";

const LABEL_WIDTH: usize = 44;
const AMOUNT_WIDTH: usize = 16;

/// Rupees with Indian digit grouping: `₹12,50,000`
pub fn format_inr(amount: Money) -> String {
    format!("₹{}", group_indian(&amount.to_string()))
}

/// Display-range amounts, rounded to whole rupees
pub fn format_inr_rounded(amount: f64) -> String {
    if !amount.is_finite() || amount <= 0.0 {
        return format_inr(0);
    }
    // f64 -> u64 casts saturate
    format_inr(amount.round() as Money)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

fn row(label: &str, amount: &str) -> String {
    format!(
        "  {:<label$}{:>amount$}",
        label,
        amount,
        label = LABEL_WIDTH,
        amount = AMOUNT_WIDTH
    )
}

/// Render the quote document the site offers for download
pub fn render_quote(result: &EstimateResult, brand: &BrandInfo, prepared_on: NaiveDate) -> String {
    let event_name = if result.is_resolved() {
        result.event_type_name.as_str()
    } else {
        "No event selected"
    };

    let mut lines = vec![
        brand.name.clone(),
        "Event Cost Estimate".to_string(),
        format!("Prepared {}", prepared_on.format("%d %B %Y")),
        String::new(),
        format!("Event: {}", event_name),
        format!("Guests: {}", result.guest_count),
        format!(
            "Estimated Cost: {} - {}",
            format_inr_rounded(result.range_low),
            format_inr_rounded(result.range_high)
        ),
        String::new(),
        "Breakdown:".to_string(),
        row(
            &format!("Base Cost ({})", event_name),
            &format_inr(result.base_cost),
        ),
        row(
            &format!(
                "Guest Cost ({} x {})",
                result.guest_count,
                format_inr(result.per_guest_cost)
            ),
            &format_inr(result.guest_cost),
        ),
        row("Add-ons Cost", &format_inr(result.addons_cost)),
        row("Subtotal", &format_inr(result.subtotal)),
        String::new(),
        "Selected Add-ons:".to_string(),
    ];

    if result.line_items.is_empty() {
        lines.push("  - None".to_string());
    }
    lines.extend(result.line_items.iter().map(|line| {
        let label = if line.per_guest {
            format!(
                "- {} ({}, {} per guest)",
                line.name,
                line.category,
                format_inr(line.unit_cost)
            )
        } else {
            format!("- {} ({})", line.name, line.category)
        };
        row(&label, &format_inr(line.cost))
    }));

    lines.push(String::new());
    lines.push(brand.contact_line());
    lines.push(QUOTE_DISCLAIMER.to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
