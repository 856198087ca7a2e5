use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use kasha_site::catalog::{load_catalog, Catalog, EventTypeDefinition};
use kasha_site::config;
use kasha_site::estimator::format_inr;
use std::path::Path;

/// Print the price table, or one event type with its add-ons
pub fn execute(config_path: &Path, event_type: Option<&str>) -> Result<()> {
    let cfg = config::load_config(config_path)?;
    let catalog = load_catalog(cfg.catalog.path.as_deref())?;

    match event_type {
        Some(id) => {
            let event_type = catalog
                .event_type(id)
                .ok_or_else(|| anyhow::anyhow!("Unknown event type: {}", id))?;
            print_event_type(&catalog, event_type);
        }
        None => print_event_types(&catalog),
    }

    Ok(())
}

fn print_event_types(catalog: &Catalog) {
    println!("{}", "Event Types:".bold());
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("NAME").fg(Color::Cyan),
        Cell::new("BASE COST").fg(Color::Cyan),
        Cell::new("PER GUEST").fg(Color::Cyan),
        Cell::new("ADD-ON GROUPS").fg(Color::Cyan),
    ]);

    for event_type in &catalog.event_types {
        table.add_row(vec![
            Cell::new(&event_type.id),
            Cell::new(&event_type.name),
            Cell::new(format_inr(event_type.base_cost)),
            Cell::new(format_inr(event_type.per_guest_cost)),
            Cell::new(event_type.applicable_addon_group_ids.join(", ")),
        ]);
    }

    println!("{}", table);
}

fn print_event_type(catalog: &Catalog, event_type: &EventTypeDefinition) {
    println!(
        "{} ({}): base {}, {} per guest",
        event_type.name.bold(),
        event_type.id,
        format_inr(event_type.base_cost),
        format_inr(event_type.per_guest_cost)
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("CATEGORY").fg(Color::Cyan),
        Cell::new("ADD-ON ID").fg(Color::Cyan),
        Cell::new("NAME").fg(Color::Cyan),
        Cell::new("COST").fg(Color::Cyan),
    ]);

    for group in catalog.applicable_groups(event_type) {
        for item in &group.items {
            let cost = if item.per_guest {
                format!("{} / guest", format_inr(item.unit_cost))
            } else {
                format_inr(item.unit_cost)
            };
            table.add_row(vec![
                Cell::new(&group.category_label),
                Cell::new(&item.id),
                Cell::new(&item.name),
                Cell::new(cost),
            ]);
        }
    }

    println!("{}", table);
}
