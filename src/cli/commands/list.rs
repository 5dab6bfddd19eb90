use crate::cli::commands::feed_loader;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::fetch_and_render;
use crate::errors::{AppError, AppResult};
use crate::models::StyledMarker;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{GREY, ansi_for_category};
use crate::utils::formatting::{format_magnitude, format_optional_text};
use crate::utils::table::{Cell, Column, Table};
use crate::utils::time::format_short_timestamp;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        level,
        window,
        min_mag,
        limit,
    } = &cli.command
    {
        if let Some(m) = min_mag
            && !m.is_finite()
        {
            return Err(AppError::InvalidArgument(format!("--min-mag {m}")));
        }

        let loader = feed_loader(cli, cfg, *level, *window);
        let outcome = fetch_and_render(&loader)?;

        let markers = select(&outcome.markers, *min_mag, *limit);

        header(format!("Earthquakes from {}", loader.source()));

        if markers.is_empty() {
            warning("No events to show.");
        } else {
            print!("{}", build_table(&markers).render());
            println!();
        }

        info(format!(
            "{} shown, {} rendered, {} skipped (malformed)",
            markers.len(),
            outcome.markers.len(),
            outcome.malformed
        ));
    }
    Ok(())
}

/// Filter by minimum magnitude (strictly greater, like the color bands) and cap the count.
pub(crate) fn select(
    markers: &[StyledMarker],
    min_mag: Option<f64>,
    limit: Option<usize>,
) -> Vec<&StyledMarker> {
    markers
        .iter()
        .filter(|m| match min_mag {
            Some(min) => m.magnitude.is_some_and(|mag| mag > min),
            None => true,
        })
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

fn build_table(markers: &[&StyledMarker]) -> Table {
    let mut table = Table::new(vec![
        Column::new("#", 4),
        Column::new("MAG", 5),
        Column::new("RADIUS", 6),
        Column::new("COLOR", 6),
        Column::new("LON", 9),
        Column::new("LAT", 8),
        Column::new("TIME", 16),
        Column::new("PLACE", 40),
    ]);

    for (i, m) in markers.iter().enumerate() {
        let mag = format_magnitude(m.magnitude);
        let mag_cell = if m.magnitude.is_some() {
            Cell::plain(mag)
        } else {
            Cell::colored(mag, GREY)
        };

        table.add_row(vec![
            Cell::plain((i + 1).to_string()),
            mag_cell,
            Cell::plain(format!("{:.1}", m.radius)),
            Cell::colored(m.color.as_str(), ansi_for_category(m.color)),
            Cell::plain(format!("{:.3}", m.lon)),
            Cell::plain(format!("{:.3}", m.lat)),
            Cell::plain(format_short_timestamp(m.time)),
            Cell::plain(format_optional_text(m.place.as_deref())),
        ]);
    }

    table
}
