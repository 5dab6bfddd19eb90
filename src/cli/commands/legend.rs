use crate::core::legend_bands;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{colorize_category, swatch};

/// Handle the `legend` command
pub fn handle() -> AppResult<()> {
    header("Magnitude legend");

    for band in legend_bands() {
        println!(
            "  {} {:<5} {}",
            swatch(band.color),
            band.label,
            colorize_category(band.color.as_str(), band.color)
        );
    }

    Ok(())
}
