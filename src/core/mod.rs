pub mod compose;
pub mod feed;
pub mod legend;
pub mod render;
pub mod style;

pub use compose::MapComposer;
pub use feed::{FeedLevel, FeedLoader, FeedSource, FeedWindow};
pub use legend::{LegendBand, legend_bands};
pub use render::{RenderOutcome, render, render_event, render_features};
pub use style::{COLOR_THRESHOLDS, color_category, scale_radius};

use crate::errors::AppResult;

/// Feed loader → feature renderer, the pipeline every output starts from.
pub fn fetch_and_render(loader: &FeedLoader) -> AppResult<RenderOutcome> {
    let doc = loader.load()?;
    Ok(render_features(&doc.features))
}
