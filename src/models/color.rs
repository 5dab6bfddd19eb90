use serde::Serialize;

/// Severity band shared by markers and the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorCategory {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl ColorCategory {
    /// CSS color name, used as Leaflet stroke color and legend swatch.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorCategory::Red => "red",
            ColorCategory::Orange => "orange",
            ColorCategory::Yellow => "yellow",
            ColorCategory::Green => "green",
            ColorCategory::Blue => "blue",
        }
    }
}

impl std::fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
