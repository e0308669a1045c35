use clap::ValueEnum;
use serde::Deserialize;

/// Which files an export produces per component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFilter {
    /// Optimized `.svg` files only
    Svg,
    /// React `.tsx` wrappers and `index.ts` only
    Tsx,
    /// Both of the above
    #[default]
    Both,
}

impl OutputFilter {
    pub fn writes_svg(self) -> bool {
        matches!(self, OutputFilter::Svg | OutputFilter::Both)
    }

    pub fn writes_wrappers(self) -> bool {
        matches!(self, OutputFilter::Tsx | OutputFilter::Both)
    }
}

impl std::fmt::Display for OutputFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFilter::Svg => write!(f, "svg"),
            OutputFilter::Tsx => write!(f, "tsx"),
            OutputFilter::Both => write!(f, "both"),
        }
    }
}
