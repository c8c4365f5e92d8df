//! Reusable chart option templates.
//!
//! A template bundles option sets that are built once (often from a YAML
//! file) and then cloned onto every chart that should share the look.
//! Deserialization routes through the clamping setters of each option type,
//! so out-of-range values in a template file are pulled into range the same
//! way programmatic assignments are.
//!
//! ```yaml
//! bar:
//!   gap_width: 80
//!   overlap: -10
//! marker:
//!   symbol: diamond
//!   size: 9
//! ```

use crate::ooxml::charts::area::AreaChartOptions;
use crate::ooxml::charts::bar::BarChartOptions;
use crate::ooxml::charts::bubble::BubbleChartOptions;
use crate::ooxml::charts::marker::Marker;
use crate::ooxml::charts::plot_area::{PlotArea, TypeGroup};
use crate::ooxml::charts::up_down_bars::UpDownBars;
use crate::ooxml::error::{ChartError, Result};
use serde::{Deserialize, Serialize};

/// Named option sets applied to charts of the matching type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTemplate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaChartOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar: Option<BarChartOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bubble: Option<BubbleChartOptions>,
    /// Marker copied onto every line series
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    /// Up/down bars for line groups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub up_down_bars: Option<UpDownBars>,
}

impl ChartTemplate {
    /// Create an empty template.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a template from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let template: Self = serde_saphyr::from_str(yaml)
            .map_err(|e| ChartError::Yaml(format!("Failed to parse chart template: {}", e)))?;
        tracing::debug!(
            area = template.area.is_some(),
            bar = template.bar.is_some(),
            bubble = template.bubble.is_some(),
            marker = template.marker.is_some(),
            up_down_bars = template.up_down_bars.is_some(),
            "loaded chart template"
        );
        Ok(template)
    }

    /// Write the template as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .map_err(|e| ChartError::Yaml(format!("Failed to serialize chart template: {}", e)))
    }

    /// Copy the template's options onto every matching group of `plot_area`.
    ///
    /// Each group receives its own clone; later edits to one chart never
    /// reach the template or another chart.
    pub fn apply(&self, plot_area: &mut PlotArea) {
        for group in &mut plot_area.type_groups {
            match group {
                TypeGroup::Area(area) => {
                    if let Some(ref options) = self.area {
                        area.options = options.clone();
                    }
                },
                TypeGroup::Bar(bar) => {
                    if let Some(ref options) = self.bar {
                        bar.options = options.clone();
                    }
                },
                TypeGroup::Bubble(bubble) => {
                    if let Some(ref options) = self.bubble {
                        bubble.options = options.clone();
                    }
                },
                TypeGroup::Line(line) => {
                    if let Some(ref bars) = self.up_down_bars {
                        line.up_down_bars = Some(bars.clone());
                    }
                    if let Some(ref marker) = self.marker {
                        for series in &mut line.common.series {
                            series.marker = Some(marker.clone());
                        }
                    }
                },
            }
        }
    }
}
