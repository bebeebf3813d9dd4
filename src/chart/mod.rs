//! Declarative chart descriptions and the egui renderer that paints them.

pub mod plot_area;
pub mod render;
pub mod scale;

pub use plot_area::PlotArea;
pub use render::chart_ui;
pub use scale::AxisScale;

use crate::data::SeriesKey;
use crate::tooltip::{TooltipEntry, TooltipPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
}

/// Y axis a series is plotted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub key: SeriesKey,
    pub name: &'static str,
    pub axis: Axis,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub categories: Vec<&'static str>,
    pub series: Vec<SeriesSpec>,
}

impl ChartSpec {
    pub fn new(kind: ChartKind, categories: Vec<&'static str>) -> Self {
        Self {
            kind,
            categories,
            series: Vec::new(),
        }
    }

    pub fn line(categories: Vec<&'static str>) -> Self {
        Self::new(ChartKind::Line, categories)
    }

    pub fn bar(categories: Vec<&'static str>) -> Self {
        Self::new(ChartKind::Bar, categories)
    }

    pub fn with_series(
        mut self,
        key: SeriesKey,
        name: &'static str,
        axis: Axis,
        values: Vec<f64>,
    ) -> Self {
        if values.len() != self.categories.len() {
            tracing::warn!(
                series = name,
                values = values.len(),
                categories = self.categories.len(),
                "series length does not match category count"
            );
        }
        self.series.push(SeriesSpec {
            key,
            name,
            axis,
            values,
        });
        self
    }

    pub fn uses_axis(&self, axis: Axis) -> bool {
        self.series.iter().any(|s| s.axis == axis)
    }

    /// Largest value among the series bound to `axis`, or `0.0` if none.
    pub fn axis_max(&self, axis: Axis) -> f64 {
        self.series
            .iter()
            .filter(|s| s.axis == axis)
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }

    pub fn axis_scale(&self, axis: Axis) -> Option<AxisScale> {
        self.uses_axis(axis)
            .then(|| AxisScale::nice(self.axis_max(axis), scale::DEFAULT_INTERVALS))
    }

    /// Hover payload for the category at `index`. Out of range indices yield
    /// an inactive, empty payload.
    pub fn payload_at(&self, index: usize) -> TooltipPayload {
        let Some(label) = self.categories.get(index) else {
            return TooltipPayload::default();
        };
        let entries = self
            .series
            .iter()
            .filter_map(|s| {
                s.values.get(index).map(|&value| TooltipEntry {
                    name: s.name.to_string(),
                    value,
                    color: s.key.color(),
                })
            })
            .collect();
        TooltipPayload {
            active: true,
            label: (*label).to_string(),
            entries,
        }
    }
}

/// Extract one numeric column from a static dataset.
pub fn column<T>(rows: &[T], f: impl Fn(&T) -> f64) -> Vec<f64> {
    rows.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ChartSpec {
        ChartSpec::line(vec!["a", "b"])
            .with_series(SeriesKey::Impressions, "Impressions", Axis::Left, vec![10.0, 40.0])
            .with_series(SeriesKey::Clicks, "Clicks", Axis::Right, vec![3.0, 2.0])
    }

    #[test]
    fn axis_max_respects_binding() {
        let spec = sample();
        assert_eq!(spec.axis_max(Axis::Left), 40.0);
        assert_eq!(spec.axis_max(Axis::Right), 3.0);
    }

    #[test]
    fn unused_axis_has_no_scale() {
        let spec = ChartSpec::bar(vec!["a"]).with_series(
            SeriesKey::Lift,
            "Lift",
            Axis::Left,
            vec![1.0],
        );
        assert!(spec.axis_scale(Axis::Left).is_some());
        assert!(spec.axis_scale(Axis::Right).is_none());
    }

    #[test]
    fn payload_lists_every_series_in_order() {
        let payload = sample().payload_at(1);
        assert!(payload.active);
        assert_eq!(payload.label, "b");
        let names: Vec<_> = payload.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Impressions", "Clicks"]);
        assert_eq!(payload.entries[0].value, 40.0);
    }

    #[test]
    fn payload_out_of_range_is_inactive() {
        let payload = sample().payload_at(7);
        assert!(!payload.active);
        assert!(payload.entries.is_empty());
    }
}
