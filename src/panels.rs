use crate::chart::{chart_ui, column, Axis, ChartSpec};
use crate::data::{SeriesKey, BRAND_LIFT, CHANNELS, WEEKLY};
use crate::format::NumberLocale;
use crate::tabs::ActiveTab;
use eframe::egui::{self, Color32, RichText};

pub const KEY_INSIGHTS: [&str; 3] = [
    "Video ads drove the highest brand awareness lift at 81%",
    "Purchase intent showed the most significant improvement (142%)",
    "Users aged 25-34 showed 2.1x more positive brand sentiment after exposure",
];

const INSIGHT_TEXT_COLOR: Color32 = Color32::from_rgb(29, 78, 216);

/// Context shared with panels at render time.
pub struct PanelContext<'a> {
    pub locale: &'a NumberLocale,
}

/// A chart panel bound to one tab.
pub trait Panel: Send {
    fn tab(&self) -> ActiveTab;

    fn title(&self) -> &'static str;

    fn chart(&self) -> &ChartSpec;

    /// Content shown below the chart.
    fn footer_ui(&mut self, _ui: &mut egui::Ui, _ctx: &PanelContext<'_>) {}
}

pub struct OverviewPanel {
    chart: ChartSpec,
}

impl Default for OverviewPanel {
    fn default() -> Self {
        let chart = ChartSpec::line(WEEKLY.iter().map(|w| w.week).collect())
            .with_series(
                SeriesKey::Impressions,
                "Impressions",
                Axis::Left,
                column(WEEKLY, |w| w.impressions as f64),
            )
            .with_series(
                SeriesKey::Clicks,
                "Clicks",
                Axis::Right,
                column(WEEKLY, |w| w.clicks as f64),
            )
            .with_series(
                SeriesKey::Conversions,
                "Conversions",
                Axis::Right,
                column(WEEKLY, |w| w.conversions as f64),
            );
        Self { chart }
    }
}

impl Panel for OverviewPanel {
    fn tab(&self) -> ActiveTab {
        ActiveTab::Overview
    }

    fn title(&self) -> &'static str {
        "Campaign Performance Over Time"
    }

    fn chart(&self) -> &ChartSpec {
        &self.chart
    }
}

pub struct ChannelsPanel {
    chart: ChartSpec,
}

impl Default for ChannelsPanel {
    fn default() -> Self {
        let chart = ChartSpec::bar(CHANNELS.iter().map(|c| c.name).collect())
            .with_series(
                SeriesKey::Impressions,
                "Impressions",
                Axis::Left,
                column(CHANNELS, |c| c.impressions as f64),
            )
            .with_series(
                SeriesKey::Clicks,
                "Clicks",
                Axis::Left,
                column(CHANNELS, |c| c.clicks as f64),
            )
            .with_series(SeriesKey::Ctr, "CTR", Axis::Left, column(CHANNELS, |c| c.ctr));
        Self { chart }
    }
}

impl Panel for ChannelsPanel {
    fn tab(&self) -> ActiveTab {
        ActiveTab::Channels
    }

    fn title(&self) -> &'static str {
        "Multi-Channel Performance"
    }

    fn chart(&self) -> &ChartSpec {
        &self.chart
    }
}

pub struct StudiesPanel {
    chart: ChartSpec,
}

impl Default for StudiesPanel {
    fn default() -> Self {
        let chart = ChartSpec::bar(BRAND_LIFT.iter().map(|b| b.metric).collect())
            .with_series(
                SeriesKey::Control,
                "Control Group (%)",
                Axis::Left,
                column(BRAND_LIFT, |b| b.control),
            )
            .with_series(
                SeriesKey::Exposed,
                "Exposed Group (%)",
                Axis::Left,
                column(BRAND_LIFT, |b| b.exposed),
            )
            .with_series(SeriesKey::Lift, "Lift", Axis::Left, column(BRAND_LIFT, |b| b.lift));
        Self { chart }
    }
}

impl Panel for StudiesPanel {
    fn tab(&self) -> ActiveTab {
        ActiveTab::Studies
    }

    fn title(&self) -> &'static str {
        "Brand Lift Study Results"
    }

    fn chart(&self) -> &ChartSpec {
        &self.chart
    }

    fn footer_ui(&mut self, ui: &mut egui::Ui, _ctx: &PanelContext<'_>) {
        ui.add_space(12.0);
        egui::Frame::none()
            .fill(Color32::from_rgb(239, 246, 255))
            .rounding(6.0)
            .inner_margin(egui::Margin::same(12.0))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new("Key Insights").strong().color(INSIGHT_TEXT_COLOR));
                for insight in KEY_INSIGHTS {
                    ui.label(
                        RichText::new(format!("• {insight}"))
                            .small()
                            .color(INSIGHT_TEXT_COLOR),
                    );
                }
            });
    }
}

/// One panel per tab, in tab order.
pub fn default_panels() -> Vec<Box<dyn Panel>> {
    vec![
        Box::new(OverviewPanel::default()),
        Box::new(ChannelsPanel::default()),
        Box::new(StudiesPanel::default()),
    ]
}

pub fn panel_ui(ui: &mut egui::Ui, panel: &mut dyn Panel, ctx: &PanelContext<'_>) {
    ui.label(RichText::new(panel.title()).size(17.0).strong());
    ui.add_space(8.0);
    chart_ui(ui, panel.chart(), ctx.locale);
    panel.footer_ui(ui, ctx);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tab_has_exactly_one_panel() {
        let panels = default_panels();
        for tab in ActiveTab::ALL {
            assert_eq!(panels.iter().filter(|p| p.tab() == tab).count(), 1);
        }
    }

    #[test]
    fn overview_splits_axes() {
        let panel = OverviewPanel::default();
        let axes: Vec<_> = panel.chart().series.iter().map(|s| s.axis).collect();
        assert_eq!(axes, [Axis::Left, Axis::Right, Axis::Right]);
    }
}
