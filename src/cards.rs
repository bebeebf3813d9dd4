use crate::format::{format_percent, NumberLocale};
use eframe::egui::{self, Color32, RichText};

pub const TREND_UP_COLOR: Color32 = Color32::from_rgb(34, 197, 94);
pub const TREND_DOWN_COLOR: Color32 = Color32::from_rgb(239, 68, 68);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
}

/// Month-over-month change shown below a card's headline value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub direction: TrendDirection,
    pub change_percent: f64,
}

impl Trend {
    pub fn label(&self) -> String {
        let arrow = match self.direction {
            TrendDirection::Up => '↑',
            TrendDirection::Down => '↓',
        };
        format!("{arrow} {:.1}% vs last month", self.change_percent)
    }

    pub fn color(&self) -> Color32 {
        match self.direction {
            TrendDirection::Up => TREND_UP_COLOR,
            TrendDirection::Down => TREND_DOWN_COLOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardValue {
    Count(u64),
    Percent(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: CardValue,
    pub trend: Trend,
}

impl SummaryCard {
    pub fn value_text(&self, locale: &NumberLocale) -> String {
        match self.value {
            CardValue::Count(n) => locale.format_number(n as f64),
            CardValue::Percent(p) => format_percent(p),
        }
    }
}

pub const SUMMARY_CARDS: [SummaryCard; 4] = [
    SummaryCard {
        title: "Impressions",
        value: CardValue::Count(6_480_000),
        trend: Trend {
            direction: TrendDirection::Up,
            change_percent: 12.4,
        },
    },
    SummaryCard {
        title: "Clicks",
        value: CardValue::Count(210_600),
        trend: Trend {
            direction: TrendDirection::Up,
            change_percent: 8.7,
        },
    },
    SummaryCard {
        title: "CTR",
        value: CardValue::Percent(3.25),
        trend: Trend {
            direction: TrendDirection::Down,
            change_percent: 0.2,
        },
    },
    SummaryCard {
        title: "Conversions",
        value: CardValue::Count(10_530),
        trend: Trend {
            direction: TrendDirection::Up,
            change_percent: 15.2,
        },
    },
];

pub fn summary_cards_ui(ui: &mut egui::Ui, locale: &NumberLocale) {
    ui.columns(SUMMARY_CARDS.len(), |cols| {
        for (ui, card) in cols.iter_mut().zip(SUMMARY_CARDS.iter()) {
            egui::Frame::group(ui.style())
                .inner_margin(egui::Margin::same(12.0))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(RichText::new(card.title).small().weak());
                    ui.label(RichText::new(card.value_text(locale)).size(22.0).strong());
                    ui.label(RichText::new(card.trend.label()).small().color(card.trend.color()));
                });
        }
    });
}
