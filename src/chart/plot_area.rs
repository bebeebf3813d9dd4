use eframe::egui::{pos2, Rect};

/// Share of each category band left empty between bar groups.
pub const BAND_GAP: f32 = 0.2;

/// Screen-space geometry of a chart's plotting rectangle. The x axis is
/// split into one equal band per category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub rect: Rect,
    pub categories: usize,
}

impl PlotArea {
    pub fn new(rect: Rect, categories: usize) -> Self {
        Self { rect, categories }
    }

    pub fn band_width(&self) -> f32 {
        self.rect.width() / self.categories.max(1) as f32
    }

    pub fn band_rect(&self, category: usize) -> Rect {
        let left = self.rect.left() + self.band_width() * category as f32;
        Rect::from_min_max(
            pos2(left, self.rect.top()),
            pos2(left + self.band_width(), self.rect.bottom()),
        )
    }

    pub fn band_center(&self, category: usize) -> f32 {
        self.rect.left() + self.band_width() * (category as f32 + 0.5)
    }

    /// Category whose band contains `x`, if any.
    pub fn category_at(&self, x: f32) -> Option<usize> {
        if self.categories == 0 || x < self.rect.left() || x > self.rect.right() {
            return None;
        }
        let index = ((x - self.rect.left()) / self.band_width()).floor() as usize;
        Some(index.min(self.categories - 1))
    }

    pub fn y_for(&self, fraction: f64) -> f32 {
        self.rect.bottom() - self.rect.height() * fraction.clamp(0.0, 1.0) as f32
    }

    /// Rectangle of bar `series` (out of `series_count`) in `category`,
    /// rising to `fraction` of the plot height.
    pub fn bar_rect(
        &self,
        category: usize,
        series: usize,
        series_count: usize,
        fraction: f64,
    ) -> Rect {
        let band = self.band_width();
        let inner = band * (1.0 - BAND_GAP);
        let bar_width = inner / series_count.max(1) as f32;
        let left = self.rect.left()
            + band * category as f32
            + (band - inner) / 2.0
            + bar_width * series as f32;
        Rect::from_min_max(
            pos2(left + 1.0, self.y_for(fraction)),
            pos2(left + bar_width - 1.0, self.rect.bottom()),
        )
    }
}
