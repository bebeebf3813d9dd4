use super::{Axis, AxisScale, ChartKind, ChartSpec, PlotArea};
use crate::format::NumberLocale;
use crate::tooltip::{format_tooltip, tooltip_ui};
use eframe::egui::{self, pos2, vec2, Align2, Color32, Pos2, Rect, RichText, Sense, Shape, Stroke};

pub const CHART_HEIGHT: f32 = 288.0;
const MIN_CHART_WIDTH: f32 = 320.0;
const AXIS_LABEL_WIDTH: f32 = 72.0;
const MARGIN_TOP: f32 = 10.0;
const MARGIN_SIDE: f32 = 30.0;
const MARGIN_BOTTOM: f32 = 28.0;

fn grid_stroke(ui: &egui::Ui) -> Stroke {
    Stroke::new(1.0, ui.visuals().widgets.noninteractive.bg_stroke.color)
}

fn plot_rect(outer: Rect, spec: &ChartSpec) -> Rect {
    let left = if spec.uses_axis(Axis::Left) {
        AXIS_LABEL_WIDTH
    } else {
        MARGIN_SIDE
    };
    let right = if spec.uses_axis(Axis::Right) {
        AXIS_LABEL_WIDTH
    } else {
        MARGIN_SIDE
    };
    Rect::from_min_max(
        pos2(outer.left() + left, outer.top() + MARGIN_TOP),
        pos2(outer.right() - right, outer.bottom() - MARGIN_BOTTOM),
    )
}

/// Paint `spec` into the available width and show a tooltip for the
/// hovered category.
pub fn chart_ui(ui: &mut egui::Ui, spec: &ChartSpec, locale: &NumberLocale) -> egui::Response {
    let desired = vec2(ui.available_width().max(MIN_CHART_WIDTH), CHART_HEIGHT);
    let (rect, response) = ui.allocate_exact_size(desired, Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

    let plot = PlotArea::new(plot_rect(rect, spec), spec.categories.len());
    let left = spec.axis_scale(Axis::Left);
    let right = spec.axis_scale(Axis::Right);

    if let Some(grid_scale) = left.or(right) {
        paint_grid(&painter, ui, &plot, &grid_scale);
    }
    if let Some(scale) = &left {
        paint_axis_labels(&painter, ui, &plot, scale, Axis::Left, locale);
    }
    if let Some(scale) = &right {
        paint_axis_labels(&painter, ui, &plot, scale, Axis::Right, locale);
    }
    paint_category_labels(&painter, ui, &plot, spec);

    let hovered = response
        .hover_pos()
        .and_then(|pos| plot.category_at(pos.x).filter(|_| plot.rect.contains(pos)));
    if let Some(index) = hovered {
        painter.rect_filled(plot.band_rect(index), 0.0, Color32::from_black_alpha(18));
    }

    match spec.kind {
        ChartKind::Line => paint_lines(&painter, &plot, spec, left, right, hovered),
        ChartKind::Bar => paint_bars(&painter, &plot, spec, left, right),
    }

    legend_ui(ui, spec);

    match hovered {
        Some(index) => {
            let payload = spec.payload_at(index);
            match format_tooltip(Some(&payload), locale) {
                Some(content) => response.on_hover_ui_at_pointer(|ui| tooltip_ui(ui, &content)),
                None => response,
            }
        }
        None => response,
    }
}

fn scale_for(axis: Axis, left: Option<AxisScale>, right: Option<AxisScale>) -> Option<AxisScale> {
    match axis {
        Axis::Left => left,
        Axis::Right => right,
    }
}

fn paint_grid(painter: &egui::Painter, ui: &egui::Ui, plot: &PlotArea, scale: &AxisScale) {
    let stroke = grid_stroke(ui);
    for tick in scale.ticks() {
        let y = plot.y_for(scale.fraction(tick));
        painter.extend(Shape::dashed_line(
            &[pos2(plot.rect.left(), y), pos2(plot.rect.right(), y)],
            stroke,
            3.0,
            3.0,
        ));
    }
    for i in 0..plot.categories {
        let x = plot.band_center(i);
        painter.extend(Shape::dashed_line(
            &[pos2(x, plot.rect.top()), pos2(x, plot.rect.bottom())],
            stroke,
            3.0,
            3.0,
        ));
    }
    let axis = Stroke::new(1.0, ui.visuals().text_color());
    painter.line_segment([plot.rect.left_bottom(), plot.rect.right_bottom()], axis);
}

fn paint_axis_labels(
    painter: &egui::Painter,
    ui: &egui::Ui,
    plot: &PlotArea,
    scale: &AxisScale,
    axis: Axis,
    locale: &NumberLocale,
) {
    let font = egui::TextStyle::Small.resolve(ui.style());
    let color = ui.visuals().weak_text_color();
    let (x, align) = match axis {
        Axis::Left => (plot.rect.left() - 6.0, Align2::RIGHT_CENTER),
        Axis::Right => (plot.rect.right() + 6.0, Align2::LEFT_CENTER),
    };
    for tick in scale.ticks() {
        let y = plot.y_for(scale.fraction(tick));
        painter.text(pos2(x, y), align, locale.format_number(tick), font.clone(), color);
    }
}

fn paint_category_labels(painter: &egui::Painter, ui: &egui::Ui, plot: &PlotArea, spec: &ChartSpec) {
    let font = egui::TextStyle::Small.resolve(ui.style());
    let color = ui.visuals().text_color();
    for (i, label) in spec.categories.iter().enumerate() {
        painter.text(
            pos2(plot.band_center(i), plot.rect.bottom() + 6.0),
            Align2::CENTER_TOP,
            *label,
            font.clone(),
            color,
        );
    }
}

fn paint_lines(
    painter: &egui::Painter,
    plot: &PlotArea,
    spec: &ChartSpec,
    left: Option<AxisScale>,
    right: Option<AxisScale>,
    hovered: Option<usize>,
) {
    for series in &spec.series {
        let Some(scale) = scale_for(series.axis, left, right) else {
            continue;
        };
        let color = series.key.color();
        let points: Vec<Pos2> = series
            .values
            .iter()
            .enumerate()
            .take(plot.categories)
            .map(|(i, v)| pos2(plot.band_center(i), plot.y_for(scale.fraction(*v))))
            .collect();
        painter.add(Shape::line(points.clone(), Stroke::new(2.0, color)));
        for (i, p) in points.into_iter().enumerate() {
            let radius = if hovered == Some(i) { 5.0 } else { 3.0 };
            painter.circle_filled(p, radius, color);
        }
    }
}

fn paint_bars(
    painter: &egui::Painter,
    plot: &PlotArea,
    spec: &ChartSpec,
    left: Option<AxisScale>,
    right: Option<AxisScale>,
) {
    let count = spec.series.len();
    for (s, series) in spec.series.iter().enumerate() {
        let Some(scale) = scale_for(series.axis, left, right) else {
            continue;
        };
        for (i, value) in series.values.iter().enumerate().take(plot.categories) {
            let bar = plot.bar_rect(i, s, count, scale.fraction(*value));
            painter.rect_filled(bar, 0.0, series.key.color());
        }
    }
}

fn legend_ui(ui: &mut egui::Ui, spec: &ChartSpec) {
    ui.horizontal_wrapped(|ui| {
        for series in &spec.series {
            let (swatch, _) = ui.allocate_exact_size(vec2(10.0, 10.0), Sense::hover());
            ui.painter().rect_filled(swatch, 2.0, series.key.color());
            ui.label(RichText::new(series.name).color(series.key.color()));
            ui.add_space(8.0);
        }
    });
}
