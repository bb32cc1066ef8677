use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke};
use news_core::metrics::INTEREST_RANGE;
use news_core::TrendPoint;

const CHART_HEIGHT: f32 = 220.0;
const MARGIN_LEFT: f32 = 36.0;
const MARGIN_BOTTOM: f32 = 22.0;
const MARGIN_TOP: f32 = 10.0;

/// Line chart with markers for the weekly interest series. The y axis is pinned
/// to the range the values are drawn from.
pub fn trend_chart(ui: &mut egui::Ui, points: &[TrendPoint], line: Color32, grid: Color32) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, CHART_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    let label_color = ui.visuals().weak_text_color();

    let plot = egui::Rect::from_min_max(
        egui::pos2(rect.left() + MARGIN_LEFT, rect.top() + MARGIN_TOP),
        egui::pos2(rect.right() - 8.0, rect.bottom() - MARGIN_BOTTOM),
    );

    let y_min = *INTEREST_RANGE.start() as f32;
    let y_max = *INTEREST_RANGE.end() as f32;
    let to_y = |value: f32| plot.bottom() - (value - y_min) / (y_max - y_min) * plot.height();

    for tick in INTEREST_RANGE.step_by(20) {
        let y = to_y(tick as f32);
        painter.line_segment(
            [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
            Stroke::new(1.0, grid),
        );
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            tick.to_string(),
            FontId::proportional(11.0),
            label_color,
        );
    }

    if points.is_empty() {
        return;
    }

    let step = if points.len() > 1 {
        plot.width() / (points.len() - 1) as f32
    } else {
        0.0
    };
    let coords: Vec<Pos2> = points
        .iter()
        .enumerate()
        .map(|(i, p)| egui::pos2(plot.left() + step * i as f32, to_y(p.interest as f32)))
        .collect();

    painter.add(Shape::line(coords.clone(), Stroke::new(2.5, line)));

    for (pos, point) in coords.iter().zip(points) {
        painter.circle_filled(*pos, 4.0, line);
        painter.text(
            egui::pos2(pos.x, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            point.date.format("%m-%d").to_string(),
            FontId::proportional(11.0),
            label_color,
        );
    }
}
