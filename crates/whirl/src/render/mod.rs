//! Painting of the wheel face: slice wedges, labels, pointer, and hub.
//!
//! Everything here is a pure function of `(items, rotation, selected_label,
//! is_spinning)` plus the theme; nothing reads back from the screen.

pub mod confetti;

use eframe::egui;

use crate::items::ItemList;
use crate::theme::Theme;
use crate::wheel::geometry;

/// Arc sampling granularity for slice wedges, degrees per segment.
const ARC_STEP_DEG: f64 = 4.0;
/// Label distance from the center, as a fraction of the radius.
const LABEL_RADIUS_FRACTION: f32 = 0.72;

/// Where the wheel disc sits on screen.
#[derive(Debug, Clone, Copy)]
pub struct WheelLayout {
    pub center: egui::Pos2,
    pub radius: f32,
}

impl WheelLayout {
    /// Fit the disc into `rect` with a margin for the pointer.
    pub fn fit(rect: egui::Rect) -> Self {
        let radius = (rect.width().min(rect.height()) * 0.5 - 28.0).max(0.0);
        Self {
            center: rect.center(),
            radius,
        }
    }

    pub fn contains(&self, pos: egui::Pos2) -> bool {
        self.center.distance(pos) <= self.radius
    }

    /// Pointer angle of `pos` around the disc center, degrees.
    pub fn angle_of(&self, pos: egui::Pos2) -> f64 {
        geometry::drag_angle_deg(
            f64::from(pos.x - self.center.x),
            f64::from(pos.y - self.center.y),
        )
    }
}

pub fn draw_wheel(
    ui: &egui::Ui,
    layout: &WheelLayout,
    theme: &Theme,
    items: &ItemList,
    rotation: f64,
    selected_label: Option<&str>,
    is_spinning: bool,
) {
    let painter = ui.painter();
    let count = items.len();

    if count == 0 {
        painter.circle_stroke(
            layout.center,
            layout.radius,
            egui::Stroke::new(2.0, theme.wheel_rim),
        );
        let hint = painter.layout_no_wrap(
            "Add items to spin".to_string(),
            egui::FontId::proportional(theme.body_size),
            Theme::with_opacity(theme.foreground, 0.5),
        );
        let pos = layout.center - egui::vec2(hint.rect.width() / 2.0, hint.rect.height() / 2.0);
        painter.galley(pos, hint, theme.foreground);
        draw_pointer(painter, layout, theme);
        return;
    }

    let slice = geometry::slice_angle(count);
    let palette = theme.slice_palette();

    for (index, label) in items.iter().enumerate() {
        let highlighted = !is_spinning && selected_label == Some(label);
        let fill = if highlighted {
            theme.accent
        } else {
            palette[index % palette.len()]
        };

        if count == 1 {
            painter.circle_filled(layout.center, layout.radius, fill);
        } else {
            let start = index as f64 * slice + rotation;
            painter.add(egui::Shape::convex_polygon(
                wedge_points(layout, start, start + slice),
                fill,
                egui::Stroke::NONE,
            ));
        }
    }

    // Labels travel around the circle but stay horizontal.
    let label_radius = layout.radius * LABEL_RADIUS_FRACTION;
    for (index, label) in items.iter().enumerate() {
        let angle = geometry::slice_center_angle(index, slice, rotation).to_radians();
        let pos = layout.center
            + egui::vec2(
                label_radius * angle.cos() as f32,
                label_radius * angle.sin() as f32,
            );
        let galley = painter.layout_no_wrap(
            label.to_string(),
            egui::FontId::proportional(theme.label_size),
            theme.slice_label,
        );
        let text_pos = pos - egui::vec2(galley.rect.width() / 2.0, galley.rect.height() / 2.0);
        painter.galley(text_pos, galley, theme.slice_label);
    }

    painter.circle_stroke(
        layout.center,
        layout.radius,
        egui::Stroke::new(2.0, theme.wheel_rim),
    );

    // Hub on top of the slices.
    let hub_radius = layout.radius * 0.08;
    painter.circle_filled(layout.center, hub_radius, theme.hub);
    painter.circle_stroke(
        layout.center,
        hub_radius,
        egui::Stroke::new(1.5, theme.wheel_rim),
    );

    draw_pointer(painter, layout, theme);
}

/// The fixed ticker at 3 o'clock, pointing into the disc.
fn draw_pointer(painter: &egui::Painter, layout: &WheelLayout, theme: &Theme) {
    let tip = egui::pos2(layout.center.x + layout.radius - 4.0, layout.center.y);
    let back_x = layout.center.x + layout.radius + 14.0;
    painter.add(egui::Shape::convex_polygon(
        vec![
            tip,
            egui::pos2(back_x, layout.center.y - 8.0),
            egui::pos2(back_x, layout.center.y + 8.0),
        ],
        theme.pointer,
        egui::Stroke::NONE,
    ));
}

/// Triangle-fan outline of one slice wedge.
fn wedge_points(layout: &WheelLayout, start_deg: f64, end_deg: f64) -> Vec<egui::Pos2> {
    let steps = ((end_deg - start_deg) / ARC_STEP_DEG).ceil().max(1.0) as usize;
    let mut points = Vec::with_capacity(steps + 2);
    points.push(layout.center);
    for i in 0..=steps {
        let angle = (start_deg + (end_deg - start_deg) * i as f64 / steps as f64).to_radians();
        points.push(
            layout.center
                + egui::vec2(
                    layout.radius * angle.cos() as f32,
                    layout.radius * angle.sin() as f32,
                ),
        );
    }
    points
}
