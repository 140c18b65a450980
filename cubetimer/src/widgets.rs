//! Custom-painted widgets — white fills, 1px outlines, dithered states.

use egui::{Response, Ui, Widget};

use crate::dither;
use crate::theme::Ink;

/// Draw a close button at the left of the menu bar. Returns true when
/// clicked.
pub fn close_button(ui: &mut Ui) -> bool {
    let btn_size = egui::vec2(14.0, 14.0);
    let (rect, resp) = ui.allocate_exact_size(btn_size, egui::Sense::click());
    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, Ink::WHITE);
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, Ink::BLACK));
        if resp.hovered() {
            dither::draw_dither_hover(painter, rect);
        }
        // X glyph
        let m = 3.0;
        painter.line_segment(
            [
                rect.left_top() + egui::vec2(m, m),
                rect.right_bottom() - egui::vec2(m, m),
            ],
            egui::Stroke::new(1.0, Ink::BLACK),
        );
        painter.line_segment(
            [
                rect.right_top() + egui::vec2(-m, m),
                rect.left_bottom() + egui::vec2(m, -m),
            ],
            egui::Stroke::new(1.0, Ink::BLACK),
        );
    }

    ui.add_space(4.0);

    // Thin vertical separator after the button
    let (sep_rect, _) = ui.allocate_exact_size(egui::vec2(4.0, btn_size.y), egui::Sense::hover());
    if ui.is_rect_visible(sep_rect) {
        ui.painter().vline(
            sep_rect.center().x,
            sep_rect.y_range(),
            egui::Stroke::new(1.0, Ink::BLACK),
        );
    }
    ui.add_space(4.0);

    resp.clicked()
}

/// A button: white background, 1px outline, dithered when pressed or
/// selected.
pub struct TimerButton<'a> {
    text: &'a str,
    selected: bool,
    min_width: f32,
}

impl<'a> TimerButton<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            selected: false,
            min_width: 0.0,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Keep toggle buttons from resizing when their label changes.
    pub fn min_width(mut self, min_width: f32) -> Self {
        self.min_width = min_width;
        self
    }
}

impl<'a> Widget for TimerButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let text_size = ui.fonts(|f| {
            f.glyph_width(&egui::FontId::proportional(14.0), ' ') * self.text.len() as f32
        });
        let padding = egui::vec2(16.0, 4.0);
        let desired_size = egui::vec2(
            (text_size + padding.x * 2.0).max(self.min_width),
            ui.spacing().interact_size.y,
        );
        let (rect, response) = ui.allocate_exact_size(desired_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();

            painter.rect_filled(rect, 0.0, Ink::WHITE);
            painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, Ink::BLACK));

            let pressed = response.is_pointer_button_down_on() || self.selected;
            if pressed {
                dither::draw_dither_selection(painter, rect);
            } else if response.hovered() {
                dither::draw_dither_hover(painter, rect);
            }

            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.text,
                egui::FontId::proportional(14.0),
                if pressed { Ink::WHITE } else { Ink::BLACK },
            );
        }

        response
    }
}

/// Status bar: white background, 1px black border.
pub fn status_bar(ui: &mut Ui, text: &str) {
    egui::Frame::none()
        .fill(Ink::WHITE)
        .stroke(egui::Stroke::new(1.0, Ink::BLACK))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(text);
        });
}
