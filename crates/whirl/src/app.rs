use eframe::egui;
use std::time::Instant;

use crate::config::Config;
use crate::items::ItemList;
use crate::render::confetti::ConfettiEmitter;
use crate::render::{self, WheelLayout};
use crate::theme::Theme;
use crate::wheel::WheelState;

const TITLE_BAND_H: f32 = 84.0;
const CONTROL_BAND_H: f32 = 150.0;

/// An in-progress rename in the items panel.
struct EditState {
    original: String,
    value: String,
}

struct Toast {
    message: String,
    start: Instant,
}

impl Toast {
    fn new(message: String) -> Self {
        Self {
            message,
            start: Instant::now(),
        }
    }

    fn opacity(&self) -> f32 {
        let elapsed = self.start.elapsed().as_secs_f32();
        let duration = 1.5;
        let fade_start = 1.0;
        if elapsed < fade_start {
            1.0
        } else if elapsed < duration {
            1.0 - (elapsed - fade_start) / (duration - fade_start)
        } else {
            0.0
        }
    }

    fn is_expired(&self) -> bool {
        self.start.elapsed().as_secs_f32() >= 1.5
    }
}

struct WheelApp {
    wheel: WheelState,
    theme: Theme,
    confetti: ConfettiEmitter,
    toast: Option<Toast>,
    new_item: String,
    editing: Option<EditState>,
    last_esc: Option<Instant>,
    /// Cached disc geometry from last frame, used to map pointer positions.
    last_disc: Option<WheelLayout>,
}

impl WheelApp {
    fn new(items: ItemList, theme: Theme) -> Self {
        Self {
            wheel: WheelState::new(items),
            theme,
            confetti: ConfettiEmitter::new(),
            toast: None,
            new_item: String::new(),
            editing: None,
            last_esc: None,
            last_disc: None,
        }
    }

    fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.toast = Some(Toast::new(format!("Theme: {}", self.theme.name)));
    }

    /// Space toggles the spin: start when resting, stop-and-settle when live.
    fn toggle_spin(&mut self) {
        if self.wheel.is_spinning() {
            self.wheel.stop(&mut self.confetti);
        } else {
            self.wheel.spin();
        }
    }

    fn handle_pointer(&mut self, ctx: &egui::Context, now: Instant) {
        let Some(disc) = self.last_disc else { return };

        let (pressed, down, pointer_pos) = ctx.input(|i| {
            (
                i.pointer.button_pressed(egui::PointerButton::Primary),
                i.pointer.button_down(egui::PointerButton::Primary),
                i.pointer.hover_pos(),
            )
        });

        if self.wheel.is_dragging() {
            match pointer_pos {
                // Pointer still down: the wheel follows it.
                Some(pos) if down => self.wheel.drag_to(disc.angle_of(pos), now),
                // Released or left the window: dispatch fling or snap.
                _ => self.wheel.end_drag(),
            }
            return;
        }

        if pressed {
            if let Some(pos) = pointer_pos {
                if disc.contains(pos) {
                    self.wheel.begin_drag(disc.angle_of(pos), now);
                }
            }
        }
    }

    fn update_cursor(&self, ctx: &egui::Context) {
        let hovering_disc = self
            .last_disc
            .zip(ctx.input(|i| i.pointer.hover_pos()))
            .is_some_and(|(disc, pos)| disc.contains(pos));

        let icon = if self.wheel.is_dragging() {
            egui::CursorIcon::Grabbing
        } else if hovering_disc && !self.wheel.is_spinning() {
            egui::CursorIcon::Grab
        } else {
            egui::CursorIcon::Default
        };
        ctx.output_mut(|o| o.cursor_icon = icon);
    }

    fn draw_items_panel(&mut self, ctx: &egui::Context) {
        let heading_color = self.theme.heading_color;
        let weak_color = Theme::with_opacity(self.theme.foreground, 0.55);

        egui::SidePanel::right("items_panel")
            .resizable(false)
            .exact_width(290.0)
            .frame(
                egui::Frame::new()
                    .fill(self.theme.panel_background)
                    .inner_margin(14.0),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new("Wheel items")
                            .color(heading_color)
                            .strong(),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("{} active", self.wheel.items().len()))
                                .color(weak_color)
                                .small(),
                        );
                    });
                });
                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.new_item)
                            .hint_text("Add a new option")
                            .desired_width(190.0),
                    );
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if ui.button("Add").clicked() || submitted {
                        // Rejected labels (blank, duplicate) still reset the field.
                        self.wheel.add_item(&self.new_item);
                        self.new_item.clear();
                    }
                    if submitted {
                        response.request_focus();
                    }
                });
                ui.add_space(6.0);
                ui.separator();

                if self.wheel.items().is_empty() {
                    ui.add_space(12.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("No items yet. Add a few small, appealing actions.")
                                .color(weak_color),
                        );
                    });
                }

                let labels: Vec<String> = self.wheel.items().iter().map(str::to_string).collect();
                for label in labels {
                    self.draw_item_row(ui, &label);
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                    ui.label(
                        egui::RichText::new(
                            "Tip: keep options small and gentle. You can always spin again.",
                        )
                        .color(weak_color)
                        .small(),
                    );
                });
            });
    }

    fn draw_item_row(&mut self, ui: &mut egui::Ui, label: &str) {
        let editing_this = self
            .editing
            .as_ref()
            .is_some_and(|edit| edit.original == label);

        ui.horizontal(|ui| {
            if editing_this {
                if let Some(edit) = self.editing.as_mut() {
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut edit.value)
                            .desired_width(150.0)
                            .id_salt(("edit_item", label)),
                    );
                    let submitted =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    let save = ui.small_button("Save").clicked() || submitted;
                    let cancel = ui.small_button("Cancel").clicked();
                    if save {
                        let value = edit.value.clone();
                        // A rejected rename (blank, duplicate, unchanged)
                        // just closes the editor, like canceling.
                        self.wheel.rename_item(label, &value);
                        self.editing = None;
                    } else if cancel {
                        self.editing = None;
                    }
                }
            } else {
                ui.label(egui::RichText::new(label).color(self.theme.foreground));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("Remove").clicked() {
                        self.wheel.remove_item(label);
                        return;
                    }
                    if ui.small_button("Edit").clicked() {
                        self.editing = Some(EditState {
                            original: label.to_string(),
                            value: label.to_string(),
                        });
                    }
                });
            }
        });
    }

    fn draw_central(&mut self, ctx: &egui::Context, now: Instant) {
        let bg = self.theme.background;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(bg).inner_margin(0.0))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                ui.painter().rect_filled(rect, 0.0, bg);

                // Title band
                let title = ui.painter().layout_no_wrap(
                    "Whirl".to_string(),
                    egui::FontId::proportional(self.theme.title_size),
                    self.theme.heading_color,
                );
                let title_pos = egui::pos2(
                    rect.center().x - title.rect.width() / 2.0,
                    rect.top() + 18.0,
                );
                ui.painter().galley(title_pos, title, self.theme.heading_color);

                let subtitle_color = Theme::with_opacity(self.theme.foreground, 0.55);
                let subtitle = ui.painter().layout_no_wrap(
                    "Spin the wheel and let it pick for you".to_string(),
                    egui::FontId::proportional(self.theme.body_size * 0.85),
                    subtitle_color,
                );
                let subtitle_pos = egui::pos2(
                    rect.center().x - subtitle.rect.width() / 2.0,
                    rect.top() + 54.0,
                );
                ui.painter().galley(subtitle_pos, subtitle, subtitle_color);

                // Wheel disc
                let wheel_rect = egui::Rect::from_min_max(
                    egui::pos2(rect.left(), rect.top() + TITLE_BAND_H),
                    egui::pos2(rect.right(), rect.bottom() - CONTROL_BAND_H),
                );
                let disc = WheelLayout::fit(wheel_rect);
                self.last_disc = Some(disc);

                render::draw_wheel(
                    ui,
                    &disc,
                    &self.theme,
                    self.wheel.items(),
                    self.wheel.rotation(),
                    self.wheel.selected_label(),
                    self.wheel.is_spinning(),
                );

                // Spin / stop controls
                let controls_rect = egui::Rect::from_center_size(
                    egui::pos2(disc.center.x, rect.bottom() - CONTROL_BAND_H + 46.0),
                    egui::vec2(240.0, 40.0),
                );
                let mut controls = ui.new_child(
                    egui::UiBuilder::new()
                        .max_rect(controls_rect)
                        .id_salt("controls"),
                );
                controls.horizontal_centered(|ui| {
                    let spin_label = if self.wheel.is_spinning() {
                        "Spinning..."
                    } else {
                        "Spin"
                    };
                    let can_spin = !self.wheel.is_spinning()
                        && !self.wheel.is_dragging()
                        && !self.wheel.items().is_empty();
                    if ui
                        .add_enabled(
                            can_spin,
                            egui::Button::new(spin_label).min_size(egui::vec2(120.0, 34.0)),
                        )
                        .clicked()
                    {
                        self.wheel.spin();
                    }
                    if ui
                        .add_enabled(
                            self.wheel.is_spinning(),
                            egui::Button::new("Stop").min_size(egui::vec2(80.0, 34.0)),
                        )
                        .clicked()
                    {
                        self.wheel.stop(&mut self.confetti);
                    }
                });

                // Settled readout
                if let Some(label) = self.wheel.selected_label() {
                    if !self.wheel.is_spinning() {
                        let text = format!("Next up: {label}");
                        let galley = ui.painter().layout_no_wrap(
                            text,
                            egui::FontId::proportional(self.theme.body_size),
                            self.theme.accent,
                        );
                        let pos = egui::pos2(
                            rect.center().x - galley.rect.width() / 2.0,
                            rect.bottom() - CONTROL_BAND_H + 86.0,
                        );
                        ui.painter().galley(pos, galley, self.theme.accent);
                    }
                }

                // Navigation hint at the bottom
                let hint = "Space: spin / stop  |  Drag the wheel  |  D: theme  |  F: fullscreen  |  Q: quit";
                let hint_color = Theme::with_opacity(self.theme.foreground, 0.4);
                let hint_galley = ui.painter().layout_no_wrap(
                    hint.to_string(),
                    egui::FontId::proportional(13.0),
                    hint_color,
                );
                let hint_pos = egui::pos2(
                    rect.center().x - hint_galley.rect.width() / 2.0,
                    rect.bottom() - 28.0,
                );
                ui.painter().galley(hint_pos, hint_galley, hint_color);

                // Celebration burst rises from just above the hub.
                self.confetti
                    .set_origin(egui::pos2(disc.center.x, disc.center.y - disc.radius * 0.2));
                self.confetti.draw(ui, now);

                // Toast notification
                if let Some(ref toast) = self.toast {
                    let opacity = toast.opacity();
                    if opacity > 0.0 {
                        let toast_color = Theme::with_opacity(self.theme.foreground, opacity * 0.9);
                        let toast_bg =
                            Theme::with_opacity(self.theme.panel_background, opacity * 0.9);
                        let galley = ui.painter().layout_no_wrap(
                            toast.message.clone(),
                            egui::FontId::proportional(18.0),
                            toast_color,
                        );
                        let padding = 14.0;
                        let toast_rect = egui::Rect::from_min_size(
                            egui::pos2(
                                rect.center().x - galley.rect.width() / 2.0 - padding,
                                rect.bottom() - 80.0,
                            ),
                            egui::vec2(
                                galley.rect.width() + padding * 2.0,
                                galley.rect.height() + padding * 2.0,
                            ),
                        );
                        ui.painter().rect_filled(toast_rect, 8.0, toast_bg);
                        let text_pos =
                            egui::pos2(toast_rect.left() + padding, toast_rect.top() + padding);
                        ui.painter().galley(text_pos, galley, toast_color);
                        ctx.request_repaint();
                    }
                }
            });
    }
}

impl eframe::App for WheelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Read before the input closure: calling context methods inside
        // ctx.input() deadlocks on the input RwLock.
        let wants_keyboard = ctx.wants_keyboard_input();

        // Collect viewport commands to send AFTER the input closure
        let mut viewport_cmds: Vec<egui::ViewportCommand> = Vec::new();

        ctx.input(|i| {
            // Text entry owns the keyboard while a field has focus.
            if wants_keyboard {
                return;
            }

            // Quit: Q
            if i.key_pressed(egui::Key::Q) {
                viewport_cmds.push(egui::ViewportCommand::Close);
                return;
            }

            // ESC double-tap to quit
            if i.key_pressed(egui::Key::Escape) {
                if let Some(last) = self.last_esc {
                    if last.elapsed().as_secs_f32() < 1.0 {
                        viewport_cmds.push(egui::ViewportCommand::Close);
                        return;
                    }
                }
                self.last_esc = Some(Instant::now());
                self.toast = Some(Toast::new("Press Esc again to exit".to_string()));
                return;
            }

            // Fullscreen toggle: F
            if i.key_pressed(egui::Key::F) {
                viewport_cmds.push(egui::ViewportCommand::Fullscreen(
                    !i.viewport().fullscreen.unwrap_or(false),
                ));
                return;
            }

            // Theme toggle: D
            if i.key_pressed(egui::Key::D) {
                self.toggle_theme();
                return;
            }

            // Spin / stop-and-settle: Space
            if i.key_pressed(egui::Key::Space) {
                self.toggle_spin();
            }
        });

        for cmd in viewport_cmds {
            ctx.send_viewport_cmd(cmd);
        }

        self.handle_pointer(ctx, now);
        self.update_cursor(ctx);

        // One frame step for the active animation, if any.
        self.wheel.tick(now, &mut self.confetti);

        // Expire toast
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }

        self.draw_items_panel(ctx);
        self.draw_central(ctx, now);

        if self.wheel.is_spinning() || self.wheel.is_dragging() || self.confetti.is_active() {
            ctx.request_repaint();
        }
    }
}

pub fn run(labels: Vec<String>, windowed: bool, theme_override: Option<String>) -> anyhow::Result<()> {
    let config = Config::load_or_default();
    let defaults = config.defaults.unwrap_or_default();

    let theme_name = theme_override
        .or(defaults.theme)
        .unwrap_or_else(|| "dark".to_string());
    let theme = Theme::from_name(&theme_name);

    let windowed = windowed || defaults.windowed.unwrap_or(false);

    let items = if labels.is_empty() {
        ItemList::starter()
    } else {
        ItemList::new(labels)
    };

    let viewport = if windowed {
        egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_title("Whirl")
    } else {
        egui::ViewportBuilder::default()
            .with_fullscreen(true)
            .with_title("Whirl")
    };

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Whirl",
        options,
        Box::new(move |_cc| Ok(Box::new(WheelApp::new(items, theme)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
