//! cubetimer application.
//!
//! Wires the solve clock, scramble generator, and solve log to the screen:
//! a scramble line, a large readout, start/stop and scramble controls, and
//! a name field for saving solves.

use cubecore::prefs::{self, Prefs};
use cubecore::record::default_log_path;
use cubecore::{Clock, Recorder, Scrambler};
use egui::{CentralPanel, Context, Key, RichText, TopBottomPanel};

use crate::dither;
use crate::repaint::RepaintScheduler;
use crate::theme::{menu_bar, Ink, TimerTheme};
use crate::widgets::{close_button, status_bar, TimerButton};

const IDLE_HINT: &str = "space start/stop  |  ⌘N scramble  |  ⌘S save";
const RUNNING_HINT: &str = "solving...  |  space to stop";
const NO_SCRAMBLE: &str = "press ⌘N for a scramble";

pub struct CubeTimerApp {
    clock: Clock,
    scrambler: Scrambler,
    recorder: Recorder,
    username: String,
    scramble: String,
    status: Option<String>,
    error: Option<String>,
    show_about: bool,
    repaint: RepaintScheduler,
}

impl CubeTimerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let username = Prefs::load_from(&prefs::config_path())
            .map(|p| p.username)
            .unwrap_or_default();

        Self {
            clock: Clock::new(),
            scrambler: Scrambler::new(),
            recorder: Recorder::new(default_log_path()),
            username,
            scramble: NO_SCRAMBLE.to_string(),
            status: None,
            error: None,
            show_about: false,
            repaint: RepaintScheduler::new(),
        }
    }

    fn toggle_clock(&mut self) {
        if self.clock.is_running() {
            self.clock.stop();
        } else {
            self.status = None;
            self.clock.start();
        }
        self.repaint.mark_needs_repaint();
    }

    fn new_scramble(&mut self) {
        self.scramble = self.scrambler.generate();
        self.repaint.mark_needs_repaint();
    }

    fn save_solve(&mut self) {
        let time = self.clock.display();
        let scramble = self.scrambler.last().unwrap_or("");
        match self.recorder.save(&self.username, &time, scramble) {
            Ok(()) => {
                self.clock.reset();
                self.status = Some(format!("saved {} for {}", time, self.username));
                self.persist_username();
            }
            Err(err) => {
                self.error = Some(err.to_string());
            }
        }
        self.repaint.mark_needs_repaint();
    }

    fn persist_username(&self) {
        let prefs = Prefs {
            username: self.username.clone(),
        };
        if let Err(err) = prefs.save_to(&prefs::config_path()) {
            eprintln!("[cubetimer] could not save prefs: {}", err);
        }
    }

    fn draw_menu_bar(&mut self, ctx: &Context) {
        let close = TopBottomPanel::top("menu_bar")
            .show(ctx, |ui| {
                menu_bar(ui, |ui| {
                    let close = close_button(ui);
                    ui.menu_button("timer", |ui| {
                        if ui.button("new scramble    ⌘N").clicked() {
                            self.new_scramble();
                            ui.close_menu();
                        }
                        if ui.button("save solve    ⌘S").clicked() {
                            self.save_solve();
                            ui.close_menu();
                        }
                        ui.separator();
                        if ui.button("reset    ⌘R").clicked() {
                            self.clock.reset();
                            ui.close_menu();
                        }
                    });
                    ui.menu_button("help", |ui| {
                        if ui.button("about").clicked() {
                            self.show_about = true;
                            ui.close_menu();
                        }
                    });
                    close
                })
                .inner
            })
            .inner;

        if close {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }

        TopBottomPanel::top("title_bar").show(ctx, |ui| {
            TimerTheme::title_bar_frame().show(ui, |ui| {
                ui.centered_and_justified(|ui| {
                    ui.label("cubetimer");
                });
            });
        });
    }

    fn draw_status_bar(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let text = if self.clock.is_running() {
                RUNNING_HINT
            } else if let Some(status) = &self.status {
                status
            } else {
                IDLE_HINT
            };
            status_bar(ui, text);
        });
    }

    fn draw_central(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(
                egui::Frame::none()
                    .fill(Ink::WHITE)
                    .inner_margin(egui::Margin::same(12.0)),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(&self.scramble).monospace().size(15.0));
                    ui.add_space(16.0);

                    ui.label(
                        RichText::new(self.clock.display())
                            .monospace()
                            .size(52.0)
                            .color(Ink::BLACK),
                    );
                    ui.add_space(16.0);

                    ui.horizontal(|ui| {
                        // Center the row by hand: three buttons of known width
                        let row_width = 90.0 + 120.0 + 70.0 + ui.spacing().item_spacing.x * 2.0;
                        ui.add_space((ui.available_width() - row_width).max(0.0) / 2.0);

                        let label = if self.clock.is_running() { "stop" } else { "start" };
                        if ui
                            .add(
                                TimerButton::new(label)
                                    .min_width(90.0)
                                    .selected(self.clock.is_running()),
                            )
                            .clicked()
                        {
                            self.toggle_clock();
                        }
                        if ui
                            .add(TimerButton::new("new scramble").min_width(120.0))
                            .clicked()
                        {
                            self.new_scramble();
                        }
                        if ui.add(TimerButton::new("save").min_width(70.0)).clicked() {
                            self.save_solve();
                        }
                    });

                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        let field_width = 180.0;
                        let label_width = 40.0;
                        ui.add_space(
                            (ui.available_width() - field_width - label_width).max(0.0) / 2.0,
                        );
                        ui.label("name");
                        ui.add(
                            egui::TextEdit::singleline(&mut self.username)
                                .desired_width(field_width)
                                .hint_text("who solved it"),
                        );
                    });
                });
            });
    }

    fn draw_error(&mut self, ctx: &Context) {
        let Some(message) = self.error.clone() else {
            return;
        };
        let resp = egui::Window::new("cannot save")
            .collapsible(false)
            .resizable(false)
            .default_width(240.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(&message);
                    ui.add_space(12.0);
                    if ui.button("ok").clicked() {
                        self.error = None;
                    }
                    ui.add_space(4.0);
                });
            });
        if let Some(r) = &resp {
            dither::draw_window_shadow(ctx, r.response.rect);
        }
    }

    fn draw_about(&mut self, ctx: &Context) {
        if !self.show_about {
            return;
        }
        let resp = egui::Window::new("about cubetimer")
            .collapsible(false)
            .resizable(false)
            .default_width(260.0)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.heading("cubetimer");
                    ui.label("version 0.1.0");
                    ui.add_space(8.0);
                    ui.label("a speedcube solve timer");
                    ui.add_space(4.0);
                    ui.label("features:");
                    ui.label("  hundredths stopwatch");
                    ui.label("  15-move scrambles");
                    ui.label("  CSV solve log");
                    ui.add_space(12.0);
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                    ui.add_space(4.0);
                });
            });
        if let Some(r) = &resp {
            dither::draw_window_shadow(ctx, r.response.rect);
        }
    }
}

impl eframe::App for CubeTimerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Space toggles the clock, but not while typing in the name field
        let typing = ctx.memory(|mem| mem.focused().is_some());
        let space = ctx.input(|i| i.key_pressed(Key::Space) && !i.modifiers.command);
        if space && !typing && self.error.is_none() && !self.show_about {
            self.toggle_clock();
        }

        if ctx.input(|i| i.modifiers.command && i.key_pressed(Key::N)) {
            self.new_scramble();
        }
        if ctx.input(|i| i.modifiers.command && i.key_pressed(Key::S)) {
            self.save_solve();
        }
        if ctx.input(|i| i.modifiers.command && i.key_pressed(Key::R)) {
            self.clock.reset();
            self.repaint.mark_needs_repaint();
        }
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.error = None;
            self.show_about = false;
        }

        self.draw_menu_bar(ctx);
        self.draw_status_bar(ctx);
        self.draw_central(ctx);
        self.draw_error(ctx);
        self.draw_about(ctx);

        // Animate the readout only while the clock runs; otherwise sleep
        // until the next input event.
        self.repaint.set_continuous(self.clock.is_running());
        self.repaint.end_frame(ctx);
    }
}
