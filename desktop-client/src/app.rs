use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};

use common::protocol::{Command, OutboundMessage};

use crate::device_link::DeviceLink;

const LOG_CAPACITY: usize = 256;
const MODE_LABELS: [&str; 3] = ["User vs User", "User vs AI", "AI vs AI"];

pub struct DeviceApp {
    device_command: String,
    link: Option<DeviceLink>,
    board: [[char; 3]; 3],
    selected_mode: usize,
    status_line: String,
    win_banner: Option<String>,
    message_log: AllocRingBuffer<String>,
}

impl DeviceApp {
    pub fn new(device_command: String) -> Self {
        Self {
            device_command,
            link: None,
            board: [[' '; 3]; 3],
            selected_mode: 0,
            status_line: "Status: Not connected".to_string(),
            win_banner: None,
            message_log: AllocRingBuffer::new(LOG_CAPACITY),
        }
    }

    fn drain_device_messages(&mut self) {
        loop {
            let Some(link) = &self.link else {
                return;
            };
            let Some(message) = link.try_recv() else {
                return;
            };

            match message {
                OutboundMessage::Board { board } => {
                    self.board = board;
                }
                OutboundMessage::WinStatus { message } => {
                    self.message_log.enqueue(format!("Win status: {}", message));
                    self.win_banner = Some(message);
                }
                OutboundMessage::GameStatus { message } => {
                    self.win_banner = None;
                    self.message_log.enqueue(format!("Game status: {}", message));
                }
                OutboundMessage::Info { message } | OutboundMessage::GameMode { message } => {
                    self.message_log.enqueue(format!("Game status: {}", message));
                }
                OutboundMessage::Error { message } => {
                    self.message_log.enqueue(format!("Error: {}", message));
                }
            }
        }
    }

    fn send_command(&mut self, command: Command) {
        let Some(link) = &mut self.link else {
            self.message_log.enqueue("Port not opened".to_string());
            return;
        };
        if let Err(e) = link.send(&command) {
            self.message_log.enqueue(format!("Error: {}", e));
        }
    }

    fn render_connection_row(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Device command:");
            ui.add_enabled(
                self.link.is_none(),
                egui::TextEdit::singleline(&mut self.device_command).desired_width(220.0),
            );

            if self.link.is_none() {
                if ui.button("Launch").clicked() {
                    match DeviceLink::launch(&self.device_command) {
                        Ok(link) => {
                            self.link = Some(link);
                            self.status_line = format!("Connected to {}", self.device_command);
                        }
                        Err(e) => {
                            self.status_line = format!("Error: {}", e);
                            self.message_log.enqueue(format!("Failed to connect: {}", e));
                        }
                    }
                }
            } else if ui.button("Disconnect").clicked() {
                if let Some(link) = self.link.take() {
                    link.shutdown();
                }
                self.board = [[' '; 3]; 3];
                self.win_banner = None;
                self.status_line = "Status: Not connected".to_string();
            }
        });
        ui.label(&self.status_line);
    }

    fn render_board(&mut self, ui: &mut egui::Ui) {
        let mut clicked_cell = None;

        ui.vertical_centered(|ui| {
            egui::Grid::new("board_grid")
                .spacing(egui::vec2(6.0, 6.0))
                .show(ui, |ui| {
                    for (row, row_cells) in self.board.iter().enumerate() {
                        for (col, &cell) in row_cells.iter().enumerate() {
                            let label = egui::RichText::new(cell.to_string())
                                .size(32.0)
                                .monospace();
                            let button = egui::Button::new(label)
                                .min_size(egui::vec2(64.0, 64.0));
                            if ui.add(button).clicked() {
                                clicked_cell = Some((row, col));
                            }
                        }
                        ui.end_row();
                    }
                });

            if let Some(banner) = &self.win_banner {
                ui.add_space(4.0);
                ui.colored_label(egui::Color32::GREEN, banner);
            }
        });

        if let Some((row, col)) = clicked_cell {
            self.send_command(Command::Move {
                row: row as i32,
                col: col as i32,
            });
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Game mode:");
            egui::ComboBox::from_id_salt("mode_select")
                .selected_text(MODE_LABELS[self.selected_mode])
                .show_ui(ui, |ui| {
                    for (index, label) in MODE_LABELS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_mode, index, *label);
                    }
                });

            if ui.button("Set Mode").clicked() {
                self.send_command(Command::Mode {
                    mode: self.selected_mode as i32,
                });
            }

            if ui.button("Reset").clicked() {
                self.send_command(Command::Reset);
            }
        });
    }

    fn render_log(&self, ui: &mut egui::Ui) {
        ui.label("Messages:");
        egui::ScrollArea::vertical()
            .id_salt("message_log_scroll")
            .stick_to_bottom(true)
            .max_height(180.0)
            .show(ui, |ui| {
                for entry in self.message_log.iter() {
                    ui.monospace(entry);
                }
            });
    }
}

impl eframe::App for DeviceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_device_messages();

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_connection_row(ui);
            ui.separator();
            self.render_board(ui);
            ui.separator();
            self.render_controls(ui);
            ui.separator();
            self.render_log(ui);
        });

        // Keep polling device output even while the window is idle.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
