mod app;
mod device_link;

use eframe::egui;

use app::DeviceApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    common::logger::init_logger(Some("Client".to_string()));

    let device_command = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "tictactoe_device".to_string());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 640.0])
            .with_title("TicTacToe Game Interface"),
        ..Default::default()
    };

    eframe::run_native(
        "TicTacToe Game Interface",
        options,
        Box::new(|_cc| Ok(Box::new(DeviceApp::new(device_command)))),
    )?;

    Ok(())
}
