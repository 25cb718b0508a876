use eframe::egui;
use roumain_notes::{
    gui::NotesApp,
    ApiClient,
    ClientConfig,
};
use tracing::{
    error,
    info,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ClientConfig::from_env().inspect_err(|e| error!("{}", e))?;
    let client = ApiClient::new(config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Roumain Notes")
            .with_inner_size([760.0, 680.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    info!("Starting Roumain Notes");
    eframe::run_native(
        "Roumain Notes",
        options,
        Box::new(|cc| Ok(Box::new(NotesApp::new(cc, client)?))),
    )?;

    Ok(())
}
