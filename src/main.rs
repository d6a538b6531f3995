use app::App;
use config::Config;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use inference::impl_fake::InferenceBackendFake;
use label_loader::impl_fake::LabelLoaderFake;
use label_loader::impl_file::LabelLoaderFile;
use label_loader::interface::LabelLoader;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use preprocess::image::input_len;
use std::sync::Arc;

mod app;
mod classifier;
mod config;
mod device_camera;
mod device_display;
mod inference;
mod label_loader;
mod library;
mod preprocess;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut config = Config::default();
    config.labels_path = std::env::args().nth(1).map(Into::into);

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let loader: Box<dyn LabelLoader> = match &config.labels_path {
        Some(path) => Box::new(LabelLoaderFile::new(path)),
        None => Box::new(LabelLoaderFake::plants()),
    };
    let labels = loader.load()?;
    logger.info(&format!("Loaded {} labels", labels.len()))?;

    let (width, height) = config.input_shape;

    let camera = Arc::new(DeviceCameraFake::new(logger.clone(), width, height));

    let backend = Arc::new(InferenceBackendFake::new(
        logger.clone(),
        labels.len(),
        input_len(width, height),
    ));

    let display = Box::new(DeviceDisplayConsole::new());

    let mut app = App::new(config, labels, logger, camera, backend, display);

    app.run()?;

    Ok(())
}
