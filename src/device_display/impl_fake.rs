use crate::classifier::session::Recognition;
use crate::device_display::interface::DeviceDisplay;
use crate::library::logger::interface::Logger;
use std::error::Error;
use std::sync::{Arc, Mutex};

pub struct DeviceDisplayFake {
    shown: Arc<Mutex<Vec<Recognition>>>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DeviceDisplayFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            shown: Arc::new(Mutex::new(Vec::new())),
            logger: logger.with_namespace("display").with_namespace("fake"),
        }
    }

    /// Handle to everything shown so far; stays valid after the display is
    /// moved into the app.
    pub fn shown(&self) -> Arc<Mutex<Vec<Recognition>>> {
        self.shown.clone()
    }
}

impl DeviceDisplay for DeviceDisplayFake {
    fn show(&mut self, recognition: &Recognition) -> Result<(), Box<dyn Error + Send + Sync>> {
        self.logger.info(&format!(
            "DeviceDisplayFake::show({}, {:.3})",
            recognition.best.label, recognition.best.confidence
        ))?;
        self.shown
            .lock()
            .map_err(|e| e.to_string())?
            .push(recognition.clone());
        Ok(())
    }
}
