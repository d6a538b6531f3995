use crate::classifier::session::Recognition;
use std::error::Error;

/// Consumer of per-frame results.
pub trait DeviceDisplay: Send {
    fn show(&mut self, recognition: &Recognition) -> Result<(), Box<dyn Error + Send + Sync>>;
}
