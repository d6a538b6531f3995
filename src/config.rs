use chrono::{Offset, Utc};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub frame_rate: Duration,
    pub max_frames: Option<usize>,
    pub max_capture_failures: usize,
    pub filter_stages: usize,
    pub filter_factor: f32,
    pub results_to_show: usize,
    pub input_shape: (u32, u32),
    pub labels_path: Option<PathBuf>,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            frame_rate: Duration::from_millis(100),
            max_frames: Some(50),
            max_capture_failures: 5,
            filter_stages: 3,
            filter_factor: 0.4,
            results_to_show: 3,
            input_shape: (224, 224),
            labels_path: None,
            logger_timezone: Utc.fix(),
        }
    }
}
