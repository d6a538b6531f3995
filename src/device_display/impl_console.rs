use crate::classifier::session::Recognition;
use crate::classifier::top_k::Classification;
use crate::device_display::interface::DeviceDisplay;
use std::error::Error;

const WIDTH: usize = 28;

pub struct DeviceDisplayConsole {}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self {}
    }
}

pub fn format_line(classification: &Classification) -> String {
    let percent = format!("{:>5.1}%", classification.confidence * 100.0);
    let room = WIDTH.saturating_sub(percent.chars().count() + 1);
    let label: String = classification.label.chars().take(room).collect();
    format!("{:<room$} {}", label, percent, room = room)
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn show(&mut self, recognition: &Recognition) -> Result<(), Box<dyn Error + Send + Sync>> {
        let border = "─".repeat(WIDTH);
        println!("┌{}┐", border);
        println!("│{}│", format_line(&recognition.best));
        println!("├{}┤", border);
        for classification in &recognition.ranked {
            println!("│{}│", format_line(classification));
        }
        println!("└{}┘", border);
        Ok(())
    }
}
