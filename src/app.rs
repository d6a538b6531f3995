use crate::classifier::error::ClassifierError;
use crate::classifier::label_catalog::LabelCatalog;
use crate::classifier::session::ClassificationSession;
use crate::config::Config;
use crate::device_camera::interface::DeviceCamera;
use crate::device_display::interface::DeviceDisplay;
use crate::inference::interface::InferenceBackend;
use crate::library::logger::interface::Logger;
use crate::preprocess::image::image_to_input;
use image::DynamicImage;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TrySendError};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOffer {
    Queued,
    Dropped,
    Closed,
}

/// Hands a frame to the classifier unless one is already waiting.
pub fn offer_frame<T>(sender: &SyncSender<T>, frame: T) -> FrameOffer {
    match sender.try_send(frame) {
        Ok(()) => FrameOffer::Queued,
        Err(TrySendError::Full(_)) => FrameOffer::Dropped,
        Err(TrySendError::Disconnected(_)) => FrameOffer::Closed,
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames_classified: usize,
    pub frames_failed: usize,
    pub frames_dropped: usize,
}

pub struct App {
    config: Config,
    labels: LabelCatalog,
    logger: Arc<dyn Logger + Send + Sync>,
    camera: Arc<dyn DeviceCamera + Send + Sync>,
    backend: Arc<dyn InferenceBackend + Send + Sync>,
    display: Box<dyn DeviceDisplay>,
}

impl App {
    pub fn new(
        config: Config,
        labels: LabelCatalog,
        logger: Arc<dyn Logger + Send + Sync>,
        camera: Arc<dyn DeviceCamera + Send + Sync>,
        backend: Arc<dyn InferenceBackend + Send + Sync>,
        display: Box<dyn DeviceDisplay>,
    ) -> Self {
        Self {
            config,
            labels,
            logger: logger.with_namespace("app"),
            camera,
            backend,
            display,
        }
    }

    /// Starts the camera, classifies frames until `max_frames` have been
    /// received or the camera thread ends (after `max_capture_failures`
    /// failed captures in a row), then stops the camera. Each
    /// call uses a fresh session.
    pub fn run(&mut self) -> Result<RunSummary, Box<dyn std::error::Error + Send + Sync>> {
        let mut session = ClassificationSession::new(
            &self.config,
            self.labels.clone(),
            self.backend.clone(),
            self.logger.clone(),
        )?;

        self.camera.start()?;

        let (sender, receiver) = sync_channel::<DynamicImage>(1);
        let stop = Arc::new(AtomicBool::new(false));
        let dropped = Arc::new(AtomicUsize::new(0));

        let producer = {
            let camera = self.camera.clone();
            let logger = self.logger.clone();
            let stop = stop.clone();
            let dropped = dropped.clone();
            let frame_rate = self.config.frame_rate;
            let max_capture_failures = self.config.max_capture_failures;
            // Returning drops `sender`, which ends the consumer loop.
            std::thread::spawn(move || {
                let mut failures = 0;
                while !stop.load(Ordering::SeqCst) {
                    match camera.capture_frame() {
                        Ok(frame) => {
                            failures = 0;
                            match offer_frame(&sender, frame) {
                                FrameOffer::Queued => {}
                                FrameOffer::Dropped => {
                                    let total = dropped.fetch_add(1, Ordering::SeqCst) + 1;
                                    let _ =
                                        logger.info(&format!("Dropped frame ({} total)", total));
                                }
                                FrameOffer::Closed => break,
                            }
                        }
                        Err(e) => {
                            failures += 1;
                            let _ = logger.error(&format!("Capture failed: {}", e));
                            if failures >= max_capture_failures {
                                let _ = logger.error(&format!(
                                    "Giving up after {} consecutive capture failures",
                                    failures
                                ));
                                break;
                            }
                        }
                    }
                    std::thread::sleep(frame_rate);
                }
            })
        };

        let mut summary = self.consume(&mut session, &receiver);

        stop.store(true, Ordering::SeqCst);
        drop(receiver);
        if producer.join().is_err() {
            let _ = self.logger.error("Camera thread panicked");
        }

        self.camera.stop()?;

        summary.frames_dropped = dropped.load(Ordering::SeqCst);
        self.logger.info(&format!(
            "Classified {} frames, {} failed, {} dropped",
            summary.frames_classified, summary.frames_failed, summary.frames_dropped
        ))?;

        Ok(summary)
    }

    fn consume(
        &mut self,
        session: &mut ClassificationSession,
        receiver: &Receiver<DynamicImage>,
    ) -> RunSummary {
        let (width, height) = self.config.input_shape;
        let mut summary = RunSummary::default();

        while self
            .config
            .max_frames
            .map_or(true, |max| summary.frames_classified + summary.frames_failed < max)
        {
            let frame = match receiver.recv() {
                Ok(frame) => frame,
                Err(_) => break,
            };

            let input = image_to_input(&frame, width, height);

            match session.recognize(&input) {
                Ok(recognition) => {
                    summary.frames_classified += 1;
                    if let Err(e) = self.display.show(&recognition) {
                        let _ = self.logger.error(&format!("Display failed: {}", e));
                    }
                }
                Err(e) => {
                    summary.frames_failed += 1;
                    let _ = self.logger.error(&describe(&e));
                }
            }
        }

        summary
    }
}

fn describe(error: &ClassifierError) -> String {
    match error {
        ClassifierError::Inference(_) => format!("Skipping frame: {}", error),
        _ => format!("Frame rejected: {}", error),
    }
}
