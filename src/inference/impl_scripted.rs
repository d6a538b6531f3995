use crate::inference::interface::InferenceBackend;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub type ScriptedResult = Result<Vec<f32>, String>;

/// Replays a fixed queue of results, one per call, and counts calls.
#[derive(Clone, Default)]
pub struct InferenceBackendScripted {
    script: Arc<Mutex<VecDeque<ScriptedResult>>>,
    calls: Arc<Mutex<Vec<usize>>>,
}

impl InferenceBackendScripted {
    pub fn new(script: Vec<ScriptedResult>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Input lengths seen so far, in call order.
    pub fn calls(&self) -> Vec<usize> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl InferenceBackend for InferenceBackendScripted {
    fn infer(&self, input: &[f32]) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>> {
        self.calls.lock().map_err(|e| e.to_string())?.push(input.len());

        let next = self
            .script
            .lock()
            .map_err(|e| e.to_string())?
            .pop_front()
            .ok_or("script exhausted")?;

        next.map_err(Into::into)
    }
}
