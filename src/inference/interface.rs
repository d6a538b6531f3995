/// Opaque model invocation: one preprocessed input tensor in, one score per
/// label out.
pub trait InferenceBackend {
    fn infer(&self, input: &[f32]) -> Result<Vec<f32>, Box<dyn std::error::Error + Send + Sync>>;
}
