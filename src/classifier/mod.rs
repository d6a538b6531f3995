pub mod error;
pub mod label_catalog;
pub mod pipeline;
pub mod session;
pub mod smoothing_filter;
pub mod top_k;

#[cfg(test)]
mod tests;
