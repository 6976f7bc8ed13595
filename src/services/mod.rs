mod capture_orchestrator;
mod image_serializer;

pub use capture_orchestrator::{CaptureOrchestrator, CaptureRunReport};
pub use image_serializer::{extract_numeric_sort_key, ImageSerializer, SerializationReport};
