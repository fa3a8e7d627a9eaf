//! Object detection seam for the camera feed.
//!
//! [`Detector`] is the two-operation contract a future vision model must
//! satisfy. [`MockDetector`] is the only implementation today: it returns a
//! fixed bounding box so the API and dashboard behave as if a model were
//! running, without loading any weights.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use utoipa::ToSchema;

/// Pixel dimensions of a camera frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct FrameShape {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
}

/// A single detected region within a frame.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BoundingBox {
    /// Left edge in pixels.
    pub x1: u32,
    /// Top edge in pixels.
    pub y1: u32,
    /// Right edge in pixels.
    pub x2: u32,
    /// Bottom edge in pixels.
    pub y2: u32,
    /// Class label of the detected object.
    pub label: String,
    /// Model confidence in `[0.0, 1.0]`.
    pub confidence: f32,
}

/// Metadata identifying the model source and the frame it ran on.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DetectionMeta {
    /// Model identifier, or `"mock"` when no model path is configured.
    pub model: String,
    /// Width of the analyzed frame.
    pub width: u32,
    /// Height of the analyzed frame.
    pub height: u32,
}

/// Detection output: bounding boxes plus model and frame metadata.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Detection {
    /// Detected regions, possibly empty.
    pub boxes: Vec<BoundingBox>,
    /// Model and frame metadata.
    pub meta: DetectionMeta,
}

/// Two-operation detection contract.
///
/// Implementations must stay swappable behind exactly these operations so a
/// real vision model can replace the mock without touching the API layer.
pub trait Detector: fmt::Debug + Send + Sync {
    /// Runs detection against a frame of the given shape.
    fn detect(&self, frame: FrameShape) -> Detection;

    /// Runs a throwaway detection pass against a fixed dummy frame and
    /// returns its shape, used as a startup-readiness signal.
    fn warmup(&self) -> FrameShape;
}

/// Shape of the dummy frame used by [`Detector::warmup`].
pub const WARMUP_FRAME: FrameShape = FrameShape {
    width: 480,
    height: 640,
};

/// Placeholder detector returning mocked detections.
#[derive(Debug, Clone, Default)]
pub struct MockDetector {
    model_path: Option<PathBuf>,
}

impl MockDetector {
    /// Creates a mock detector, optionally tagged with the model path a
    /// real implementation would load.
    #[must_use]
    pub fn new(model_path: Option<PathBuf>) -> Self {
        Self { model_path }
    }
}

impl Detector for MockDetector {
    fn detect(&self, frame: FrameShape) -> Detection {
        let width = f64::from(frame.width);
        let height = f64::from(frame.height);

        Detection {
            boxes: vec![BoundingBox {
                x1: (width * 0.1) as u32,
                y1: (height * 0.1) as u32,
                x2: (width * 0.3) as u32,
                y2: (height * 0.5) as u32,
                label: "bag".to_string(),
                confidence: 0.92,
            }],
            meta: DetectionMeta {
                model: self
                    .model_path
                    .as_ref()
                    .map_or_else(|| "mock".to_string(), |p| p.display().to_string()),
                width: frame.width,
                height: frame.height,
            },
        }
    }

    fn warmup(&self) -> FrameShape {
        let result = self.detect(WARMUP_FRAME);
        FrameShape {
            width: result.meta.width,
            height: result.meta.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_returns_fractional_box() {
        let detection = MockDetector::default().detect(FrameShape {
            width: 1000,
            height: 500,
        });

        assert_eq!(detection.boxes.len(), 1);
        assert!(
            detection
                .boxes
                .first()
                .is_some_and(|b| b.x1 == 100 && b.y1 == 50 && b.x2 == 300 && b.y2 == 250)
        );
        assert!(
            detection
                .boxes
                .first()
                .is_some_and(|b| b.label == "bag" && (b.confidence - 0.92).abs() < 1e-6)
        );
        assert_eq!(detection.meta.model, "mock");
    }

    #[test]
    fn warmup_reports_dummy_frame_shape() {
        let shape = MockDetector::default().warmup();
        assert_eq!(shape, WARMUP_FRAME);
    }

    #[test]
    fn model_path_is_reflected_in_meta() {
        let detector = MockDetector::new(Some(PathBuf::from("models/bags.onnx")));
        let detection = detector.detect(WARMUP_FRAME);
        assert_eq!(detection.meta.model, "models/bags.onnx");
    }
}
