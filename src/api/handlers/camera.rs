//! Live camera frame handler backed by the detection stub.
//!
//! No camera exists yet: the endpoint renders a placeholder canvas, runs
//! the mock detector against its warmup frame shape, and outlines the
//! resulting boxes so the dashboard behaves as if a feed were attached.

use std::io::Cursor;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Rgb, RgbImage};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::{BoundingBox, Detection, FrameShape};
use crate::error::MonitorError;

const FRAME_WIDTH: u32 = 480;
const FRAME_HEIGHT: u32 = 320;
const FRAME_FILL: Rgb<u8> = Rgb([22, 62, 85]);
const BOX_OUTLINE: Rgb<u8> = Rgb([255, 255, 255]);

/// Response body for `GET /api/live-frame`.
#[derive(Debug, Serialize, ToSchema)]
struct LiveFrameResponse {
    /// Generated frame identifier, usable as an event `frame_id`.
    frame_id: Uuid,
    /// Placeholder PNG as a base64 data URI.
    frame: String,
    /// Overlay label summarizing the detection count.
    overlay: String,
    /// Raw detection result from the detector seam.
    detections: Detection,
}

/// `GET /live-frame` — Mock camera frame plus detections.
///
/// # Errors
///
/// Returns a [`MonitorError::Internal`] if the placeholder frame cannot
/// be encoded.
#[utoipa::path(
    get,
    path = "/api/live-frame",
    tag = "Camera",
    summary = "Mock live camera frame",
    description = "Runs the detector warmup, executes mock detection on the reported frame shape, and returns a placeholder image annotated with the detections.",
    responses(
        (status = 200, description = "Placeholder frame and mock detections", body = LiveFrameResponse),
    )
)]
pub async fn live_frame(State(state): State<AppState>) -> Result<impl IntoResponse, MonitorError> {
    let shape = state.detector.warmup();
    let detections = state.detector.detect(shape);
    let overlay = format!("{} detections", detections.boxes.len());
    let frame = placeholder_frame(&detections.boxes, shape)?;

    Ok(Json(LiveFrameResponse {
        frame_id: Uuid::new_v4(),
        frame,
        overlay,
        detections,
    }))
}

/// Camera routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/live-frame", get(live_frame))
}

/// Renders the placeholder canvas with detection outlines and returns it
/// as a base64 PNG data URI.
fn placeholder_frame(boxes: &[BoundingBox], source: FrameShape) -> Result<String, MonitorError> {
    let mut canvas = RgbImage::from_pixel(FRAME_WIDTH, FRAME_HEIGHT, FRAME_FILL);

    for bb in boxes {
        // Rescale from the detector's frame space onto the canvas.
        let x1 = scale(bb.x1, source.width, FRAME_WIDTH);
        let y1 = scale(bb.y1, source.height, FRAME_HEIGHT);
        let x2 = scale(bb.x2, source.width, FRAME_WIDTH);
        let y2 = scale(bb.y2, source.height, FRAME_HEIGHT);
        outline(&mut canvas, x1, y1, x2, y2);
    }

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(canvas)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| MonitorError::Internal(format!("frame encoding failed: {e}")))?;

    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&buf)))
}

fn scale(value: u32, from: u32, to: u32) -> u32 {
    if from == 0 {
        return 0;
    }
    (u64::from(value) * u64::from(to) / u64::from(from)) as u32
}

fn outline(canvas: &mut RgbImage, x1: u32, y1: u32, x2: u32, y2: u32) {
    let x1 = x1.min(FRAME_WIDTH - 1);
    let x2 = x2.min(FRAME_WIDTH - 1);
    let y1 = y1.min(FRAME_HEIGHT - 1);
    let y2 = y2.min(FRAME_HEIGHT - 1);

    for x in x1..=x2 {
        canvas.put_pixel(x, y1, BOX_OUTLINE);
        canvas.put_pixel(x, y2, BOX_OUTLINE);
    }
    for y in y1..=y2 {
        canvas.put_pixel(x1, y, BOX_OUTLINE);
        canvas.put_pixel(x2, y, BOX_OUTLINE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_a_png_data_uri() {
        let boxes = vec![BoundingBox {
            x1: 48,
            y1: 64,
            x2: 144,
            y2: 320,
            label: "bag".to_string(),
            confidence: 0.92,
        }];
        let source = FrameShape {
            width: 480,
            height: 640,
        };

        let uri = placeholder_frame(&boxes, source).unwrap_or_default();
        let prefix = "data:image/png;base64,";
        assert!(uri.starts_with(prefix));

        let decoded = STANDARD
            .decode(uri.trim_start_matches(prefix))
            .unwrap_or_default();
        assert!(decoded.starts_with(&[0x89, 0x50, 0x4E, 0x47]));
    }

    #[test]
    fn scale_maps_between_frame_spaces() {
        assert_eq!(scale(48, 480, 480), 48);
        assert_eq!(scale(320, 640, 320), 160);
        assert_eq!(scale(10, 0, 320), 0);
    }
}
