// File: crates/chart-core/src/error.rs
// Summary: Error type for chart layout, rendering and encoding.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid surface size: width={width}, height={height}")]
    InvalidSize { width: i32, height: i32 },

    #[error("invalid margins: left={left}, right={right}, top={top}, bottom={bottom}")]
    InvalidMargins { left: f32, right: f32, top: f32, bottom: f32 },

    #[error("failed to create {width}x{height} raster surface")]
    SurfaceCreation { width: i32, height: i32 },

    #[error("failed to read back surface pixels")]
    ReadPixels,

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
