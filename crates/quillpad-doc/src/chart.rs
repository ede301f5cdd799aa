//! Static demonstration chart.
//!
//! Create Chart always renders the same hard-coded line chart. The output
//! path is fixed per session and silently overwritten on every invocation;
//! only the thumbnail made from it afterwards gets a unique scratch file.

use std::path::Path;

use plotters::prelude::*;

use crate::{DocError, DocResult};

/// Sample data drawn by every chart invocation.
const CHART_POINTS: [(f64, f64); 3] = [(1.0, 4.0), (2.0, 5.0), (3.0, 6.0)];

/// Rendered chart dimensions, in pixels.
pub const CHART_SIZE: (u32, u32) = (640, 480);

/// Caption drawn above the plot area.
pub const CHART_TITLE: &str = "Simple chart";

/// Renders the fixed demonstration line chart to `path` as a PNG,
/// overwriting any previous chart at that path.
pub fn render_sample_chart(path: &Path) -> DocResult<()> {
    tracing::debug!(path = %path.display(), "rendering sample chart");

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| DocError::Chart(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(0.5f64..3.5f64, 3.5f64..6.5f64)
        .map_err(|e| DocError::Chart(e.to_string()))?;

    chart
        .configure_mesh()
        .draw()
        .map_err(|e| DocError::Chart(e.to_string()))?;

    chart
        .draw_series(LineSeries::new(CHART_POINTS.iter().copied(), &BLUE))
        .map_err(|e| DocError::Chart(e.to_string()))?;

    root.present().map_err(|e| DocError::Chart(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

    #[test]
    fn test_renders_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        render_sample_chart(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(&PNG_MAGIC));

        let dims = ::image::image_dimensions(&path).unwrap();
        assert_eq!(dims, CHART_SIZE);
    }

    #[test]
    fn test_overwrites_previous_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        render_sample_chart(&path).unwrap();
        let first = std::fs::metadata(&path).unwrap().modified().unwrap();

        // Put the second render past the filesystem's mtime granularity.
        std::thread::sleep(std::time::Duration::from_millis(50));

        render_sample_chart(&path).unwrap();
        assert!(path.exists());
        // Same fixed path, rewritten in place.
        let second = std::fs::metadata(&path).unwrap().modified().unwrap();
        assert!(second > first);
    }
}
