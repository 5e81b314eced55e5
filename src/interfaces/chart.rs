use std::fmt::Write;

/// Default plot box the dashboard charts are stamped into.
pub const PLOT_WIDTH: f64 = 640.0;
pub const PLOT_HEIGHT: f64 = 220.0;

/// Maps a value series onto an SVG path inside a width x height box by
/// linear interpolation. A zero value range degrades to a flat line instead
/// of dividing by zero; an empty series yields an empty path.
pub fn build_line_path(values: &[f64], width: f64, height: f64, min: f64, max: f64) -> String {
    if values.is_empty() {
        return String::new();
    }

    let range = if max - min == 0.0 { 1.0 } else { max - min };
    let last_index = (values.len() - 1).max(1) as f64;

    let mut path = String::new();
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            path.push(' ');
        }
        let command = if index == 0 { 'M' } else { 'L' };
        let x = index as f64 / last_index * width;
        let y = height - (value - min) / range * height;
        let _ = write!(path, "{command}{x:.1},{y:.1}");
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series_yields_empty_path() {
        assert_eq!(build_line_path(&[], 640.0, 220.0, 0.0, 100.0), "");
    }

    #[test]
    fn test_endpoints_span_the_box() {
        let path = build_line_path(&[0.0, 50.0, 100.0], 640.0, 220.0, 0.0, 100.0);
        assert_eq!(path, "M0.0,220.0 L320.0,110.0 L640.0,0.0");
    }

    #[test]
    fn test_single_point_pins_to_left_edge() {
        let path = build_line_path(&[25.0], 100.0, 100.0, 0.0, 50.0);
        assert_eq!(path, "M0.0,50.0");
    }

    #[test]
    fn test_zero_range_degrades_to_flat_line() {
        let path = build_line_path(&[10.0, 10.0], 100.0, 100.0, 10.0, 10.0);
        // range substitutes 1, so both points sit on the same row
        assert_eq!(path, "M0.0,100.0 L100.0,100.0");
    }
}
