//! Vector graphics operators (rules, rectangles, circles)

use crate::document::Color;

/// Bezier control-point factor for approximating a quarter circle
const KAPPA: f64 = 0.552_284_749_831;

/// How a closed path is painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    /// Fill with the current fill color
    Fill,
    /// Stroke with the current stroke color and line width
    Stroke,
    /// Fill, then stroke
    FillStroke,
}

impl PaintMode {
    fn operator(self) -> &'static str {
        match self {
            PaintMode::Fill => "f",
            PaintMode::Stroke => "S",
            PaintMode::FillStroke => "B",
        }
    }
}

/// Graphics state applied around a path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphicsState {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub line_width: f64,
}

fn push_state(ops: &mut String, state: &GraphicsState) {
    ops.push_str("q\n");
    ops.push_str(&format!(
        "{} {} {} RG\n",
        state.stroke_color.r, state.stroke_color.g, state.stroke_color.b
    ));
    ops.push_str(&format!(
        "{} {} {} rg\n",
        state.fill_color.r, state.fill_color.g, state.fill_color.b
    ));
    ops.push_str(&format!("{} w\n", state.line_width));
}

/// Generate operators for a straight line between two points
///
/// Coordinates are PDF coordinates (points, Y from bottom).
pub fn generate_line_operators(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    state: &GraphicsState,
) -> Vec<u8> {
    let mut ops = String::new();
    push_state(&mut ops, state);
    ops.push_str(&format!("{x1} {y1} m\n{x2} {y2} l\nS\nQ\n"));
    ops.into_bytes()
}

/// Generate operators for a rectangle whose lower-left corner is (`x`, `y`)
pub fn generate_rect_operators(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    mode: PaintMode,
    state: &GraphicsState,
) -> Vec<u8> {
    let mut ops = String::new();
    push_state(&mut ops, state);
    ops.push_str(&format!("{x} {y} {width} {height} re\n{}\nQ\n", mode.operator()));
    ops.into_bytes()
}

/// Generate operators for a circle centered at (`cx`, `cy`)
///
/// The circle is approximated with four cubic Bezier segments.
pub fn generate_circle_operators(
    cx: f64,
    cy: f64,
    radius: f64,
    mode: PaintMode,
    state: &GraphicsState,
) -> Vec<u8> {
    let k = radius * KAPPA;
    let mut ops = String::new();
    push_state(&mut ops, state);

    ops.push_str(&format!("{} {} m\n", cx + radius, cy));
    ops.push_str(&format!(
        "{} {} {} {} {} {} c\n",
        cx + radius,
        cy + k,
        cx + k,
        cy + radius,
        cx,
        cy + radius
    ));
    ops.push_str(&format!(
        "{} {} {} {} {} {} c\n",
        cx - k,
        cy + radius,
        cx - radius,
        cy + k,
        cx - radius,
        cy
    ));
    ops.push_str(&format!(
        "{} {} {} {} {} {} c\n",
        cx - radius,
        cy - k,
        cx - k,
        cy - radius,
        cx,
        cy - radius
    ));
    ops.push_str(&format!(
        "{} {} {} {} {} {} c\n",
        cx + k,
        cy - radius,
        cx + radius,
        cy - k,
        cx + radius,
        cy
    ));
    ops.push_str(&format!("h\n{}\nQ\n", mode.operator()));

    ops.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GraphicsState {
        GraphicsState {
            stroke_color: Color::black(),
            fill_color: Color::white(),
            line_width: 0.5,
        }
    }

    #[test]
    fn test_line_operators() {
        let ops = String::from_utf8(generate_line_operators(10.0, 20.0, 30.0, 20.0, &state())).unwrap();
        assert!(ops.starts_with("q\n"));
        assert!(ops.contains("0 0 0 RG"));
        assert!(ops.contains("0.5 w"));
        assert!(ops.contains("10 20 m\n30 20 l\nS"));
        assert!(ops.ends_with("Q\n"));
    }

    #[test]
    fn test_rect_operators_fill_and_stroke() {
        let fill = String::from_utf8(generate_rect_operators(1.0, 2.0, 3.0, 4.0, PaintMode::Fill, &state())).unwrap();
        assert!(fill.contains("1 2 3 4 re\nf\n"));

        let stroke = String::from_utf8(generate_rect_operators(1.0, 2.0, 3.0, 4.0, PaintMode::Stroke, &state())).unwrap();
        assert!(stroke.contains("1 2 3 4 re\nS\n"));
    }

    #[test]
    fn test_circle_operators() {
        let ops = String::from_utf8(generate_circle_operators(50.0, 50.0, 10.0, PaintMode::FillStroke, &state())).unwrap();
        assert!(ops.contains("60 50 m"));
        assert_eq!(ops.matches(" c\n").count(), 4);
        assert!(ops.contains("h\nB\n"));
    }
}
