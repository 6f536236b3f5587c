//! SVG rendering of a scheduled network.
//!
//! Each depth level becomes a column. A comparator is drawn as a vertical
//! line between two circles on its wires. Inside a column, a comparator whose
//! wire range meets one already drawn is nudged right by a third of a column.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::comparator::Comparator;
use crate::error::Result;
use crate::network::ComparisonNetwork;
use crate::schedule::{schedule, Schedule};

/// Drawing dimensions, in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvgStyle {
    /// Horizontal distance between columns
    pub x_scale: f64,
    /// Vertical distance between wires
    pub y_scale: f64,
    /// Radius of the comparator end circles
    pub radius: f64,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            x_scale: 35.0,
            y_scale: 20.0,
            radius: 3.0,
        }
    }
}

/// A comparator and the x position it is drawn at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub comparator: Comparator,
    pub x: f64,
}

/// Positions for every comparator and the document size.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgLayout {
    pub placements: Vec<Placement>,
    pub wire_count: usize,
    pub width: f64,
    pub height: f64,
    pub style: SvgStyle,
}

impl SvgLayout {
    /// Lay out a schedule over `wire_count` wires.
    pub fn new(schedule: &Schedule, wire_count: usize, style: SvgStyle) -> Self {
        let mut placements: Vec<Placement> = Vec::with_capacity(schedule.comparator_count());
        let mut column_x = style.x_scale;

        for level in &schedule.levels {
            let column_start = placements.len();
            let mut column_end = column_x;

            for c in &level.comparators {
                let mut x = column_x;
                for placed in &placements[column_start..] {
                    if placed.x >= x && c.intersects(&placed.comparator) {
                        x = placed.x + style.x_scale / 3.0;
                    }
                }
                column_end = column_end.max(x);
                placements.push(Placement { comparator: *c, x });
            }

            column_x = column_end + style.x_scale;
        }

        Self {
            placements,
            wire_count,
            width: column_x,
            height: (wire_count + 1) as f64 * style.y_scale,
            style,
        }
    }

    fn wire_y(&self, wire: usize) -> f64 {
        self.style.y_scale + wire as f64 * self.style.y_scale
    }
}

impl fmt::Display for SvgLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.style.radius;

        f.write_str("<?xml version='1.0' encoding='utf-8'?>")?;
        f.write_str("<!DOCTYPE svg>")?;
        write!(
            f,
            "<svg width='{}px' height='{}px' xmlns='http://www.w3.org/2000/svg'>",
            self.width, self.height
        )?;
        f.write_str("<rect width='100%' height='100%' fill='white' />")?;

        for p in &self.placements {
            let x = p.x;
            let y0 = self.wire_y(p.comparator.lo());
            let y1 = self.wire_y(p.comparator.hi());
            write!(
                f,
                "<circle cx='{x}' cy='{y0}' r='{r}' style='stroke:black;stroke-width:1;fill=yellow' />"
            )?;
            write!(
                f,
                "<line x1='{x}' y1='{y0}' x2='{x}' y2='{y1}' style='stroke:black;stroke-width:1' />"
            )?;
            write!(
                f,
                "<circle cx='{x}' cy='{y1}' r='{r}' style='stroke:black;stroke-width:1;fill=yellow' />"
            )?;
        }

        for wire in 0..self.wire_count {
            let y = self.wire_y(wire);
            write!(
                f,
                "<line x1='0' y1='{y}' x2='{}' y2='{y}' style='stroke:black;stroke-width:1' />",
                self.width
            )?;
        }

        f.write_str("</svg>")
    }
}

/// Render `network` as an SVG document using its canonical schedule.
pub fn render_svg(network: &ComparisonNetwork, style: SvgStyle) -> Result<String> {
    let schedule = schedule(network)?;
    let wire_count = network.wire_count()?;
    Ok(SvgLayout::new(&schedule, wire_count, style).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> ComparisonNetwork {
        s.parse().unwrap()
    }

    #[test]
    fn test_layout_columns() {
        let n = net("2:5,0:1,4:5,0:3");
        let layout = SvgLayout::new(&schedule(&n).unwrap(), 6, SvgStyle::default());
        let xs: Vec<(String, f64)> = layout
            .placements
            .iter()
            .map(|p| (p.comparator.to_string(), p.x))
            .collect();
        assert_eq!(
            xs,
            vec![
                ("2:5".to_string(), 35.0),
                ("0:1".to_string(), 35.0),
                ("0:3".to_string(), 70.0),
                ("4:5".to_string(), 70.0),
            ]
        );
        assert_eq!(layout.width, 105.0);
        assert_eq!(layout.height, 140.0);
    }

    #[test]
    fn test_layout_nudges_intersecting_comparators() {
        let n = net("0:3,1:2");
        let layout = SvgLayout::new(&schedule(&n).unwrap(), 4, SvgStyle::default());
        assert_eq!(layout.placements[0].x, 35.0);
        assert!((layout.placements[1].x - (35.0 + 35.0 / 3.0)).abs() < 1e-9);
        assert!((layout.width - (35.0 + 35.0 / 3.0 + 35.0)).abs() < 1e-9);
    }

    #[test]
    fn test_render_reference_network() {
        let expected = "<?xml version='1.0' encoding='utf-8'?><!DOCTYPE svg>\
<svg width='105px' height='140px' xmlns='http://www.w3.org/2000/svg'>\
<rect width='100%' height='100%' fill='white' />\
<circle cx='35' cy='60' r='3' style='stroke:black;stroke-width:1;fill=yellow' />\
<line x1='35' y1='60' x2='35' y2='120' style='stroke:black;stroke-width:1' />\
<circle cx='35' cy='120' r='3' style='stroke:black;stroke-width:1;fill=yellow' />\
<circle cx='35' cy='20' r='3' style='stroke:black;stroke-width:1;fill=yellow' />\
<line x1='35' y1='20' x2='35' y2='40' style='stroke:black;stroke-width:1' />\
<circle cx='35' cy='40' r='3' style='stroke:black;stroke-width:1;fill=yellow' />\
<circle cx='70' cy='20' r='3' style='stroke:black;stroke-width:1;fill=yellow' />\
<line x1='70' y1='20' x2='70' y2='80' style='stroke:black;stroke-width:1' />\
<circle cx='70' cy='80' r='3' style='stroke:black;stroke-width:1;fill=yellow' />\
<circle cx='70' cy='100' r='3' style='stroke:black;stroke-width:1;fill=yellow' />\
<line x1='70' y1='100' x2='70' y2='120' style='stroke:black;stroke-width:1' />\
<circle cx='70' cy='120' r='3' style='stroke:black;stroke-width:1;fill=yellow' />\
<line x1='0' y1='20' x2='105' y2='20' style='stroke:black;stroke-width:1' />\
<line x1='0' y1='40' x2='105' y2='40' style='stroke:black;stroke-width:1' />\
<line x1='0' y1='60' x2='105' y2='60' style='stroke:black;stroke-width:1' />\
<line x1='0' y1='80' x2='105' y2='80' style='stroke:black;stroke-width:1' />\
<line x1='0' y1='100' x2='105' y2='100' style='stroke:black;stroke-width:1' />\
<line x1='0' y1='120' x2='105' y2='120' style='stroke:black;stroke-width:1' />\
</svg>";

        for input in ["2:5,0:1,4:5,0:3", "2:5,4:5,0:1,0:3"] {
            let svg = render_svg(&net(input), SvgStyle::default()).unwrap();
            assert_eq!(svg, expected, "input {input}");
        }
    }

    #[test]
    fn test_render_empty_network() {
        assert!(render_svg(&ComparisonNetwork::new(), SvgStyle::default()).is_err());
    }
}
