use super::{FaceId, Polygon};
use crate::{
    core::traits::Real,
    shape::{Arc, EdgeShape},
};
use std::fmt::Write;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Presentation attributes of the `<path>` element written by [Polygon::svg].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SvgAttrs<T = f64> {
    pub stroke: String,
    pub stroke_width: T,
    pub fill: String,
    pub fill_rule: String,
    pub fill_opacity: T,
    pub id: Option<String>,
    pub class_name: Option<String>,
}

impl<T> SvgAttrs<T>
where
    T: Real,
{
    pub fn new() -> Self {
        Self {
            stroke: "black".to_string(),
            stroke_width: T::one(),
            fill: "lightcyan".to_string(),
            fill_rule: "evenodd".to_string(),
            fill_opacity: T::one(),
            id: None,
            class_name: None,
        }
    }
}

impl<T> Default for SvgAttrs<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Polygon<T>
where
    T: Real,
{
    /// SVG `<path>` element drawing every face as one sub path.
    ///
    /// # Examples
    ///
    /// ```
    /// # use planar_kernel::polygon;
    /// # use planar_kernel::topology::SvgAttrs;
    /// let triangle = polygon![(0.0, 0.0), (4.0, 0.0), (0.0, 3.0)];
    /// let svg = triangle.svg(&SvgAttrs::default());
    /// assert!(svg.contains("d=\"M0,0 L4,0 L0,3 L0,0 z\""));
    /// assert!(svg.starts_with("\n<path stroke=\"black\" stroke-width=\"1\""));
    /// ```
    pub fn svg(&self, attrs: &SvgAttrs<T>) -> String {
        let id_str = attrs
            .id
            .as_ref()
            .map(|id| format!("id=\"{id}\""))
            .unwrap_or_default();
        let class_str = attrs
            .class_name
            .as_ref()
            .map(|c| format!("class=\"{c}\""))
            .unwrap_or_default();

        let mut d = String::new();
        for face in self.faces() {
            self.write_face_path(face, &mut d);
        }

        format!(
            "\n<path stroke=\"{}\" stroke-width=\"{}\" fill=\"{}\" fill-rule=\"{}\" \
             fill-opacity=\"{}\" {} {} d=\"{}\" >\n</path>",
            attrs.stroke,
            attrs.stroke_width,
            attrs.fill,
            attrs.fill_rule,
            attrs.fill_opacity,
            id_str,
            class_str,
            d.trim_end()
        )
    }

    fn write_face_path(&self, face: FaceId, out: &mut String) {
        let mut edges = self.face_edges(face).peekable();
        let Some(&first) = edges.peek() else {
            return;
        };
        let start = self.edge_ref(first).shape.start();
        // writing to a String cannot fail
        let _ = write!(out, "M{},{}", start.x, start.y);

        for e in edges {
            match &self.edge_ref(e).shape {
                EdgeShape::Segment(s) => {
                    let _ = write!(out, " L{},{}", s.end().x, s.end().y);
                }
                EdgeShape::Arc(a) if a.is_full_circle() => {
                    let mid = a.point_at(T::half());
                    let sweep_flag = a.counter_clockwise as u8;
                    let _ = write!(out, " A{},{} 0 0,{} {},{}", a.r, a.r, sweep_flag, mid.x, mid.y);
                    let end = a.end();
                    let _ = write!(out, " A{},{} 0 0,{} {},{}", a.r, a.r, sweep_flag, end.x, end.y);
                }
                EdgeShape::Arc(a) => write_arc(a, out),
            }
        }
        out.push_str(" z ");
    }
}

fn write_arc<T>(a: &Arc<T>, out: &mut String)
where
    T: Real,
{
    let large_flag = (a.sweep() > T::pi()) as u8;
    let sweep_flag = a.counter_clockwise as u8;
    let end = a.end();
    let _ = write!(
        out,
        " A{},{} 0 {},{} {},{}",
        a.r, a.r, large_flag, sweep_flag, end.x, end.y
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::math::vec2, shape::Circle};

    #[test]
    fn attributes_written() {
        let p = polygon![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)];
        let attrs = SvgAttrs {
            id: Some("tri".to_string()),
            class_name: Some("shape".to_string()),
            fill: "none".to_string(),
            ..SvgAttrs::default()
        };
        let svg = p.svg(&attrs);
        assert!(svg.contains("fill=\"none\""));
        assert!(svg.contains("id=\"tri\" class=\"shape\""));
        assert!(svg.ends_with(" >\n</path>"));
    }

    #[test]
    fn full_circle_as_two_halves() {
        let p = Polygon::from_circle(&Circle::new(vec2(0.0, 0.0), 2.0)).unwrap();
        let svg = p.svg(&SvgAttrs::default());
        assert_eq!(svg.matches(" A2,2 0 0,1 ").count(), 2);
        assert!(svg.contains(" z\""));
    }

    #[test]
    fn one_sub_path_per_face() {
        let outer = [vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, 10.0), vec2(0.0, 10.0)];
        let hole = [vec2(2.0, 2.0), vec2(2.0, 4.0), vec2(4.0, 4.0), vec2(4.0, 2.0)];
        let p = Polygon::from_loops(&[&outer[..], &hole[..]]).unwrap();
        let svg = p.svg(&SvgAttrs::default());
        assert_eq!(svg.matches('M').count(), 2);
        assert_eq!(svg.matches(" z").count(), 2);
    }
}
