use std::{io::Write, path::Path};

use anyhow::Result;

use crate::{
    io::svg::{escape_xml, write_svg_footer, write_svg_header, write_svg_styles, SvgStringWriter, SvgWriter},
    render::{Scene, SceneKind, Shape},
};

/// Line offset of a sublabel below its label.
const SUBLABEL_DY: f64 = 10.0;

impl Scene {
    /// Write the scene as an SVG document to `path`.
    pub fn to_svg(&self, path: &Path) -> Result<()> {
        let mut writer = SvgWriter::new(path)?;
        self.write_svg(&mut writer)?;
        writer.finish()
    }

    /// Render the scene as an SVG document string.
    pub fn to_svg_string(&self) -> Result<String> {
        let mut writer = SvgStringWriter::new();
        self.write_svg(&mut writer)?;
        writer.into_string()
    }

    fn write_svg(&self, writer: &mut impl Write) -> Result<()> {
        let kind = match self.kind {
            SceneKind::Geographic => "geographic",
            SceneKind::Grid => "grid",
        };
        write_svg_header(writer, self.width, self.height, kind)?;
        write_svg_styles(writer)?;

        for shape in &self.shapes {
            draw_shape(writer, shape)?;
        }
        // Labels above every fill.
        for shape in &self.shapes {
            draw_label(writer, shape)?;
        }

        write_svg_footer(writer)
    }
}

fn draw_shape(writer: &mut impl Write, shape: &Shape) -> Result<()> {
    let data = shape.precinct.map(|p| format!(r#" data-precinct="{p}""#)).unwrap_or_default();
    writeln!(writer, r#"<path class="precinct"{data} d="{}" fill="{}" stroke="{}" stroke-width="{}"/>"#,
        shape.path,
        escape_xml(&shape.fill),
        shape.stroke.color(),
        shape.stroke.width(),
    )?;
    Ok(())
}

fn draw_label(writer: &mut impl Write, shape: &Shape) -> Result<()> {
    let Some(label) = &shape.label else { return Ok(()) };
    let class = if label.muted { "label muted" } else { "label" };
    writeln!(writer, r#"<text class="{class}" x="{:.2}" y="{:.2}">{}</text>"#,
        label.x, label.y, escape_xml(&label.text))?;
    if let Some(sublabel) = &label.sublabel {
        writeln!(writer, r#"<text class="sublabel" x="{:.2}" y="{:.2}">{}</text>"#,
            label.x, label.y + SUBLABEL_DY, escape_xml(sublabel))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use geo::MultiPolygon;

    use super::*;
    use crate::render::{Label, Stroke};

    fn scene() -> Scene {
        Scene {
            width: 600.0,
            height: 400.0,
            kind: SceneKind::Geographic,
            shapes: vec![
                Shape {
                    precinct: Some(303),
                    path: "M 1.00,1.00 L 5.00,1.00 L 5.00,5.00 Z".into(),
                    fill: "#DC2626".into(),
                    stroke: Stroke::Selected,
                    label: Some(Label { x: 3.0, y: 2.5, text: "303".into(), sublabel: None, muted: false }),
                    has_data: true,
                    outline: MultiPolygon(vec![]),
                },
                Shape {
                    precinct: None,
                    path: "M 9.00,9.00 L 12.00,9.00 L 12.00,12.00 Z".into(),
                    fill: "#F3F4F6".into(),
                    stroke: Stroke::Normal,
                    label: None,
                    has_data: false,
                    outline: MultiPolygon(vec![]),
                },
            ],
        }
    }

    #[test]
    fn serializes_paths_then_labels() {
        let svg = scene().to_svg_string().unwrap();
        assert!(svg.contains(r##"data-precinct="303" d="M 1.00,1.00 L 5.00,1.00 L 5.00,5.00 Z" fill="#DC2626" stroke="#1f2937" stroke-width="2""##));
        assert!(svg.contains(r##"fill="#F3F4F6" stroke="#9ca3af" stroke-width="0.5""##));
        assert!(svg.contains(r#"<text class="label" x="3.00" y="2.50">303</text>"#));
        assert!(svg.find("<text").unwrap() > svg.rfind("<path").unwrap());
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.svg");
        scene().to_svg(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), scene().to_svg_string().unwrap());
    }
}
