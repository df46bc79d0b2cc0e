// src/export.rs
//! KML point export

use crate::error::Result;
use crate::geo::{validate_points, Coordinate, PointInput};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const KML_EXTENSION: &str = "kml";

#[derive(Debug, Clone, PartialEq)]
struct Placemark {
    name: String,
    coordinate: Coordinate,
}

/// Builds a KML document with one named placemark per point
pub struct KmlExporter {
    document_name: String,
    placemarks: Vec<Placemark>,
}

impl KmlExporter {
    pub fn new(document_name: impl Into<String>) -> Self {
        Self {
            document_name: document_name.into(),
            placemarks: Vec::new(),
        }
    }

    /// Placemarks are named `Point 1`, `Point 2`, ... in path order
    pub fn from_coordinates(points: &[Coordinate]) -> Self {
        let mut exporter = Self::new("Distance Points");
        for (index, point) in points.iter().enumerate() {
            exporter.add_placemark(format!("Point {}", index + 1), *point);
        }
        exporter
    }

    pub fn add_placemark(&mut self, name: String, coordinate: Coordinate) {
        self.placemarks.push(Placemark { name, coordinate });
    }

    pub fn placemark_count(&self) -> usize {
        self.placemarks.len()
    }

    pub fn to_kml(&self) -> String {
        let mut kml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
"#,
        );
        kml.push_str(&format!("    <name>{}</name>\n", escape_xml(&self.document_name)));

        for placemark in &self.placemarks {
            kml.push_str("    <Placemark>\n");
            kml.push_str(&format!("      <name>{}</name>\n", escape_xml(&placemark.name)));
            kml.push_str("      <Point>\n");
            // KML wants longitude first
            kml.push_str(&format!(
                "        <coordinates>{},{}</coordinates>\n",
                placemark.coordinate.longitude, placemark.coordinate.latitude
            ));
            kml.push_str("      </Point>\n");
            kml.push_str("    </Placemark>\n");
        }

        kml.push_str("  </Document>\n</kml>\n");
        kml
    }

    /// Write the document, replacing `path` only once the content is complete.
    ///
    /// The data goes to a temporary file next to the target which is then
    /// renamed over it. On error the temporary file is dropped (and deleted).
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(self.to_kml().as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(path)?;

        tracing::info!(
            path = %path.display(),
            placemarks = self.placemark_count(),
            "KML export written"
        );
        Ok(())
    }
}

/// Validate the input rows the same way the distance calculation does and
/// export them. Returns the path actually written.
pub fn export_points(inputs: &[PointInput], path: &Path) -> Result<PathBuf> {
    let points = validate_points(inputs)?;
    let path = with_kml_extension(path);
    KmlExporter::from_coordinates(&points).write_to_file(&path)?;
    Ok(path)
}

/// Append `.kml` when the chosen file name has no extension
pub fn with_kml_extension(path: &Path) -> PathBuf {
    let mut path = path.to_path_buf();
    if path.extension().is_none() {
        path.set_extension(KML_EXTENSION);
    }
    path
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::geo::ValidationError;

    #[test]
    fn test_longitude_first() {
        let exporter =
            KmlExporter::from_coordinates(&[Coordinate::new(1.0, 2.0), Coordinate::new(3.0, 4.0)]);
        let kml = exporter.to_kml();

        assert_eq!(exporter.placemark_count(), 2);
        assert!(kml.contains("<name>Point 1</name>"));
        assert!(kml.contains("<name>Point 2</name>"));
        assert!(kml.contains("<coordinates>2,1</coordinates>"));
        assert!(kml.contains("<coordinates>4,3</coordinates>"));
        assert_eq!(kml.matches("<Placemark>").count(), 2);
    }

    #[test]
    fn test_names_are_escaped() {
        let mut exporter = KmlExporter::new("A & B");
        exporter.add_placemark("<start>".to_string(), Coordinate::new(0.5, -0.25));
        let kml = exporter.to_kml();
        assert!(kml.contains("<name>A &amp; B</name>"));
        assert!(kml.contains("<name>&lt;start&gt;</name>"));
        assert!(kml.contains("<coordinates>-0.25,0.5</coordinates>"));
    }

    #[test]
    fn test_export_points_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = vec![
            PointInput::new("1.0", "2.0"),
            PointInput::new("3.0", "4.0"),
            PointInput::new("", ""),
            PointInput::new("5.5", "6.5"),
        ];

        let written = export_points(&inputs, &dir.path().join("route")).unwrap();
        assert_eq!(written, dir.path().join("route.kml"));

        let content = std::fs::read_to_string(&written).unwrap();
        assert!(content.contains("<coordinates>2,1</coordinates>"));
        assert!(content.contains("<coordinates>4,3</coordinates>"));
        assert!(content.contains("<coordinates>6.5,5.5</coordinates>"));
        assert!(content.contains("<name>Point 3</name>"));

        // Only the target remains, no stray temp file
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("points.kml");
        std::fs::write(&target, "old").unwrap();

        let inputs = vec![PointInput::new("1", "2"), PointInput::new("3", "4")];
        export_points(&inputs, &target).unwrap();

        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.starts_with("<?xml"));
    }

    #[test]
    fn test_export_requires_two_points() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("points.kml");
        let inputs = vec![PointInput::new("1", "2")];

        match export_points(&inputs, &target) {
            Err(AppError::Validation(ValidationError::TooFewPoints)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(!target.exists());
    }

    #[test]
    fn test_failed_write_leaves_target_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing-dir").join("points.kml");
        let inputs = vec![PointInput::new("1", "2"), PointInput::new("3", "4")];

        assert!(matches!(export_points(&inputs, &target), Err(AppError::Io(_))));
        assert!(!target.exists());
    }

    #[test]
    fn test_extension_kept_when_present() {
        assert_eq!(with_kml_extension(Path::new("a/b.xml")), PathBuf::from("a/b.xml"));
        assert_eq!(with_kml_extension(Path::new("a/b")), PathBuf::from("a/b.kml"));
    }
}
