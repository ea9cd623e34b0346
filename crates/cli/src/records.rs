//! Polygon record files: one polygon per line, `x,y` pairs separated by `;`.
//!
//! Blank lines and `#` comments are skipped. Records with fewer than three
//! vertices are rejected, matching what the drawing front end can close.

use anyhow::{bail, ensure, Context, Result};
use polypip::Point;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// A polygon plus the 1-based line it came from (for messages).
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub line: usize,
    pub vertices: Vec<Point>,
}

pub fn parse_point(s: &str) -> Result<Point> {
    let Some((x, y)) = s.split_once(',') else {
        bail!("expected `x,y`, got {s:?}");
    };
    let x: f64 = x.trim().parse().with_context(|| format!("bad x coordinate in {s:?}"))?;
    let y: f64 = y.trim().parse().with_context(|| format!("bad y coordinate in {s:?}"))?;
    ensure!(x.is_finite() && y.is_finite(), "non-finite coordinate in {s:?}");
    Ok(Point::new(x, y))
}

pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let mut out = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let vertices = line
            .split(';')
            .filter(|part| !part.trim().is_empty())
            .map(parse_point)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("line {}", i + 1))?;
        ensure!(
            vertices.len() >= 3,
            "line {}: polygon needs at least 3 vertices, got {}",
            i + 1,
            vertices.len()
        );
        out.push(Record {
            line: i + 1,
            vertices,
        });
    }
    Ok(out)
}

pub fn format_records<'a, I>(polygons: I) -> String
where
    I: IntoIterator<Item = &'a [Point]>,
{
    let mut out = String::new();
    for poly in polygons {
        let line = poly
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(";");
        let _ = writeln!(out, "{line}");
    }
    out
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_records(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn save<P: AsRef<Path>>(path: P, polygons: &[Vec<Point>]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    let text = format_records(polygons.iter().map(Vec::as_slice));
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parses_integer_records_with_comments() {
        let text = "# saved by the drawer\n334,262;210,352;302,406\n\n0,0;4,0;4,4;0,4\n";
        let recs = parse_records(text).unwrap();
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].line, 2);
        assert_eq!(recs[0].vertices[1], Point::new(210.0, 352.0));
        assert_eq!(recs[1].line, 4);
        assert_eq!(recs[1].vertices.len(), 4);
    }

    #[test]
    fn rejects_short_and_malformed_lines() {
        let err = parse_records("0,0;1,1\n").unwrap_err();
        assert!(err.to_string().contains("line 1"));
        let err = parse_records("0,0;1;2,2\n").unwrap_err();
        assert!(format!("{err:#}").contains("expected `x,y`"));
        assert!(parse_records("0,0;nan,1;2,2\n").is_err());
    }

    #[test]
    fn parse_point_trims() {
        assert_eq!(parse_point(" 1.5 , -2 ").unwrap(), Point::new(1.5, -2.0));
        assert!(parse_point("1.5").is_err());
    }

    #[test]
    fn save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/polygons.txt");
        let polys = vec![
            vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 4.0)],
            vec![
                Point::new(0.25, -1.5),
                Point::new(3.0, 0.0),
                Point::new(3.0, 2.0),
                Point::new(0.0, 2.0),
            ],
        ];
        save(&path, &polys).unwrap();
        let recs = load(&path).unwrap();
        let loaded: Vec<Vec<Point>> = recs.into_iter().map(|r| r.vertices).collect();
        assert_eq!(loaded, polys);
    }
}
