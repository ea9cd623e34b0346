use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use polypip::api::{
    classify, draw_convex_radial, draw_star_radial, inside_even_odd, inside_convex, is_convex,
    orientation, signed_area, trace_concavity_removal, Point, PolygonReplay, RadialCfg,
    VertexCount,
};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod records;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "polypip")]
#[command(about = "Point-in-polygon queries over polygon record files")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Test one point against every polygon in a record file
    Test {
        #[arg(long)]
        polygons: PathBuf,
        /// Query point as `x,y`
        #[arg(long, value_parser = parse_point_arg, allow_hyphen_values = true)]
        point: Point,
        #[arg(long, value_enum, default_value_t = Method::Concave)]
        method: Method,
        /// Write JSON results (plus provenance sidecar) here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the concavity-removal trace of each polygon as JSON
    Trace {
        #[arg(long)]
        polygons: PathBuf,
        /// Only trace the polygon at this 0-based record index
        #[arg(long)]
        index: Option<usize>,
    },
    /// Validate polygons and report orientation, area and convexity
    Check {
        #[arg(long)]
        polygons: PathBuf,
    },
    /// Write random polygons in record format
    Gen {
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Vertex count `N` or range `MIN-MAX`
        #[arg(long, default_value = "6-12", value_parser = parse_vertex_count)]
        vertices: VertexCount,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Star-shaped (usually concave) instead of convex
        #[arg(long)]
        star: bool,
        /// Scale applied to the unit-radius samples
        #[arg(long, default_value_t = 100.0)]
        radius: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
enum Method {
    /// Concavity removal, then half-plane test
    Concave,
    /// Half-plane test only (assumes convex input)
    Convex,
    /// Ray casting
    EvenOdd,
}

#[derive(Serialize)]
struct TestRow {
    line: usize,
    inside: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    removals: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct TraceStep {
    polygon: Vec<[f64; 2]>,
    concavity: Option<usize>,
    triangle: Option<[[f64; 2]; 3]>,
}

#[derive(Serialize)]
struct CheckRow {
    line: usize,
    vertices: usize,
    signed_area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    orientation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    convex: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Test {
            polygons,
            point,
            method,
            out,
        } => test(polygons, point, method, out, cmd.tag),
        Action::Trace { polygons, index } => trace(polygons, index),
        Action::Check { polygons } => check(polygons),
        Action::Gen {
            count,
            vertices,
            seed,
            star,
            radius,
            out,
        } => generate(count, vertices, seed, star, radius, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn parse_point_arg(s: &str) -> Result<Point> {
    records::parse_point(s)
}

fn parse_vertex_count(s: &str) -> Result<VertexCount> {
    let count = match s.split_once('-') {
        Some((lo, hi)) => VertexCount::Uniform {
            min: lo.trim().parse().context("bad minimum vertex count")?,
            max: hi.trim().parse().context("bad maximum vertex count")?,
        },
        None => VertexCount::Fixed(s.trim().parse().context("bad vertex count")?),
    };
    match count {
        VertexCount::Fixed(n) if n < 3 => bail!("polygons need at least 3 vertices"),
        VertexCount::Uniform { min, max } if min < 3 || max < min => {
            bail!("vertex range must satisfy 3 <= MIN <= MAX")
        }
        _ => Ok(count),
    }
}

fn test_one(point: Point, vertices: &[Point], method: Method) -> (Option<bool>, Option<usize>, Option<String>) {
    let result = match method {
        Method::Concave => classify(point, vertices).map(|v| (v.inside, Some(v.removals))),
        Method::Convex => orientation(vertices)
            .and_then(|o| inside_convex(point, vertices, o))
            .map(|inside| (inside, None)),
        Method::EvenOdd => Ok((inside_even_odd(point, vertices), None)),
    };
    match result {
        Ok((inside, removals)) => (Some(inside), removals, None),
        Err(e) => (None, None, Some(e.to_string())),
    }
}

fn test(
    polygons: PathBuf,
    point: Point,
    method: Method,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    let recs = records::load(&polygons)?;
    tracing::info!(polygons = recs.len(), point = ?(point.x, point.y), method = ?method, tag = ?tag, "test");
    let mut rows = Vec::with_capacity(recs.len());
    for rec in &recs {
        let (inside, removals, error) = test_one(point, &rec.vertices, method);
        match (&inside, &error) {
            (Some(inside), _) => println!(
                "line {}: {}",
                rec.line,
                if *inside { "inside" } else { "outside" }
            ),
            (None, Some(e)) => {
                tracing::warn!(line = rec.line, error = %e, "invalid polygon");
                println!("line {}: invalid ({e})", rec.line);
            }
            (None, None) => {}
        }
        rows.push(TestRow {
            line: rec.line,
            inside,
            removals,
            error,
        });
    }

    if let Some(out) = out {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating dir {}", parent.display()))?;
            }
        }
        std::fs::write(&out, serde_json::to_vec_pretty(&rows)?)
            .with_context(|| format!("writing {}", out.display()))?;
        let payload = Payload::new(
            "test",
            json!({
                "polygons": polygons,
                "point": [point.x, point.y],
                "method": method,
            }),
            tag,
        );
        provenance::write_sidecar(&out, payload)?;
    }
    Ok(())
}

fn trace(polygons: PathBuf, index: Option<usize>) -> Result<()> {
    let recs = records::load(&polygons)?;
    tracing::info!(polygons = recs.len(), index = ?index, "trace");
    let selected: Vec<&records::Record> = match index {
        Some(i) => vec![recs
            .get(i)
            .with_context(|| format!("record index {i} out of range ({} records)", recs.len()))?],
        None => recs.iter().collect(),
    };
    let mut doc = Vec::with_capacity(selected.len());
    for rec in selected {
        let entry = match trace_concavity_removal(&rec.vertices) {
            Ok(steps) => {
                let steps: Vec<TraceStep> = steps
                    .into_iter()
                    .map(|s| TraceStep {
                        polygon: s.polygon.iter().map(|p| [p.x, p.y]).collect(),
                        concavity: s.concavity,
                        triangle: s.triangle.map(|t| t.map(|p| [p.x, p.y])),
                    })
                    .collect();
                json!({ "line": rec.line, "steps": steps })
            }
            Err(e) => json!({ "line": rec.line, "error": e.to_string() }),
        };
        doc.push(entry);
    }
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

fn check(polygons: PathBuf) -> Result<()> {
    let recs = records::load(&polygons)?;
    tracing::info!(polygons = recs.len(), "check");
    let rows: Vec<CheckRow> = recs.iter().map(check_one).collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

fn check_one(rec: &records::Record) -> CheckRow {
    let mut row = CheckRow {
        line: rec.line,
        vertices: rec.vertices.len(),
        signed_area: signed_area(&rec.vertices),
        orientation: None,
        convex: None,
        error: None,
    };
    match orientation(&rec.vertices).and_then(|o| Ok((o, is_convex(&rec.vertices)?))) {
        Ok((o, convex)) => {
            row.orientation = Some(o.to_string());
            row.convex = Some(convex);
        }
        Err(e) => row.error = Some(e.to_string()),
    }
    row
}

fn generate(
    count: usize,
    vertices: VertexCount,
    seed: u64,
    star: bool,
    radius: f64,
    out: PathBuf,
    tag: Option<String>,
) -> Result<()> {
    tracing::info!(count, seed, star, radius, out = %out.display(), "gen");
    let cfg = RadialCfg {
        vertex_count: vertices,
        base_radius: radius,
        radial_jitter: if star { 0.6 } else { 0.25 },
        ..RadialCfg::default()
    };
    let mut tok = PolygonReplay { seed, index: 0 };
    let mut polys = Vec::with_capacity(count);
    while polys.len() < count {
        let poly = if star {
            Some(draw_star_radial(cfg, tok))
        } else {
            draw_convex_radial(cfg, tok)
        };
        match poly {
            Some(p) => polys.push(p),
            None => tracing::debug!(index = tok.index, "hull collapsed; skipping draw"),
        }
        tok = tok.next();
    }
    records::save(&out, &polys)?;
    let payload = Payload::new(
        "gen",
        json!({
            "count": count,
            "vertices": format!("{vertices:?}"),
            "seed": seed,
            "star": star,
            "radius": radius,
        }),
        tag,
    );
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new("report", json!({}), tag);
    println!("{}", serde_json::to_string_pretty(&provenance::block(&payload, &[]))?);
    Ok(())
}
