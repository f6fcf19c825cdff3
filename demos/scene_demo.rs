#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
//! Builds a small scene of labeled figures and writes screenshots.
//!
//! Run with: cargo run --example scene_demo
//!
//! Outputs images to photos/ (or the directory in `FIGVIEW_CONFIG`'s
//! `screenshot_dir` when that variable names a JSON options file).

use std::f32::consts::TAU;

use figview::*;

// ─── Geometry helpers ───────────────────────────────────────────────────────

/// Revolves a profile polyline (radius, height) around the Z axis.
fn revolve(profile: &[(f32, f32)], segments: u32) -> Mesh {
    let rings = profile.len() as u32;
    let mut vertices = Vec::with_capacity((rings * segments) as usize);
    for &(r, z) in profile {
        for s in 0..segments {
            let a = TAU * s as f32 / segments as f32;
            vertices.push(Vec3::new(r * a.cos(), r * a.sin(), z));
        }
    }
    let mut faces = Vec::new();
    for ring in 0..rings - 1 {
        for s in 0..segments {
            let next = (s + 1) % segments;
            faces.push(vec![
                ring * segments + s,
                ring * segments + next,
                (ring + 1) * segments + next,
                (ring + 1) * segments + s,
            ]);
        }
    }
    Mesh::new(vertices, faces)
}

fn cone(radius: f32, height: f32) -> Mesh {
    revolve(&[(radius, 0.0), (radius * 0.5, height * 0.5), (0.01, height)], 24)
}

fn vase() -> Mesh {
    revolve(
        &[(0.6, 0.0), (0.9, 0.4), (0.7, 0.9), (0.4, 1.3), (0.55, 1.6)],
        32,
    )
}

fn plane(size: f32) -> Mesh {
    Mesh::new(
        vec![
            Vec3::new(-size, -size, 0.0),
            Vec3::new(size, -size, 0.0),
            Vec3::new(size, size, 0.0),
            Vec3::new(-size, size, 0.0),
        ],
        vec![vec![0, 1, 2, 3]],
    )
}

fn load_options() -> Result<ViewerOptions> {
    match std::env::var("FIGVIEW_CONFIG") {
        Ok(path) => ViewerOptions::from_json_file(path),
        Err(_) => Ok(ViewerOptions::default().with_window_size(800, 600)),
    }
}

fn main() -> Result<()> {
    init_logging();

    let mut scene = SceneRegistry::headless(load_options()?);

    let cone_labels = LabelSource::default()
        .with_mesh(Mesh::polyline(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, 2.0)]))
        .with_mesh(Mesh::polyline(vec![Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0)]))
        .with_point("apex", Vec3::new(0.0, 0.0, 2.0))
        .with_point("r", Vec3::new(1.0, 0.0, 0.0));

    let floor = DrawOptions::with_color(color::GRAY);
    scene.add("floor", plane(3.0), FigureKind::Plane, None, floor)?;
    scene.add(
        "cone",
        cone(1.0, 2.0),
        FigureKind::Cone,
        Some(cone_labels),
        DrawOptions::with_color(color::BLUE).opacity(0.8),
    )?;
    scene.add(
        "vase",
        vase(),
        FigureKind::Revolution,
        None,
        DrawOptions::with_color(color::YELLOW),
    )?;

    scene.highlight("cone", DEFAULT_HIGHLIGHT_COLOR, DEFAULT_HIGHLIGHT_WIDTH)?;
    scene.highlight("vase", color::PURPLE, 2.0)?;
    scene.add_label(
        "cone",
        DEFAULT_LABEL_POINT_SIZE,
        DEFAULT_LABEL_LINE_WIDTH,
        DEFAULT_LABEL_FONT_SIZE,
    )?;
    scene.take_screenshot("scene_iso.png")?;

    scene.view_xz();
    scene.show_edges("floor", DEFAULT_EDGE_COLOR)?;
    scene.take_screenshot("scene_xz.png")?;

    let curve = Mesh::polyline(
        (0..=32)
            .map(|i| {
                let a = TAU * i as f32 / 32.0;
                Vec3::new(0.75 * a.cos(), 0.75 * a.sin(), 0.5)
            })
            .collect(),
    );
    scene.add_intersections([&curve], DEFAULT_INTERSECTION_COLOR, DEFAULT_INTERSECTION_OPACITY)?;
    scene.hide("floor")?;
    scene.blur();
    scene.take_screenshot("scene_blurred.jpg")?;

    scene.remove_blur();
    scene.remove_intersections()?;
    scene.clear()?;
    log::info!("demo finished, {} figures left", scene.len());
    Ok(())
}
