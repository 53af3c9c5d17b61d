#![allow(dead_code)]

use bluenoise::geom::tri::Triangle;
use bluenoise::{Mesh, Point};

use chrono::prelude::*;

use simplelog::*;

use std::fs::{create_dir_all, File};
use std::path::PathBuf;

pub fn prepare_test_directory(test_directory_name: &str) -> PathBuf {
    let test_output_parent_directory = "test_output";

    let mut path_buf = PathBuf::from(test_output_parent_directory);
    path_buf.push(format!("{}-{}", filename_timestamp(), test_directory_name));

    create_dir_all(&path_buf).expect("Test output directory could not be created");

    let log_file = create_log_file(&mut path_buf);

    // Only the first test in a binary gets to install the logger
    let _ = CombinedLogger::init(
        vec![
            TermLogger::new(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
            WriteLogger::new(LevelFilter::Trace, Config::default(), log_file),
        ]
    );

    log::info!("Created test directory {:?} and initialized logging", path_buf);

    path_buf
}

fn create_log_file(parent_directory: &mut PathBuf) -> File {
    parent_directory.push(format!("log-{}", filename_timestamp()));
    parent_directory.set_extension("log");

    let log_file = File::create(&parent_directory).expect("Log file could not be created");
    // Restore state before pushing and setting extension
    parent_directory.pop();

    log_file
}

/// Returns the current time formatted like "2014-11-28T120009.123456789+0000", i.e.
/// an ISO 8601 timestamp with the colons removed, since colons are traditionally
/// used as directory separators on mac and linux
fn filename_timestamp() -> String {
    Utc::now()
        .to_rfc3339()
        .replace(":", "")
}

/// Surface of the unit cube [0,1]^3 as twelve triangles.
pub fn unit_cube() -> Mesh {
    let corner = |x: f64, y: f64, z: f64| [x, y, z];
    let quads = [
        // z = 0 and z = 1
        [corner(0.0, 0.0, 0.0), corner(1.0, 0.0, 0.0), corner(1.0, 1.0, 0.0), corner(0.0, 1.0, 0.0)],
        [corner(0.0, 0.0, 1.0), corner(1.0, 0.0, 1.0), corner(1.0, 1.0, 1.0), corner(0.0, 1.0, 1.0)],
        // y = 0 and y = 1
        [corner(0.0, 0.0, 0.0), corner(1.0, 0.0, 0.0), corner(1.0, 0.0, 1.0), corner(0.0, 0.0, 1.0)],
        [corner(0.0, 1.0, 0.0), corner(1.0, 1.0, 0.0), corner(1.0, 1.0, 1.0), corner(0.0, 1.0, 1.0)],
        // x = 0 and x = 1
        [corner(0.0, 0.0, 0.0), corner(0.0, 1.0, 0.0), corner(0.0, 1.0, 1.0), corner(0.0, 0.0, 1.0)],
        [corner(1.0, 0.0, 0.0), corner(1.0, 1.0, 0.0), corner(1.0, 1.0, 1.0), corner(1.0, 0.0, 1.0)]
    ];

    Mesh::new(
        quads.iter()
            .flat_map(|q| vec![
                Triangle::from_arrays(q[0], q[1], q[2]),
                Triangle::from_arrays(q[0], q[2], q[3])
            ])
            .collect()
    )
}

/// Flat square [0,side]^2 in the z = 0 plane as two triangles.
pub fn flat_square(side: f64) -> Mesh {
    Mesh::new(vec![
        Triangle::from_arrays([0.0, 0.0, 0.0], [side, 0.0, 0.0], [side, side, 0.0]),
        Triangle::from_arrays([0.0, 0.0, 0.0], [side, side, 0.0], [0.0, side, 0.0])
    ])
}

pub fn distance(a: Point, b: Point) -> f64 {
    let d = a - b;
    (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
}

/// Smallest distance between any two of the points.
pub fn min_pairwise_distance(points: &[Point]) -> f64 {
    let mut min = f64::INFINITY;
    for (i, &a) in points.iter().enumerate() {
        for &b in points[(i + 1)..].iter() {
            min = min.min(distance(a, b));
        }
    }
    min
}
