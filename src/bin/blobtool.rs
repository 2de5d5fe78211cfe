// Debug tool: binarize an image against a reference color and print the groups
use blobscan::tools::{grid_stats, load_rgb, save_rgb};
use blobscan::utils::binarization::{DistanceBinarizer, render_binary_default};
use blobscan::{EuclideanDistance, Rgb, find_connected_groups};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <image> [reference-hex] [threshold] [--save-binary <path>]",
            args[0]
        );
        eprintln!("Example: {} photo.png FFFFFF 80", args[0]);
        process::exit(1);
    }

    let image_path = &args[1];
    let reference = args
        .get(2)
        .map(|s| parse_hex_color(s))
        .unwrap_or(Rgb::new(255, 255, 255));
    let threshold: f64 = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.0);
    let save_binary = args
        .iter()
        .position(|a| a == "--save-binary")
        .and_then(|i| args.get(i + 1));

    let (rgb, width, height) = match load_rgb(image_path) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("Failed to load image {}: {}", image_path, err);
            process::exit(1);
        }
    };
    println!("Image: {} ({}x{})", image_path, width, height);
    println!(
        "Reference: #{:06X}, threshold: {}",
        reference.to_hex(),
        threshold
    );

    let binarizer = DistanceBinarizer::new(EuclideanDistance, reference, threshold);
    let grid = match binarizer.binarize_parallel(&rgb, width, height) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Binarization failed: {}", err);
            process::exit(1);
        }
    };

    let stats = grid_stats(&grid);
    println!(
        "Binary grid: {} of {} cells on ({:.2}%)",
        stats.on_cells,
        stats.total_cells,
        stats.on_ratio * 100.0
    );

    if let Some(path) = save_binary {
        let raster = render_binary_default(&grid);
        match save_rgb(path, &raster, width, height) {
            Ok(()) => println!("Saved binary render to {}", path),
            Err(err) => eprintln!("Failed to save binary render: {}", err),
        }
    }

    let groups = match find_connected_groups(&grid) {
        Ok(groups) => groups,
        Err(err) => {
            eprintln!("Group finding failed: {}", err);
            process::exit(1);
        }
    };

    println!("Found {} groups", groups.len());
    for (i, group) in groups.iter().enumerate() {
        println!(
            "  Group {}: size={}, centroid=({}, {})",
            i, group.size, group.centroid.x, group.centroid.y
        );
    }
}

fn parse_hex_color(s: &str) -> Rgb {
    let trimmed = s.trim_start_matches('#').trim_start_matches("0x");
    match u32::from_str_radix(trimmed, 16) {
        Ok(hex) if trimmed.len() == 6 => Rgb::from_hex(hex),
        _ => {
            eprintln!("Invalid color '{}', expected 6 hex digits like FFFFFF", s);
            process::exit(1);
        }
    }
}
