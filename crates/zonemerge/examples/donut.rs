//! Print the zone polygons for a few hand-made rectangle sets.
//!
//! Usage:
//!   cargo run -p zonemerge --example donut
//!   cargo run -p zonemerge --example donut -- random
//!
//! Each set prints its groups, the extracted loops, and the signed areas
//! (holes come out negative).

use zonemerge::api::{draw_tiling, net_area, union_area, TilingCfg, TilingReplay};
use zonemerge::{group_adjacent, rects_to_polygons, Rect};

fn main() {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "fixed".to_string());
    match mode.as_str() {
        "fixed" => show_fixed(),
        "random" => show_random(),
        _ => {
            eprintln!("usage: donut [fixed|random]");
        }
    }
}

fn show(name: &str, rects: &[Rect]) {
    let groups = group_adjacent(rects);
    match rects_to_polygons(rects) {
        Ok(polys) => {
            println!(
                "{name}: rects={}, groups={}, loops={}, net_area={}, union_area={}",
                rects.len(),
                groups.len(),
                polys.len(),
                net_area(&polys),
                union_area(rects)
            );
            for p in &polys {
                let pts: Vec<(i64, i64)> = p.points().iter().map(|q| (q.x, q.y)).collect();
                println!("  area={:>4} {:?}", p.signed_area(), pts);
            }
        }
        Err(err) => println!("{name}: extraction failed: {err}"),
    }
}

fn show_fixed() {
    show("pair", &[Rect::new(0, 0, 2, 2), Rect::new(2, 0, 2, 2)]);
    show("corner", &[Rect::new(0, 0, 2, 2), Rect::new(2, 2, 2, 2)]);
    show(
        "donut",
        &[
            Rect::new(0, 0, 30, 10),
            Rect::new(0, 20, 30, 10),
            Rect::new(0, 10, 10, 10),
            Rect::new(20, 10, 10, 10),
        ],
    );
}

fn show_random() {
    let cfg = TilingCfg::default();
    for index in 0..3 {
        let rects = draw_tiling(cfg, TilingReplay { seed: 2025, index });
        show(&format!("tiling {index}"), &rects);
    }
}
