//! Benchmarks for layout computation over docked panel trees
//!
//! Run with: cargo bench layout

use paneldock::{compute_layout, DockMode, PanelArea, Rect, WindowId};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// Build an area with `splits` nested directional docks off the root
fn build_area(splits: usize) -> PanelArea {
    let mut area = PanelArea::new();
    area.add_window(area.root, WindowId(0)).unwrap();
    for i in 0..splits {
        let panel = area.add_panel();
        area.add_window(panel, WindowId(i as u64 + 1)).unwrap();
        let mode = match i % 4 {
            0 => DockMode::Right,
            1 => DockMode::Bottom,
            2 => DockMode::Left,
            _ => DockMode::Top,
        };
        area.dock(panel, area.root, mode).unwrap();
    }
    area
}

#[divan::bench(args = [1, 4, 16, 64])]
fn compute_layout_nested(splits: usize) {
    let area = build_area(splits);
    divan::black_box(compute_layout(
        divan::black_box(&area),
        Rect::new(0.0, 0.0, 1920.0, 1080.0),
    ));
}

#[divan::bench]
fn compute_layout_with_floating_stack() {
    let mut area = build_area(8);
    for i in 0..8u64 {
        let panel = area.add_panel();
        area.add_window(panel, WindowId(100 + i)).unwrap();
        if let Some(p) = area.panel_mut(panel) {
            p.rect = Rect::new(i as f32 * 40.0, i as f32 * 30.0, 300.0, 250.0);
        }
    }
    divan::black_box(compute_layout(
        divan::black_box(&area),
        Rect::new(0.0, 0.0, 1920.0, 1080.0),
    ));
}

#[divan::bench(args = [16, 64])]
fn coalesce_after_teardown(splits: usize) {
    let mut area = build_area(splits);
    for i in 0..=splits {
        let Some(panel) = area.find_panel_with_window(WindowId(i as u64)) else {
            continue;
        };
        area.remove_window(panel, WindowId(i as u64));
    }
    area.coalesce_empty_panels();
    divan::black_box(&area);
}
