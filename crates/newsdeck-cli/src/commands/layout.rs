use std::path::Path;

use anyhow::{Context, Result};

use newsdeck_core::{paginate, source, DeckConfig, GridGeometry, Page, Tile};

pub fn run(config: &DeckConfig, path: &Path, width: u32, height: u32) -> Result<()> {
    let tiles = source::load_tiles(path)
        .with_context(|| format!("Failed to load tiles from {}", path.display()))?;

    let geometry = GridGeometry::from_viewport(width, height, &config.grid);
    let mut pages = paginate(tiles, geometry);

    println!(
        "{}x{} grid, cells {}x{}, {} pages\n",
        geometry.rows,
        geometry.columns,
        geometry.cell_width,
        geometry.cell_height,
        pages.len()
    );

    for (index, page) in pages.iter_mut().enumerate() {
        page.complete();
        print_page(index, page);
    }

    Ok(())
}

fn print_page<T: Tile + std::fmt::Display>(index: usize, page: &Page<T>) {
    println!("Page {} ({} tiles):", index + 1, page.len());

    for row in page.packer().occupancy() {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                Some(tile) => format!("{:>3}", tile),
                None => "  .".to_string(),
            })
            .collect();
        println!("  {}", cells.join(""));
    }

    for (tile_index, (tile, rect)) in page.tiles().iter().zip(page.rects()).enumerate() {
        let form = if tile.has_large_form() { "wide" } else { "    " };
        println!(
            "  #{:<2} {} ({}, {}) - ({}, {})  {}",
            tile_index, form, rect.left, rect.top, rect.right, rect.bottom, tile
        );
    }
    println!();
}
