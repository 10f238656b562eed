use crate::config::{LayoutConfig, ScreenSize};
use crate::game_entities::Item;

// pixel coordinates, top left corner of a tile.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct XY(pub f32, pub f32);

/// Every slot an item may occupy during a round.
///
/// Slots are one pitch apart so tiles never overlap. A screen smaller than
/// the margins yields no slots.
pub fn build_grid(screen: &ScreenSize, layout: &LayoutConfig) -> Vec<XY> {
    let x_bound = screen.width as i64 - layout.grid_margin_x as i64;
    let y_bound = screen.height as i64 - layout.grid_margin_y as i64;
    if x_bound < 0 || y_bound < 0 {
        return vec![];
    }
    let pitch = layout.grid_pitch as i64;
    let cols = x_bound / pitch;
    let rows = y_bound / pitch;

    let (origin_x, origin_y) = (layout.grid_origin_x as i64, layout.grid_origin_y as i64);
    let mut grid = Vec::with_capacity(((cols + 1) * (rows + 1)) as usize);
    for col in 0..=cols {
        for row in 0..=rows {
            grid.push(XY(
                (origin_x + col * pitch) as f32,
                (origin_y + row * pitch) as f32,
            ));
        }
    }
    grid
}

fn results_per_row(screen: &ScreenSize, layout: &LayoutConfig) -> u32 {
    let x_bound = screen.width.saturating_sub(layout.results_margin_x);
    (x_bound / layout.results_pitch).max(1)
}

/// Position of the n-th tile on the results screen. Rows fill left to right
/// then wrap downwards.
pub fn results_position(index: usize, screen: &ScreenSize, layout: &LayoutConfig) -> XY {
    let per_row = results_per_row(screen, layout) as usize;
    let row = index / per_row;
    let col = index % per_row;
    XY(
        (layout.results_pitch as usize * col + layout.results_origin_x as usize) as f32,
        (layout.results_pitch as usize * row + layout.results_origin_y as usize) as f32,
    )
}

// play again button goes below the last row of results
pub fn restart_button_position(last_tile: &XY, screen: &ScreenSize, layout: &LayoutConfig) -> XY {
    XY(
        screen.width as f32 / 2.0 - layout.button_width as f32 / 2.0,
        last_tile.1 + layout.button_gap as f32,
    )
}

pub fn within_bounds(px: f32, py: f32, x_max: f32, y_max: f32) -> bool {
    px >= 0.0 && px < x_max && py >= 0.0 && py < y_max
}

/// The board item whose tile contains the pixel, if any.
pub fn item_at<'a>(board: &'a [Item], coord: &XY, tile_size: f32) -> Option<&'a Item> {
    board.iter().find(|item| {
        within_bounds(
            coord.0 - item.position.0,
            coord.1 - item.position.1,
            tile_size,
            tile_size,
        )
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::game_entities::{GameColor, ItemRole};

    use super::*;

    fn screen(width: u32, height: u32) -> ScreenSize {
        ScreenSize { width, height }
    }

    #[test]
    fn test_grid_slots_for_phone_screen() {
        let layout = LayoutConfig::default();
        // 390 - 90 = 300 -> 6 cols, 844 - 220 = 624 -> 13 rows, both inclusive
        let grid = build_grid(&screen(390, 844), &layout);
        assert_eq!(grid.len(), 7 * 14);
        assert_eq!(grid[0], XY(45.0, 140.0));
        assert_eq!(grid[1], XY(45.0, 185.0));
        assert_eq!(grid[14], XY(90.0, 140.0));
    }

    #[test]
    fn test_grid_slots_never_overlap() {
        let layout = LayoutConfig::default();
        let grid = build_grid(&screen(390, 844), &layout);
        let unique: HashSet<(i32, i32)> = grid.iter().map(|xy| (xy.0 as i32, xy.1 as i32)).collect();
        assert_eq!(unique.len(), grid.len());
    }

    #[test]
    fn test_grid_stays_on_wide_screen() {
        let layout = LayoutConfig::default();
        let s = screen(70000, 300);
        let grid = build_grid(&s, &layout);
        assert_eq!(grid.len(), 1554 * 2);
        assert!(grid
            .iter()
            .all(|xy| within_bounds(xy.0, xy.1, s.width as f32, s.height as f32)));
        assert_eq!(grid.last(), Some(&XY(69930.0, 185.0)));
    }

    #[test]
    fn test_grid_is_empty_on_tiny_screen() {
        let grid = build_grid(&screen(50, 100), &LayoutConfig::default());
        assert!(grid.is_empty());
    }

    #[test]
    fn test_results_wrap_to_next_row() {
        let layout = LayoutConfig::default();
        // (300 - 80) / 42 = 5 tiles per row
        let s = screen(300, 600);
        assert_eq!(results_position(0, &s, &layout), XY(20.0, 100.0));
        assert_eq!(results_position(4, &s, &layout), XY(188.0, 100.0));
        assert_eq!(results_position(5, &s, &layout), XY(20.0, 142.0));
        assert_eq!(results_position(11, &s, &layout), XY(62.0, 184.0));
    }

    #[test]
    fn test_results_keep_one_column_on_narrow_screen() {
        let layout = LayoutConfig::default();
        let s = screen(60, 600);
        assert_eq!(results_position(2, &s, &layout), XY(20.0, 184.0));
    }

    #[test]
    fn test_restart_button_below_last_tile() {
        let layout = LayoutConfig::default();
        let at = restart_button_position(&XY(20.0, 142.0), &screen(300, 600), &layout);
        assert_eq!(at, XY(100.0, 242.0));
    }

    #[test]
    fn test_item_at_hits_tile() {
        let board = vec![Item {
            glyph: "A".to_string(),
            color: GameColor::Red,
            position: XY(45.0, 140.0),
            role: ItemRole::Remembered,
        }];
        assert!(item_at(&board, &XY(50.0, 150.0), 40.0).is_some());
        assert!(item_at(&board, &XY(84.9, 179.9), 40.0).is_some());
        assert!(item_at(&board, &XY(85.0, 150.0), 40.0).is_none());
        assert!(item_at(&board, &XY(44.0, 150.0), 40.0).is_none());
    }
}
