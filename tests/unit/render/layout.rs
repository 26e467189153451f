use super::*;

fn grid() -> Grid {
    Grid::new(512, 32).unwrap()
}

fn layout(cycle: u64) -> StoneLayout {
    seeded_layout(
        cycle,
        0,
        grid(),
        StoneCount::default(),
        DropletPlacement::Reseeded,
    )
}

#[test]
fn same_cycle_gives_same_layout() {
    assert_eq!(layout(42), layout(42));
}

#[test]
fn layouts_change_across_cycles() {
    let distinct = (0..16)
        .map(layout)
        .collect::<Vec<_>>()
        .windows(2)
        .filter(|w| w[0] != w[1])
        .count();
    assert!(distinct >= 14);
}

#[test]
fn stone_count_respects_range_and_fixed() {
    for cycle in 0..64 {
        let n = layout(cycle).stones.len();
        assert!((3..=7).contains(&n), "cycle {cycle}: {n}");

        let fixed = seeded_layout(
            cycle,
            9,
            grid(),
            StoneCount::Fixed(4),
            DropletPlacement::Centered,
        );
        assert_eq!(fixed.stones.len(), 4);
    }
}

#[test]
fn stones_stay_on_grid_and_off_the_droplet() {
    for cycle in 0..64 {
        let l = layout(cycle);
        assert!(!l.stone_at(l.droplet));
        for s in &l.stones {
            assert!(s.cell.x >= 1 && s.cell.x + s.width < 32);
            assert!(s.cell.y >= 1 && s.cell.y + s.height < 32);
        }
        for (i, a) in l.stones.iter().enumerate() {
            for b in &l.stones[i + 1..] {
                assert!(!a.near(b, 0), "overlap in cycle {cycle}");
            }
        }
    }
}

#[test]
fn centered_droplet_is_grid_center() {
    let l = seeded_layout(3, 0, grid(), StoneCount::Fixed(0), DropletPlacement::Centered);
    assert_eq!(l.droplet, GridPoint::new(16, 16));
    assert!(l.stones.is_empty());
}

#[test]
fn reseeded_droplet_stays_in_the_middle_band() {
    for cycle in 0..64 {
        let d = layout(cycle).droplet;
        assert!((8..=24).contains(&d.x) && (8..=24).contains(&d.y));
    }
}

#[test]
fn stone_rect_covers_its_cells() {
    let s = Stone {
        cell: GridPoint::new(2, 3),
        width: 2,
        height: 1,
    };
    assert_eq!(s.rect(grid()), Rect::new(32.0, 48.0, 64.0, 64.0));
    assert!(s.contains(GridPoint::new(3, 3)));
    assert!(!s.contains(GridPoint::new(4, 3)));
}

#[test]
fn tiny_grids_do_not_panic() {
    let g = Grid::new(4, 2).unwrap();
    let l = seeded_layout(1, 0, g, StoneCount::Fixed(3), DropletPlacement::Reseeded);
    assert!(l.stones.is_empty());
}
