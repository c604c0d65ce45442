//! Full scene runs over the original puzzle's example maps

use glam::IVec2;
use warebot::{Cell, Settings, parse_scene};

const NARROW_SCENE: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

const WIDE_SCENE: &str = "\
#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^
";

#[test]
fn test_narrow_scene_full_run() {
    let mut scene = parse_scene(NARROW_SCENE, &Settings::default()).unwrap();
    let last = scene.warehouse.run(&scene.instructions);

    assert_eq!(last, IVec2::new(4, 4));
    assert_eq!(
        scene.warehouse.snapshot(),
        "########\n\
         #....OO#\n\
         ##.....#\n\
         #.....O#\n\
         #.#O@..#\n\
         #...O..#\n\
         #...O..#\n\
         ########\n"
    );
    assert_eq!(scene.warehouse.gps_score(), 2028);
}

#[test]
fn test_narrow_scene_conserves_crates() {
    let mut scene = parse_scene(NARROW_SCENE, &Settings::default()).unwrap();
    let crates = scene.warehouse.grid().count(Cell::Crate);
    scene.warehouse.run(&scene.instructions);
    assert_eq!(scene.warehouse.grid().count(Cell::Crate), crates);
}

#[test]
fn test_wide_scene_full_run() {
    let settings = Settings {
        expand: true,
        ..Settings::default()
    };
    let mut scene = parse_scene(WIDE_SCENE, &settings).unwrap();

    // The widened map starts with three wide crates
    assert_eq!(scene.warehouse.grid().count(Cell::CrateLeft), 3);
    assert_eq!(scene.warehouse.robot(), IVec2::new(10, 3));

    let last = scene.warehouse.run(&scene.instructions);

    assert_eq!(last, IVec2::new(5, 2));
    assert_eq!(
        scene.warehouse.snapshot(),
        "##############\n\
         ##...[].##..##\n\
         ##...@.[]...##\n\
         ##....[]....##\n\
         ##..........##\n\
         ##..........##\n\
         ##############\n"
    );
    assert_eq!(scene.warehouse.gps_score(), 618);
    assert_eq!(scene.warehouse.grid().count(Cell::CrateLeft), 3);
}
