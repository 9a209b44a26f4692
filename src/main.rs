use facelet_cube::cube333::{Color, Cube, ScrambleParams};

fn main() {
    // Initialize logging.
    env_logger::builder().init();

    let mut cube = Cube::new();
    let scramble = cube.scramble(&ScrambleParams::default().reseeded());
    println!("Scramble: {scramble}\n");

    cube.clockwise(Color::White);
    print!("{cube}");
}
