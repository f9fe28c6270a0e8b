//! Terminal front-end: play by typing pointer commands on stdin.

use tabletop_chess::frontend::text_loop::run_stdio_loop;

fn main() -> std::io::Result<()> {
    run_stdio_loop()
}
