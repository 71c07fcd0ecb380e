//! Solve a few random scenes for a quick sanity check on chord lengths.
//!
//! Usage:
//!   cargo run -p trichord --example random_scene -- 40

use trichord::prelude::*;

fn main() {
    let n = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(40);
    for i in 0..5u64 {
        let mut scene = Scene::new(Bounds2::default());
        if let Err(e) = scene.set_random_triangle(ReplayToken::new(2025, 2 * i)) {
            eprintln!("sample {i}: {e}");
            continue;
        }
        if let Err(e) = scene.add_random_points(n, ReplayToken::new(2025, 2 * i + 1)) {
            eprintln!("sample {i}: {e}");
            continue;
        }
        let dupes = scene.group_duplicates().crossed.len();
        match scene.solve() {
            Ok(res) => println!(
                "sample {i}: n={n}, duplicates={dupes}, chord length={:.4}",
                res.length()
            ),
            Err(e) => eprintln!("sample {i}: {e}"),
        }
    }
}
