// MIT/Apache2 License

//! Generates `boxes.skp` in the working directory.
//!
//! ```bash
//! cargo run --bin generate_boxes
//! ```
//!
//! The picture holds four filled boxes, each bracketed by `RenderNode(id=…, name='…')` annotations:
//!
//! - `LinearLayout` (1), 1000x2000, yellow
//!   - `FrameLayout` (2), 500x1000 at (100, 100), blue
//!     - `AppCompatButton` (3), 200x500 at (200, 200) within `FrameLayout`, black
//!   - `Button` (4), 400x500 at (300, 1200), red

use boxes_skp::OUTPUT_FILE;

fn main() {
    env_logger::init();

    match boxes_skp::write_boxes(OUTPUT_FILE) {
        Ok(len) => log::info!("Generated {} ({} bytes)", OUTPUT_FILE, len),
        Err(e) => log::error!("Failed to generate {}: {}", OUTPUT_FILE, e),
    }
}
