// MIT/Apache2 License

//! Records drawing commands into pictures, and produces the nested boxes picture (`boxes.skp`) that the layout
//! inspector tests read as fixture data.

mod error;

pub mod boxes;
pub mod color;
pub mod intensity;
pub mod marker;
pub mod op;
pub mod paint;
pub mod picture;
pub mod recorder;
pub mod region;
pub mod surface;

pub(crate) mod codec;

pub use boxes::{boxes_picture, record_boxes, write_boxes, OUTPUT_FILE};
pub use color::*;
pub use error::*;
pub use intensity::*;
pub use marker::*;
pub use op::DrawOp;
pub use paint::*;
pub use picture::*;
pub use recorder::*;
pub use region::*;
pub use surface::*;
