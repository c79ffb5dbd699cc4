//! Plays a URI through `uridecodebin`, linking its audio and video pads to
//! converter/sink chains as they appear.

use once_cell::sync::Lazy;

pub mod assembler;
pub mod config;
pub mod error;
pub mod graph;
pub mod gstgraph;
pub mod router;

pub use assembler::{exit_code, run, Termination};
pub use error::Error;
pub use gstgraph::GstEngine;

pub static CAT: Lazy<gst::DebugCategory> = Lazy::new(|| {
    gst::DebugCategory::new(
        "dynplay",
        gst::DebugColorFlags::empty(),
        Some("Dynamic pad player"),
    )
});
