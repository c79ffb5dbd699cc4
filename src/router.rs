//! Links the pads uridecodebin exposes at runtime to the audio or video chain.

use crate::graph::{MediaPad, Node};
use crate::CAT;

pub const AUDIO_RAW: &str = "audio/x-raw";
pub const VIDEO_RAW: &str = "video/x-raw";

/// Entry points of the static chains, handed to the pad-added handler.
#[derive(Debug, Clone)]
pub struct Chains<N> {
    pub audio_convert: N,
    pub video_convert: N,
}

/// What happened to a newly added pad. None of these stop the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Linked(String),
    LinkFailed { media_type: String, reason: String },
    AlreadyLinked(String),
    Unsupported(String),
    NoCaps,
    NoTargetPad(String),
}

/// Handler for the source's "pad-added" signal.
///
/// Runs on a streaming thread. Only the pads' own link state is touched,
/// which the engine guards.
pub fn pad_added<N: Node>(chains: &Chains<N>, src: &N, new_pad: &N::Pad) -> RouteOutcome {
    println!(
        "Received new pad '{}' from '{}'",
        new_pad.name(),
        src.name()
    );

    let Some(media_type) = new_pad.media_type() else {
        println!("Pad '{}' has no caps. Ignoring.", new_pad.name());
        return RouteOutcome::NoCaps;
    };

    let target = if media_type.starts_with(AUDIO_RAW) {
        &chains.audio_convert
    } else if media_type.starts_with(VIDEO_RAW) {
        &chains.video_convert
    } else {
        println!("Unsupported type '{}'. Ignoring.", media_type);
        return RouteOutcome::Unsupported(media_type);
    };

    let Some(sink_pad) = target.static_pad("sink") else {
        eprintln!("'{}' has no sink pad, cannot link '{}'", target.name(), media_type);
        return RouteOutcome::NoTargetPad(target.name());
    };

    if sink_pad.is_linked() {
        println!("'{}' is already linked. Ignoring.", target.name());
        return RouteOutcome::AlreadyLinked(media_type);
    }

    match new_pad.link(&sink_pad) {
        Ok(()) => {
            println!("Link succeeded (type '{}').", media_type);
            gst::info!(CAT, "linked {} to {}", new_pad.name(), target.name());
            RouteOutcome::Linked(media_type)
        }
        Err(reason) => {
            println!("Type is '{}' but link failed.", media_type);
            gst::warning!(CAT, "linking {} failed: {}", new_pad.name(), reason);
            RouteOutcome::LinkFailed { media_type, reason }
        }
    }
}
