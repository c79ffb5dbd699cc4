//! Builds the player pipeline, runs it until EOS or error, and tears it down.
//!
//! ```text
//!                         +-> videoconvert -> autovideosink
//! uridecodebin (source) --+
//!                         +-> audioconvert -> audioresample -> autoaudiosink
//! ```
//!
//! The branches from `source` are linked at runtime by [`router::pad_added`].

use crate::error::Error;
use crate::graph::{Engine, Graph, Node, Notification, NotificationBus, State};
use crate::router::{self, Chains};
use crate::CAT;

pub const PIPELINE_NAME: &str = "test-pipeline";

/// How the bus loop ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Termination {
    Eos,
    Error {
        source: Option<String>,
        message: String,
        debug: Option<String>,
    },
    /// The bus stopped delivering messages before EOS or an error.
    BusClosed,
}

/// An assembled, not yet started pipeline.
pub struct Player<G: Graph> {
    pipeline: G,
    source: G::Node,
}

impl<G: Graph> Player<G> {
    pub fn pipeline(&self) -> &G {
        &self.pipeline
    }

    pub fn source(&self) -> &G::Node {
        &self.source
    }

    /// Sets the pipeline playing and blocks on its bus until EOS or an error.
    ///
    /// On any failure the pipeline is set back to NULL before it is released.
    pub fn play(self) -> Result<Termination, Error> {
        let Player { pipeline, source } = self;
        drop(source);

        if let Err(err) = pipeline.set_state(State::Playing) {
            stop(&pipeline);
            return Err(err);
        }
        gst::debug!(CAT, "pipeline set to PLAYING");

        let Some(bus) = pipeline.bus() else {
            stop(&pipeline);
            return Err(Error::NoBus);
        };

        let termination = drain(&bus, &pipeline.path());
        shutdown(bus, pipeline);
        Ok(termination)
    }
}

/// Creates, adds and links the elements and hooks the pad router to the
/// source. Any failure drops whatever was built so far.
pub fn assemble<E: Engine>(engine: &E, uri: &str) -> Result<Player<E::Graph>, Error> {
    let source = engine.make_node("uridecodebin", "source")?;
    let video_convert = engine.make_node("videoconvert", "video_convert")?;
    let video_sink = engine.make_node("autovideosink", "video_sink")?;
    let audio_convert = engine.make_node("audioconvert", "audio_convert")?;
    let audio_resample = engine.make_node("audioresample", "audio_resample")?;
    let audio_sink = engine.make_node("autoaudiosink", "audio_sink")?;

    let pipeline = engine.new_graph(PIPELINE_NAME);

    pipeline.add_many(&[
        &source,
        &video_convert,
        &video_sink,
        &audio_convert,
        &audio_resample,
        &audio_sink,
    ])?;

    pipeline.link_many("video", &[&video_convert, &video_sink])?;
    pipeline.link_many("audio", &[&audio_convert, &audio_resample, &audio_sink])?;

    source.set_property_str("uri", uri)?;

    let chains = Chains {
        audio_convert,
        video_convert,
    };
    source.connect_pad_added(move |src, pad| {
        router::pad_added(&chains, src, pad);
    });

    gst::info!(CAT, "pipeline assembled for {}", uri);
    Ok(Player { pipeline, source })
}

/// Pops notifications until an error or end-of-stream arrives.
///
/// State changes are only reported when they come from the pipeline itself.
pub fn drain<B: NotificationBus>(bus: &B, pipeline_path: &str) -> Termination {
    loop {
        let Some(notification) = bus.pop() else {
            eprintln!("Bus closed before end of stream.");
            gst::warning!(CAT, "bus returned no message, stopping");
            return Termination::BusClosed;
        };

        match notification {
            Notification::Error {
                source,
                message,
                debug,
            } => {
                eprintln!(
                    "Error received from element {:?}: {}",
                    source.as_deref().unwrap_or("<none>"),
                    message
                );
                eprintln!(
                    "Debugging information: {}",
                    debug.as_deref().unwrap_or("none")
                );
                return Termination::Error {
                    source,
                    message,
                    debug,
                };
            }
            Notification::Eos { .. } => {
                println!("End-Of-Stream reached.");
                return Termination::Eos;
            }
            Notification::StateChanged {
                source,
                old,
                current,
                pending,
            } => {
                if source.as_deref() == Some(pipeline_path) {
                    println!("Pipeline state changed from {} to {}", old, current);
                    gst::debug!(CAT, "pending state {}", pending);
                }
            }
            Notification::Other { source, kind } => {
                eprintln!(
                    "Unexpected message {} received from {:?}",
                    kind,
                    source.as_deref().unwrap_or("<none>")
                );
            }
        }
    }
}

fn stop<G: Graph>(pipeline: &G) {
    if let Err(err) = pipeline.set_state(State::Null) {
        eprintln!("{}", err);
    }
}

/// Releases the bus, forces the pipeline to NULL and releases it.
pub fn shutdown<G: Graph>(bus: G::Bus, pipeline: G) {
    drop(bus);
    stop(&pipeline);
    drop(pipeline);
    gst::debug!(CAT, "pipeline released");
}

/// Assembles and plays `uri` to completion.
pub fn run<E: Engine>(engine: &E, uri: &str) -> Result<Termination, Error> {
    assemble(engine, uri)?.play()
}

/// Process exit code for the outcome of [`run`]: 0 once the bus loop has
/// finished, -1 for any setup failure.
pub fn exit_code(result: &Result<Termination, Error>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(_) => -1,
    }
}
