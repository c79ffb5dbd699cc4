//! The seam between the player and the media engine.
//!
//! The assembler and the pad router only talk to these traits. `gstgraph`
//! implements them on top of GStreamer; the test suite implements them with
//! an in-memory engine so that linking, routing and the bus loop can be
//! exercised without any media plugins installed.

use std::fmt;

use crate::error::Error;

/// Lifecycle state of a pipeline or element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    VoidPending,
    Null,
    Ready,
    Paused,
    Playing,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            State::VoidPending => "VOID_PENDING",
            State::Null => "NULL",
            State::Ready => "READY",
            State::Paused => "PAUSED",
            State::Playing => "PLAYING",
        };
        f.write_str(name)
    }
}

/// A bus message, reduced to what the player looks at.
///
/// `source` is the path string of the emitting object (`/test-pipeline`,
/// `/test-pipeline/source`, ...), `None` when the message has no source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    StateChanged {
        source: Option<String>,
        old: State,
        current: State,
        pending: State,
    },
    Error {
        source: Option<String>,
        message: String,
        debug: Option<String>,
    },
    Eos {
        source: Option<String>,
    },
    Other {
        source: Option<String>,
        kind: String,
    },
}

pub trait MediaPad: Clone + Send + Sync + 'static {
    fn name(&self) -> String;

    /// Name of the first structure of the pad's caps, e.g. `audio/x-raw`.
    /// `None` when the pad has no caps yet or its caps are empty/ANY.
    fn media_type(&self) -> Option<String>;

    fn is_linked(&self) -> bool;

    /// Links `self` (a source pad) to `sink`. The error carries the engine's
    /// reason for refusing the link.
    fn link(&self, sink: &Self) -> Result<(), String>;
}

/// A processing element. Handles are reference counted and cheap to clone.
pub trait Node: Clone + Send + Sync + 'static {
    type Pad: MediaPad;

    fn name(&self) -> String;

    fn static_pad(&self, name: &str) -> Option<Self::Pad>;

    fn set_property_str(&self, property: &str, value: &str) -> Result<(), Error>;

    /// Registers `f` for the element's "pad-added" signal. The engine may
    /// call it from any of its streaming threads.
    fn connect_pad_added<F>(&self, f: F)
    where
        F: Fn(&Self, &Self::Pad) + Send + Sync + 'static;
}

pub trait NotificationBus {
    /// Blocks until the next state-changed, error or end-of-stream message.
    /// Returns `None` once the bus stops delivering (flushing).
    fn pop(&self) -> Option<Notification>;
}

/// The container the elements live in. Dropping it releases the container
/// and every element it holds.
pub trait Graph {
    type Node: Node;
    type Bus: NotificationBus;

    /// Path string used as `source` in notifications emitted by the graph.
    fn path(&self) -> String;

    fn add_many(&self, nodes: &[&Self::Node]) -> Result<(), Error>;

    /// Links every adjacent pair of `nodes`, in order. `chain` names the
    /// chain for error reporting.
    fn link_many(&self, chain: &str, nodes: &[&Self::Node]) -> Result<(), Error>;

    fn set_state(&self, state: State) -> Result<(), Error>;

    fn bus(&self) -> Option<Self::Bus>;
}

pub trait Engine {
    type Node: Node;
    type Graph: Graph<Node = Self::Node>;

    fn make_node(&self, factory: &str, name: &str) -> Result<Self::Node, Error>;

    fn new_graph(&self, name: &str) -> Self::Graph;
}
