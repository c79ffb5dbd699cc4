//! GStreamer implementation of the engine traits.

use gst::prelude::*;

use crate::error::Error;
use crate::graph::{Engine, Graph, MediaPad, Node, Notification, NotificationBus, State};
use crate::CAT;

impl From<gst::State> for State {
    fn from(state: gst::State) -> Self {
        match state {
            gst::State::Null => State::Null,
            gst::State::Ready => State::Ready,
            gst::State::Paused => State::Paused,
            gst::State::Playing => State::Playing,
            _ => State::VoidPending,
        }
    }
}

impl From<State> for gst::State {
    fn from(state: State) -> Self {
        match state {
            State::VoidPending => gst::State::VoidPending,
            State::Null => gst::State::Null,
            State::Ready => gst::State::Ready,
            State::Paused => gst::State::Paused,
            State::Playing => gst::State::Playing,
        }
    }
}

/// Handle on an initialized GStreamer.
#[derive(Debug, Clone, Copy)]
pub struct GstEngine(());

impl GstEngine {
    pub fn init() -> Result<Self, Error> {
        gst::init().map_err(|err| Error::Init(err.to_string()))?;
        gst::debug!(CAT, "gstreamer {} initialized", gst::version_string());
        Ok(GstEngine(()))
    }
}

impl Engine for GstEngine {
    type Node = GstNode;
    type Graph = GstGraph;

    fn make_node(&self, factory: &str, name: &str) -> Result<GstNode, Error> {
        gst::ElementFactory::make(factory)
            .name(name)
            .build()
            .map(GstNode)
            .map_err(|err| {
                gst::error!(CAT, "could not create {} ({}): {}", name, factory, err);
                Error::ElementCreation {
                    factory: factory.to_string(),
                    name: name.to_string(),
                }
            })
    }

    fn new_graph(&self, name: &str) -> GstGraph {
        GstGraph(gst::Pipeline::with_name(name))
    }
}

#[derive(Debug, Clone)]
pub struct GstPad(pub gst::Pad);

impl MediaPad for GstPad {
    fn name(&self) -> String {
        self.0.name().to_string()
    }

    fn media_type(&self) -> Option<String> {
        let caps = self
            .0
            .current_caps()
            .unwrap_or_else(|| self.0.query_caps(None));
        caps.structure(0).map(|s| s.name().to_string())
    }

    fn is_linked(&self) -> bool {
        self.0.is_linked()
    }

    fn link(&self, sink: &GstPad) -> Result<(), String> {
        self.0
            .link(&sink.0)
            .map(|_| ())
            .map_err(|err| format!("{:?}", err))
    }
}

#[derive(Debug, Clone)]
pub struct GstNode(pub gst::Element);

impl Node for GstNode {
    type Pad = GstPad;

    fn name(&self) -> String {
        self.0.name().to_string()
    }

    fn static_pad(&self, name: &str) -> Option<GstPad> {
        self.0.static_pad(name).map(GstPad)
    }

    fn set_property_str(&self, property: &str, value: &str) -> Result<(), Error> {
        if self.0.find_property(property).is_none() {
            return Err(Error::Property {
                element: self.name(),
                property: property.to_string(),
            });
        }
        self.0.set_property_from_str(property, value);
        Ok(())
    }

    fn connect_pad_added<F>(&self, f: F)
    where
        F: Fn(&GstNode, &GstPad) + Send + Sync + 'static,
    {
        self.0.connect_pad_added(move |src, pad| {
            f(&GstNode(src.clone()), &GstPad(pad.clone()));
        });
    }
}

#[derive(Debug)]
pub struct GstBus(pub gst::Bus);

fn notification(msg: &gst::Message) -> Notification {
    use gst::MessageView;

    let source = msg.src().map(|s| s.path_string().to_string());
    match msg.view() {
        MessageView::StateChanged(s) => Notification::StateChanged {
            source,
            old: s.old().into(),
            current: s.current().into(),
            pending: s.pending().into(),
        },
        MessageView::Error(err) => Notification::Error {
            source,
            message: err.error().to_string(),
            debug: err.debug().map(|d| d.to_string()),
        },
        MessageView::Eos(..) => Notification::Eos { source },
        _ => Notification::Other {
            source,
            kind: format!("{:?}", msg.type_()),
        },
    }
}

impl NotificationBus for GstBus {
    fn pop(&self) -> Option<Notification> {
        self.0
            .timed_pop_filtered(
                gst::ClockTime::NONE,
                &[
                    gst::MessageType::StateChanged,
                    gst::MessageType::Error,
                    gst::MessageType::Eos,
                ],
            )
            .map(|msg| notification(&msg))
    }
}

#[derive(Debug)]
pub struct GstGraph(pub gst::Pipeline);

impl Graph for GstGraph {
    type Node = GstNode;
    type Bus = GstBus;

    fn path(&self) -> String {
        self.0.path_string().to_string()
    }

    fn add_many(&self, nodes: &[&GstNode]) -> Result<(), Error> {
        for node in nodes {
            self.0
                .add(&node.0)
                .map_err(|_| Error::Add(node.name()))?;
        }
        Ok(())
    }

    fn link_many(&self, chain: &str, nodes: &[&GstNode]) -> Result<(), Error> {
        gst::Element::link_many(nodes.iter().map(|n| &n.0)).map_err(|err| {
            gst::error!(CAT, "linking {} chain failed: {}", chain, err);
            Error::Link {
                chain: chain.to_string(),
            }
        })
    }

    fn set_state(&self, state: State) -> Result<(), Error> {
        self.0
            .set_state(state.into())
            .map(|_| ())
            .map_err(|_| Error::StateChange {
                state: state.to_string(),
            })
    }

    fn bus(&self) -> Option<GstBus> {
        self.0.bus().map(GstBus)
    }
}
