use failure::Fail;

/// Fatal setup errors. Any of these aborts startup with exit code -1.
#[derive(Debug, Fail, Clone, PartialEq, Eq)]
pub enum Error {
    #[fail(display = "failed to initialize gstreamer: {}", _0)]
    Init(String),

    #[fail(display = "element '{}' ({}) could not be created", name, factory)]
    ElementCreation { factory: String, name: String },

    #[fail(display = "failed to add '{}' to the pipeline", _0)]
    Add(String),

    #[fail(display = "failed to link the {} elements", chain)]
    Link { chain: String },

    #[fail(display = "failed to set property '{}' on '{}'", property, element)]
    Property { element: String, property: String },

    #[fail(display = "unable to set the pipeline to the {} state", state)]
    StateChange { state: String },

    #[fail(display = "pipeline has no bus")]
    NoBus,
}
