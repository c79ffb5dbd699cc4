use std::fmt::Display;

pub const DEFAULT_URI: &str =
    "https://gstreamer.freedesktop.org/data/media/sintel_trailer-480p.webm";

#[derive(clap::Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    #[arg(default_value = DEFAULT_URI)]
    /// URI of the media to decode and play.
    pub uri: String,
}

impl Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration:\n\t- Uri: {}", self.uri)
    }
}
