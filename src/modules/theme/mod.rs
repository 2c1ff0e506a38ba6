pub mod bridge;
pub mod style_sink;

pub use bridge::ThemeBridge;
pub use style_sink::{InMemoryStyleSink, StyleSink};
