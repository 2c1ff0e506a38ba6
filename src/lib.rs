pub mod modules;
pub use modules::admin;
pub use modules::content;
pub use modules::media;
pub use modules::theme;

pub mod config;

#[cfg(test)]
mod test_support;
