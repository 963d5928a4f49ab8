//! Infrastructure configuration modules.

pub mod logging;
pub mod pipeline;
pub mod settings;
pub mod source;
pub mod terms;

pub use settings::Config;
