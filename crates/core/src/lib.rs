//! OpenSCAD mesh generation adapter.
//!
//! Locates the OpenSCAD executable for the host platform and runs it as a
//! blocking subprocess to convert a parametric `.scad` source into a mesh,
//! forwarding named overrides as `-D` definitions.

pub mod command;
pub mod config;
pub mod converter;
pub mod error;
pub mod overrides;
pub mod platform;

pub use command::CommandLine;
pub use config::ConverterConfig;
pub use converter::OpenScadConverter;
pub use error::ConverterError;
pub use overrides::{OverrideSet, OverrideValue};
pub use platform::OsFamily;
