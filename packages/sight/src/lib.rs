//! Presenter and command line front end for `sight_identify`

#![forbid(unsafe_code)]

pub mod cli;
pub mod presenter;
pub mod render;

pub use cli::{run, Cli, Commands, Settings};
pub use presenter::{Presenter, View};
pub use render::Renderer;
