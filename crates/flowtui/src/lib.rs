#![forbid(unsafe_code)]

//! flowtui: a differential terminal UI library with native scrollback.
//!
//! This crate is the public facade over the workspace: [`prelude`] re-exports
//! the types applications need, and [`App`] wires a component tree to a real
//! terminal using the built-in `~60 Hz` main loop.
//!
//! Most applications only need:
//!
//! ```no_run
//! use flowtui::prelude::*;
//!
//! let root = std::rc::Rc::new(std::cell::RefCell::new(Text::new("hello")));
//! let mut app = App::new(root).expect("open terminal");
//! app.run_until(|| false).unwrap();
//! ```

#[cfg(feature = "crossterm")]
pub mod app;
pub mod prelude;

#[cfg(feature = "crossterm")]
pub use app::App;
