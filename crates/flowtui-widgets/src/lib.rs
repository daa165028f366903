#![forbid(unsafe_code)]

//! Built-in components exercising the `flowtui-core` protocol.
//!
//! # Role in flowtui
//! `flowtui-widgets` implements [`flowtui_core::Component`] and
//! [`flowtui_core::Focusable`] for the built-in primitives:
//! [`Text`], [`Spacer`], [`Container`] (the `Box` primitive), [`BorderedBox`],
//! [`Input`], and [`SelectList`]. None of these are special to the renderer —
//! they exist to prove the protocol is sufficient and to give `flowtui`'s
//! facade something to build real screens out of.

pub mod bordered_box;
pub mod border_set;
pub mod container;
pub mod input;
pub mod padding;
pub mod select_list;
pub mod spacer;
pub mod text;

pub use bordered_box::BorderedBox;
pub use border_set::BorderSet;
pub use container::Container;
pub use input::Input;
pub use padding::Padding;
pub use select_list::SelectList;
pub use spacer::Spacer;
pub use text::Text;
