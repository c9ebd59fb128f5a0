//! Render binder: token sequences to a keyed, whitespace-exact element tree.

pub mod binder;
pub mod node;

pub use binder::{bind, render};
pub use node::{Element, Node};
