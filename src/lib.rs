//! Chat message cell sizing and layout (bubblecell)
//!
//! Computes the size of every element of a chat message cell (avatar,
//! labels, message container, time label, failed-send strip) and the total
//! cell height for a variable-height message list.
//!
//! The `layout` module is the pure core: synchronous, deterministic and
//! free of I/O. `config`, `logging`, `source` and `view` form the shell of
//! the demo binary around it.

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod source;
pub mod view;
