//! sysdash: a tabbed terminal system monitor.
//!
//! One controller loop owns all dashboard state. Key presses, refresh timers and
//! finished sampling rounds arrive as events on a single queue and are applied in
//! order, so sampling never blocks input and rendering always reads a complete
//! snapshot.

pub mod app;
pub mod config;
pub mod event;
pub mod input;
pub mod scheduler;
pub mod state;
pub mod ui;
