//! Terminal token viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: scan/parse results, keyboard event loop, pane focus, token selection
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   tokens, diagnostics, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: build it with [`App::from_source`]
//! and call [`App::run`] to start the event loop.
//!
//! [`App::from_source`]: app::App::from_source
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
