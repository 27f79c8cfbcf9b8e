pub use couchrep_app as app;
pub use couchrep_domain as domain;

pub mod adapters;
pub mod components;
pub mod event;
pub mod theme;
pub mod tui;
