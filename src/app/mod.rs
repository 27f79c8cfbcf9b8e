pub use couchrep_domain as domain;

pub mod action;
pub mod activity_state;
pub mod advanced_state;
pub mod bookmark_state;
pub mod database_list;
pub mod effect;
pub mod effect_runner;
pub mod filter_catalog;
pub mod form;
pub mod input_mode;
pub mod keybindings;
pub mod message_state;
pub mod ports;
pub mod reducer;
pub mod reducers;
pub mod render_schedule;
pub mod replication_form_state;
pub mod screen;
pub mod state;
pub mod store;
