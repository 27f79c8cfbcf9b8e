pub mod activity;
pub mod advanced_form;
pub mod atoms;
pub mod bookmark_form;
pub mod bookmark_table;
pub mod footer;
pub mod form_row;
pub mod header;
pub mod help_overlay;
pub mod layout;
pub mod molecules;
pub mod overlay;
pub mod replication_form;
pub mod status_message;
pub mod tabs;
