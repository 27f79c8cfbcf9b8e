pub use couchrep_app as app;
pub use couchrep_domain as domain;
pub use couchrep_infra as infra;
pub use couchrep_ui as ui;

pub mod error;
pub mod logging;
