//! Chat Session UI Module (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: ChatSessionVm (session signal + services)
//! - view.rs: ChatSessionPage, switches between settings and conversation

mod view;
mod view_model;

pub use view::ChatSessionPage;
pub use view_model::{ChatServices, ChatSessionVm};
