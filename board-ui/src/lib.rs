pub mod api;
pub mod interop;
pub mod show_post;

pub use api::*;
pub use interop::*;
pub use show_post::*;
