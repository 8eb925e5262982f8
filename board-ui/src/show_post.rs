//! Show Post page
//!
//! Detail view of a single post with inline title/description editing for
//! collaborators. The view/edit/saving cycle lives in `logic` as plain state
//! transitions; `view` wires it to signals and the posts API.

pub mod logic;
pub mod panels;
pub mod response;
pub mod styles;
pub mod types;
pub mod view;

pub use logic::*;
pub use response::ShowPostResponse;
pub use types::*;
pub use view::ShowPostPage;
