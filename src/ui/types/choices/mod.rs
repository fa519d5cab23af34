mod animation_choice;
mod estimation_choice;
mod schema;
mod ui_choice;

pub use animation_choice::*;
pub use estimation_choice::*;
pub use schema::*;
pub use ui_choice::UIChoice;
