pub mod loader;
pub mod schema;
pub mod template;

pub use loader::{DocumentError, compile_document, load_document, load_options};
pub use schema::{GAME_NAME, GameSection, PlayerDocument, RANDOM_REWARD};
pub use template::{template_document, write_document, write_template};
