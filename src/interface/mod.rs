pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_csv, write_json};
pub use prompts::{collect_request, prompt_choice, prompt_number};
pub use render::{display_catalog, display_dimensions, display_recommendation};
