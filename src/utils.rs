pub mod format_skill_name;
pub mod lemmatize;
pub mod parse_stop_words;
pub mod read_skill_definitions;
pub mod sort_skills;

pub use format_skill_name::format_skill_name;
pub use lemmatize::lemmatize;
pub use parse_stop_words::parse_stop_words;
pub use read_skill_definitions::{read_skill_definitions, read_skill_definitions_from_path};
pub use sort_skills::sort_skills;
