mod analysis;
mod discussions;
mod prompt;

pub use analysis::parse_analysis;
pub use discussions::gather_discussions;
pub use prompt::build_prompt;
