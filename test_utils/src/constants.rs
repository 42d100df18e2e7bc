use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

// Lazy-initialized static variables
pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub static SKILL_ONTOLOGY_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("data", "skill_ontology.csv"));

pub const EXPECTED_PREFIX: &str = "EXPECTED:";
pub const COMMENT_PREFIX: &str = "COMMENT:";
