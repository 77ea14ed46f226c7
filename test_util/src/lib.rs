use std::fs;
use std::path::PathBuf;

pub fn root_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR")))
        .parent()
        .unwrap()
        .to_path_buf()
}

pub fn tests_path() -> PathBuf {
    root_path().join("crates").join("linkedin").join("tests")
}

pub fn testdata_path() -> PathBuf {
    tests_path().join("testdata")
}

/// Contents of a recorded LinkedIn response under `testdata`.
pub fn fixture(name: &str) -> String {
    let path = testdata_path().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("reading {}: {}", path.display(), err))
}
