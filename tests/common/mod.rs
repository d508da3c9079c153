#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;

fn snapshot_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("snapshots")
}

pub fn assert_snapshot(name: &str, actual: &str) {
    let path = snapshot_root().join(name);
    if std::env::var("SENTINEL_SCAN_UPDATE_SNAPSHOTS").is_ok() {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create snapshot directory");
        }
        fs::write(&path, actual).expect("write snapshot");
        return;
    }

    let expected =
        fs::read_to_string(&path).unwrap_or_else(|_| panic!("snapshot {:?} not found", path));
    if normalize(&expected) != normalize(actual) {
        panic!(
            "Snapshot mismatch for {:?}. Set SENTINEL_SCAN_UPDATE_SNAPSHOTS=1 to regenerate.\nExpected:\n{}\nActual:\n{}",
            path,
            expected,
            actual
        );
    }
}

fn normalize(input: &str) -> String {
    input.replace("\r\n", "\n").trim_end().to_string()
}

/// Small alphabet so terminators and predicate hits are both common.
pub fn letters() -> impl Strategy<Value = char> {
    prop_oneof![
        Just('A'),
        Just('B'),
        Just('E'),
        Just('a'),
        Just('$'),
        Just('*'),
        Just('Z'),
    ]
}

pub fn letter_seq(max_len: usize) -> impl Strategy<Value = Vec<char>> {
    proptest::collection::vec(letters(), 0..max_len)
}
