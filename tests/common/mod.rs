#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};

/// Bytes that are not valid UTF-8 (a JPEG SOI/APP0 prefix).
pub const JPEG_BYTES: [u8; 6] = [0xff, 0xd8, 0xff, 0xe0, 0x00, 0x10];

/// Builds a fixture tree:
/// root/
///   .env.example
///   README.md
///   hello.txt                   ("hi\n")
///   public/img.jpg              (non-UTF8)
///   src/y.js
///   node_modules/x.js           (pruned)
///   .git/HEAD                   (pruned)
///   .next/cache/build.json      (pruned)
///   nested/node_modules/deep.js (pruned at depth)
pub fn basic_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    for dir in ["public", "src", "node_modules", ".git", ".next/cache", "nested/node_modules"] {
        td.child(dir).create_dir_all().unwrap();
    }

    td.child(".env.example").write_str("KEY=value\n").unwrap();
    td.child("README.md").write_str("# readme\n").unwrap();
    td.child("hello.txt").write_str("hi\n").unwrap();
    td.child("public/img.jpg").write_binary(&JPEG_BYTES).unwrap();
    td.child("src/y.js").write_str("export const y = 1;\n").unwrap();

    td.child("node_modules/x.js").write_str("module.exports = {};\n").unwrap();
    td.child(".git/HEAD").write_str("ref: refs/heads/main\n").unwrap();
    td.child(".next/cache/build.json").write_str("{}\n").unwrap();
    td.child("nested/node_modules/deep.js").write_str("// deep\n").unwrap();
    td
}

/// What the lister must report for `basic_fs`.
pub const BASIC_LISTING: [&str; 5] = [
    ".env.example",
    "README.md",
    "hello.txt",
    "public/img.jpg",
    "src/y.js",
];
