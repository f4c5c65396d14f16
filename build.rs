use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

// Generates the embedded stage table from the markdown files under
// `content/`. Each file contributes one stage: the first line is the stage
// identifier, everything after it is the markdown body. Files are processed
// in filename order, which is why they carry numeric prefixes — declaration
// order is the display order.
fn main() {
    println!("cargo:rerun-if-changed=content/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("stage_table.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let content_dir = Path::new("content");
    if !content_dir.exists() {
        writeln!(f, "pub const STAGES: &[(&str, &str)] = &[];").unwrap();
        return;
    }

    let mut entries: Vec<_> = fs::read_dir(content_dir)
        .unwrap()
        .map(|res| res.unwrap().path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "md"))
        .collect();

    entries.sort();

    writeln!(f, "pub const STAGES: &[(&str, &str)] = &[").unwrap();

    for path in entries {
        let raw = fs::read_to_string(&path).unwrap();
        let mut lines = raw.lines();
        let id = lines
            .next()
            .unwrap_or_else(|| panic!("{}: empty stage file", path.display()))
            .trim();
        assert!(!id.is_empty(), "{}: missing stage identifier", path.display());

        let body = lines.collect::<Vec<_>>().join("\n");
        let body = body.trim();
        assert!(!body.is_empty(), "{}: missing stage body", path.display());

        // {:?} on &str emits a valid Rust string literal, escaping included.
        writeln!(f, "    ({:?}, {:?}),", id, body).unwrap();
    }

    writeln!(f, "];").unwrap();
}
