//! Embedded stage table, generated by `build.rs` from `content/*.md`.

include!(concat!(env!("OUT_DIR"), "/stage_table.rs"));
