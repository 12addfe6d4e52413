//! Last-resort recovery of data embedded in `<script>` payloads.
//!
//! Used only when no structural pod survived. Output is coarse:
//! one pod per JSON object, holding the whole object as a single text line.

use std::io;

use scrape_logging::scrape_debug;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::{Map, Value};

use crate::document::{search, DocNode, TagMatch};
use crate::types::Pod;

pub const SALVAGE_TITLE: &str = "Data from JSON";

/// Parse every script block of `script_type` and wrap each JSON object in a pod.
///
/// Blocks that fail to parse, or that hold arrays or scalars, are skipped.
pub fn extract_from_scripts<N: DocNode>(root: &N, script_type: &str) -> Vec<Pod> {
    let scripts = search(root, TagMatch::OneOf(&["script"]), |node| {
        node.attribute("type")
            .is_some_and(|t| t.trim().eq_ignore_ascii_case(script_type))
    });

    let mut pods = Vec::new();
    for (index, script) in scripts.iter().enumerate() {
        let payload = script.text_content();
        match serde_json::from_str::<Value>(&payload) {
            Ok(Value::Object(map)) => pods.push(Pod {
                title: SALVAGE_TITLE.to_string(),
                content: vec![stringify_object(&map)],
                images: Vec::new(),
                formulas: Vec::new(),
            }),
            Ok(_) => scrape_debug!("Script block {} is not a JSON object; skipped", index),
            Err(err) => scrape_debug!("Script block {} is not valid JSON: {}", index, err),
        }
    }
    pods
}

/// Single-line JSON with `", "` and `": "` separators, e.g. `{"a": 1, "b": [1, 2]}`.
pub fn stringify_object(map: &Map<String, Value>) -> String {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedFormatter);
    if let Err(err) = map.serialize(&mut serializer) {
        // Serializing an in-memory Value into a Vec does not fail in practice.
        scrape_debug!("Spaced serialization failed, using compact form: {}", err);
        return Value::Object(map.clone()).to_string();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
