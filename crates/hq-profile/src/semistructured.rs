//! Structural profiling of JSON and XML documents.
//!
//! Documents are loaded fully into memory. The profile records the set of
//! paths, maximum nesting depth, node count, and (for JSON) an inferred
//! schema sketch or (for XML) tag frequencies.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use quick_xml::events::Event;
use serde_json::{Value, json};

use hq_model::{DocumentFormat, StructureProfile};

use crate::error::{ProfileError, Result};

/// Maximum number of XML paths kept in the profile for readability.
pub const XML_PATH_LIMIT: usize = 50;

/// Maximum number of XML tag frequencies kept.
pub const XML_TAG_LIMIT: usize = 20;

/// Profile a JSON document.
pub fn profile_json(path: &Path) -> Result<StructureProfile> {
    let (text, _encoding) = hq_ingest::read_decoded(path)?;
    let data: Value = serde_json::from_str(&text).map_err(|e| ProfileError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut paths = BTreeSet::new();
    collect_json_paths(&data, "", &mut paths);

    Ok(StructureProfile {
        format: DocumentFormat::Json,
        root_tag: None,
        max_depth: json_depth(&data),
        node_count: json_node_count(&data),
        unique_paths: paths.len(),
        paths: paths.into_iter().collect(),
        tag_frequencies: Vec::new(),
        schema: Some(infer_json_schema(&data)),
    })
}

fn collect_json_paths(data: &Value, prefix: &str, paths: &mut BTreeSet<String>) {
    match data {
        Value::Object(map) => {
            for (key, value) in map {
                let current = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                paths.insert(current.clone());
                collect_json_paths(value, &current, paths);
            }
        }
        Value::Array(items) => {
            // Sample the first element for structure
            if let Some(first) = items.first() {
                let current = format!("{prefix}[]");
                paths.insert(current.clone());
                collect_json_paths(first, &current, paths);
            }
        }
        _ => {}
    }
}

fn json_depth(data: &Value) -> usize {
    match data {
        Value::Object(map) => map.values().map(|v| json_depth(v) + 1).max().unwrap_or(0),
        Value::Array(items) => items.iter().map(|v| json_depth(v) + 1).max().unwrap_or(0),
        _ => 0,
    }
}

fn json_node_count(data: &Value) -> usize {
    1 + match data {
        Value::Object(map) => map.values().map(json_node_count).sum(),
        Value::Array(items) => items.iter().map(json_node_count).sum(),
        _ => 0,
    }
}

/// Infer a schema sketch from a JSON value. Arrays are described by their
/// first element.
pub fn infer_json_schema(data: &Value) -> Value {
    match data {
        Value::Object(map) => {
            let properties: BTreeMap<&String, Value> = map
                .iter()
                .map(|(key, value)| (key, infer_json_schema(value)))
                .collect();
            json!({ "type": "object", "properties": properties })
        }
        Value::Array(items) => match items.first() {
            Some(first) => json!({
                "type": "array",
                "items": infer_json_schema(first),
                "length": items.len(),
            }),
            None => json!({ "type": "array", "items": {} }),
        },
        Value::Bool(_) => json!({ "type": "boolean" }),
        Value::Number(n) if n.is_i64() || n.is_u64() => json!({ "type": "integer" }),
        Value::Number(_) => json!({ "type": "number" }),
        Value::String(_) => json!({ "type": "string" }),
        Value::Null => json!({ "type": "null" }),
    }
}

/// Profile an XML document by streaming its events.
pub fn profile_xml(path: &Path) -> Result<StructureProfile> {
    let (text, _encoding) = hq_ingest::read_decoded(path)?;
    let mut reader = quick_xml::Reader::from_str(&text);

    let mut stack: Vec<String> = Vec::new();
    let mut paths: BTreeSet<String> = BTreeSet::new();
    let mut tag_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut root_tag: Option<String> = None;
    let mut max_depth = 0usize;
    let mut node_count = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                let tag = local_name(start.name().as_ref());
                record_element(
                    &tag,
                    &stack,
                    &mut paths,
                    &mut tag_counts,
                    &mut root_tag,
                    &mut node_count,
                );
                stack.push(tag);
                max_depth = max_depth.max(stack.len() - 1);
            }
            Ok(Event::Empty(start)) => {
                let tag = local_name(start.name().as_ref());
                record_element(
                    &tag,
                    &stack,
                    &mut paths,
                    &mut tag_counts,
                    &mut root_tag,
                    &mut node_count,
                );
                max_depth = max_depth.max(stack.len());
            }
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(error) => {
                return Err(ProfileError::Xml {
                    path: path.to_path_buf(),
                    message: error.to_string(),
                });
            }
        }
    }

    if node_count == 0 {
        return Err(ProfileError::Xml {
            path: path.to_path_buf(),
            message: "document has no elements".to_string(),
        });
    }

    let unique_paths = paths.len();
    let mut path_list: Vec<String> = paths.into_iter().collect();
    path_list.truncate(XML_PATH_LIMIT);

    let mut frequencies: Vec<(String, usize)> = tag_counts.into_iter().collect();
    frequencies.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    frequencies.truncate(XML_TAG_LIMIT);

    Ok(StructureProfile {
        format: DocumentFormat::Xml,
        root_tag,
        max_depth,
        node_count,
        unique_paths,
        paths: path_list,
        tag_frequencies: frequencies,
        schema: None,
    })
}

fn record_element(
    tag: &str,
    stack: &[String],
    paths: &mut BTreeSet<String>,
    tag_counts: &mut BTreeMap<String, usize>,
    root_tag: &mut Option<String>,
    node_count: &mut usize,
) {
    let path = if stack.is_empty() {
        tag.to_string()
    } else {
        format!("{}/{tag}", stack.join("/"))
    };
    paths.insert(path);
    *tag_counts.entry(tag.to_string()).or_insert(0) += 1;
    if root_tag.is_none() {
        *root_tag = Some(tag.to_string());
    }
    *node_count += 1;
}

/// Element name with any namespace prefix removed.
fn local_name(name: &[u8]) -> String {
    let text = String::from_utf8_lossy(name);
    match text.rsplit_once(':') {
        Some((_, local)) => local.to_string(),
        None => text.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_json_paths_depth_and_nodes() {
        let file = write_file(r#"{"a": {"b": 1}, "c": [{"d": 2}, {"d": 3}]}"#);
        let profile = profile_json(file.path()).unwrap();

        assert_eq!(profile.format, DocumentFormat::Json);
        assert_eq!(profile.paths, vec!["a", "a.b", "c", "c[]", "c[].d"]);
        assert_eq!(profile.unique_paths, 5);
        // root + a + b + array + 2 objects + 2 d's
        assert_eq!(profile.node_count, 8);
        assert_eq!(profile.max_depth, 3);
    }

    #[test]
    fn test_json_schema_sketch() {
        let file = write_file(r#"{"name": "x", "count": 2, "ratio": 0.5, "tags": ["a"]}"#);
        let profile = profile_json(file.path()).unwrap();
        let schema = profile.schema.unwrap();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["name"]["type"], "string");
        assert_eq!(schema["properties"]["count"]["type"], "integer");
        assert_eq!(schema["properties"]["ratio"]["type"], "number");
        assert_eq!(schema["properties"]["tags"]["type"], "array");
        assert_eq!(schema["properties"]["tags"]["length"], 1);
    }

    #[test]
    fn test_json_parse_failure() {
        let file = write_file("{not json");
        let err = profile_json(file.path()).unwrap_err();
        assert!(matches!(err, ProfileError::Json { .. }));
    }

    #[test]
    fn test_xml_structure() {
        let file = write_file(
            "<study><patient id=\"1\"><gene>BRCA1</gene></patient>\
             <patient id=\"2\"><gene>TP53</gene></patient><empty/></study>",
        );
        let profile = profile_xml(file.path()).unwrap();

        assert_eq!(profile.format, DocumentFormat::Xml);
        assert_eq!(profile.root_tag.as_deref(), Some("study"));
        assert_eq!(profile.node_count, 6);
        assert_eq!(profile.max_depth, 2);
        assert_eq!(
            profile.paths,
            vec![
                "study",
                "study/empty",
                "study/patient",
                "study/patient/gene"
            ]
        );
        assert_eq!(profile.tag_frequencies[0], ("gene".to_string(), 2));
        assert_eq!(profile.tag_frequencies[1], ("patient".to_string(), 2));
    }

    #[test]
    fn test_xml_namespace_prefix_stripped() {
        let file = write_file("<ns:a xmlns:ns=\"urn:x\"><ns:b/></ns:a>");
        let profile = profile_xml(file.path()).unwrap();
        assert_eq!(profile.root_tag.as_deref(), Some("a"));
        assert_eq!(profile.paths, vec!["a", "a/b"]);
    }
}
