// src/beans.rs
//! Bean-reference extraction from dependency-configuration documents.
//!
//! Only two things in a document matter here: elements whose tag name
//! contains `bean` (case-sensitive, prefix included), and their attributes
//! whose local name is `class` in any casing.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{AnalyzerError, Result};

/// One dependency-configuration document, loaded by discovery.
#[derive(Debug, Clone)]
pub struct BeanDocument {
    pub path: PathBuf,
    pub content: String,
}

/// Collects the concrete class names declared as injectable beans across a
/// project's configuration documents.
///
/// # Errors
/// A malformed document fails the whole call; DI analysis is unreliable
/// without complete bean data, so the caller abandons the project.
pub fn concrete_classes(documents: &[BeanDocument]) -> Result<HashSet<String>> {
    let mut classes = HashSet::new();
    for document in documents {
        extract_document(document, &mut classes)?;
    }
    Ok(classes)
}

fn extract_document(document: &BeanDocument, out: &mut HashSet<String>) -> Result<()> {
    let mut reader = Reader::from_str(&document.content);
    loop {
        match reader.read_event() {
            Ok(Event::Start(element) | Event::Empty(element)) => {
                collect_bean_classes(&document.path, &element, out)?;
            }
            Ok(Event::Eof) => return Ok(()),
            Ok(_) => {}
            Err(e) => return Err(config_error(&document.path, &e.to_string())),
        }
    }
}

fn collect_bean_classes(
    path: &Path,
    element: &BytesStart<'_>,
    out: &mut HashSet<String>,
) -> Result<()> {
    let tag = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    if !tag.contains("bean") {
        return Ok(());
    }
    for attribute in element.attributes() {
        let attribute = attribute.map_err(|e| config_error(path, &e.to_string()))?;
        if attribute
            .key
            .local_name()
            .as_ref()
            .eq_ignore_ascii_case(b"class")
        {
            let value = attribute
                .unescape_value()
                .map_err(|e| config_error(path, &e.to_string()))?;
            out.insert(value.into_owned());
        }
    }
    Ok(())
}

fn config_error(path: &Path, reason: &str) -> AnalyzerError {
    AnalyzerError::ConfigParse {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}
