// src/discovery.rs
use crate::beans::BeanDocument;
use crate::config::Config;
use crate::error::{AnalyzerError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One analyzable project: its class files and bean-configuration documents.
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    pub name: String,
    pub root: PathBuf,
    pub class_files: Vec<PathBuf>,
    pub bean_documents: Vec<PathBuf>,
}

/// Enumerates project directories under the configured base path.
///
/// Directory enumeration order is OS-dependent, so everything is sorted by
/// name; report rows follow this order.
///
/// # Errors
/// Returns error if the base directory cannot be read or the bean-document
/// pattern is invalid.
pub fn discover_projects(config: &Config) -> Result<Vec<ProjectLayout>> {
    let bean_re = config.bean_doc_regex()?;
    let entries = fs::read_dir(&config.projects_dir)
        .map_err(|source| io_error(source, &config.projects_dir))?;

    let mut roots: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    roots.sort();

    let mut projects = Vec::new();
    for root in roots {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (class_files, bean_documents) =
            collect_files(&root, &config.class_extension, &bean_re);
        projects.push(ProjectLayout {
            name,
            root,
            class_files,
            bean_documents,
        });
    }
    Ok(projects)
}

fn collect_files(root: &Path, extension: &str, bean_re: &Regex) -> (Vec<PathBuf>, Vec<PathBuf>) {
    let mut class_files = Vec::new();
    let mut bean_documents = Vec::new();

    let walker = WalkDir::new(root).follow_links(false).into_iter();
    for entry in walker.filter_map(std::result::Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case(extension))
        {
            class_files.push(path);
        } else if bean_re.is_match(&normalize_name(&path)) {
            bean_documents.push(path);
        }
    }

    class_files.sort();
    bean_documents.sort();
    (class_files, bean_documents)
}

fn normalize_name(path: &Path) -> String {
    path.file_name().map_or(String::new(), |n| n.to_string_lossy().into_owned())
}

/// Reads a project's bean documents into memory for extraction.
///
/// # Errors
/// Returns error if a document cannot be read.
pub fn load_bean_documents(paths: &[PathBuf]) -> Result<Vec<BeanDocument>> {
    paths
        .iter()
        .map(|path| {
            let content = fs::read_to_string(path).map_err(|source| io_error(source, path))?;
            Ok(BeanDocument {
                path: path.clone(),
                content,
            })
        })
        .collect()
}

fn io_error(source: std::io::Error, path: &Path) -> AnalyzerError {
    AnalyzerError::Io {
        source,
        path: path.to_path_buf(),
    }
}
