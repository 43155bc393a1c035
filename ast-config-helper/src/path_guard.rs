use std::path::{Component, Path, PathBuf};

use anyhow::{bail, Context, Result};

/// A document path tagged with its role in the running command, so clashes
/// are reported against the document the operator named rather than a bare
/// path.
#[derive(Debug, Clone, Copy)]
pub struct DocumentPath<'a> {
    pub role: &'static str,
    pub path: &'a Path,
}

impl<'a> DocumentPath<'a> {
    pub fn new(role: &'static str, path: &'a Path) -> Self {
        Self { role, path }
    }
}

/// Refuse a write plan where a generated document would overwrite one of the
/// command's input documents, or where two generated documents land on the
/// same file (the generate command emits two).
pub fn ensure_distinct_documents(
    outputs: &[DocumentPath<'_>],
    inputs: &[DocumentPath<'_>],
) -> Result<()> {
    for (idx, output) in outputs.iter().enumerate() {
        let out_resolved = resolve(output.path)?;

        for input in inputs {
            if out_resolved == resolve(input.path)? {
                bail!(
                    "refusing to overwrite {} file {}: the {} output resolves to the same path",
                    input.role,
                    input.path.display(),
                    output.role
                );
            }
        }

        for other in &outputs[idx + 1..] {
            if out_resolved == resolve(other.path)? {
                bail!(
                    "the {} output and the {} output resolve to the same path {}",
                    output.role,
                    other.role,
                    other.path.display()
                );
            }
        }
    }
    Ok(())
}

/// Resolve a path for comparison. Existing files canonicalize; paths that do
/// not exist yet (typically the outputs) are made absolute and normalized
/// lexically so `..` segments cannot dodge the clash check.
fn resolve(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return path
            .canonicalize()
            .with_context(|| format!("canonicalize {}", path.display()));
    }

    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().context("current_dir")?.join(path)
    };
    Ok(normalize_lexically(&absolute))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }
    resolved
}
