use std::collections::{HashMap, HashSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tracing::debug;

use crate::error::{CheckerError, Result};

use super::ClassFile;

const PLATFORM_PREFIXES: &[&str] = &["java/", "javax/", "jdk/", "sun/"];

/// Whether an internal name belongs to the Java platform rather than to the
/// inspected directory. Platform types are assumed present and never declare
/// an entry point.
#[must_use]
pub fn is_platform_type(internal_name: &str) -> bool {
    PLATFORM_PREFIXES
        .iter()
        .any(|prefix| internal_name.starts_with(prefix))
}

/// A loaded type together with every non-platform supertype it depends on.
#[derive(Debug, Clone)]
pub struct ResolvedType {
    pub class: Rc<ClassFile>,
    /// Superclass chain, nearest first, stopping before the first platform type.
    pub superclasses: Vec<Rc<ClassFile>>,
    /// All transitive superinterfaces outside the platform, in discovery order.
    pub interfaces: Vec<Rc<ClassFile>>,
}

impl ResolvedType {
    /// The type itself followed by its superclasses.
    pub fn class_chain(&self) -> impl Iterator<Item = &ClassFile> {
        std::iter::once(self.class.as_ref()).chain(self.superclasses.iter().map(AsRef::as_ref))
    }
}

/// Class-loading context rooted at a directory of compiled classes.
///
/// Loaded files are cached for the lifetime of the value, which callers keep
/// scoped to a single check.
#[derive(Debug)]
pub struct ClassPath {
    root: PathBuf,
    cache: HashMap<String, Option<Rc<ClassFile>>>,
}

impl ClassPath {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            cache: HashMap::new(),
        }
    }

    /// Load a type and its full non-platform hierarchy.
    ///
    /// Returns `Ok(None)` if the type, or anything it extends or implements,
    /// is missing, malformed, or circular.
    ///
    /// # Errors
    /// Returns an error if a class file exists but cannot be read.
    pub fn resolve(&mut self, binary_name: &str) -> Result<Option<ResolvedType>> {
        let internal_name = binary_name.replace('.', "/");
        let Some(class) = self.load(&internal_name)? else {
            return Ok(None);
        };

        let Some(superclasses) = self.resolve_superclasses(&class)? else {
            debug!(class = binary_name, "superclass chain cannot be resolved");
            return Ok(None);
        };

        let mut roots = vec![Rc::clone(&class)];
        roots.extend(superclasses.iter().cloned());
        let Some(interfaces) = self.resolve_interfaces(&roots)? else {
            debug!(class = binary_name, "interfaces cannot be resolved");
            return Ok(None);
        };

        Ok(Some(ResolvedType {
            class,
            superclasses,
            interfaces,
        }))
    }

    fn resolve_superclasses(&mut self, class: &ClassFile) -> Result<Option<Vec<Rc<ClassFile>>>> {
        let mut chain = Vec::new();
        let mut seen = HashSet::from([class.this_class.clone()]);
        let mut next = class.super_class.clone();

        while let Some(name) = next {
            if is_platform_type(&name) {
                break;
            }
            if !seen.insert(name.clone()) {
                return Ok(None);
            }
            let Some(parent) = self.load(&name)? else {
                return Ok(None);
            };
            next = parent.super_class.clone();
            chain.push(parent);
        }

        Ok(Some(chain))
    }

    fn resolve_interfaces(&mut self, roots: &[Rc<ClassFile>]) -> Result<Option<Vec<Rc<ClassFile>>>> {
        let mut found = Vec::new();
        let mut seen = HashSet::new();
        let mut pending: Vec<String> = roots
            .iter()
            .flat_map(|c| c.interfaces.iter().cloned())
            .collect();
        pending.reverse();

        while let Some(name) = pending.pop() {
            if is_platform_type(&name) || !seen.insert(name.clone()) {
                continue;
            }
            let Some(interface) = self.load(&name)? else {
                return Ok(None);
            };
            pending.extend(interface.interfaces.iter().rev().cloned());
            found.push(interface);
        }

        Ok(Some(found))
    }

    /// Load a single class by internal name, checking that the file really
    /// declares that name.
    fn load(&mut self, internal_name: &str) -> Result<Option<Rc<ClassFile>>> {
        if let Some(cached) = self.cache.get(internal_name) {
            return Ok(cached.clone());
        }

        let path = self.root.join(format!("{internal_name}.class"));
        let loaded = match std::fs::read(&path) {
            Ok(bytes) => parse_named(&bytes, internal_name, &path),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(source) => return Err(CheckerError::ClassLoad { path, source }),
        };

        self.cache.insert(internal_name.to_string(), loaded.clone());
        Ok(loaded)
    }
}

fn parse_named(bytes: &[u8], internal_name: &str, path: &Path) -> Option<Rc<ClassFile>> {
    match ClassFile::parse(bytes) {
        Ok(class) if class.this_class == internal_name => Some(Rc::new(class)),
        Ok(class) => {
            debug!(
                path = %path.display(),
                declared = %class.this_class,
                "class file declares a different name"
            );
            None
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "malformed class file");
            None
        }
    }
}

#[cfg(test)]
#[path = "classpath_tests.rs"]
mod tests;
