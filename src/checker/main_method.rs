use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::classfile::{ClassFile, ClassPath, MethodDescriptor, MethodInfo, ResolvedType};
use crate::error::Result;
use crate::output::display_path;
use crate::scanner::FileLister;

use super::{Checker, CheckerResult};

const CHECKER_NAME: &str = "MainMethodChecker";
const CLASS_EXTENSION: &str = "class";
const FOUND_PREFIX: &str = "Found main method in ";

/// A type declaring at least one launchable `main` method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPointCandidate {
    /// Dotted binary name, e.g. `pkg.sub.Main`.
    pub type_name: String,
    pub match_count: usize,
}

impl fmt::Display for EntryPointCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.match_count == 1 {
            f.write_str(&self.type_name)
        } else {
            write!(f, "{} (x{})", self.type_name, self.match_count)
        }
    }
}

/// Checks that a directory of compiled classes has exactly one entry point.
#[derive(Debug, Clone)]
pub struct MainMethodChecker<L> {
    lister: L,
    root: PathBuf,
}

impl<L: FileLister> MainMethodChecker<L> {
    #[must_use]
    pub fn new(lister: L, root: &Path) -> Self {
        Self {
            lister,
            root: root.to_path_buf(),
        }
    }

    /// All types with at least one qualifying `main`, in listing order.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be listed or a class file
    /// cannot be read.
    pub fn find_candidates(&self) -> Result<Vec<EntryPointCandidate>> {
        let mut classpath = ClassPath::new(&self.root);
        let mut candidates = Vec::new();

        for path in self.lister.list(&self.root, CLASS_EXTENSION)? {
            let type_name = self.binary_name(&path);
            let Some(resolved) = classpath.resolve(&type_name)? else {
                debug!(class = %type_name, "skipping unloadable type");
                continue;
            };

            let match_count = candidate_methods(&resolved)
                .into_iter()
                .filter(|method| is_entry_point(&resolved.class, method))
                .count();
            debug!(class = %type_name, match_count, "inspected type");
            if match_count > 0 {
                candidates.push(EntryPointCandidate {
                    type_name,
                    match_count,
                });
            }
        }

        Ok(candidates)
    }

    fn binary_name(&self, path: &Path) -> String {
        let relative = display_path(path, Some(&self.root));
        relative
            .strip_suffix(".class")
            .unwrap_or(&relative)
            .replace('/', ".")
    }
}

impl<L: FileLister> Checker for MainMethodChecker<L> {
    fn name(&self) -> &str {
        CHECKER_NAME
    }

    fn check(&self) -> Result<CheckerResult> {
        let candidates = self.find_candidates()?;
        info!(candidates = candidates.len(), "main method check finished");

        let result = match candidates.as_slice() {
            [] => CheckerResult::failed(CHECKER_NAME, "Could not find a main method!"),
            [only] if only.match_count == 1 => CheckerResult::new(
                CHECKER_NAME,
                true,
                Some(format!("{FOUND_PREFIX}{}", only.type_name)),
            ),
            _ => {
                let listing = candidates
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n");
                CheckerResult::failed(
                    CHECKER_NAME,
                    format!("Found multiple main methods:\n{listing}"),
                )
            }
        };
        Ok(result?)
    }
}

/// The launchable type named by a successful [`MainMethodChecker`] result.
#[must_use]
pub fn main_class(result: &CheckerResult) -> Option<&str> {
    if result.name() != CHECKER_NAME || !result.is_successful() {
        return None;
    }
    result.message()?.strip_prefix(FOUND_PREFIX)
}

/// Methods that could be invoked as `main` on the type.
///
/// Interfaces only offer their own public static methods. Classes offer every
/// public method visible through the hierarchy once, plus every non-public
/// method declared anywhere in the superclass chain.
fn candidate_methods(resolved: &ResolvedType) -> Vec<&MethodInfo> {
    if resolved.class.is_interface() {
        return resolved
            .class
            .methods
            .iter()
            .filter(|m| m.access.is_public() && m.access.is_static())
            .collect();
    }

    let mut seen = HashSet::new();
    let mut methods = Vec::new();

    let inherited_public = resolved
        .class_chain()
        .flat_map(|c| &c.methods)
        .filter(|m| m.access.is_public());
    let interface_defaults = resolved
        .interfaces
        .iter()
        .flat_map(|i| &i.methods)
        .filter(|m| m.access.is_public() && !m.access.is_static());
    for method in inherited_public.chain(interface_defaults) {
        if seen.insert((method.name.as_str(), method.descriptor.as_str())) {
            methods.push(method);
        }
    }

    methods.extend(
        resolved
            .class_chain()
            .flat_map(|c| &c.methods)
            .filter(|m| !m.access.is_public()),
    );
    methods
}

fn is_entry_point(class: &ClassFile, method: &MethodInfo) -> bool {
    method.name == "main"
        && has_main_signature(&method.descriptor)
        && !method.access.is_private()
        && !method.access.is_abstract()
        && (method.access.is_static() || class.has_public_no_arg_constructor())
}

/// `()V` or `([Ljava/lang/String;)V`.
fn has_main_signature(descriptor: &str) -> bool {
    MethodDescriptor::parse(descriptor).is_some_and(|d| {
        d.returns_void()
            && match d.parameters.as_slice() {
                [] => true,
                [only] => only.is_string_array(),
                _ => false,
            }
    })
}

#[cfg(test)]
#[path = "main_method_tests.rs"]
mod tests;
