//! Folding extensions into the types they extend.
//!
//! An unconstrained extension whose target type is declared in the same module
//! is merged into that type: its members are appended and its conformances
//! join the type's inheritance list. Constrained extensions (non-empty `where`
//! clause) and extensions of types declared elsewhere stay standalone.

use apidelta_model::{Declaration, Extension, Root};
use tracing::debug;

/// Merges extensions into their target types.
///
/// Kept declarations come first in their original order, followed by the
/// extensions that were not merged, also in their original order.
#[must_use]
pub fn merge_extensions(root: Root) -> Root {
    let Root { name, members } = root;

    let (mut kept, extensions): (Vec<Declaration>, Vec<Declaration>) = members
        .into_iter()
        .partition(|member| !matches!(member, Declaration::Extension(_)));

    let mut merged = 0usize;
    let mut standalone = Vec::new();
    for declaration in extensions {
        let Declaration::Extension(extension) = declaration else {
            continue;
        };
        if extension.is_constrained() {
            standalone.push(Declaration::Extension(extension));
            continue;
        }
        match absorb_into(&mut kept, &name, extension) {
            Ok(()) => merged += 1,
            Err(extension) => standalone.push(Declaration::Extension(extension)),
        }
    }

    debug!(
        module = name.as_str(),
        merged,
        standalone = standalone.len(),
        "merged extensions"
    );

    kept.extend(standalone);
    Root::new(name, kept)
}

/// Absorbs `extension` into the matching type, or hands it back.
fn absorb_into(
    members: &mut [Declaration],
    module_name: &str,
    extension: Extension,
) -> Result<(), Extension> {
    let target = qualify(&extension.extended_type_name, module_name);
    let Some(path) = find_type(members, module_name, &target) else {
        return Err(extension);
    };

    let mut current = members;
    let (last, parents) = match path.split_last() {
        Some(split) => split,
        None => return Err(extension),
    };
    for &index in parents {
        current = match current.get_mut(index) {
            Some(Declaration::Type(decl)) => decl.members.as_mut_slice(),
            _ => return Err(extension),
        };
    }
    match current.get_mut(*last) {
        Some(Declaration::Type(decl)) => {
            decl.absorb(extension);
            Ok(())
        }
        _ => Err(extension),
    }
}

/// Prefixes the module name unless the name already carries it.
fn qualify(name: &str, module_name: &str) -> String {
    let prefix = format!("{module_name}.");
    if name.starts_with(&prefix) {
        name.to_string()
    } else {
        format!("{prefix}{name}")
    }
}

/// Finds the index path of the type whose qualified name is `target`.
///
/// Only descends into types whose qualified name is a `.`-boundary prefix of
/// the target.
fn find_type(members: &[Declaration], prefix: &str, target: &str) -> Option<Vec<usize>> {
    for (index, member) in members.iter().enumerate() {
        let Declaration::Type(decl) = member else {
            continue;
        };
        let qualified = format!("{prefix}.{}", decl.name);
        if qualified == target {
            return Some(vec![index]);
        }
        let is_enclosing = target
            .strip_prefix(qualified.as_str())
            .is_some_and(|rest| rest.starts_with('.'));
        if is_enclosing {
            if let Some(mut path) = find_type(&decl.members, &qualified, target) {
                path.insert(0, index);
                return Some(path);
            }
        }
    }
    None
}
