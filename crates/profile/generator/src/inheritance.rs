//! Inheritance resolution
//!
//! Declarations live in an arena indexed by position (after sorting by id),
//! with base links stored as indices. A Kahn pass orders the arena so every
//! base is resolved before its children; anything left over sits on or behind
//! a cycle, which is reported before a single field is merged.

use crate::document::{BaseRef, ProfileDecl};
use crate::errors::{GenerateError, GenerateResult};
use profile_types::{Profile, ProfileId};
use std::collections::{BTreeMap, VecDeque};
use tracing::debug;

struct Arena {
    decls: Vec<ProfileDecl>,
    base: Vec<Option<usize>>,
}

/// Resolve every declaration into a complete profile.
///
/// Output order follows profile id, regardless of declaration order.
pub fn resolve(mut decls: Vec<ProfileDecl>) -> GenerateResult<Vec<Profile>> {
    decls.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.source.cmp(&b.source)));
    reject_duplicates(&decls)?;

    let arena = link(decls)?;
    let order = topological_order(&arena)?;

    let mut resolved: Vec<Option<Profile>> = vec![None; arena.decls.len()];
    for node in order {
        let decl = &arena.decls[node];
        let profile = match arena.base[node] {
            Some(parent) => {
                let base = resolved[parent].as_ref().ok_or_else(|| {
                    GenerateError::UnknownBaseProfile {
                        profile: decl.id.clone(),
                        base: arena.decls[parent].id.to_string(),
                    }
                })?;
                inherit(base, decl)
            }
            None => root(decl)?,
        };
        debug!(
            profile = %profile.id,
            base = ?profile.base.as_ref().map(ToString::to_string),
            "Resolved profile"
        );
        resolved[node] = Some(profile);
    }

    Ok(resolved.into_iter().flatten().collect())
}

fn reject_duplicates(sorted: &[ProfileDecl]) -> GenerateResult<()> {
    for pair in sorted.windows(2) {
        if pair[0].id == pair[1].id {
            return Err(GenerateError::DuplicateProfile {
                profile: pair[0].id.clone(),
                first: pair[0].source.clone(),
                second: pair[1].source.clone(),
            });
        }
    }
    Ok(())
}

fn link(decls: Vec<ProfileDecl>) -> GenerateResult<Arena> {
    let index: BTreeMap<&ProfileId, usize> =
        decls.iter().enumerate().map(|(i, d)| (&d.id, i)).collect();

    let base = decls
        .iter()
        .map(|decl| match &decl.base {
            Some(base_ref) => lookup(&index, base_ref).map(Some).ok_or_else(|| {
                GenerateError::UnknownBaseProfile {
                    profile: decl.id.clone(),
                    base: base_ref.to_string(),
                }
            }),
            None => Ok(None),
        })
        .collect::<GenerateResult<Vec<_>>>()?;

    Ok(Arena { decls, base })
}

fn lookup(index: &BTreeMap<&ProfileId, usize>, base: &BaseRef) -> Option<usize> {
    match base.version {
        Some(version) => index.get(&ProfileId::new(base.name.clone(), version)).copied(),
        // Ids sort by name then version, so the last match is the highest.
        None => index
            .iter()
            .filter(|(id, _)| id.name == base.name)
            .map(|(_, &i)| i)
            .next_back(),
    }
}

fn topological_order(arena: &Arena) -> GenerateResult<Vec<usize>> {
    let n = arena.decls.len();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (node, base) in arena.base.iter().enumerate() {
        if let Some(parent) = base {
            children[*parent].push(node);
        }
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&i| arena.base[i].is_none()).collect();
    let mut order = Vec::with_capacity(n);
    while let Some(node) = queue.pop_front() {
        order.push(node);
        queue.extend(children[node].iter().copied());
    }

    if order.len() < n {
        let mut placed = vec![false; n];
        for &node in &order {
            placed[node] = true;
        }
        return Err(extract_cycle(arena, &placed));
    }
    Ok(order)
}

/// Every unplaced node has an unplaced base, so following base links from
/// any of them must revisit a node.
fn extract_cycle(arena: &Arena, placed: &[bool]) -> GenerateError {
    let start = placed.iter().position(|p| !p).unwrap_or(0);

    let mut seen_at: BTreeMap<usize, usize> = BTreeMap::new();
    let mut path = Vec::new();
    let mut node = start;
    while !seen_at.contains_key(&node) {
        seen_at.insert(node, path.len());
        path.push(node);
        match arena.base[node] {
            Some(parent) => node = parent,
            None => break,
        }
    }

    let from = seen_at.get(&node).copied().unwrap_or(0);
    let mut cycle: Vec<ProfileId> = path[from..]
        .iter()
        .map(|&i| arena.decls[i].id.clone())
        .collect();

    // Start at the smallest id so the report does not depend on where the walk began.
    if let Some(min) = cycle
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.cmp(b.1))
        .map(|(i, _)| i)
    {
        cycle.rotate_left(min);
    }
    GenerateError::CyclicInheritance { cycle }
}

fn root(decl: &ProfileDecl) -> GenerateResult<Profile> {
    let api_version = decl
        .api_version
        .ok_or_else(|| GenerateError::MissingApiVersion(decl.id.clone()))?;

    let mut profile = Profile::new(decl.id.clone(), api_version);
    apply_labels(&mut profile, decl);
    profile.extensions = decl.extensions.clone();
    profile.capabilities = decl.capabilities.clone();
    profile.queue_families = decl.queue_families.clone();
    profile.formats = decl.formats.clone();
    Ok(profile)
}

/// Fold a child declaration over its resolved base. The child wins per
/// value; format feature sets are unioned.
fn inherit(base: &Profile, decl: &ProfileDecl) -> Profile {
    let mut profile = Profile::new(
        decl.id.clone(),
        decl.api_version.unwrap_or(base.api_version),
    );
    apply_labels(&mut profile, decl);

    // Base order first; the child overrides minVersion and appends new names.
    profile.extensions = base.extensions.clone();
    for ext in &decl.extensions {
        match profile.extensions.iter_mut().find(|e| e.name == ext.name) {
            Some(existing) => existing.min_version = ext.min_version,
            None => profile.extensions.push(ext.clone()),
        }
    }

    profile.capabilities = base.capabilities.clone();
    profile.capabilities.overlay(&decl.capabilities);

    profile.queue_families = base.queue_families.clone();
    for family in &decl.queue_families {
        if !profile.queue_families.contains(family) {
            profile.queue_families.push(family.clone());
        }
    }

    profile.formats = base.formats.clone();
    for (name, format) in &decl.formats {
        profile
            .formats
            .entry(name.clone())
            .or_default()
            .overlay(format);
    }

    profile.base = Some(base.id.clone());
    profile
}

fn apply_labels(profile: &mut Profile, decl: &ProfileDecl) {
    if let Some(label) = &decl.label {
        profile.label = label.clone();
    }
    if let Some(description) = &decl.description {
        profile.description = description.clone();
    }
}
