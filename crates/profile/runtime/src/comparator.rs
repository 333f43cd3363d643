//! Field Comparator: one required block against one reported block
//!
//! Each required field is checked according to its declared kind:
//!
//! - booleans: satisfied iff `reported >= required` (false < true), so a
//!   required `false` places no constraint, even on an omitted field
//! - numbers: per the schema bound (`AtLeast`, `AtMost`, `Exact`) at the
//!   field's native width
//! - enums: exact match
//! - string sets: required is a subset of reported
//!
//! A value of a different kind than required never satisfies it.

use profile_types::{Bound, CapabilityBlock, FieldKind, FieldMismatch, FieldValue};
use std::cmp::Ordering;

/// Every required field the reported block fails to satisfy.
///
/// Does not stop at the first mismatch. Fields present only in `reported`
/// are ignored.
pub fn compare(required: &CapabilityBlock, reported: &CapabilityBlock) -> Vec<FieldMismatch> {
    let mut mismatches = Vec::new();
    for (name, want) in &required.fields {
        let have = reported.get(name);
        let kind = required.block_type.field(name).map(|schema| schema.kind);

        let ok = match have {
            Some(have) => satisfies(kind, want, have),
            // A required false holds whatever the device reports, including nothing.
            None => matches!(want, FieldValue::Bool(false)),
        };
        if !ok {
            mismatches.push(FieldMismatch {
                block_type: required.block_type,
                field: name.clone(),
                required: want.clone(),
                reported: have.cloned(),
            });
        }
    }
    mismatches
}

/// Whether `reported` meets `required` for a field of `kind`.
///
/// Fields outside the block schema compare for equality.
pub fn satisfies(kind: Option<FieldKind>, required: &FieldValue, reported: &FieldValue) -> bool {
    let bound = kind.map_or(Bound::Exact, bound_of);
    match (required, reported) {
        (FieldValue::Bool(want), FieldValue::Bool(have)) => have >= want,
        (FieldValue::U32(want), FieldValue::U32(have)) => holds(bound, have.cmp(want)),
        (FieldValue::U64(want), FieldValue::U64(have)) => holds(bound, have.cmp(want)),
        (FieldValue::I32(want), FieldValue::I32(have)) => holds(bound, have.cmp(want)),
        // NaN orders against nothing
        (FieldValue::F32(want), FieldValue::F32(have)) => have
            .partial_cmp(want)
            .is_some_and(|ordering| holds(bound, ordering)),
        (FieldValue::Enum(want), FieldValue::Enum(have)) => have == want,
        (FieldValue::StringSet(want), FieldValue::StringSet(have)) => want.is_subset(have),
        _ => false,
    }
}

fn bound_of(kind: FieldKind) -> Bound {
    match kind {
        FieldKind::U32(bound)
        | FieldKind::U64(bound)
        | FieldKind::I32(bound)
        | FieldKind::F32(bound) => bound,
        FieldKind::Bool | FieldKind::Enum | FieldKind::StringSet => Bound::Exact,
    }
}

/// `ordering` is `reported.cmp(required)`.
fn holds(bound: Bound, ordering: Ordering) -> bool {
    match bound {
        Bound::AtLeast => ordering != Ordering::Less,
        Bound::AtMost => ordering != Ordering::Greater,
        Bound::Exact => ordering == Ordering::Equal,
    }
}
