//! Chain Walker: aligns a required chain with a reported chain
//!
//! Blocks pair up by block type, never by position. Reported blocks the
//! profile does not constrain are ignored.

use crate::comparator::compare;
use profile_types::{CapabilityBlock, CapabilityChain, Failure};

/// A required block and the reported block of the same type, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AlignedBlock<'a> {
    pub required: &'a CapabilityBlock,
    pub reported: Option<&'a CapabilityBlock>,
}

/// One entry per block in `required`, in block-type order.
pub fn align<'a>(
    required: &'a CapabilityChain,
    reported: &'a CapabilityChain,
) -> Vec<AlignedBlock<'a>> {
    required
        .iter()
        .map(|block| AlignedBlock {
            required: block,
            reported: reported.get(block.block_type),
        })
        .collect()
}

/// Walk both chains and collect every failure.
///
/// A missing block yields `MissingCapabilityBlock` and its fields are not
/// compared.
pub fn walk_chain(required: &CapabilityChain, reported: &CapabilityChain) -> Vec<Failure> {
    let mut failures = Vec::new();
    for pair in align(required, reported) {
        match pair.reported {
            Some(reported) => failures.extend(
                compare(pair.required, reported)
                    .into_iter()
                    .map(Failure::FieldMismatch),
            ),
            None => failures.push(Failure::MissingCapabilityBlock(pair.required.block_type)),
        }
    }
    failures
}
