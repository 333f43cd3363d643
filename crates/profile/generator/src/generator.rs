//! Table generation entry point

use crate::document::parse_document;
use crate::errors::GenerateResult;
use crate::inheritance::resolve;
use profile_schema::ValidatedDocument;
use profile_types::ProfileTable;
use tracing::{debug, info};

/// Build the profile table from validated documents.
///
/// Every document is parsed, inheritance is resolved across all of them,
/// and the result is independent of document order. The first error aborts
/// the whole table.
pub fn generate(documents: &[ValidatedDocument]) -> GenerateResult<ProfileTable> {
    let mut decls = Vec::new();
    for doc in documents {
        let parsed = parse_document(doc)?;
        debug!(
            document = doc.name(),
            profiles = parsed.len(),
            "Parsed profile document"
        );
        decls.extend(parsed);
    }

    let table: ProfileTable = resolve(decls)?.into_iter().collect();
    info!(
        documents = documents.len(),
        profiles = table.len(),
        "Profile table generated"
    );
    Ok(table)
}
