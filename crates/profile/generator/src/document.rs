//! Declarations: one profile entry as written in a document
//!
//! A declaration is still unresolved: it may name a base profile and may
//! omit fields it expects to inherit.

use crate::errors::{GenerateError, GenerateResult};
use profile_schema::ValidatedDocument;
use profile_types::{
    ApiVersion, CapabilityBlock, CapabilityChain, ExtensionRequirement, FormatCapability,
    ProfileId, QueueFamilyCapability, TypesError,
};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfile {
    name: String,
    version: u32,
    label: Option<String>,
    description: Option<String>,
    api_version: Option<String>,
    inherits: Option<BaseRef>,
    #[serde(default)]
    extensions: Vec<RawExtension>,
    #[serde(default)]
    capabilities: Map<String, Value>,
    #[serde(default)]
    queue_families: Vec<QueueFamilyCapability>,
    #[serde(default)]
    formats: BTreeMap<String, FormatCapability>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawExtension {
    name: String,
    min_version: u32,
}

/// Reference to a base profile. Without a version the highest declared
/// version of that name is used.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BaseRef {
    pub name: String,
    pub version: Option<u32>,
}

impl std::fmt::Display for BaseRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.version {
            Some(v) => write!(f, "{}@{}", self.name, v),
            None => f.write_str(&self.name),
        }
    }
}

/// One parsed, not yet resolved profile declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfileDecl {
    pub id: ProfileId,
    /// Name of the document that declared it.
    pub source: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub api_version: Option<ApiVersion>,
    pub base: Option<BaseRef>,
    pub extensions: Vec<ExtensionRequirement>,
    pub capabilities: CapabilityChain,
    pub queue_families: Vec<QueueFamilyCapability>,
    pub formats: BTreeMap<String, FormatCapability>,
}

/// Parse every profile entry of a validated document.
pub fn parse_document(doc: &ValidatedDocument) -> GenerateResult<Vec<ProfileDecl>> {
    doc.profiles()
        .iter()
        .map(|entry| parse_profile(doc.name(), entry))
        .collect()
}

fn parse_profile(source: &str, entry: &Value) -> GenerateResult<ProfileDecl> {
    let raw: RawProfile =
        serde_json::from_value(entry.clone()).map_err(|e| GenerateError::Malformed {
            document: source.to_string(),
            message: e.to_string(),
        })?;
    let id = ProfileId::new(raw.name, raw.version);

    let api_version = raw
        .api_version
        .map(|v| {
            ApiVersion::parse(&v).map_err(|_| GenerateError::MalformedVersion {
                profile: id.clone(),
                value: v.clone(),
            })
        })
        .transpose()?;

    let extensions = parse_extensions(&id, raw.extensions)?;
    let capabilities = parse_capabilities(&id, &raw.capabilities)?;

    Ok(ProfileDecl {
        id,
        source: source.to_string(),
        label: raw.label,
        description: raw.description,
        api_version,
        base: raw.inherits,
        extensions,
        capabilities,
        queue_families: raw.queue_families,
        formats: raw.formats,
    })
}

/// Keep declared order; identical repeats collapse, conflicting ones fail.
fn parse_extensions(
    id: &ProfileId,
    raw: Vec<RawExtension>,
) -> GenerateResult<Vec<ExtensionRequirement>> {
    let mut extensions: Vec<ExtensionRequirement> = Vec::with_capacity(raw.len());
    for ext in raw {
        match extensions.iter().find(|e| e.name == ext.name) {
            Some(existing) if existing.min_version != ext.min_version => {
                return Err(GenerateError::DuplicateExtension {
                    profile: id.clone(),
                    extension: ext.name,
                    first: existing.min_version,
                    second: ext.min_version,
                });
            }
            Some(_) => {}
            None => extensions.push(ExtensionRequirement::new(ext.name, ext.min_version)),
        }
    }
    Ok(extensions)
}

fn parse_capabilities(id: &ProfileId, raw: &Map<String, Value>) -> GenerateResult<CapabilityChain> {
    let mut chain = CapabilityChain::new();
    for (tag, fields) in raw {
        let block_type = profile_types::BlockTypeId::from_tag(tag).ok_or_else(|| {
            GenerateError::UnknownBlockType {
                profile: id.clone(),
                tag: tag.clone(),
            }
        })?;
        let fields = fields.as_object().ok_or_else(|| GenerateError::Malformed {
            document: id.to_string(),
            message: format!("capability block '{}' must be an object", tag),
        })?;
        let block = CapabilityBlock::from_json(block_type, fields)
            .map_err(|e| types_error(id, e))?;
        chain.upsert(block);
    }
    Ok(chain)
}

fn types_error(id: &ProfileId, err: TypesError) -> GenerateError {
    match err {
        TypesError::UnknownBlockType(tag) => GenerateError::UnknownBlockType {
            profile: id.clone(),
            tag,
        },
        TypesError::UnknownField { block_type, field } => GenerateError::UnknownField {
            profile: id.clone(),
            block_type,
            field,
        },
        TypesError::FieldTypeMismatch {
            block_type,
            field,
            expected,
        } => GenerateError::FieldTypeMismatch {
            profile: id.clone(),
            block_type,
            field,
            expected,
        },
        other => GenerateError::Malformed {
            document: id.to_string(),
            message: other.to_string(),
        },
    }
}
