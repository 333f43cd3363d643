use crate::{BlockTypeId, FieldValue, TypesError, TypesResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A flat, typed record of capability fields for one block type.
#[derive(Clone, Debug, PartialEq)]
pub struct CapabilityBlock {
    pub block_type: BlockTypeId,
    pub fields: BTreeMap<String, FieldValue>,
}

impl CapabilityBlock {
    pub fn new(block_type: BlockTypeId) -> Self {
        Self {
            block_type,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter. Does not check the block schema.
    pub fn with(mut self, field: impl Into<String>, value: FieldValue) -> Self {
        self.fields.insert(field.into(), value);
        self
    }

    pub fn set(&mut self, field: impl Into<String>, value: FieldValue) {
        self.fields.insert(field.into(), value);
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Parse a JSON object of `field: value` pairs against the block schema.
    pub fn from_json(block_type: BlockTypeId, object: &Map<String, Value>) -> TypesResult<Self> {
        let mut block = CapabilityBlock::new(block_type);
        for (name, raw) in object {
            block
                .fields
                .insert(name.clone(), parse_field(block_type, name, raw)?);
        }
        Ok(block)
    }

    /// Like `from_json`, but fields outside the block schema are skipped and
    /// returned by name instead of failing. Known fields are still typed.
    pub fn from_json_lenient(
        block_type: BlockTypeId,
        object: &Map<String, Value>,
    ) -> TypesResult<(Self, Vec<String>)> {
        let mut block = CapabilityBlock::new(block_type);
        let mut skipped = Vec::new();
        for (name, raw) in object {
            if block_type.field(name).is_none() {
                skipped.push(name.clone());
                continue;
            }
            block
                .fields
                .insert(name.clone(), parse_field(block_type, name, raw)?);
        }
        Ok((block, skipped))
    }

    /// The document form: a JSON object of `field: value` pairs.
    pub fn to_json(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect()
    }

    /// Overlay `other`'s fields onto this block; `other` wins per field.
    pub fn overlay(&mut self, other: &CapabilityBlock) {
        for (name, value) in &other.fields {
            self.fields.insert(name.clone(), value.clone());
        }
    }
}

/// An unordered set of capability blocks, at most one per block type.
///
/// Serializes in document form, `{ tag: { field: value } }`, and is checked
/// against the block schemas when deserialized.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct CapabilityChain {
    blocks: BTreeMap<BlockTypeId, CapabilityBlock>,
}

impl CapabilityChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a block, rejecting a second block of the same type.
    pub fn try_insert(&mut self, block: CapabilityBlock) -> TypesResult<()> {
        if self.blocks.contains_key(&block.block_type) {
            return Err(TypesError::DuplicateBlock(block.block_type));
        }
        self.blocks.insert(block.block_type, block);
        Ok(())
    }

    /// Insert or replace the block of this type.
    pub fn upsert(&mut self, block: CapabilityBlock) {
        self.blocks.insert(block.block_type, block);
    }

    pub fn get(&self, block_type: BlockTypeId) -> Option<&CapabilityBlock> {
        self.blocks.get(&block_type)
    }

    pub fn get_mut(&mut self, block_type: BlockTypeId) -> Option<&mut CapabilityBlock> {
        self.blocks.get_mut(&block_type)
    }

    pub fn contains(&self, block_type: BlockTypeId) -> bool {
        self.blocks.contains_key(&block_type)
    }

    pub fn remove(&mut self, block_type: BlockTypeId) -> Option<CapabilityBlock> {
        self.blocks.remove(&block_type)
    }

    /// Blocks in block-type order.
    pub fn iter(&self) -> impl Iterator<Item = &CapabilityBlock> {
        self.blocks.values()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Overlay another chain: blocks merge field by field, `other` wins.
    pub fn overlay(&mut self, other: &CapabilityChain) {
        for block in other.iter() {
            match self.blocks.get_mut(&block.block_type) {
                Some(existing) => existing.overlay(block),
                None => {
                    self.blocks.insert(block.block_type, block.clone());
                }
            }
        }
    }

    /// Parse a JSON object of `tag: { field: value }` entries.
    pub fn from_json(object: &Map<String, Value>) -> TypesResult<Self> {
        let mut chain = CapabilityChain::new();
        for (tag, fields) in object {
            let block_type = BlockTypeId::from_tag(tag)
                .ok_or_else(|| TypesError::UnknownBlockType(tag.clone()))?;
            let fields = fields.as_object().ok_or_else(|| {
                TypesError::Malformed(format!("capability block '{}' must be an object", tag))
            })?;
            chain.try_insert(CapabilityBlock::from_json(block_type, fields)?)?;
        }
        Ok(chain)
    }

    /// Parse a reported chain. Block tags and fields the registry does not
    /// know are skipped and returned as `tag` or `tag.field`.
    pub fn from_json_lenient(object: &Map<String, Value>) -> TypesResult<(Self, Vec<String>)> {
        let mut chain = CapabilityChain::new();
        let mut skipped = Vec::new();
        for (tag, fields) in object {
            let Some(block_type) = BlockTypeId::from_tag(tag) else {
                skipped.push(tag.clone());
                continue;
            };
            let fields = fields.as_object().ok_or_else(|| {
                TypesError::Malformed(format!("capability block '{}' must be an object", tag))
            })?;
            let (block, unknown) = CapabilityBlock::from_json_lenient(block_type, fields)?;
            skipped.extend(unknown.into_iter().map(|field| format!("{}.{}", tag, field)));
            chain.try_insert(block)?;
        }
        Ok((chain, skipped))
    }

    /// The document form: `tag: { field: value }` entries.
    pub fn to_json(&self) -> Map<String, Value> {
        self.iter()
            .map(|block| {
                (
                    block.block_type.tag().to_string(),
                    Value::Object(block.to_json()),
                )
            })
            .collect()
    }
}

fn parse_field(block_type: BlockTypeId, name: &str, raw: &Value) -> TypesResult<FieldValue> {
    let schema = block_type
        .field(name)
        .ok_or_else(|| TypesError::UnknownField {
            block_type,
            field: name.to_string(),
        })?;
    FieldValue::from_json(schema.kind, raw).ok_or_else(|| TypesError::FieldTypeMismatch {
        block_type,
        field: name.to_string(),
        expected: schema.kind.describe().to_string(),
    })
}

impl TryFrom<Map<String, Value>> for CapabilityChain {
    type Error = TypesError;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        CapabilityChain::from_json(&object)
    }
}

impl From<CapabilityChain> for Map<String, Value> {
    fn from(chain: CapabilityChain) -> Self {
        chain.to_json()
    }
}

impl FromIterator<CapabilityBlock> for CapabilityChain {
    /// Later blocks of the same type replace earlier ones.
    fn from_iter<T: IntoIterator<Item = CapabilityBlock>>(iter: T) -> Self {
        let mut chain = CapabilityChain::new();
        for block in iter {
            chain.upsert(block);
        }
        chain
    }
}
