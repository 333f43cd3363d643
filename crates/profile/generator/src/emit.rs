//! Rust source emission
//!
//! Renders a table as a Rust module that rebuilds it from literals, so a
//! consuming crate can link the table without parsing documents at runtime.
//! The module depends only on `profile_types`.

use profile_types::{
    CapabilityBlock, ExtensionRequirement, FieldValue, FormatCapability, Profile, ProfileTable,
    QueueFamilyCapability,
};
use std::collections::BTreeSet;
use std::fmt::Write;

const HEADER: &str = "\
// @generated by profilegen. Do not edit by hand.

#[allow(unused_imports)]
use profile_types::{
    ApiVersion, BlockTypeId, CapabilityBlock, CapabilityChain, ExtensionRequirement, FieldValue,
    FormatCapability, Profile, ProfileId, ProfileTable, QueueFamilyCapability,
};
#[allow(unused_imports)]
use std::collections::{BTreeMap, BTreeSet};

#[allow(dead_code)]
fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
";

/// Render `table` as a Rust module exposing `pub fn profile_table() -> ProfileTable`.
pub fn emit_rust(table: &ProfileTable) -> String {
    let mut out = String::from(HEADER);

    out.push_str("\n/// Every profile known at build time.\npub fn profile_table() -> ProfileTable {\n");
    if table.is_empty() {
        out.push_str("    ProfileTable::default()\n");
    } else {
        out.push_str("    vec![\n");
        for (i, _) in table.iter().enumerate() {
            let _ = writeln!(out, "        profile_{}(),", i);
        }
        out.push_str("    ]\n    .into_iter()\n    .collect()\n");
    }
    out.push_str("}\n");

    for (i, profile) in table.iter().enumerate() {
        out.push('\n');
        emit_profile(&mut out, i, profile);
    }
    out
}

fn emit_profile(out: &mut String, index: usize, profile: &Profile) {
    let _ = writeln!(out, "fn profile_{}() -> Profile {{", index);
    out.push_str("    Profile {\n");
    let _ = writeln!(
        out,
        "        id: ProfileId::new({:?}, {}),",
        profile.id.name, profile.id.spec_version
    );
    let _ = writeln!(out, "        label: {:?}.to_string(),", profile.label);
    let _ = writeln!(out, "        description: {:?}.to_string(),", profile.description);
    let v = profile.api_version;
    let _ = writeln!(
        out,
        "        api_version: ApiVersion {{ major: {}, minor: {}, patch: {} }},",
        v.major, v.minor, v.patch
    );
    emit_extensions(out, &profile.extensions);
    emit_capabilities(out, profile);
    emit_queue_families(out, &profile.queue_families);
    emit_formats(out, profile);
    match &profile.base {
        Some(base) => {
            let _ = writeln!(
                out,
                "        base: Some(ProfileId::new({:?}, {})),",
                base.name, base.spec_version
            );
        }
        None => out.push_str("        base: None,\n"),
    }
    out.push_str("    }\n}\n");
}

fn emit_extensions(out: &mut String, extensions: &[ExtensionRequirement]) {
    if extensions.is_empty() {
        out.push_str("        extensions: Vec::new(),\n");
        return;
    }
    out.push_str("        extensions: vec![\n");
    for ext in extensions {
        let _ = writeln!(
            out,
            "            ExtensionRequirement::new({:?}, {}),",
            ext.name, ext.min_version
        );
    }
    out.push_str("        ],\n");
}

fn emit_capabilities(out: &mut String, profile: &Profile) {
    if profile.capabilities.is_empty() {
        out.push_str("        capabilities: CapabilityChain::new(),\n");
        return;
    }
    out.push_str("        capabilities: [\n");
    for block in profile.capabilities.iter() {
        emit_block(out, block);
    }
    out.push_str("        ]\n        .into_iter()\n        .collect(),\n");
}

fn emit_block(out: &mut String, block: &CapabilityBlock) {
    let _ = write!(
        out,
        "            CapabilityBlock::new(BlockTypeId::{})",
        block.block_type.variant_name()
    );
    for (field, value) in &block.fields {
        let _ = write!(out, "\n                .with({:?}, {})", field, value_literal(value));
    }
    out.push_str(",\n");
}

fn value_literal(value: &FieldValue) -> String {
    match value {
        FieldValue::Bool(b) => format!("FieldValue::Bool({})", b),
        FieldValue::U32(n) => format!("FieldValue::U32({})", n),
        FieldValue::U64(n) => format!("FieldValue::U64({})", n),
        FieldValue::I32(n) => format!("FieldValue::I32({})", n),
        // Debug keeps a decimal point or exponent, so the literal stays a float.
        FieldValue::F32(n) => format!("FieldValue::F32({:?}_f32)", n),
        FieldValue::Enum(s) => format!("FieldValue::Enum({:?}.to_string())", s),
        FieldValue::StringSet(items) => format!("FieldValue::StringSet({})", set_literal(items)),
    }
}

fn set_literal(items: &BTreeSet<String>) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("{:?}", s)).collect();
    format!("set(&[{}])", quoted.join(", "))
}

fn emit_queue_families(out: &mut String, families: &[QueueFamilyCapability]) {
    if families.is_empty() {
        out.push_str("        queue_families: Vec::new(),\n");
        return;
    }
    out.push_str("        queue_families: vec![\n");
    for family in families {
        let _ = writeln!(
            out,
            "            QueueFamilyCapability {{ queue_flags: {}, queue_count: {}, timestamp_valid_bits: {} }},",
            set_literal(&family.queue_flags),
            family.queue_count,
            family.timestamp_valid_bits
        );
    }
    out.push_str("        ],\n");
}

fn emit_formats(out: &mut String, profile: &Profile) {
    if profile.formats.is_empty() {
        out.push_str("        formats: BTreeMap::new(),\n");
        return;
    }
    out.push_str("        formats: [\n");
    for (name, format) in &profile.formats {
        let _ = writeln!(out, "            ({:?}.to_string(), {}),", name, format_literal(format));
    }
    out.push_str("        ]\n        .into_iter()\n        .collect(),\n");
}

fn format_literal(format: &FormatCapability) -> String {
    format!(
        "FormatCapability {{ linear_tiling_features: {}, optimal_tiling_features: {}, buffer_features: {} }}",
        set_literal(&format.linear_tiling_features),
        set_literal(&format.optimal_tiling_features),
        set_literal(&format.buffer_features)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile_types::{ApiVersion, BlockTypeId, ProfileId};

    fn sample() -> ProfileTable {
        let mut profile = Profile::new(
            ProfileId::new("VP_TEST_emit", 2),
            ApiVersion::new(1, 3, 224).unwrap(),
        );
        profile.description = "Quote \"this\"".into();
        profile
            .extensions
            .push(ExtensionRequirement::new("VK_KHR_driver_properties", 1));
        profile.capabilities.upsert(
            CapabilityBlock::new(BlockTypeId::PhysicalDeviceLimits)
                .with("maxImageDimension2D", FieldValue::U32(8192))
                .with("minTexelOffset", FieldValue::I32(-8))
                .with("timestampPeriod", FieldValue::F32(1.0)),
        );
        profile.queue_families.push(QueueFamilyCapability {
            queue_flags: ["GRAPHICS".to_string(), "COMPUTE".to_string()].into(),
            queue_count: 2,
            timestamp_valid_bits: 64,
        });
        profile.base = Some(ProfileId::new("VP_TEST_base", 1));
        vec![profile].into_iter().collect()
    }

    #[test]
    fn emits_constructor_for_every_profile() {
        let source = emit_rust(&sample());
        assert!(source.starts_with("// @generated"));
        assert!(source.contains("pub fn profile_table() -> ProfileTable {"));
        assert!(source.contains("        profile_0(),"));
        assert!(source.contains("fn profile_0() -> Profile {"));
        assert!(source.contains("id: ProfileId::new(\"VP_TEST_emit\", 2),"));
        assert!(source.contains("api_version: ApiVersion { major: 1, minor: 3, patch: 224 },"));
        assert!(source.contains("base: Some(ProfileId::new(\"VP_TEST_base\", 1)),"));
    }

    #[test]
    fn literals_keep_native_types() {
        let source = emit_rust(&sample());
        assert!(source.contains("CapabilityBlock::new(BlockTypeId::PhysicalDeviceLimits)"));
        assert!(source.contains(".with(\"maxImageDimension2D\", FieldValue::U32(8192))"));
        assert!(source.contains(".with(\"minTexelOffset\", FieldValue::I32(-8))"));
        assert!(source.contains(".with(\"timestampPeriod\", FieldValue::F32(1.0_f32))"));
        assert!(source.contains("queue_flags: set(&[\"COMPUTE\", \"GRAPHICS\"])"));
        assert!(source.contains("formats: BTreeMap::new(),"));
    }

    #[test]
    fn strings_are_escaped() {
        let source = emit_rust(&sample());
        assert!(source.contains(r#"description: "Quote \"this\"".to_string(),"#));
    }

    #[test]
    fn empty_table() {
        let source = emit_rust(&ProfileTable::default());
        assert!(source.contains("    ProfileTable::default()\n"));
        assert!(!source.contains("fn profile_0"));
    }
}
