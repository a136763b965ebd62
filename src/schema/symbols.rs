//! Section icon hints
//!
//! An explicit symbol mapping always wins. Otherwise the section name is
//! classified by keyword groups, checked in priority order.

use crate::error::SchemaError;
use indexmap::IndexMap;

/// Section name -> icon identifier
pub type SymbolMapping = IndexMap<String, String>;

/// Icon used when no keyword group matches
pub const DEFAULT_SYMBOL: &str = "gearshape.fill";

const KEYWORD_GROUPS: &[(&[&str], &str)] = &[
    (&["mouse", "pointer", "cursor"], "computermouse"),
    (&["sound", "audio", "dsp", "midi", "speaker"], "speaker.wave.2"),
    (&["printer", "print"], "printer"),
    (&["keyboard", "keymap", "shortcut"], "keyboard"),
    (&["screen", "display", "monitor", "video", "graphics"], "display"),
    (&["cdrom", "cd-rom", "optical", "magneto", "dvd"], "opticaldiscdrive"),
    (&["ethernet", "network", "net", "lan", "wifi"], "network"),
    (&["harddisk", "disk", "scsi", "floppy", "storage", "drive"], "internaldrive"),
    (&["boot", "rom", "startup"], "power"),
    (&["system", "config", "dialog", "cpu", "memory", "machine"], "cpu"),
];

/// Icon suggested by the section name alone
pub fn suggest_symbol(section_name: &str) -> &'static str {
    let name = section_name.to_lowercase();
    KEYWORD_GROUPS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| name.contains(k)))
        .map(|(_, symbol)| *symbol)
        .unwrap_or(DEFAULT_SYMBOL)
}

/// Icon for a section, preferring an explicit mapping entry
pub fn resolve_symbol(section_name: &str, mapping: &SymbolMapping) -> String {
    match mapping.get(section_name) {
        Some(symbol) if !symbol.is_empty() => symbol.clone(),
        _ => suggest_symbol(section_name).to_string(),
    }
}

/// Parse a symbol mapping file
///
/// Accepts a JSON object of strings, or flat `Section = symbol` lines with
/// `#` or `//` comments. Entries with an empty symbol are ignored.
pub fn parse_symbol_mapping(text: &str) -> Result<SymbolMapping, SchemaError> {
    if text.trim_start().starts_with('{') {
        return Ok(serde_json::from_str(text)?);
    }

    let mut mapping = SymbolMapping::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        let Some((section, symbol)) = line.split_once('=') else {
            return Err(SchemaError::symbol_mapping(
                index + 1,
                format!("expected `Section = symbol`, found `{line}`"),
            ));
        };

        let (section, symbol) = (section.trim(), symbol.trim());
        if section.is_empty() {
            return Err(SchemaError::symbol_mapping(index + 1, "missing section name"));
        }
        if !symbol.is_empty() {
            mapping.insert(section.to_string(), symbol.to_string());
        }
    }

    Ok(mapping)
}
