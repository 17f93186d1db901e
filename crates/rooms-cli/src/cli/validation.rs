use rooms_config::NAME_PLACEHOLDER;

/// Parse and validate an entry name given with `--entry`.
///
/// Names are substituted into path templates, so they cannot be empty,
/// contain path separators, or contain the template placeholder.
///
/// # Examples
///
/// Valid: index, main-room, lobby_2
/// Invalid: "", rooms/index, {name}
pub fn parse_entry_name(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("Entry name cannot be empty".to_string());
    }

    if s.contains(['/', '\\']) {
        return Err(format!("Entry name cannot contain path separators: '{}'", s));
    }

    if s.contains(NAME_PLACEHOLDER) {
        return Err(format!(
            "Entry name cannot contain the {} placeholder: '{}'",
            NAME_PLACEHOLDER, s
        ));
    }

    Ok(s.to_string())
}
