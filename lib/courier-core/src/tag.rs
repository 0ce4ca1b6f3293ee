//! Field tag parsing for the encoder subsystem.
//!
//! A field tag is a comma-separated metadata string: the first token is a
//! wire-name override, the remaining tokens are behavior flags. An empty
//! first token falls back to the field identifier, and unknown flags are
//! ignored so old encoders keep working against newer descriptor tables.

/// Behavior flags parsed from a field tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagFlags {
    /// Skip the field when its value equals the type's zero value.
    pub omitempty: bool,
    /// Flatten the field's own subfields into the parent output, no prefix.
    pub squash: bool,
    /// Encode the field as a nested value rather than flattening it.
    pub recursive: bool,
}

/// A parsed field tag: the wire name plus behavior flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldTag<'a> {
    name: &'a str,
    flags: TagFlags,
}

impl<'a> FieldTag<'a> {
    /// Parse a tag string, falling back to `default_name` when the tag
    /// carries no name override.
    ///
    /// There is no error path: malformed tags degrade to "no override,
    /// no flags".
    #[must_use]
    pub fn parse(tag: &'a str, default_name: &'a str) -> Self {
        let mut tokens = tag.split(',');
        let first = tokens.next().unwrap_or_default();
        let name = if first.is_empty() { default_name } else { first };

        let mut flags = TagFlags::default();
        for token in tokens {
            match token {
                "omitempty" => flags.omitempty = true,
                "squash" => flags.squash = true,
                "recursive" => flags.recursive = true,
                _ => {}
            }
        }

        Self { name, flags }
    }

    /// The resolved wire name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// The parsed behavior flags.
    #[must_use]
    pub const fn flags(&self) -> TagFlags {
        self.flags
    }

    /// Returns `true` if the field is excluded from encoding entirely
    /// (the `-` sentinel name).
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.name == "-"
    }
}
