use crate::server::error::validation::ValidationError;

/// Longest accepted name of a category, server or channel.
pub const NAME_MAX_CHARS: usize = 100;
/// Longest accepted server description.
pub const DESCRIPTION_MAX_CHARS: usize = 250;
/// Longest accepted channel topic.
pub const TOPIC_MAX_CHARS: usize = 100;

/// Rejects `value` when it has more than `max` characters.
///
/// Characters, not bytes, are counted.
pub fn ensure_max_chars(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}
