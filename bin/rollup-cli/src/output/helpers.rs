use std::fmt::Display;

/// One `key: value` line of porcelain output.
pub(super) fn porcelain_field(key: &str, value: impl Display) -> String {
    format!("{key}: {value}")
}

pub(super) fn porcelain_optional<T: Display>(key: &str, value: Option<T>) -> String {
    match value {
        Some(v) => porcelain_field(key, v),
        None => porcelain_field(key, "none"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_porcelain_field() {
        assert_eq!(porcelain_field("batch.batch_number", 7), "batch.batch_number: 7");
        assert_eq!(porcelain_optional::<u64>("x", None), "x: none");
        assert_eq!(porcelain_optional("x", Some("y")), "x: y");
    }
}
