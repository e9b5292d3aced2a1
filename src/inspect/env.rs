//! Process environment enumeration.

/// One environment variable pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    pub key: String,
    pub value: String,
}

/// Snapshot the process environment.
///
/// The platform hands each `NAME=VALUE` entry back already split on the
/// first `=`, so values that themselves contain `=` survive intact. Each
/// key appears exactly once per snapshot; enumeration order is whatever the
/// platform yields. Non-UTF-8 names or values are lossily decoded rather
/// than dropped.
pub fn snapshot() -> Vec<EnvEntry> {
    std::env::vars_os()
        .map(|(key, value)| EnvEntry {
            key: key.to_string_lossy().into_owned(),
            value: value.to_string_lossy().into_owned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_keeps_embedded_equals() {
        std::env::set_var("PODSCOPE_TEST_SPLIT", "A=B");

        let entries = snapshot();
        let matching: Vec<_> = entries
            .iter()
            .filter(|e| e.key == "PODSCOPE_TEST_SPLIT")
            .collect();

        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].value, "A=B");

        std::env::remove_var("PODSCOPE_TEST_SPLIT");
    }

    #[test]
    fn test_each_key_appears_once() {
        std::env::set_var("PODSCOPE_TEST_UNIQUE", "1");

        let entries = snapshot();
        let count = entries
            .iter()
            .filter(|e| e.key == "PODSCOPE_TEST_UNIQUE")
            .count();

        assert_eq!(count, 1);

        std::env::remove_var("PODSCOPE_TEST_UNIQUE");
    }
}
