//! Identifier management using string interning.
//!
//! Component names and the node names derived from them are compared and
//! hashed constantly during layout, so they are stored as interned [`Id`]s.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// Access is serialized through a `Mutex`.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock")
}

/// Interned identifier for components and grid nodes.
///
/// # Examples
///
/// ```
/// use xdsm_core::identifier::Id;
///
/// let opt = Id::new("opt");
/// let solver = Id::new("solver");
///
/// // Off-diagonal node name for data flowing from `opt` to `solver`
/// assert_eq!(Id::connection(opt, solver), "opt-solver");
///
/// // Node name of an input attached to `opt`
/// assert_eq!(opt.with_prefix("output_"), "output_opt");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Creates the name of the off-diagonal node carrying data from
    /// `source` to `target`, joined with `-`.
    pub fn connection(source: Id, target: Id) -> Self {
        let mut interner = interner();
        let source_str = interner
            .resolve(source.0)
            .expect("Source ID should exist in interner");
        let target_str = interner
            .resolve(target.0)
            .expect("Target ID should exist in interner");
        let name = format!("{source_str}-{target_str}");
        Self(interner.get_or_intern(&name))
    }

    /// Creates a new ID by prepending `prefix` to this identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use xdsm_core::identifier::Id;
    ///
    /// let id = Id::new("solver").with_prefix("left_output_");
    /// assert_eq!(id, "left_output_solver");
    /// ```
    pub fn with_prefix(&self, prefix: &str) -> Self {
        let mut interner = interner();
        let name = format!(
            "{prefix}{}",
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
        );
        Self(interner.get_or_intern(&name))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{str_value}")
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use xdsm_core::identifier::Id;
    ///
    /// let id: Id = "opt".into();
    /// assert_eq!(id, "opt");
    /// ```
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&String> for Id {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner();
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("opt");
        let id2 = Id::new("opt");
        let id3 = Id::new("solver");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "opt");
    }

    #[test]
    fn test_connection_name() {
        let a = Id::new("D1");
        let b = Id::new("D2");

        assert_eq!(Id::connection(a, b), "D1-D2");
        assert_eq!(Id::connection(b, a), "D2-D1");
        assert_ne!(Id::connection(a, b), Id::connection(b, a));
    }

    #[test]
    fn test_with_prefix() {
        let id = Id::new("F");

        assert_eq!(id.with_prefix("output_"), "output_F");
        assert_eq!(id.with_prefix("right_output_"), "right_output_F");
        assert_eq!(id, "F");
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("display_test");
        assert_eq!(format!("{id}"), "display_test");
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("key1");
        let id2 = Id::new("key1");
        let id3 = Id::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_partial_eq_str_ref() {
        let id = Id::new("Component");
        let name = String::from("Component");

        assert!(id == name.as_str());
        assert!(id != "Element");
        assert_eq!(Id::from(&name), id);
    }
}
