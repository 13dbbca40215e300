//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances holding the same values
/// are interchangeable. They are the shape in which entity state crosses the
/// domain boundary (e.g. a snapshot handed to a persistence adapter).
///
/// ## Value Object vs Entity
///
/// - **Value Object**: compared by attributes (`PartialEq`)
/// - **Entity**: compared by identifier (see [`crate::Entity`])
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Label {
///     text: String,
/// }
///
/// impl ValueObject for Label {}
///
/// let a = Label { text: "Documentaries".to_string() };
/// let b = Label { text: "Documentaries".to_string() };
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
