//! Value object trait: equality by value, not identity.
//!
//! Records read from the exports are plain values. A handle, a tag list or a
//! stock level is fully described by its contents; two equal values are
//! interchangeable.

/// Marker trait for value objects.
///
/// It has no methods and nothing dispatches on it; implementing it records
/// that a type is a plain value.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Handle(String);
///
/// impl ValueObject for Handle {}
///
/// assert_eq!(Handle("mug".into()), Handle("mug".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
