//! Tag identity resolution.
//!
//! Application code names log sources with whatever is at hand: a string, a
//! type, a type that declares its own tag name, or one variant of a tag
//! enum. [`TagResolver`] maps each
//! of those identities to a display string once and remembers the answer.

use std::any::TypeId;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::tag::Tag;

/// Implemented by types that declare the tag name they log under.
///
/// ```
/// use tintlog_tags::{LoggerTagName, TagKey, TagResolver};
///
/// struct SessionManager;
/// impl LoggerTagName for SessionManager {
///     const TAG_NAME: &'static str = "Sessions";
/// }
///
/// let resolver = TagResolver::new();
/// assert_eq!(&*resolver.resolve(&TagKey::named::<SessionManager>()), "Sessions");
/// ```
pub trait LoggerTagName: 'static {
    const TAG_NAME: &'static str;
}

/// Implemented by enums whose variants each name a tag.
///
/// A variant resolves to its declared [`tag_name`](TagVariant::tag_name)
/// when there is one, otherwise to its [`variant_name`](TagVariant::variant_name).
///
/// ```
/// use tintlog_tags::{TagKey, TagResolver, TagVariant};
///
/// #[derive(Clone, Copy)]
/// enum Tags {
///     Unsorted,
///     Networking,
/// }
///
/// impl TagVariant for Tags {
///     fn variant_name(&self) -> &'static str {
///         match self {
///             Tags::Unsorted => "Unsorted",
///             Tags::Networking => "Networking",
///         }
///     }
///
///     fn tag_name(&self) -> Option<&'static str> {
///         match self {
///             Tags::Networking => Some("Net"),
///             Tags::Unsorted => None,
///         }
///     }
/// }
///
/// let resolver = TagResolver::new();
/// assert_eq!(&*resolver.resolve(&TagKey::variant(&Tags::Networking)), "Net");
/// assert_eq!(&*resolver.resolve(&TagKey::variant(&Tags::Unsorted)), "Unsorted");
/// ```
pub trait TagVariant: 'static {
    fn variant_name(&self) -> &'static str;

    fn tag_name(&self) -> Option<&'static str> {
        None
    }
}

/// An unresolved tag identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagKey {
    /// A literal name; resolves to itself.
    Name(Cow<'static, str>),
    /// A type, optionally carrying a declared tag name.
    Type {
        id: TypeId,
        type_name: &'static str,
        tag_name: Option<&'static str>,
    },
    /// One variant of a [`TagVariant`] enum.
    Variant {
        id: TypeId,
        variant: &'static str,
        tag_name: Option<&'static str>,
    },
}

impl TagKey {
    /// Key for a type without a declared name. Resolves to the type's short
    /// name (last path segment, generic arguments dropped).
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Type {
            id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            tag_name: None,
        }
    }

    /// Key for a type that declares its tag name.
    pub fn named<T: LoggerTagName>() -> Self {
        Self::Type {
            id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            tag_name: Some(T::TAG_NAME),
        }
    }

    /// Key for one variant of a tag enum.
    pub fn variant<V: TagVariant>(value: &V) -> Self {
        Self::Variant {
            id: TypeId::of::<V>(),
            variant: value.variant_name(),
            tag_name: value.tag_name(),
        }
    }
}

impl From<&'static str> for TagKey {
    fn from(name: &'static str) -> Self {
        Self::Name(Cow::Borrowed(name))
    }
}

impl From<String> for TagKey {
    fn from(name: String) -> Self {
        Self::Name(Cow::Owned(name))
    }
}

/// Strip module path and generic arguments from a `type_name` string.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Caches resolved tag names by identity. Entries are never evicted.
#[derive(Debug, Default)]
pub struct TagResolver {
    cache: RwLock<HashMap<TagKey, Arc<str>>>,
}

impl TagResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide resolver, created on first use.
    pub fn global() -> &'static TagResolver {
        static RESOLVER: OnceLock<TagResolver> = OnceLock::new();
        RESOLVER.get_or_init(TagResolver::new)
    }

    /// Resolve an identity to its display name.
    pub fn resolve(&self, key: &TagKey) -> Arc<str> {
        if let Some(name) = self.cache.read().get(key) {
            return Arc::clone(name);
        }

        let name = {
            let mut cache = self.cache.write();
            // Another thread may have resolved the key between the two locks.
            if let Some(name) = cache.get(key) {
                return Arc::clone(name);
            }
            let name: Arc<str> = match key {
                TagKey::Name(name) => Arc::from(&**name),
                TagKey::Type {
                    tag_name: Some(declared),
                    ..
                }
                | TagKey::Variant {
                    tag_name: Some(declared),
                    ..
                } => Arc::from(*declared),
                TagKey::Type { type_name, .. } => Arc::from(short_type_name(type_name)),
                TagKey::Variant { variant, .. } => Arc::from(*variant),
            };
            cache.insert(key.clone(), Arc::clone(&name));
            name
        };
        // Logged after the write guard is gone; a `log` backend may resolve
        // tags through this resolver.
        log::trace!("Resolved tag identity {:?} -> {}", key, name);
        name
    }

    /// Resolve both halves of a tag.
    pub fn tag(&self, category: &TagKey, name: &TagKey) -> Tag {
        Tag::new(self.resolve(category), self.resolve(name))
    }

    /// Number of cached identities.
    pub fn len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.read().is_empty()
    }
}
