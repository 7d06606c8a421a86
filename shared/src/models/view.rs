//! Hypermedia (HAL) representations
//!
//! Views are derived on every response and never persisted. Single resources
//! carry a `_links` object; collections wrap their items in
//! `_embedded.<relation>` next to their own `_links`.

use rust_decimal::Decimal;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Media type of successful responses
pub const HAL_JSON: &str = "application/hal+json";

/// A named link target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    /// Human-readable hint, e.g. the body a templated request expects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: None,
        }
    }

    pub fn titled(href: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            title: Some(title.into()),
        }
    }
}

/// Ordered relation → link map, serialized as a JSON object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Links(Vec<(String, Link)>);

impl Links {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a relation (builder style); a repeated relation replaces the earlier link
    pub fn with(mut self, rel: impl Into<String>, link: Link) -> Self {
        let rel = rel.into();
        match self.0.iter_mut().find(|(r, _)| *r == rel) {
            Some(slot) => slot.1 = link,
            None => self.0.push((rel, link)),
        }
        self
    }

    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.iter().find(|(r, _)| r == rel).map(|(_, l)| l)
    }

    pub fn rels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(r, _)| r.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Links {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (rel, link) in &self.0 {
            map.serialize_entry(rel, link)?;
        }
        map.end()
    }
}

struct LinksVisitor;

impl<'de> Visitor<'de> for LinksVisitor {
    type Value = Links;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of relation names to links")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Links, A::Error> {
        let mut links = Links(Vec::with_capacity(access.size_hint().unwrap_or(0)));
        while let Some((rel, link)) = access.next_entry::<String, Link>()? {
            links = links.with(rel, link);
        }
        Ok(links)
    }
}

impl<'de> Deserialize<'de> for Links {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LinksVisitor)
    }
}

/// Employee representation, denormalized with its role's title and salary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub annual_salary: Decimal,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// Role representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleView {
    pub id: i64,
    pub job_title: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub annual_salary: Decimal,
    #[serde(rename = "_links")]
    pub links: Links,
}

/// Item types that can be embedded in a collection
pub trait Embeddable: Serialize {
    /// Key under `_embedded`
    const COLLECTION_REL: &'static str;
}

impl Embeddable for EmployeeView {
    const COLLECTION_REL: &'static str = "employeeDtoList";
}

impl Embeddable for RoleView {
    const COLLECTION_REL: &'static str = "roleDtoList";
}

/// Collection representation
///
/// ```json
/// {
///   "_embedded": { "employeeDtoList": [ ... ] },
///   "_links": { "self": { "href": "http://localhost:8080/employees" } }
/// }
/// ```
///
/// An empty collection has no `_embedded` member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionView<T> {
    pub items: Vec<T>,
    pub links: Links,
}

impl<T: Embeddable> Serialize for CollectionView<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Embedded<'a, T>(&'a [T]);

        impl<T: Embeddable> Serialize for Embedded<'_, T> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(T::COLLECTION_REL, self.0)?;
                map.end()
            }
        }

        let len = if self.items.is_empty() { 1 } else { 2 };
        let mut map = serializer.serialize_map(Some(len))?;
        if !self.items.is_empty() {
            map.serialize_entry("_embedded", &Embedded(&self.items))?;
        }
        map.serialize_entry("_links", &self.links)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn role_view() -> RoleView {
        RoleView {
            id: 2,
            job_title: "Data Scientist".into(),
            annual_salary: Decimal::new(4_700_000, 2),
            links: Links::new()
                .with("self", Link::new("http://localhost/roles/2"))
                .with("all", Link::new("http://localhost/roles")),
        }
    }

    #[test]
    fn test_links_keep_insertion_order() {
        let links = Links::new()
            .with("self", Link::new("/a"))
            .with("all", Link::new("/b"))
            .with("delete", Link::new("/c"));
        let json = serde_json::to_string(&links).unwrap();
        assert_eq!(
            json,
            r#"{"self":{"href":"/a"},"all":{"href":"/b"},"delete":{"href":"/c"}}"#
        );
    }

    #[test]
    fn test_repeated_rel_replaces() {
        let links = Links::new()
            .with("self", Link::new("/a"))
            .with("self", Link::new("/b"));
        assert_eq!(links.len(), 1);
        assert_eq!(links.get("self").unwrap().href, "/b");
    }

    #[test]
    fn test_role_view_shape() {
        let json = serde_json::to_string(&role_view()).unwrap();
        assert_eq!(
            json,
            r#"{"id":2,"jobTitle":"Data Scientist","annualSalary":47000.00,"_links":{"self":{"href":"http://localhost/roles/2"},"all":{"href":"http://localhost/roles"}}}"#
        );
    }

    #[test]
    fn test_collection_embeds_items() {
        let collection = CollectionView {
            items: vec![role_view()],
            links: Links::new().with("self", Link::new("http://localhost/roles")),
        };
        let value: Value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value["_embedded"]["roleDtoList"][0]["jobTitle"], "Data Scientist");
        assert_eq!(value["_links"]["self"]["href"], "http://localhost/roles");
    }

    #[test]
    fn test_empty_collection_omits_embedded() {
        let collection: CollectionView<EmployeeView> = CollectionView {
            items: Vec::new(),
            links: Links::new().with("self", Link::new("http://localhost/employees")),
        };
        let value: Value = serde_json::to_value(&collection).unwrap();
        assert!(value.get("_embedded").is_none());
        assert_eq!(value["_links"]["self"]["href"], "http://localhost/employees");
    }

    #[test]
    fn test_view_round_trip_through_json() {
        let view = role_view();
        let json = serde_json::to_string(&view).unwrap();
        let back: RoleView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }

    #[test]
    fn test_links_deserialize_in_document_order() {
        let links: Links = serde_json::from_str(
            r#"{"self":{"href":"/a"},"all":{"href":"/b"},"delete":{"href":"/c","title":"x"}}"#,
        )
        .unwrap();
        assert_eq!(links.rels().collect::<Vec<_>>(), ["self", "all", "delete"]);
        assert_eq!(links.get("delete").unwrap().title.as_deref(), Some("x"));
    }
}
