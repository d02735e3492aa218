//! Render-ready page data.
//!
//! Everything here is supplied by the caller (usually deserialized from JSON)
//! and treated as immutable input. Field names follow the camelCase JSON shape
//! produced by the content pipeline, e.g. `hasContents`.
//!
//! Children are owned by value, so a navigation tree is always finite and
//! acyclic by construction.

use serde::{Deserialize, Deserializer, Serialize};

/// Lists accept an explicit `null` as empty, as hand-edited JSON often has.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read-only view shared by [`NavItem`] and [`PageItem`].
///
/// Sorting, filtering and link rendering are written once against this trait.
pub trait NavEntry: Sized {
    fn id(&self) -> &str;
    fn importance(&self) -> Option<f64>;
    fn has_contents(&self) -> bool;
    fn path(&self) -> &str;
    fn title(&self) -> Option<&str>;
    fn children(&self) -> &[Self];

    /// An entry can be linked to when it has its own contents or any children.
    fn is_navigable(&self) -> bool {
        self.has_contents() || !self.children().is_empty()
    }
}

/// One node of the navigation tree (section, page, or grouping).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    #[serde(default)]
    pub has_contents: bool,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<NavItem>,
}

impl NavEntry for NavItem {
    fn id(&self) -> &str {
        &self.id
    }
    fn importance(&self) -> Option<f64> {
        self.importance
    }
    fn has_contents(&self) -> bool {
        self.has_contents
    }
    fn path(&self) -> &str {
        &self.path
    }
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
    fn children(&self) -> &[Self] {
        &self.items
    }
}

/// A child page eligible for preview-card rendering.
///
/// A plain navigation object deserializes as a `PageItem` with no excerpt,
/// summary or media, which is how grandchildren arrive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageItem {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<f64>,
    #[serde(default)]
    pub has_contents: bool,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<PageItem>,
    /// Very short description, plain text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Longer description, pre-rendered markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub media: Vec<MediaItem>,
}

impl NavEntry for PageItem {
    fn id(&self) -> &str {
        &self.id
    }
    fn importance(&self) -> Option<f64> {
        self.importance
    }
    fn has_contents(&self) -> bool {
        self.has_contents
    }
    fn path(&self) -> &str {
        &self.path
    }
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
    fn children(&self) -> &[Self] {
        &self.items
    }
}

/// Pixel dimensions of a media asset.
///
/// Asset pipelines may emit any JSON number here, fractional included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Both edges are positive and finite, so an aspect ratio can be derived.
    pub fn is_known(&self) -> bool {
        [self.width, self.height]
            .iter()
            .all(|edge| edge.is_finite() && *edge > 0.0)
    }
}

/// A media attachment. Only images exist today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaItem {
    Image {
        filename: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        dimensions: Option<Dimensions>,
    },
}

impl MediaItem {
    pub fn filename(&self) -> &str {
        match self {
            MediaItem::Image { filename, .. } => filename,
        }
    }

    pub fn dimensions(&self) -> Option<Dimensions> {
        match self {
            MediaItem::Image { dimensions, .. } => *dimensions,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.filename().is_empty()
    }
}

/// Ancestor entry shown in the breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub title: String,
}

/// In-page section; `id` must match an HTML anchor in the rendered contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub id: String,
}

/// Top-level render target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocPage {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PageData>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub items: Vec<PageItem>,
}

impl DocPage {
    pub fn title(&self) -> Option<&str> {
        self.data.as_ref().map(|d| d.title.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub breadcrumbs: Vec<Breadcrumb>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Rendered body markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sections: Vec<Section>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub media: Vec<MediaItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_item_reads_camel_case_json() {
        let json = r#"{
            "id": "guide",
            "importance": 2,
            "hasContents": true,
            "path": "guide",
            "title": "Guide",
            "items": [{ "id": "install", "hasContents": false, "path": "guide/install" }]
        }"#;
        let item: NavItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.importance, Some(2.0));
        assert!(item.has_contents);
        assert_eq!(item.items.len(), 1);
        assert_eq!(item.items[0].title, None);
        assert!(item.is_navigable());
        assert!(!item.items[0].is_navigable());
    }

    #[test]
    fn page_item_children_accept_plain_nav_objects() {
        let json = r#"{
            "id": "a", "hasContents": true, "path": "a",
            "excerpt": "Short",
            "media": [{ "type": "image", "filename": "cover.png",
                        "dimensions": { "width": 800, "height": 400 } }],
            "items": [{ "id": "b", "hasContents": true, "path": "a/b", "title": "B" }]
        }"#;
        let item: PageItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.items[0].title.as_deref(), Some("B"));
        assert_eq!(item.items[0].excerpt, None);
        assert_eq!(item.media[0].filename(), "cover.png");
        assert_eq!(
            item.media[0].dimensions(),
            Some(Dimensions {
                width: 800.0,
                height: 400.0
            })
        );
    }

    #[test]
    fn unknown_media_type_is_rejected() {
        let json = r#"{ "type": "video", "filename": "clip.mp4" }"#;
        assert!(serde_json::from_str::<MediaItem>(json).is_err());
    }

    #[test]
    fn doc_page_without_data_has_no_title() {
        let page: DocPage = serde_json::from_str(r#"{ "id": "empty" }"#).unwrap();
        assert_eq!(page.title(), None);
        assert!(page.items.is_empty());
    }

    #[test]
    fn zero_dimensions_are_unknown() {
        assert!(!Dimensions { width: 0.0, height: 10.0 }.is_known());
        assert!(!Dimensions { width: f64::NAN, height: 10.0 }.is_known());
        assert!(Dimensions { width: 1.0, height: 1.0 }.is_known());
    }

    #[test]
    fn null_lists_read_as_empty() {
        let item: NavItem = serde_json::from_str(
            r#"{ "id": "guide", "hasContents": true, "path": "guide", "items": null }"#,
        )
        .unwrap();
        assert!(item.items.is_empty());

        let page: DocPage = serde_json::from_str(
            r#"{ "id": "p", "items": null,
                 "data": { "title": "P", "sections": null, "breadcrumbs": null, "media": null } }"#,
        )
        .unwrap();
        assert!(page.items.is_empty());
        assert!(page.data.unwrap().sections.is_empty());
    }

    #[test]
    fn fractional_dimensions_deserialize() {
        let json = r#"{
            "id": "home",
            "items": [{ "id": "a", "hasContents": true, "path": "a", "excerpt": "x",
                        "media": [{ "type": "image", "filename": "cover.png",
                                    "dimensions": { "width": 1280.0, "height": 720.5 } }] }]
        }"#;
        let page: DocPage = serde_json::from_str(json).unwrap();
        let dimensions = page.items[0].media[0].dimensions().unwrap();
        assert_eq!(dimensions.width, 1280.0);
        assert_eq!(dimensions.height, 720.5);
        assert!(dimensions.is_known());
    }
}
