//! Per-page document title and `<meta>` tags.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

/// Whether a tag is keyed by `name` (standard, Twitter) or `property` (Open Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaAttr::Name => "name",
            MetaAttr::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaEntry {
    pub attr: MetaAttr,
    pub key: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub author: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub og_url: Option<String>,
    pub og_type: Option<String>,
    pub og_site_name: Option<String>,
    pub twitter_card: Option<String>,
    pub twitter_title: Option<String>,
    pub twitter_description: Option<String>,
    pub twitter_image: Option<String>,
    pub twitter_site: Option<String>,
    pub twitter_creator: Option<String>,
}

impl MetaTags {
    /// Non-empty tags in document order: standard, Open Graph, Twitter.
    pub fn entries(&self) -> Vec<MetaEntry> {
        use MetaAttr::{Name, Property};

        let fields: [(MetaAttr, &'static str, &Option<String>); 15] = [
            (Name, "description", &self.description),
            (Name, "keywords", &self.keywords),
            (Name, "author", &self.author),
            (Property, "og:title", &self.og_title),
            (Property, "og:description", &self.og_description),
            (Property, "og:image", &self.og_image),
            (Property, "og:url", &self.og_url),
            (Property, "og:type", &self.og_type),
            (Property, "og:site_name", &self.og_site_name),
            (Name, "twitter:card", &self.twitter_card),
            (Name, "twitter:title", &self.twitter_title),
            (Name, "twitter:description", &self.twitter_description),
            (Name, "twitter:image", &self.twitter_image),
            (Name, "twitter:site", &self.twitter_site),
            (Name, "twitter:creator", &self.twitter_creator),
        ];

        fields
            .into_iter()
            .filter_map(|(attr, key, value)| {
                value
                    .as_deref()
                    .filter(|content| !content.is_empty())
                    .map(|content| MetaEntry {
                        attr,
                        key,
                        content: content.to_string(),
                    })
            })
            .collect()
    }
}

/// Renders `tags` into the document head through `leptos_meta`.
///
/// Tags are removed when the rendering component unmounts and the title
/// reverts to the one set by `App`.
#[component]
pub fn DocumentMeta(tags: MetaTags) -> impl IntoView {
    let title = tags.title.clone().filter(|t| !t.is_empty());
    let entries = tags
        .entries()
        .into_iter()
        .map(|entry| match entry.attr {
            MetaAttr::Name => view! { <Meta name=entry.key content=entry.content/> }.into_any(),
            MetaAttr::Property => {
                view! { <Meta property=entry.key content=entry.content/> }.into_any()
            }
        })
        .collect_view();

    view! {
        {title.map(|text| view! { <Title text=text/> })}
        {entries}
    }
}
