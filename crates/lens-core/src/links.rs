/// Default directory image references are resolved against.
pub const DEFAULT_ASSET_BASE: &str = "assets/img";

// Label and image file for each menu entry, in display order
const DEFAULT_LINK_TABLE: [(&str, &str); 7] = [
    ("Ikari no Kyuba", "1.jpg"),
    ("I Am Cuba", "2.jpg"),
    ("Je suis Cuba", "3.jpg"),
    ("Soy Cuba", "4.jpg"),
    ("Eu Sou Cuba", "5.jpg"),
    ("我是古巴", "6.jpg"),
    ("Είμαι η Κούβα", "7.jpg"),
];

/// One menu entry: the visible label and the image the lens shows for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkEntry {
    pub label: String,
    pub image_ref: String,
}

impl LinkEntry {
    pub fn new(label: impl Into<String>, image_ref: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            image_ref: image_ref.into(),
        }
    }
}

pub fn default_links() -> Vec<LinkEntry> {
    DEFAULT_LINK_TABLE
        .iter()
        .map(|(label, img)| LinkEntry::new(*label, *img))
        .collect()
}

/// Turns an image reference into a URL under a fixed base path.
#[derive(Clone, Debug)]
pub struct AssetResolver {
    base: String,
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_BASE)
    }
}

impl AssetResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.len() > 1 && base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn resolve(&self, image_ref: &str) -> String {
        let image_ref = image_ref.trim_start_matches('/');
        match self.base.as_str() {
            "" => image_ref.to_string(),
            "/" => format!("/{image_ref}"),
            base => format!("{base}/{image_ref}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_links_are_ordered() {
        let links = default_links();
        assert_eq!(links.len(), 7);
        assert_eq!(links[0], LinkEntry::new("Ikari no Kyuba", "1.jpg"));
        assert_eq!(links[6].image_ref, "7.jpg");
    }

    #[test]
    fn resolve_joins_with_single_slash() {
        assert_eq!(AssetResolver::default().resolve("3.jpg"), "assets/img/3.jpg");
        assert_eq!(
            AssetResolver::new("/static/img/").resolve("/3.jpg"),
            "/static/img/3.jpg"
        );
        assert_eq!(AssetResolver::new("/").resolve("3.jpg"), "/3.jpg");
        assert_eq!(AssetResolver::new("").resolve("3.jpg"), "3.jpg");
    }
}
