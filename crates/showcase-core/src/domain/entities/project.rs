use serde::{Deserialize, Serialize};

/// A portfolio project card. Display order is list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub external_link: String,
}

impl Project {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        image_ref: impl Into<String>,
        external_link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            image_ref: image_ref.into(),
            external_link: external_link.into(),
        }
    }
}

/// One screenshot inside the detail panel's image browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub image_ref: String,
    pub alt_text: String,
}

impl GalleryImage {
    pub fn new(image_ref: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self {
            image_ref: image_ref.into(),
            alt_text: alt_text.into(),
        }
    }
}
