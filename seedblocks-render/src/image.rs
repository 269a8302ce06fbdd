//! Image utility — resolves an attachment identifier to `<img>` markup or
//! URLs in simple and cover layout modes.
//!
//! Every operation returns `None` when the identifier is empty or the media
//! store cannot resolve it; callers simply omit the image.

use crate::escape;
use crate::stores::{ImageSource, MediaStore};

const BASE_CLASS: &str = "sb-img";
const COVER_CLASS: &str = "sb-img--cover";

/// Thin wrapper binding an optional attachment id to the media store.
pub struct ImageTag<'a> {
    id: Option<String>,
    media: &'a dyn MediaStore,
}

impl<'a> ImageTag<'a> {
    /// Bind an identifier. Empty strings count as no identifier.
    pub fn new(id: impl Into<String>, media: &'a dyn MediaStore) -> Self {
        let id = id.into();
        Self {
            id: (!id.is_empty()).then_some(id),
            media,
        }
    }

    fn check_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn source(&self, size: &str) -> Option<ImageSource> {
        let id = self.check_id()?;
        let source = self.media.attachment(id, size);
        if source.is_none() {
            tracing::debug!(id, size, "attachment did not resolve, omitting image");
        }
        source
    }

    /// An `<img>` tag at the given size.
    pub fn simple(&self, size: &str, extra_classes: &[&str]) -> Option<String> {
        let mut classes = vec![BASE_CLASS];
        classes.extend_from_slice(extra_classes);
        self.tag(size, &classes)
    }

    /// An `<img>` tag with the cover modifier for cropped fill-styling.
    pub fn cover(&self, size: &str, extra_classes: &[&str]) -> Option<String> {
        let mut classes = vec![BASE_CLASS, COVER_CLASS];
        classes.extend_from_slice(extra_classes);
        self.tag(size, &classes)
    }

    /// The resolved URL at the given size.
    pub fn url(&self, size: &str) -> Option<String> {
        Some(self.source(size)?.url)
    }

    /// The responsive source-set at the given size.
    pub fn srcset(&self, size: &str) -> Option<String> {
        let id = self.check_id()?;
        self.media.srcset(id, size)
    }

    fn tag(&self, size: &str, classes: &[&str]) -> Option<String> {
        let source = self.source(size)?;

        let mut tag = format!(
            r#"<img class="{}" src="{}""#,
            escape::attr(&classes.join(" ")),
            escape::url(&source.url)
        );
        if let Some(srcset) = &source.srcset {
            tag.push_str(&format!(r#" srcset="{}""#, escape::attr(srcset)));
        }
        tag.push_str(&format!(
            r#" width="{}" height="{}" alt="{}" loading="lazy" decoding="async" />"#,
            source.width,
            source.height,
            escape::attr(&source.alt)
        ));
        Some(tag)
    }
}
