use crate::domain::{DomainError, GalleryImage};

/// Cyclic browser over the detail panel's screenshots.
#[derive(Debug, Clone)]
pub struct ImageCarousel {
    images: Vec<GalleryImage>,
    index: usize,
}

impl ImageCarousel {
    pub fn new(images: Vec<GalleryImage>) -> Result<Self, DomainError> {
        if images.is_empty() {
            return Err(DomainError::EmptyGallery);
        }
        Ok(Self { images, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current(&self) -> Option<&GalleryImage> {
        self.images.get(self.index)
    }

    pub fn next(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + 1) % len;
    }

    pub fn prev(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.index = (self.index + len - 1) % len;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> ImageCarousel {
        ImageCarousel::new(
            (0..len)
                .map(|i| GalleryImage::new(format!("img-{i}.png"), format!("Shot {i}")))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn next_wraps_past_end() {
        let mut c = carousel(3);
        c.next();
        c.next();
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn prev_wraps_before_start() {
        let mut c = carousel(3);
        c.prev();
        assert_eq!(c.index(), 2);
        assert_eq!(c.current().unwrap().alt_text, "Shot 2");
    }

    #[test]
    fn next_and_prev_cancel_for_any_count() {
        for len in 1..6 {
            for n in 0..13 {
                let mut c = carousel(len);
                c.next();
                let start = c.index();
                for _ in 0..n {
                    c.next();
                }
                for _ in 0..n {
                    c.prev();
                }
                assert_eq!(c.index(), start, "len {len}, n {n}");
            }
        }
    }

    #[test]
    fn single_image_stays_put() {
        let mut c = carousel(1);
        c.next();
        c.prev();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn empty_gallery_is_rejected() {
        assert_eq!(
            ImageCarousel::new(Vec::new()).unwrap_err(),
            DomainError::EmptyGallery
        );
    }
}
