use crate::{step, Category, Direction, DomainError, ImageId};

/// Ordered images of one category, in directory-listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSequence {
    category: Category,
    images: Vec<ImageId>,
}

impl ImageSequence {
    pub fn new(category: Category, images: Vec<ImageId>) -> Self {
        Self { category, images }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn images(&self) -> &[ImageId] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn first(&self) -> Option<&ImageId> {
        self.images.first()
    }

    pub fn position(&self, image: &ImageId) -> Option<usize> {
        self.images.iter().position(|candidate| candidate == image)
    }

    fn at(&self, index: usize) -> Result<&ImageId, DomainError> {
        self.images
            .get(index)
            .ok_or(DomainError::IndexOutOfRange {
                category: self.category,
                index,
                len: self.images.len(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outfit {
    pub top: ImageId,
    pub bottom: ImageId,
}

/// Both catalogs plus the image currently shown for each of them.
///
/// Every selected image is a member of its own category's sequence; the only
/// ways to change a selection are [`Wardrobe::advance`],
/// [`Wardrobe::select_indices`] and [`Wardrobe::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wardrobe {
    tops: ImageSequence,
    bottoms: ImageSequence,
    current_top: ImageId,
    current_bottom: ImageId,
}

impl Wardrobe {
    pub fn new(tops: ImageSequence, bottoms: ImageSequence) -> Result<Self, DomainError> {
        let current_top = tops
            .first()
            .cloned()
            .ok_or(DomainError::EmptyCatalog(tops.category()))?;
        let current_bottom = bottoms
            .first()
            .cloned()
            .ok_or(DomainError::EmptyCatalog(bottoms.category()))?;

        Ok(Self {
            tops,
            bottoms,
            current_top,
            current_bottom,
        })
    }

    pub fn sequence(&self, category: Category) -> &ImageSequence {
        match category {
            Category::Tops => &self.tops,
            Category::Bottoms => &self.bottoms,
        }
    }

    pub fn current(&self, category: Category) -> &ImageId {
        match category {
            Category::Tops => &self.current_top,
            Category::Bottoms => &self.current_bottom,
        }
    }

    pub fn outfit(&self) -> Outfit {
        Outfit {
            top: self.current_top.clone(),
            bottom: self.current_bottom.clone(),
        }
    }

    pub fn advance(
        &mut self,
        category: Category,
        direction: Direction,
    ) -> Result<&ImageId, DomainError> {
        let next = step(self.current(category), self.sequence(category), direction)?.clone();
        let slot = self.slot_mut(category);
        *slot = next;
        Ok(slot)
    }

    /// Shows the images at the given positions; neither slot changes unless
    /// both indices are in range.
    pub fn select_indices(
        &mut self,
        top_index: usize,
        bottom_index: usize,
    ) -> Result<Outfit, DomainError> {
        let top = self.tops.at(top_index)?.clone();
        let bottom = self.bottoms.at(bottom_index)?.clone();
        self.current_top = top;
        self.current_bottom = bottom;
        Ok(self.outfit())
    }

    /// Puts a category back on its first image.
    pub fn reset(&mut self, category: Category) -> &ImageId {
        let first = self
            .sequence(category)
            .first()
            .cloned()
            .unwrap_or_else(|| self.current(category).clone());
        let slot = self.slot_mut(category);
        *slot = first;
        slot
    }

    fn slot_mut(&mut self, category: Category) -> &mut ImageId {
        match category {
            Category::Tops => &mut self.current_top,
            Category::Bottoms => &mut self.current_bottom,
        }
    }

    /// Overwrites a selection without checking membership, so callers can
    /// exercise recovery from a corrupted state.
    #[cfg(any(test, feature = "test-helpers"))]
    pub fn force_selection(&mut self, category: Category, image: ImageId) {
        *self.slot_mut(category) = image;
    }
}
