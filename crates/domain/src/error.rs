use std::fmt::{Display, Formatter};

use crate::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    EmptyCatalog(Category),
    SelectionNotFound { category: Category, image: String },
    IndexOutOfRange {
        category: Category,
        index: usize,
        len: usize,
    },
}

impl DomainError {
    /// True for errors that can only come from a state-management bug.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::SelectionNotFound { .. } | Self::IndexOutOfRange { .. }
        )
    }
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCatalog(category) => {
                write!(f, "no {} images found, at least one is required", category.label())
            }
            Self::SelectionNotFound { category, image } => write!(
                f,
                "invariant violation: selected image {image} is not part of {}",
                category.label()
            ),
            Self::IndexOutOfRange {
                category,
                index,
                len,
            } => write!(
                f,
                "invariant violation: index {index} is out of range for {} (len {len})",
                category.label()
            ),
        }
    }
}

impl std::error::Error for DomainError {}
