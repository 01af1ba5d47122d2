use crate::{DomainError, ImageId, ImageSequence};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Previous,
}

/// Cyclic successor or predecessor of `current` within `sequence`.
///
/// Stepping past the last image wraps to the first and stepping before the
/// first wraps to the last. An empty sequence is rejected before any index
/// arithmetic happens.
pub fn step<'a>(
    current: &ImageId,
    sequence: &'a ImageSequence,
    direction: Direction,
) -> Result<&'a ImageId, DomainError> {
    let images = sequence.images();
    if images.is_empty() {
        return Err(DomainError::EmptyCatalog(sequence.category()));
    }

    let index = sequence
        .position(current)
        .ok_or_else(|| DomainError::SelectionNotFound {
            category: sequence.category(),
            image: current.to_string(),
        })?;
    let last = images.len() - 1;

    let next = match direction {
        Direction::Next if index == last => 0,
        Direction::Previous if index == 0 => last,
        Direction::Next => index + 1,
        Direction::Previous => index - 1,
    };

    Ok(&images[next])
}
