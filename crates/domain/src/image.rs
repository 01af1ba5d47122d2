use std::fmt::{Display, Formatter};
use std::path::Path;

/// Leading character that marks a directory entry as hidden.
pub const HIDDEN_FILE_MARKER: char = '.';

/// Path of one catalogued image, as listed from its category folder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl Display for ImageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tops,
    Bottoms,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Tops, Category::Bottoms];

    pub fn label(self) -> &'static str {
        match self {
            Self::Tops => "tops",
            Self::Bottoms => "bottoms",
        }
    }
}

pub fn is_hidden_entry(file_name: &str) -> bool {
    file_name.starts_with(HIDDEN_FILE_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_entries_start_with_a_dot() {
        assert!(is_hidden_entry(".DS_Store"));
        assert!(is_hidden_entry(".hidden.png"));
        assert!(!is_hidden_entry("shirt.png"));
        assert!(!is_hidden_entry("shirt.v2.png"));
    }

    #[test]
    fn image_id_exposes_its_path() {
        let id = ImageId::new("tops/a.png");
        assert_eq!(id.as_str(), "tops/a.png");
        assert_eq!(id.as_path(), Path::new("tops/a.png"));
        assert_eq!(id.to_string(), "tops/a.png");
    }
}
