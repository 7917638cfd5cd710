use std::collections::BTreeSet;

/// The visual environment a theme is applied to: a set of global marker
/// names that styling keys off.
pub trait ThemeTarget {
    fn add_marker(&mut self, marker: &str);
    fn remove_marker(&mut self, marker: &str);
}

/// In-memory marker set standing in for the document root's class list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet {
    markers: BTreeSet<String>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.markers.contains(marker)
    }

    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }
}

impl ThemeTarget for MarkerSet {
    fn add_marker(&mut self, marker: &str) {
        self.markers.insert(marker.to_string());
    }

    fn remove_marker(&mut self, marker: &str) {
        self.markers.remove(marker);
    }
}
