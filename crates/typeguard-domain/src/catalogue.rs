//! Lookup of type metadata by fully-qualified name.
//!
//! Hosts back this with whatever metadata reader they use. Tests use [`InMemoryCatalogue`].

use crate::model::TypeMetadataView;
use std::collections::BTreeMap;

pub trait TypeCatalogue {
    /// Look up a type by its full name (`Namespace.Outer/Inner`).
    fn get(&self, full_name: &str) -> Option<&TypeMetadataView>;

    /// All types, in a deterministic order.
    fn iter(&self) -> Box<dyn Iterator<Item = &TypeMetadataView> + '_>;
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalogue {
    types: BTreeMap<String, TypeMetadataView>,
}

impl InMemoryCatalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a view, replacing any previous view with the same full name.
    pub fn insert(&mut self, view: TypeMetadataView) -> Option<TypeMetadataView> {
        self.types.insert(view.full_name.clone(), view)
    }

    pub fn with(mut self, view: TypeMetadataView) -> Self {
        self.insert(view);
        self
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeCatalogue for InMemoryCatalogue {
    fn get(&self, full_name: &str) -> Option<&TypeMetadataView> {
        self.types.get(full_name)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &TypeMetadataView> + '_> {
        Box::new(self.types.values())
    }
}

impl FromIterator<TypeMetadataView> for InMemoryCatalogue {
    fn from_iter<I: IntoIterator<Item = TypeMetadataView>>(iter: I) -> Self {
        let mut catalogue = InMemoryCatalogue::new();
        for view in iter {
            catalogue.insert(view);
        }
        catalogue
    }
}
