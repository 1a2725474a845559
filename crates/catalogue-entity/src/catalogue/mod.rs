//! Catalogue hierarchy: categories own subcategories, which own items.

pub mod category;
pub mod item;
pub mod subcategory;

pub use category::{Category, NewCategory};
pub use item::{Item, NewItem};
pub use subcategory::{NewSubcategory, Subcategory};

/// A catalogue row whose only mutable field is its name.
pub trait Named {
    /// The current name.
    fn name(&self) -> &str;

    /// Overwrite the name.
    fn rename(&mut self, name: String);
}

macro_rules! impl_named {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Named for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn rename(&mut self, name: String) {
                    self.name = name;
                }
            }
        )+
    };
}

impl_named!(Category, Subcategory, Item);

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_rename_touches_only_name() {
        let created_at = Utc::now();
        let mut item = Item {
            id: 7,
            name: "Zelda".to_string(),
            created_at,
            subcategory_id: 3,
        };
        item.rename("Metroid".to_string());
        assert_eq!(item.name(), "Metroid");
        assert_eq!(item.id, 7);
        assert_eq!(item.subcategory_id, 3);
        assert_eq!(item.created_at, created_at);
    }
}
