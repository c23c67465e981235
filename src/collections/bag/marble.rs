use std::fmt::{self, Display, Formatter};

use derive_more::Display;

/// A value that belongs to a category, which [`Bag`](super::Bag) uses to count and clear groups of
/// entries.
pub trait Categorized {
    /// The type used to tag values, compared by equality.
    type Category: PartialEq;

    /// Returns the category of this value.
    fn category(&self) -> &Self::Category;
}

/// The material a [`Marble`] is made of, used as its category.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// A glass marble.
    Glass,
    /// A steel marble.
    Steel,
    /// A clay marble.
    Clay,
}

/// A marble, identified by both its color and its [`Material`].
///
/// # Examples
/// ```
/// # use scratch_collections::collections::bag::{Categorized, Marble, Material};
/// let marble = Marble::new("red", Material::Glass);
/// assert_eq!(marble.category(), &Material::Glass);
/// assert_ne!(marble, Marble::new("red", Material::Clay));
/// assert_eq!(marble.to_string(), "red Glass marble");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marble {
    color: String,
    material: Material,
}

impl Marble {
    /// Creates a new Marble with the provided color and material.
    pub fn new(color: impl Into<String>, material: Material) -> Marble {
        Marble {
            color: color.into(),
            material,
        }
    }

    /// Returns the color of this Marble.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the material of this Marble.
    pub const fn material(&self) -> Material {
        self.material
    }
}

impl Categorized for Marble {
    type Category = Material;

    fn category(&self) -> &Material {
        &self.material
    }
}

impl Display for Marble {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} marble", self.color, self.material)
    }
}
