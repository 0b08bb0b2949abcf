use std::marker::PhantomData;

/// A strongly-typed, `String`-named reference to some resource (`TResource`)
/// stored in a separate data-store (`TSource`).
///
/// A [`NamedRef`] never holds a pointer into its `TSource`. It is
/// de-referenced with [`NamedRef::deref()`] by handing it the source to look
/// the name up in. This is how fragment spreads point at fragment definitions
/// and how type conditions point at schema types, without either the document
/// or the schema needing to hold self-references.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedRef<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> {
    name: String,
    phantom: PhantomData<TResource>,
    ref_location: TRefLocation,
}
impl<
    TSource,
    TRefLocation,
    TResource: DerefByName<Source=TSource, RefLocation=TRefLocation>,
> NamedRef<TSource, TRefLocation, TResource> {
    pub fn deref<'a>(
        &self,
        source: &'a TSource,
    ) -> Result<&'a TResource, DerefByNameError> {
        TResource::deref_name(source, self.name.as_str())
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn new(
        name: impl AsRef<str>,
        ref_location: TRefLocation,
    ) -> NamedRef<TSource, TRefLocation, TResource> {
        NamedRef {
            name: name.as_ref().to_string(),
            phantom: PhantomData,
            ref_location,
        }
    }

    /// Where the reference itself appears (not where the referenced resource
    /// was defined).
    pub fn ref_location(&self) -> &TRefLocation {
        &self.ref_location
    }
}

/// Implement this trait for any type that can be referenced by name. This
/// enables usage of [`NamedRef`] for that type.
pub trait DerefByName: Clone + core::fmt::Debug {
    type Source;
    type RefLocation;

    fn deref_name<'a>(
        source: &'a Self::Source,
        name: &str,
    ) -> Result<&'a Self, DerefByNameError> where Self: Sized;

    fn named_ref(name: &str, ref_location: Self::RefLocation) -> NamedRef<
        Self::Source,
        Self::RefLocation,
        Self,
    > {
        NamedRef::<Self::Source, Self::RefLocation, Self>::new(
            name,
            ref_location,
        )
    }
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DerefByNameError {
    #[error("No definition found for `{0}`")]
    DanglingReference(String),
}
