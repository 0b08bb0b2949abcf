use crate::operation::ExecutableDocumentBuilder;
use crate::operation::FragmentRegistry;
use crate::operation::Operation;

/// Represents a GraphQL
/// ["executable document"](https://spec.graphql.org/October2021/#ExecutableDocument):
/// a set of operations along with the fragments they (may) spread.
///
/// An [`ExecutableDocument`] is built without a [`Schema`](crate::schema::Schema)
/// and is not validated on build. Fragment spreads and type conditions are
/// by-name references that are only resolved when a document's selections are
/// collected (see [`crate::execution`]) or validated (see
/// [`crate::validation`]).
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutableDocument {
    pub(super) fragment_registry: FragmentRegistry,
    pub(super) operations: Vec<Operation>,
}
impl ExecutableDocument {
    /// Convenience wrapper around [`ExecutableDocumentBuilder::new()`].
    pub fn builder() -> ExecutableDocumentBuilder {
        ExecutableDocumentBuilder::new()
    }

    pub fn fragment_registry(&self) -> &FragmentRegistry {
        &self.fragment_registry
    }

    /// Select an operation to execute.
    ///
    /// With a name, returns the operation of that name. Without one, returns
    /// the document's only operation (or `None` if there are zero or
    /// several).
    pub fn operation(&self, name: Option<&str>) -> Option<&Operation> {
        match name {
            Some(name) => self.operations.iter().find(|op| op.name() == Some(name)),
            None => match self.operations.as_slice() {
                [op] => Some(op),
                _ => None,
            },
        }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}
