use crate::loc;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;

#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Field(field) => field.def_location(),
            Self::FragmentSpread(spread) => spread.def_location(),
            Self::InlineFragment(inline_frag) => inline_frag.def_location(),
        }
    }
}
