use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub(crate) struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The contents of one `#[cmdl(..)]` attribute.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, Vec<DeriveValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParameterType {
    Argument,
    ArgumentList { maximum: DeriveValue },
    Switch,
    Scalar,
    Collection,
    Tuple,
    TupleCollection,
}

impl ParameterType {
    pub(crate) fn is_positional(&self) -> bool {
        matches!(self, ParameterType::Argument | ParameterType::ArgumentList { .. })
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParameter {
    pub field_name: syn::Ident,
    pub short: Option<DeriveValue>,
    pub long: Option<DeriveValue>,
    pub help: Option<DeriveValue>,
    pub parameter_type: ParameterType,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct DeriveParser {
    pub struct_name: syn::Ident,
    pub parameters: Vec<DeriveParameter>,
}
