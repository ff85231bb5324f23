use crate::model::{Flag, Kind};

/// Descriptive metadata of a declared parameter, used to render the help message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    kind: Kind,
    flag: Flag,
    help: Option<String>,
    arity: usize,
}

impl Metadata {
    /// Create the metadata of a parameter.
    ///
    /// The `arity` is the number of value tokens consumed per occurrence;
    /// for an [`Kind::ArgumentList`] it is the maximum number of values (`0` meaning unbounded).
    pub fn new(kind: Kind, flag: Flag, help: Option<String>, arity: usize) -> Self {
        Self {
            kind,
            flag,
            help,
            arity,
        }
    }

    /// The parsing policy.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The option names (empty for positional parameters).
    pub fn flag(&self) -> &Flag {
        &self.flag
    }

    /// The help message.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// The value arity.
    pub fn arity(&self) -> usize {
        self.arity
    }
}

/// The identity of a registered parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(u64);

/// A registered parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    metadata: Metadata,
}

impl Record {
    /// The identity of this record.
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// The metadata of this record.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

/// The ordered collection of declared parameters.
///
/// Records are kept in declaration order, which is the order the help message presents them in.
#[derive(Debug, Default)]
pub struct Registry {
    records: Vec<Record>,
    next_id: u64,
}

impl Registry {
    /// Append a record, returning its identity.
    pub fn register(&mut self, metadata: Metadata) -> RecordId {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.records.push(Record { id, metadata });
        id
    }

    /// Remove the record with identity `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        let index = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(index))
    }

    /// The records, in declaration order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there are no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
