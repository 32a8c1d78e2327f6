use crate::tree::Ufid;

/// A parsed command line together with its original text.
#[derive(Debug)]
pub struct ScriptCommand {
    pub statement: Statement,
    pub line: String,
}

/// Commands understood by the roster.
#[derive(Debug)]
pub enum Statement {
    Insert(InsertStatement),
    /// Raw id text; anything that is not a stored id is simply not found.
    Remove(String),
    RemoveInorder(usize),
    Search(SearchStatement),
    Print(PrintStatement),
}

/// An `insert` whose name and id already passed validation.
#[derive(Debug)]
pub struct InsertStatement {
    pub name: String,
    pub id: Ufid,
}

#[derive(Debug, PartialEq)]
pub enum SearchStatement {
    Id(String),
    Name(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrintStatement {
    Inorder,
    Preorder,
    Postorder,
    LevelCount,
}
