use crate::script::statement::{PrintStatement, SearchStatement, Statement};
use crate::script::ScriptCommand;
use crate::session::SharedTree;
use crate::{errors, tree::AvlTree};
use tracing::{debug, trace};

pub const SUCCESSFUL: &str = "successful";
pub const UNSUCCESSFUL: &str = "unsuccessful";

#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// OK response from insert/remove.
    Successful,
    /// Name found by an id search.
    Name(String),
    /// Ids found by a name search, in pre-order.
    Ids(Vec<String>),
    /// Names in traversal order.
    Names(Vec<String>),
    /// Level count.
    Count(usize),
}

impl Outcome {
    /// Output lines for this outcome.
    pub fn render(&self) -> Vec<String> {
        match self {
            Outcome::Successful => vec![SUCCESSFUL.to_string()],
            Outcome::Name(name) => vec![name.clone()],
            Outcome::Ids(ids) => ids.clone(),
            Outcome::Names(names) => vec![names.join(", ")],
            Outcome::Count(count) => vec![count.to_string()],
        }
    }
}

/// Execute a command.
pub fn execute(tree: &SharedTree, c: ScriptCommand) -> Result<Outcome, errors::Error> {
    trace!(line = %c.line, "Executing command.");
    match c.statement {
        Statement::Insert(i) => {
            tree.write()?.insert(&i.name, i.id)?;
            Ok(Outcome::Successful)
        }
        Statement::Remove(id) => {
            tree.write()?.remove(&id)?;
            Ok(Outcome::Successful)
        }
        Statement::RemoveInorder(rank) => {
            tree.write()?.remove_by_rank(rank)?;
            Ok(Outcome::Successful)
        }
        Statement::Search(s) => {
            let tree = tree.read()?;
            execute_search(&tree, s)
        }
        Statement::Print(p) => {
            let tree = tree.read()?;
            execute_print(&tree, p)
        }
    }
}

fn execute_search(tree: &AvlTree, s: SearchStatement) -> Result<Outcome, errors::Error> {
    match s {
        SearchStatement::Id(id) => tree
            .search_by_id(&id)
            .map(|name| Outcome::Name(name.to_string()))
            .ok_or_else(|| err!(NotFound, "No record with id '{}'", id)),
        SearchStatement::Name(name) => {
            let ids: Vec<String> = tree
                .search_by_name(&name)
                .into_iter()
                .map(|id| id.to_string())
                .collect();
            if ids.is_empty() {
                return Err(err!(NotFound, "No record named '{}'", name));
            }
            debug!(name = %name, matches = ids.len(), "Searched by name.");
            Ok(Outcome::Ids(ids))
        }
    }
}

fn execute_print(tree: &AvlTree, p: PrintStatement) -> Result<Outcome, errors::Error> {
    if p == PrintStatement::LevelCount {
        return Ok(Outcome::Count(tree.height()));
    }
    if tree.is_empty() {
        return Err(err!(NotFound, "Tree is empty"));
    }
    let names = match p {
        PrintStatement::Preorder => tree.preorder(),
        PrintStatement::Postorder => tree.postorder(),
        _ => tree.inorder(),
    };
    Ok(Outcome::Names(names.into_iter().map(String::from).collect()))
}
