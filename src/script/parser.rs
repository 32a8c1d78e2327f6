use super::statement::*;
use super::tokenizer;
use super::validator;
use crate::errors;
use once_cell::sync::Lazy;
use std::collections::{HashMap, VecDeque};

#[derive(Debug, Clone, Copy)]
enum Keyword {
    Insert,
    Remove,
    RemoveInorder,
    Search,
    Print(PrintStatement),
}

static KEYWORDS: Lazy<HashMap<&'static str, Keyword>> = Lazy::new(|| {
    HashMap::from([
        ("insert", Keyword::Insert),
        ("remove", Keyword::Remove),
        ("removeInorder", Keyword::RemoveInorder),
        ("search", Keyword::Search),
        ("printInorder", Keyword::Print(PrintStatement::Inorder)),
        ("printPreorder", Keyword::Print(PrintStatement::Preorder)),
        ("printPostorder", Keyword::Print(PrintStatement::Postorder)),
        ("printLevelCount", Keyword::Print(PrintStatement::LevelCount)),
    ])
});

/// Parses an `insert "NAME" ID` command.
///
/// # Arguments
/// * `tokens` - A mutable `VecDeque<String>` of command tokens.
///
/// # Returns
/// A `Result` containing the validated `InsertStatement` or an `errors::Error`.
fn parse_insert(tokens: &mut VecDeque<String>) -> Result<InsertStatement, errors::Error> {
    let name = pop_token(tokens, "'insert' must be followed by a quoted name.")?;
    let name = validator::validate_name(&validator::unquote(&name)?)?;
    let id = pop_token(tokens, "'insert \"NAME\"' must be followed by an identifier.")?;
    let id = validator::validate_id(&id)?;
    Ok(InsertStatement { name, id })
}

/// `search` takes either an identifier or a quoted name.
fn parse_search(tokens: &mut VecDeque<String>) -> Result<SearchStatement, errors::Error> {
    let target = pop_token(tokens, "'search' must be followed by an identifier or a name.")?;
    if target.starts_with('"') {
        Ok(SearchStatement::Name(validator::unquote(&target)?))
    } else if target.starts_with(|c: char| c.is_ascii_digit()) {
        Ok(SearchStatement::Id(target))
    } else {
        Err(errors::Error::Syntax(format!(
            "Cannot search for {}: expected an identifier or a quoted name.",
            target
        )))
    }
}

fn pop_token(tokens: &mut VecDeque<String>, error_msg: &str) -> Result<String, errors::Error> {
    tokens
        .pop_front()
        .ok_or_else(|| errors::Error::Syntax(error_msg.to_owned()))
}

/// Parses a full command line.
///
/// # Arguments
/// * `line` - The raw command line to parse.
///
/// # Returns
/// A `Result` containing the parsed `ScriptCommand` or an `errors::Error`.
pub fn parse(line: &str) -> Result<ScriptCommand, errors::Error> {
    let mut tokens = tokenizer::tokenize(line)?;

    let first = pop_token(&mut tokens, "Command cannot be empty.")?;
    let keyword = KEYWORDS
        .get(first.as_str())
        .copied()
        .ok_or_else(|| errors::Error::Syntax(format!("Unrecognized command: {}.", first)))?;

    let statement = match keyword {
        Keyword::Insert => Statement::Insert(parse_insert(&mut tokens)?),
        Keyword::Remove => {
            let id = pop_token(&mut tokens, "'remove' must be followed by an identifier.")?;
            Statement::Remove(id)
        }
        Keyword::RemoveInorder => {
            let rank = pop_token(&mut tokens, "'removeInorder' must be followed by a rank.")?;
            Statement::RemoveInorder(rank.parse::<usize>()?)
        }
        Keyword::Search => Statement::Search(parse_search(&mut tokens)?),
        Keyword::Print(print) => Statement::Print(print),
    };
    if !tokens.is_empty() {
        return Err(errors::Error::Syntax(format!(
            "Unexpected tokens after '{}' command.",
            first
        )));
    }
    Ok(ScriptCommand {
        statement,
        line: line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_insert() {
        let cmd = parse(r#"insert "Brandon Lee" 45679999"#).unwrap();
        match cmd.statement {
            Statement::Insert(i) => {
                assert_eq!(i.name, "Brandon Lee");
                assert_eq!(i.id.as_str(), "45679999");
            }
            other => panic!("unexpected statement {:?}", other),
        }
    }

    #[test]
    fn test_parse_insert_rejects_invalid_fields() {
        assert_eq!(parse(r#"insert "A11y" 45679999"#).unwrap_err().code(), 5000);
        assert_eq!(parse(r#"insert "Ann" 4567999"#).unwrap_err().code(), 5000);
        assert_eq!(parse(r#"insert Ann 45679999"#).unwrap_err().code(), 6000);
        assert_eq!(parse(r#"insert "Ann""#).unwrap_err().code(), 6000);
    }

    #[test]
    fn test_parse_search() {
        let cmd = parse("search 35459999").unwrap();
        assert!(matches!(
            cmd.statement,
            Statement::Search(SearchStatement::Id(ref id)) if id == "35459999"
        ));
        let cmd = parse(r#"search "Briana Lee""#).unwrap();
        assert!(matches!(
            cmd.statement,
            Statement::Search(SearchStatement::Name(ref n)) if n == "Briana Lee"
        ));
        assert!(parse("search Briana").is_err());
    }

    #[test]
    fn test_parse_remove_and_rank() {
        assert!(matches!(
            parse("remove 45679999").unwrap().statement,
            Statement::Remove(ref id) if id == "45679999"
        ));
        assert!(matches!(
            parse("removeInorder 2").unwrap().statement,
            Statement::RemoveInorder(2)
        ));
        assert_eq!(parse("removeInorder -1").unwrap_err().code(), 6000);
        assert_eq!(parse("removeInorder").unwrap_err().code(), 6000);
    }

    #[test]
    fn test_parse_print_commands() {
        for (line, expected) in [
            ("printInorder", PrintStatement::Inorder),
            ("printPreorder", PrintStatement::Preorder),
            ("printPostorder", PrintStatement::Postorder),
            ("printLevelCount", PrintStatement::LevelCount),
        ] {
            let cmd = parse(line).unwrap();
            assert!(matches!(cmd.statement, Statement::Print(p) if p == expected));
            assert_eq!(cmd.line, line);
        }
    }

    #[test]
    fn test_unknown_and_trailing_tokens() {
        assert!(parse("printinorder").is_err());
        assert!(parse("").is_err());
        assert!(parse("printInorder now").is_err());
        assert!(parse("remove 45679999 45679998").is_err());
    }
}
