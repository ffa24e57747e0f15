//! REPL command parsing.

use store_core::{
    domain::ProductId,
    usecase::{ProductIn, ProductQuery, ProductUpdate},
};

use crate::error::CliError;

pub const HELP: &str = "\
Commands:
  create {json}        create a product, e.g. create {\"name\": \"Iphone 14 Pro Max\", \"quantity\": 10, \"price\": \"8.500\", \"status\": true}
  get <id>             show one product
  query [skip] [limit] list products
  update <id> {json}   update fields, e.g. update <id> {\"price\": \"7.500\"}
  delete <id>          delete a product
  help                 show this message
  quit | exit          leave the REPL";

/// A parsed REPL line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Create(ProductIn),
    Get(ProductId),
    Query(ProductQuery),
    Update(ProductId, ProductUpdate),
    Delete(ProductId),
    Help,
    Quit,
}

impl Command {
    /// Parse one non-empty input line
    pub fn parse(line: &str) -> Result<Self, CliError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "create" => {
                let body = required(rest, "create", "JSON payload")?;
                Ok(Self::Create(serde_json::from_str(body)?))
            }
            "get" => Ok(Self::Get(parse_id(rest, "get")?)),
            "query" => parse_query(rest).map(Self::Query),
            "update" => {
                let rest = required(rest, "update", "product id")?;
                let (id, body) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                let id = parse_id(id, "update")?;
                let body = required(body.trim(), "update", "JSON payload")?;
                Ok(Self::Update(id, serde_json::from_str(body)?))
            }
            "delete" => Ok(Self::Delete(parse_id(rest, "delete")?)),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CliError::UnknownCommand(other.to_string())),
        }
    }
}

fn required<'a>(
    value: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CliError> {
    if value.is_empty() {
        return Err(CliError::MissingArgument { command, argument });
    }
    Ok(value)
}

fn parse_id(value: &str, command: &'static str) -> Result<ProductId, CliError> {
    let value = required(value, command, "product id")?;
    Ok(ProductId::parse(value)?)
}

fn parse_query(rest: &str) -> Result<ProductQuery, CliError> {
    let mut parts = rest.split_whitespace();
    let skip = parts.next().map(parse_number).transpose()?.unwrap_or(0);
    let limit = parts.next().map(parse_number).transpose()?;
    if let Some(extra) = parts.next() {
        return Err(CliError::UnexpectedArgument {
            command: "query",
            value: extra.to_string(),
        });
    }
    Ok(ProductQuery::new(skip, limit))
}

fn parse_number(value: &str) -> Result<usize, CliError> {
    value.parse().map_err(|_| CliError::InvalidNumber {
        command: "query",
        value: value.to_string(),
    })
}
