use crate::error::BoxError;
use crate::schema::table::{TableChange, TableColumn, TableSchema};
use crate::schema::table_id::TableId;
use log::debug;
use sqlparser::ast::{ColumnDef, ColumnOption, ObjectName, Statement, TableConstraint};
use sqlparser::dialect::MySqlDialect;
use sqlparser::parser::Parser;
use sqlparser::tokenizer::{Token, Tokenizer};

/// Turns definition-language text into structural change records.
pub trait DdlParser: Send + Sync {
    /// Parses `ddl`. Unqualified table names are placed in `default_catalog`
    /// and `default_schema`.
    fn parse(
        &self,
        ddl: &str,
        default_catalog: Option<&str>,
        default_schema: Option<&str>,
    ) -> Result<Vec<TableChange>, BoxError>;
}

/// MySQL `CREATE TABLE` parser backed by `sqlparser`. Statements other than
/// `CREATE TABLE` are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlDdlParser;

impl DdlParser for SqlDdlParser {
    fn parse(
        &self,
        ddl: &str,
        default_catalog: Option<&str>,
        default_schema: Option<&str>,
    ) -> Result<Vec<TableChange>, BoxError> {
        let dialect = MySqlDialect {};
        let tokens = Tokenizer::new(&dialect, ddl).tokenize()?;
        let ast: Vec<Statement> = Parser::new(&dialect)
            .with_tokens(normalize_create_table(tokens))
            .parse_statements()?;

        let mut changes = vec![];
        for statement in &ast {
            match statement {
                Statement::CreateTable {
                    name,
                    columns,
                    constraints,
                    ..
                } => changes.push(TableChange::create(create_table(
                    table_id_from_object_name(default_catalog, default_schema, name),
                    columns,
                    constraints,
                ))),
                other => debug!("Skipping non CREATE TABLE statement: {}", other),
            }
        }
        Ok(changes)
    }
}

fn create_table(id: TableId, columns: &[ColumnDef], constraints: &[TableConstraint]) -> TableSchema {
    let mut table = TableSchema::new(id, vec![], vec![]);

    for c in columns {
        let is_nullable = !c
            .options
            .iter()
            .map(|def| &def.option)
            .any(|o| matches!(o, ColumnOption::NotNull));

        let is_primary_key = c.options.iter().map(|def| &def.option).any(|o| match o {
            ColumnOption::Unique { is_primary } => *is_primary,
            _ => false,
        });

        if is_primary_key {
            table.primary_key.push(c.name.value.clone());
        }
        table.columns.push(TableColumn {
            name: c.name.value.clone(),
            data_type: c.data_type.to_string(),
            nullable: is_nullable && !is_primary_key,
        });
    }

    for constraint in constraints {
        if let TableConstraint::Unique {
            columns,
            is_primary: true,
            ..
        } = constraint
        {
            table.primary_key = columns.iter().map(|c| c.value.clone()).collect();
            for key in columns {
                if let Some(col) = table.column_mut(&key.value) {
                    col.nullable = false;
                }
            }
        }
    }

    table
}

/// Resolves a possibly qualified name: `table`, `catalog.table` or
/// `catalog.schema.table`. With a default schema a two-part name is read as
/// `schema.table` instead.
pub fn table_id_from_object_name(
    default_catalog: Option<&str>,
    default_schema: Option<&str>,
    name: &ObjectName,
) -> TableId {
    let parts: Vec<&str> = name.0.iter().map(|ident| ident.value.as_str()).collect();
    match parts.as_slice() {
        [catalog, schema, table] => TableId::new(Some(*catalog), Some(*schema), table),
        [schema, table] if default_schema.is_some() => {
            TableId::new(default_catalog, Some(*schema), table)
        }
        [catalog, table] => TableId::new(Some(*catalog), None, table),
        _ => TableId::new(
            default_catalog,
            default_schema,
            parts.last().copied().unwrap_or_default(),
        ),
    }
}

/// Rewrites `SHOW CREATE TABLE` output into a form the MySQL dialect accepts:
///
/// * everything after the column list (`ENGINE=InnoDB`, `AUTO_INCREMENT=5`,
///   table charset and comment) is cut;
/// * column `CHARACTER SET x` and `COLLATE x` attributes are dropped;
/// * `UNIQUE KEY name (..)` becomes `CONSTRAINT name UNIQUE (..)`.
///
/// Whitespace and comments are removed. Token streams without a column list
/// pass through otherwise unchanged.
pub fn normalize_create_table(tokens: Vec<Token>) -> Vec<Token> {
    let tokens: Vec<Token> = tokens
        .into_iter()
        .filter(|t| !matches!(t, Token::Whitespace(_)))
        .collect();

    let mut normalized = Vec::with_capacity(tokens.len());
    let mut depth = 0usize;
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        let next = tokens.get(i + 1);

        if depth > 0 {
            if is_word(token, "CHARACTER") && next.map_or(false, |t| is_word(t, "SET")) {
                i += 3;
                continue;
            }
            if is_word(token, "CHARSET") || is_word(token, "COLLATE") {
                i += 2;
                continue;
            }
            if is_word(token, "UNIQUE")
                && next.map_or(false, |t| is_word(t, "KEY") || is_word(t, "INDEX"))
            {
                match tokens.get(i + 2) {
                    Some(name @ Token::Word(_)) => {
                        normalized.push(Token::make_keyword("CONSTRAINT"));
                        normalized.push(name.clone());
                        normalized.push(Token::make_keyword("UNIQUE"));
                        i += 3;
                    }
                    _ => {
                        normalized.push(token.clone());
                        i += 2;
                    }
                }
                continue;
            }
        }

        normalized.push(token.clone());
        i += 1;
        match token {
            Token::LParen => depth += 1,
            Token::RParen if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
    }
    normalized
}

fn is_word(token: &Token, word: &str) -> bool {
    matches!(token, Token::Word(w) if w.quote_style.is_none() && w.value.eq_ignore_ascii_case(word))
}
