use super::traits::SceneInput;
use crate::core::models::atom::{AtomKind, AtomRecord, SecondaryStructure};
use std::collections::HashMap;
use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Column set assumed when the command line carries a selection macro (`obj:sel`).
const FIXED_HEADERS: [&str; 11] = [
    "ID", "segi", "chain", "resi", "resn", "name", "elem", "reps", "color", "cartoon", "label",
];

const REQUIRED_COLUMNS: [&str; 8] = ["ID", "chain", "resi", "resn", "name", "elem", "reps", "color"];

#[derive(Debug, Error)]
pub enum IterateError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: IterateParseErrorKind,
    },
    #[error("Data found on line {line} before any iterate command line")]
    MissingHeader { line: usize },
    #[error("Required column '{column}' is missing on line {line}")]
    MissingField { line: usize, column: &'static str },
}

#[derive(Debug, Error)]
pub enum IterateParseErrorKind {
    #[error("Invalid integer in column '{column}' (value: '{value}')")]
    InvalidInt { column: &'static str, value: String },
    #[error("Invalid atom type '{0}'")]
    InvalidKind(String),
}

/// Reader for the text printed by the engine's `iterate` command.
///
/// The command line itself (anything containing `terate`) declares the columns:
/// every comma-separated name after the first segment. Each following line is one
/// atom, with brackets, commas and quotes stripped and the rest split on whitespace.
pub struct IterateFile;

impl SceneInput for IterateFile {
    type Output = Vec<AtomRecord>;
    type Error = IterateError;

    fn read_from(reader: &mut impl BufRead) -> Result<Self::Output, Self::Error> {
        let mut headers: Option<Vec<String>> = None;
        let mut atoms = Vec::new();

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let line_num = line_num + 1;

            if line.trim().is_empty() {
                continue;
            }
            if line.contains("terate") {
                headers = Some(parse_headers(&line));
                continue;
            }

            let columns = headers
                .as_ref()
                .ok_or(IterateError::MissingHeader { line: line_num })?;
            let cleaned: String = line
                .chars()
                .filter(|c| !matches!(c, '(' | ')' | ',' | '\''))
                .collect();
            let fields: HashMap<String, &str> = columns
                .iter()
                .map(|name| name.to_ascii_lowercase())
                .zip(cleaned.split_whitespace())
                .collect();

            atoms.push(parse_atom(&fields, line_num)?);
        }

        debug!(atoms = atoms.len(), "Parsed iterate dump");
        Ok(atoms)
    }
}

fn parse_headers(line: &str) -> Vec<String> {
    if line.contains(':') {
        return FIXED_HEADERS.iter().map(|h| h.to_string()).collect();
    }
    line.split(',')
        .skip(1)
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty())
        .collect()
}

/// Parses an optional integer column straight into its target type, so negative or
/// oversized values are rejected rather than wrapped.
fn int_column<T: FromStr>(
    fields: &HashMap<String, &str>,
    column: &'static str,
    line: usize,
) -> Result<Option<T>, IterateError> {
    fields
        .get(&column.to_ascii_lowercase())
        .map(|value| {
            value.parse::<T>().map_err(|_| IterateError::Parse {
                line,
                kind: IterateParseErrorKind::InvalidInt {
                    column,
                    value: value.to_string(),
                },
            })
        })
        .transpose()
}

fn parse_atom(fields: &HashMap<String, &str>, line: usize) -> Result<AtomRecord, IterateError> {
    for column in REQUIRED_COLUMNS {
        if !fields.contains_key(&column.to_ascii_lowercase()) {
            return Err(IterateError::MissingField { line, column });
        }
    }
    let field = |column: &str| fields.get(&column.to_ascii_lowercase()).copied();
    let text = |column: &'static str| field(column).unwrap_or_default();

    let mut atom = AtomRecord::new(
        int_column::<i64>(fields, "ID", line)?.unwrap_or_default(),
        text("chain"),
        text("resi"),
        text("resn"),
        text("name"),
        text("elem"),
    );
    atom.flag_bitmask = int_column::<u32>(fields, "reps", line)?.unwrap_or_default();
    atom.color_id = int_column::<i32>(fields, "color", line)?.unwrap_or_default();
    atom.cartoon_mode = int_column::<i32>(fields, "cartoon", line)?.unwrap_or_default();
    atom.secondary_structure = SecondaryStructure::from_code(text("ss"));
    if let Some(kind) = field("type") {
        atom.kind = kind.parse().map_err(|_| IterateError::Parse {
            line,
            kind: IterateParseErrorKind::InvalidKind(kind.to_string()),
        })?;
    }
    atom.label = text("label").to_string();
    Ok(atom)
}
