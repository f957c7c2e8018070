//! One generation run: load a board, render it, write it out.

use boardgen_core::{render_header, render_json, Board, BoardError};
use clap::ValueEnum;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// What kind of file to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// C++ header for the engine
    Header,
    /// JSON description of the graph
    Json,
}

impl Format {
    fn extension(&self) -> &'static str {
        match self {
            Format::Header => "h",
            Format::Json => "json",
        }
    }
}

/// Settings for a single run.
#[derive(Debug, Clone)]
pub struct Options {
    pub name: String,
    pub boards_dir: PathBuf,
    pub out_dir: PathBuf,
    pub format: Format,
    pub strict: bool,
}

impl Options {
    /// Check that the board name can serve as both a file stem and the
    /// generated class name.
    pub fn validate(&self) -> Result<(), GenerateError> {
        let mut chars = self.name.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid {
            Ok(())
        } else {
            Err(GenerateError::InvalidName {
                name: self.name.clone(),
            })
        }
    }

    pub fn input_path(&self) -> PathBuf {
        self.boards_dir.join(format!("{}.txt", self.name))
    }

    pub fn output_path(&self) -> PathBuf {
        self.out_dir
            .join(format!("{}.{}", self.name, self.format.extension()))
    }
}

/// Errors that end a run
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Board name {name:?} is not a valid identifier")]
    InvalidName { name: String },

    #[error(transparent)]
    Board(#[from] BoardError),

    #[error("Board has {count} one-way links")]
    AsymmetricBoard { count: usize },

    #[error("Cannot render JSON")]
    Render(#[from] serde_json::Error),

    #[error("Cannot write {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Generate the output for `options.name` and return the path written.
///
/// Nothing is written unless the board parses and renders completely.
pub fn run(options: &Options) -> Result<PathBuf, GenerateError> {
    options.validate()?;
    let input = options.input_path();
    let board = Board::from_file(&input)?;

    let counts = board.counts();
    info!(
        roads = counts.roads,
        junctions = counts.junctions,
        tiles = counts.tiles,
        flippables = counts.flippables,
        oceans = counts.oceans,
        links = board.link_count(),
        "Loaded {}",
        input.display()
    );

    let one_way = board.one_way_links();
    for link in &one_way {
        warn!("{} links {} along {} but nothing links back", link.from, link.to, link.direction);
    }
    if options.strict && !one_way.is_empty() {
        return Err(GenerateError::AsymmetricBoard { count: one_way.len() });
    }

    let contents = match options.format {
        Format::Header => render_header(&board, &options.name),
        Format::Json => render_json(&board, &options.name)?,
    };

    let path = options.output_path();
    let write_err = |source| GenerateError::OutputWrite {
        path: path.clone(),
        source,
    };
    fs::create_dir_all(&options.out_dir).map_err(write_err)?;
    fs::write(&path, contents).map_err(write_err)?;
    Ok(path)
}
