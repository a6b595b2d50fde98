use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Song;

/// In-memory song catalog parsed from a CSV file.
///
/// Malformed rows are skipped and counted rather than failing the load;
/// only a missing file or a missing required column is an error.
#[derive(Debug)]
pub struct Catalog {
    songs: Vec<Song>,
    skipped_rows: usize,
}

impl Catalog {
    /// Load a catalog from a CSV file on disk
    pub fn load(path: &Path) -> Result<Catalog> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file '{}'", path.display()))?;
        Catalog::parse(&contents)
            .with_context(|| format!("Failed to parse catalog file '{}'", path.display()))
    }

    /// Parse catalog CSV text
    pub fn parse(contents: &str) -> Result<Catalog> {
        let mut lines = contents.lines();
        let header = lines
            .next()
            .context("Catalog file is empty")?
            .trim_start_matches('\u{feff}');
        let columns = ColumnMap::from_header(header)?;

        let mut songs = Vec::new();
        let mut skipped_rows = 0;
        for line in lines {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            match columns.parse_row(line) {
                Some(song) => songs.push(song),
                None => skipped_rows += 1,
            }
        }

        Ok(Catalog {
            songs,
            skipped_rows,
        })
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Number of data rows dropped during parsing
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    /// Distinct genre labels in first-seen catalog order
    pub fn distinct_genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = Vec::new();
        for song in &self.songs {
            if let Some(genre) = &song.genre {
                if !genres.iter().any(|known| known == genre) {
                    genres.push(genre.clone());
                }
            }
        }
        genres
    }
}

/// Positions of the required columns within the catalog header.
/// Extra columns are ignored and column order does not matter.
#[derive(Debug)]
struct ColumnMap {
    artist: usize,
    track_name: usize,
    genre: usize,
    valence: usize,
    energy: usize,
}

impl ColumnMap {
    fn from_header(header: &str) -> Result<ColumnMap> {
        let cells = split_csv_line(header);
        let position = |name: &str| -> Result<usize> {
            cells
                .iter()
                .position(|cell| cell.trim() == name)
                .with_context(|| format!("Catalog is missing the '{name}' column"))
        };

        Ok(ColumnMap {
            artist: position("artist")?,
            track_name: position("track_name")?,
            genre: position("genre")?,
            valence: position("valence")?,
            energy: position("energy")?,
        })
    }

    /// Parse one data row, returning None when the row is malformed
    fn parse_row(&self, line: &str) -> Option<Song> {
        let cells = split_csv_line(line);

        let artist = cells.get(self.artist)?.trim();
        let track_name = cells.get(self.track_name)?.trim();
        if artist.is_empty() || track_name.is_empty() {
            return None;
        }

        let valence = parse_float(cells.get(self.valence)?)?;
        let energy = parse_float(cells.get(self.energy)?)?;

        // An empty genre cell is a song without a genre, not a bad row
        let genre_cell = cells.get(self.genre)?.trim();
        let genre = (!genre_cell.is_empty()).then(|| genre_cell.to_string());

        Some(Song {
            artist: artist.to_string(),
            track_name: track_name.to_string(),
            genre,
            valence,
            energy,
        })
    }
}

fn parse_float(cell: &str) -> Option<f32> {
    let value: f32 = cell.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// Split one CSV line into fields, honoring double-quoted cells with
/// `""` escapes
fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);

    fields
}
