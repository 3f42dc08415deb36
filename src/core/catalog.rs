//! # Catalog
//!
//! The fixed, ordered list of adoptable dogs. A `Catalog` is built once at
//! startup (either the built-in sample data or a TOML file) and handed to
//! `App` by value. Nothing mutates it afterwards: there are no setters, and
//! records are only ever borrowed.
//!
//! ```text
//! Catalog
//! └── records: Vec<Record>   // position = navigation key
//!     ├── id                 // unique, informational
//!     ├── name, breed, age
//!     ├── sex: Sex           // drives pronoun + symbol
//!     ├── images: Vec<ImageRef>  (len >= 1)
//!     └── owner_image, owner_name
//! ```
//!
//! Navigation addresses records by **position**, never by `id`. See
//! [`Catalog::find_by_id`] for the id-based lookup.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

// ============================================================================
// Record
// ============================================================================

/// Opaque handle to an image resource (e.g. `"golden1"`).
///
/// The core never interprets it; the TUI resolves it to bundled art.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Subject pronoun used in the detail description.
    pub fn pronoun(self) -> &'static str {
        match self {
            Sex::Male => "He",
            Sex::Female => "She",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Sex::Male => "♂",
            Sex::Female => "♀",
        }
    }
}

/// One adoptable dog and its current owner.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub breed: String,
    pub sex: Sex,
    pub images: Vec<ImageRef>,
    pub age: String,
    pub owner_image: ImageRef,
    pub owner_name: String,
}

impl Record {
    /// The image shown in list rows and as the detail hero.
    pub fn cover_image(&self) -> &ImageRef {
        // Non-empty images is a catalog invariant, checked in `Catalog::new`.
        &self.images[0]
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Empty,
    NoImages { id: u32 },
    DuplicateId(u32),
    TooLarge { len: usize },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::Empty => write!(f, "catalog has no dogs"),
            CatalogError::NoImages { id } => write!(f, "dog {id} has no images"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate dog id {id}"),
            CatalogError::TooLarge { len } => {
                write!(f, "catalog has {len} dogs, at most {MAX_RECORDS} are supported")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Catalog
// ============================================================================

/// On-disk shape: a list of `[[dogs]]` tables.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    dogs: Vec<Record>,
}

/// Largest catalog accepted. Keeps the scrolling list's content height
/// inside terminal coordinates.
pub const MAX_RECORDS: usize = 2_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<Record>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or oversized lists, image-less
    /// records and repeated ids.
    pub fn new(records: Vec<Record>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }
        if records.len() > MAX_RECORDS {
            return Err(CatalogError::TooLarge { len: records.len() });
        }
        let mut seen = HashSet::new();
        for record in &records {
            if record.images.is_empty() {
                return Err(CatalogError::NoImages { id: record.id });
            }
            if !seen.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// The three sample dogs shipped with the app.
    pub fn builtin() -> Self {
        let records = vec![
            sample(
                1,
                "Niko",
                "Golden",
                Sex::Male,
                &["golden1", "golden2", "golden3"],
                "4 months old",
                "owner1",
                "Marie Johnson",
            ),
            sample(
                2,
                "Lulu",
                "Pug",
                Sex::Female,
                &["pug2", "pug3", "pug4"],
                "5 months old",
                "owner4",
                "Greg Rodgers",
            ),
            sample(
                3,
                "Ernie",
                "Pomeranian",
                Sex::Male,
                &["pomeranian1"],
                "3 months old",
                "owner2",
                "Ad Soyad",
            ),
        ];
        Self { records }
    }

    /// Parse a catalog from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text).map_err(CatalogError::Parse)?;
        Self::new(file.dogs)
    }

    /// Load a catalog from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(CatalogError::Io)?;
        let catalog = Self::from_toml(&text)?;
        info!(
            "Loaded catalog with {} dogs from {}",
            catalog.len(),
            path.display()
        );
        debug!("Catalog: {:?}", catalog);
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Checked positional lookup.
    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    /// Positional lookup for positions produced by enumerating this catalog.
    ///
    /// # Panics
    ///
    /// Panics if `position >= self.len()`.
    pub fn record(&self, position: usize) -> &Record {
        &self.records[position]
    }

    pub fn find_by_id(&self, id: u32) -> Option<(usize, &Record)> {
        self.records.iter().enumerate().find(|(_, r)| r.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: u32,
    name: &str,
    breed: &str,
    sex: Sex,
    images: &[&str],
    age: &str,
    owner_image: &str,
    owner_name: &str,
) -> Record {
    Record {
        id,
        name: name.to_string(),
        breed: breed.to_string(),
        sex,
        images: images.iter().map(|s| ImageRef::new(*s)).collect(),
        age: age.to_string(),
        owner_image: ImageRef::new(owner_image),
        owner_name: owner_name.to_string(),
    }
}
