use std::collections::HashMap;
use std::ffi::OsString;
use std::hash::BuildHasher;
use std::io::Read;
use std::path::Path;

/// Raw state of a variable as seen by a [`Source`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Unset,
    Set(String),
    /// Set, but not valid unicode, so no type can be decoded from it.
    NotUnicode(OsString),
}

impl Lookup {
    pub fn is_set(&self) -> bool {
        !matches!(self, Lookup::Unset)
    }

    /// Value as text, `None` when unset or not unicode.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Lookup::Set(val) => Some(val.as_str()),
            _ => None,
        }
    }
}

impl From<Option<String>> for Lookup {
    fn from(val: Option<String>) -> Self {
        val.map_or(Lookup::Unset, Lookup::Set)
    }
}

/// Somewhere raw variable values can be looked up by exact name.
pub trait Source {
    fn lookup(&self, name: &str) -> Lookup;

    /// Looks up in `fallback` whatever this source doesn't have set.
    fn or<B: Source>(self, fallback: B) -> Chain<Self, B>
        where
            Self: Sized,
    {
        Chain {
            first: self,
            second: fallback,
        }
    }
}

impl<S: Source + ?Sized> Source for &S {
    fn lookup(&self, name: &str) -> Lookup {
        (**self).lookup(name)
    }
}

impl<H: BuildHasher> Source for HashMap<String, String, H> {
    fn lookup(&self, name: &str) -> Lookup {
        self.get(name).cloned().into()
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Source for ProcessEnv {
    fn lookup(&self, name: &str) -> Lookup {
        match std::env::var_os(name) {
            None => Lookup::Unset,
            Some(val) => match val.into_string() {
                Ok(val) => Lookup::Set(val),
                Err(val) => Lookup::NotUnicode(val),
            },
        }
    }
}

/// Entries of a `.env` file, read once and never written into the process environment.
///
/// When a key appears more than once the first entry wins, same as when `dotenvy` loads
/// the file into the environment.
#[derive(Debug, Clone, Default)]
pub struct DotenvFile {
    entries: HashMap<String, String>,
}

impl DotenvFile {
    /// Reads the file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, dotenvy::Error> {
        Self::collect(dotenvy::from_path_iter(path)?)
    }

    /// Reads the first file named `filename` found in the current directory or its parents.
    pub fn from_filename<P: AsRef<Path>>(filename: P) -> Result<Self, dotenvy::Error> {
        Self::collect(dotenvy::from_filename_iter(filename)?)
    }

    pub fn from_read<R: Read>(reader: R) -> Result<Self, dotenvy::Error> {
        Self::collect(dotenvy::from_read_iter(reader))
    }

    fn collect<I>(iter: I) -> Result<Self, dotenvy::Error>
        where
            I: Iterator<Item = Result<(String, String), dotenvy::Error>>,
    {
        let mut entries = HashMap::new();
        for item in iter {
            let (key, val) = item?;
            entries.entry(key).or_insert(val);
        }
        log::trace!("Read {} dotenv entries", entries.len());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Source for DotenvFile {
    fn lookup(&self, name: &str) -> Lookup {
        self.entries.get(name).cloned().into()
    }
}

/// Two sources layered, see [`Source::or`].
///
/// A variable set in the first source hides the second one even when its value is not
/// unicode.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A: Source, B: Source> Source for Chain<A, B> {
    fn lookup(&self, name: &str) -> Lookup {
        match self.first.lookup(name) {
            Lookup::Unset => self.second.lookup(name),
            found => found,
        }
    }
}
