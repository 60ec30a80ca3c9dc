use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing chemical file formats.
///
/// This trait provides a common API for file I/O of structures and molecules.
/// Implementors handle format-specific parsing and serialization for a single
/// model type.
pub trait ChemicalFile {
    /// The in-memory model read and written by the format.
    type Model;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a model from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or I/O operations encounter issues.
    fn read_from(reader: &mut impl BufRead) -> Result<Self::Model, Self::Error>;

    /// Writes a model to a writer, with an optional free-text comment.
    ///
    /// # Arguments
    ///
    /// * `model` - The model to write.
    /// * `comment` - Extra text recorded in the file header.
    /// * `writer` - The writer to output to.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(
        model: &Self::Model,
        comment: &str,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Reads a model from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Model, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes a model to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        model: &Self::Model,
        comment: &str,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(model, comment, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
