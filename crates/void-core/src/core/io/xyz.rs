use super::traits::ChemicalFile;
use crate::core::models::error::ModelError;
use crate::core::models::lattice::Lattice;
use crate::core::models::molecule::Molecule;
use crate::core::models::structure::Structure;
use nalgebra::{Matrix3, Point3};
use std::io::{self, BufRead, Write};
use thiserror::Error;

/// Element label used for every point of a point-cloud dump.
pub const POINT_CLOUD_LABEL: &str = "Li";

#[derive(Debug, Error)]
pub enum XyzError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: XyzParseErrorKind },
    #[error("Comment line has no Lattice=\"...\" entry; periodic structures need one")]
    MissingLattice,
    #[error("Header declares {expected} atoms but {found} were found")]
    CountMismatch { expected: usize, found: usize },
    #[error("Invalid model: {0}")]
    Model(#[from] ModelError),
}

#[derive(Debug, Error)]
pub enum XyzParseErrorKind {
    #[error("Invalid atom count '{0}'")]
    InvalidCount(String),
    #[error("Invalid float value '{0}'")]
    InvalidFloat(String),
    #[error("Atom line needs a symbol and three coordinates")]
    MissingField,
    #[error("Lattice entry must contain nine numbers (got '{0}')")]
    InvalidLattice(String),
}

struct RawFrame {
    comment: String,
    species: Vec<String>,
    coords: Vec<Point3<f64>>,
}

fn parse_float(token: &str, line: usize) -> Result<f64, XyzError> {
    token.parse::<f64>().map_err(|_| XyzError::Parse {
        line,
        kind: XyzParseErrorKind::InvalidFloat(token.to_string()),
    })
}

fn read_frame(reader: &mut impl BufRead) -> Result<RawFrame, XyzError> {
    let mut lines = reader.lines();

    let count_line = lines.next().transpose()?.unwrap_or_default();
    let count_str = count_line.trim();
    let expected: usize = count_str.parse().map_err(|_| XyzError::Parse {
        line: 1,
        kind: XyzParseErrorKind::InvalidCount(count_str.to_string()),
    })?;
    let comment = lines.next().transpose()?.unwrap_or_default();

    let mut species = Vec::with_capacity(expected);
    let mut coords = Vec::with_capacity(expected);
    for (offset, line_res) in lines.enumerate() {
        if species.len() == expected {
            break;
        }
        let line = line_res?;
        let line_num = offset + 3;
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(XyzError::Parse {
                line: line_num,
                kind: XyzParseErrorKind::MissingField,
            });
        }
        species.push(fields[0].to_string());
        coords.push(Point3::new(
            parse_float(fields[1], line_num)?,
            parse_float(fields[2], line_num)?,
            parse_float(fields[3], line_num)?,
        ));
    }

    if species.len() != expected {
        return Err(XyzError::CountMismatch {
            expected,
            found: species.len(),
        });
    }
    Ok(RawFrame {
        comment,
        species,
        coords,
    })
}

fn write_frame(
    species: &[String],
    coords: &[Point3<f64>],
    comment: &str,
    writer: &mut impl Write,
) -> io::Result<()> {
    writeln!(writer, "{}", species.len())?;
    writeln!(writer, "{}", comment.replace('\n', " "))?;
    for (symbol, p) in species.iter().zip(coords) {
        writeln!(writer, "{:<3} {:>14.8} {:>14.8} {:>14.8}", symbol, p.x, p.y, p.z)?;
    }
    Ok(())
}

/// Extracts the nine lattice numbers from an extended-XYZ comment line.
fn parse_lattice(comment: &str) -> Result<Lattice, XyzError> {
    let lower = comment.to_ascii_lowercase();
    let start = lower.find("lattice=\"").ok_or(XyzError::MissingLattice)? + "lattice=\"".len();
    let rest = &comment[start..];
    let end = rest.find('"').ok_or_else(|| XyzError::Parse {
        line: 2,
        kind: XyzParseErrorKind::InvalidLattice(rest.to_string()),
    })?;
    let body = &rest[..end];

    let values = body
        .split_whitespace()
        .map(|t| parse_float(t, 2))
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() != 9 {
        return Err(XyzError::Parse {
            line: 2,
            kind: XyzParseErrorKind::InvalidLattice(body.to_string()),
        });
    }
    Ok(Lattice::new(Matrix3::from_row_slice(&values))?)
}

/// Plain XYZ files holding a single non-periodic molecule.
pub struct XyzFile;

impl ChemicalFile for XyzFile {
    type Model = Molecule;
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Molecule, XyzError> {
        let frame = read_frame(reader)?;
        Ok(Molecule::new(frame.species, frame.coords)?)
    }

    fn write_to(model: &Molecule, comment: &str, writer: &mut impl Write) -> Result<(), XyzError> {
        write_frame(model.species(), model.cart_coords(), comment, writer)?;
        Ok(())
    }
}

/// Extended XYZ files holding a periodic structure.
///
/// The lattice is carried in the comment line as `Lattice="ax ay az bx by bz cx cy cz"`.
pub struct ExtendedXyzFile;

impl ChemicalFile for ExtendedXyzFile {
    type Model = Structure;
    type Error = XyzError;

    fn read_from(reader: &mut impl BufRead) -> Result<Structure, XyzError> {
        let frame = read_frame(reader)?;
        let lattice = parse_lattice(&frame.comment)?;
        Ok(Structure::new(lattice, frame.species, frame.coords, true)?)
    }

    fn write_to(
        model: &Structure,
        comment: &str,
        writer: &mut impl Write,
    ) -> Result<(), XyzError> {
        let m = model.lattice().matrix();
        let lattice = (0..3)
            .flat_map(|i| (0..3).map(move |j| (i, j)))
            .map(|(i, j)| format!("{:.8}", m[(i, j)]))
            .collect::<Vec<_>>()
            .join(" ");
        let mut header = format!("Lattice=\"{}\" Properties=species:S:1:pos:R:3", lattice);
        if !comment.is_empty() {
            header.push(' ');
            header.push_str(comment);
        }
        write_frame(model.species(), model.cart_coords(), &header, writer)?;
        Ok(())
    }
}

/// Writes candidate points as an XYZ file with every point labelled [`POINT_CLOUD_LABEL`].
pub fn write_point_cloud(
    points: &[Point3<f64>],
    comment: &str,
    writer: &mut impl Write,
) -> io::Result<()> {
    let species = vec![POINT_CLOUD_LABEL.to_string(); points.len()];
    write_frame(&species, points, comment, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const WATER: &str = "3\nwater\nO 0.0 0.0 0.0\nH 0.96 0.0 0.0\nH -0.24 0.93 0.0\n";

    #[test]
    fn reads_plain_molecule() {
        let molecule = XyzFile::read_from(&mut Cursor::new(WATER)).unwrap();
        assert_eq!(molecule.len(), 3);
        assert_eq!(molecule.species()[1], "H");
        assert_eq!(molecule.cart_coords()[1], Point3::new(0.96, 0.0, 0.0));
    }

    #[test]
    fn reads_extended_structure_with_lattice() {
        let content = "2\nLattice=\"10 0 0 0 11 0 0 0 12\" Properties=species:S:1:pos:R:3\nSi 0 0 0 extra\nO 1 1 1\n";
        let structure = ExtendedXyzFile::read_from(&mut Cursor::new(content)).unwrap();
        assert_eq!(structure.len(), 2);
        assert_eq!(structure.lattice().abc(), [10.0, 11.0, 12.0]);
    }

    #[test]
    fn structure_without_lattice_is_rejected() {
        let result = ExtendedXyzFile::read_from(&mut Cursor::new(WATER));
        assert!(matches!(result, Err(XyzError::MissingLattice)));
    }

    #[test]
    fn bad_coordinate_reports_line_number() {
        let content = "2\n\nC 0 0 0\nC 0 zero 0\n";
        let result = XyzFile::read_from(&mut Cursor::new(content));
        assert!(matches!(
            result,
            Err(XyzError::Parse {
                line: 4,
                kind: XyzParseErrorKind::InvalidFloat(_)
            })
        ));
    }

    #[test]
    fn truncated_file_is_a_count_mismatch() {
        let content = "3\n\nC 0 0 0\n";
        let result = XyzFile::read_from(&mut Cursor::new(content));
        assert!(matches!(
            result,
            Err(XyzError::CountMismatch {
                expected: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn invalid_count_line_is_rejected() {
        let result = XyzFile::read_from(&mut Cursor::new("three\n\n"));
        assert!(matches!(
            result,
            Err(XyzError::Parse {
                line: 1,
                kind: XyzParseErrorKind::InvalidCount(_)
            })
        ));
    }

    #[test]
    fn written_structure_can_be_read_back() {
        let content = "1\nLattice=\"5 0 0 0 5 0 0 0 5\"\nNa 1.5 2.5 3.5\n";
        let structure = ExtendedXyzFile::read_from(&mut Cursor::new(content)).unwrap();

        let mut buffer = Vec::new();
        ExtendedXyzFile::write_to(&structure, "score=0.5", &mut buffer).unwrap();
        let text = String::from_utf8(buffer.clone()).unwrap();
        assert!(text.contains("score=0.5"));

        let reread = ExtendedXyzFile::read_from(&mut Cursor::new(buffer)).unwrap();
        assert_eq!(reread, structure);
    }

    #[test]
    fn point_cloud_labels_every_point() {
        let mut buffer = Vec::new();
        write_point_cloud(
            &[Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 2.0, 3.0)],
            "points",
            &mut buffer,
        )
        .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("2\npoints\n"));
        assert_eq!(text.matches(POINT_CLOUD_LABEL).count(), 2);
    }

    #[test]
    fn path_round_trip_uses_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("water.xyz");
        let molecule = XyzFile::read_from(&mut Cursor::new(WATER)).unwrap();
        XyzFile::write_to_path(&molecule, "water", &path).unwrap();
        let reread = XyzFile::read_from_path(&path).unwrap();
        assert_eq!(reread.species(), molecule.species());
    }
}
