//! CSV output for ranked weather readings

use crate::error::WeathertopError;
use serde::Serialize;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::info;

/// Output basename for the temperature ranking
pub const TEMPERATURE_BASENAME: &str = "highest_temperature";
/// Output basename for the wind-speed ranking
pub const WIND_BASENAME: &str = "highest_wind";

/// Write a ranked list to `<dir>/<basename>.csv`.
///
/// The header row comes from the entry type's serde field names. The file is
/// created (or truncated) up front; if writing fails after creation the
/// partial file is removed so no half-written ranking is left behind.
pub fn write_ranking<T: Serialize>(
    entries: &[T],
    dir: &Path,
    basename: &str,
) -> crate::Result<PathBuf> {
    let path = dir.join(format!("{basename}.csv"));

    let file = File::create(&path).map_err(|source| WeathertopError::FileCreate {
        path: path.display().to_string(),
        source,
    })?;

    let mut writer = csv::Writer::from_writer(file);
    if let Err(source) = serialize_all(entries, &mut writer) {
        drop(writer);
        let _ = fs::remove_file(&path);
        return Err(WeathertopError::CsvWrite {
            path: path.display().to_string(),
            source,
        });
    }

    info!(path = %path.display(), rows = entries.len(), "wrote ranking");
    Ok(path)
}

fn serialize_all<T: Serialize, W: std::io::Write>(
    entries: &[T],
    writer: &mut csv::Writer<W>,
) -> Result<(), csv::Error> {
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TemperatureEntry, WindEntry};

    fn temperature_entries() -> Vec<TemperatureEntry> {
        vec![
            TemperatureEntry {
                city: "London".to_string(),
                value: 15.0,
            },
            TemperatureEntry {
                city: "York".to_string(),
                value: 15.0,
            },
            TemperatureEntry {
                city: "Leeds".to_string(),
                value: 12.0,
            },
        ]
    }

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_ranking(&temperature_entries(), dir.path(), TEMPERATURE_BASENAME).unwrap();

        assert_eq!(path.file_name().unwrap(), "highest_temperature.csv");
        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("City,Temperature"));
        assert_eq!(lines.next(), Some("London,15.0"));
        assert_eq!(lines.next(), Some("York,15.0"));
        assert_eq!(lines.next(), Some("Leeds,12.0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_wind_ranking_uses_wind_column() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![WindEntry {
            city: "Bristol".to_string(),
            value: 11.0,
        }];
        let path = write_ranking(&entries, dir.path(), WIND_BASENAME).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("City,Wind\n"));
    }

    #[test]
    fn test_round_trip_preserves_rows_and_order() {
        let dir = tempfile::tempdir().unwrap();
        let entries = temperature_entries();
        let path = write_ranking(&entries, dir.path(), TEMPERATURE_BASENAME).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let parsed: Vec<TemperatureEntry> =
            reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn test_repeated_writes_are_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let entries = temperature_entries();

        let path = write_ranking(&entries, dir.path(), TEMPERATURE_BASENAME).unwrap();
        let first = fs::read(&path).unwrap();
        let path = write_ranking(&entries, dir.path(), TEMPERATURE_BASENAME).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_city_names_with_commas_are_quoted() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![TemperatureEntry {
            city: "Newcastle, Tyne and Wear".to_string(),
            value: 10.5,
        }];
        let path = write_ranking(&entries, dir.path(), TEMPERATURE_BASENAME).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"Newcastle, Tyne and Wear\",10.5"));

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let parsed: Vec<TemperatureEntry> =
            reader.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(parsed, entries);
    }

    #[test]
    fn test_unwritable_directory_is_a_file_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let result = write_ranking(&temperature_entries(), &missing, TEMPERATURE_BASENAME);

        assert!(matches!(
            result,
            Err(WeathertopError::FileCreate { .. })
        ));
    }
}
