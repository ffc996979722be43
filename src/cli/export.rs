//! Export and restore CLI commands
//!
//! Writes the full dataset to a JSON document and reads one back.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::error::{FinanzasError, FinanzasResult};
use crate::export::{export_full_json, import_from_json};
use crate::storage::Storage;

/// Handle the export command
///
/// Writes to `output` when given, stdout otherwise.
pub fn handle_export_command(
    storage: &Storage,
    output: Option<PathBuf>,
    compact: bool,
) -> FinanzasResult<()> {
    let pretty = !compact;

    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                FinanzasError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            export_full_json(storage, &mut writer, pretty)?;
            writer
                .flush()
                .map_err(|e| FinanzasError::Export(e.to_string()))?;
            println!("Datos exportados a {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout();
            export_full_json(storage, &mut stdout, pretty)?;
            println!();
        }
    }

    Ok(())
}

/// Handle the restore command
///
/// Validates the document before replacing the stored dataset.
pub fn handle_restore_command(storage: &Storage, input: PathBuf) -> FinanzasResult<()> {
    let json = std::fs::read_to_string(&input).map_err(|e| {
        FinanzasError::Import(format!("Failed to read {}: {}", input.display(), e))
    })?;

    let export = import_from_json(&json)?;
    export.apply(storage)?;

    println!(
        "Datos restaurados: {} transacciones, {} gastos recurrentes",
        export.metadata.transaction_count, export.metadata.recurring_count
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinanzasPaths;
    use tempfile::TempDir;

    fn seeded_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinanzasPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_export_then_restore_roundtrip() {
        let (temp_dir, storage) = seeded_storage();
        let export_path = temp_dir.path().join("finanzas.json");

        handle_export_command(&storage, Some(export_path.clone()), false).unwrap();
        assert!(export_path.exists());

        storage.reset_all().unwrap();
        assert_eq!(storage.transactions.count().unwrap(), 0);

        handle_restore_command(&storage, export_path).unwrap();
        assert_eq!(storage.transactions.count().unwrap(), 21);
        assert_eq!(storage.recurring.count().unwrap(), 6);
    }

    #[test]
    fn test_restore_rejects_garbage() {
        let (temp_dir, storage) = seeded_storage();
        let bad_path = temp_dir.path().join("bad.json");
        std::fs::write(&bad_path, "not json").unwrap();

        let result = handle_restore_command(&storage, bad_path);
        assert!(matches!(result, Err(FinanzasError::Import(_))));

        // Stored data is untouched
        assert_eq!(storage.transactions.count().unwrap(), 21);
    }
}
