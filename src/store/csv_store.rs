use std::path::Path;

use crate::error::HerdError;
use crate::models::{Batch, Sex};

/// CSV row structure for batch records.
#[derive(Debug, serde::Deserialize, serde::Serialize)]
struct BatchRow {
    id: String,
    shed_id: String,
    name: String,
    entry_date: chrono::NaiveDate,
    initial_age_days: i32,
    initial_weight_kg: f64,
    initial_quantity: u32,
    current_quantity: u32,
    sex: String,
}

/// Read batch records from a CSV file.
pub fn import_batches_csv(path: impl AsRef<Path>) -> Result<Vec<Batch>, HerdError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut batches = Vec::new();
    for result in rdr.deserialize() {
        let row: BatchRow = result?;
        let sex: Sex = row.sex.parse()?;
        let batch = Batch {
            id: row.id,
            shed_id: row.shed_id,
            name: row.name,
            entry_date: row.entry_date,
            initial_age_days: row.initial_age_days,
            initial_weight_kg: row.initial_weight_kg,
            initial_quantity: row.initial_quantity,
            current_quantity: row.current_quantity,
            sex,
        };
        batch.validate()?;
        batches.push(batch);
    }
    Ok(batches)
}

/// Write batch records to a CSV file.
pub fn export_batches_csv(batches: &[Batch], path: impl AsRef<Path>) -> Result<(), HerdError> {
    let mut wtr = csv::Writer::from_path(path.as_ref())?;
    for batch in batches {
        let row = BatchRow {
            id: batch.id.clone(),
            shed_id: batch.shed_id.clone(),
            name: batch.name.clone(),
            entry_date: batch.entry_date,
            initial_age_days: batch.initial_age_days,
            initial_weight_kg: batch.initial_weight_kg,
            initial_quantity: batch.initial_quantity,
            current_quantity: batch.current_quantity,
            sex: batch.sex.to_string(),
        };
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_batch(id: &str) -> Batch {
        Batch {
            id: id.to_string(),
            shed_id: "shed-1".to_string(),
            name: format!("Batch {id}"),
            entry_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            initial_age_days: 21,
            initial_weight_kg: 6.4,
            initial_quantity: 100,
            current_quantity: 95,
            sex: Sex::Mixed,
        }
    }

    #[test]
    fn test_csv_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batches.csv");
        let batches = vec![make_batch("b1"), make_batch("b2")];

        export_batches_csv(&batches, &path).unwrap();
        let loaded = import_batches_csv(&path).unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, "b1");
        assert_eq!(loaded[1].current_quantity, 95);
        assert_eq!(loaded[0].sex, Sex::Mixed);
        assert_eq!(loaded[0].entry_date, batches[0].entry_date);
    }

    #[test]
    fn test_import_rejects_invalid_sex() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batches.csv");
        std::fs::write(
            &path,
            "id,shed_id,name,entry_date,initial_age_days,initial_weight_kg,initial_quantity,current_quantity,sex\n\
             b1,shed-1,Batch,2024-07-01,21,6.4,100,95,neither\n",
        )
        .unwrap();
        assert!(import_batches_csv(&path).is_err());
    }

    #[test]
    fn test_import_rejects_invalid_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batches.csv");
        // Current quantity above initial fails validation.
        std::fs::write(
            &path,
            "id,shed_id,name,entry_date,initial_age_days,initial_weight_kg,initial_quantity,current_quantity,sex\n\
             b1,shed-1,Batch,2024-07-01,21,6.4,100,120,mixed\n",
        )
        .unwrap();
        assert!(matches!(
            import_batches_csv(&path),
            Err(HerdError::ValidationError(_))
        ));
    }

    #[test]
    fn test_import_missing_file() {
        assert!(import_batches_csv("/nonexistent/batches.csv").is_err());
    }

    #[test]
    fn test_export_empty_writes_nothing_but_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("batches.csv");
        export_batches_csv(&[], &path).unwrap();
        let loaded = import_batches_csv(&path).unwrap();
        assert!(loaded.is_empty());
    }
}
