use std::{fs::File, io::Read, path::Path};

use tracing::{error, warn};

use crate::domain::{common::entities::app_errors::CoreError, seed::value_objects::SeedRecord};

/// Reads every row of a product CSV. Rows that cannot be decoded are
/// skipped with a warning; unknown columns are ignored.
pub fn read_seed_records<R: Read>(reader: R) -> Result<Vec<SeedRecord>, CoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader.headers().map_err(|e| {
        error!("Failed to read CSV headers: {}", e);
        CoreError::Validation("CSV file has no readable header row".to_string())
    })?;

    let mut records = Vec::new();
    for (line, result) in csv_reader.deserialize::<SeedRecord>().enumerate() {
        match result {
            Ok(mut record) => {
                record.position = line;
                records.push(record);
            }
            Err(e) => warn!(row = line + 1, "skipping malformed CSV row: {}", e),
        }
    }

    Ok(records)
}

pub fn read_seed_file(path: &Path) -> Result<Vec<SeedRecord>, CoreError> {
    let file = File::open(path).map_err(|e| {
        error!("CSV file not found: {} ({})", path.display(), e);
        CoreError::NotFound(format!("CSV file not found: {}", path.display()))
    })?;

    read_seed_records(file)
}

#[cfg(test)]
mod tests {
    use crate::domain::seed::transform::clean_record;

    use super::*;

    #[test]
    fn test_reads_known_columns_and_ignores_others() {
        let data = "\
uniq_id,product_name,category,sale_price,rating,type,crawl_timestamp
a1,Steel Bottle,Kitchen,\"₹1,250\",4.1,Bottle,2020-01-01
a2,,Garden,,,,2020-01-02
";
        let records = read_seed_records(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].uniq_id.as_deref(), Some("a1"));
        assert_eq!(records[0].sale_price.as_deref(), Some("₹1,250"));
        assert_eq!(records[0].r#type.as_deref(), Some("Bottle"));
        assert_eq!(records[0].brand, None);
        assert_eq!(records[1].product_name, None);
        assert_eq!(records[1].category.as_deref(), Some("Garden"));
    }

    #[test]
    fn test_rows_keep_their_file_position_past_a_malformed_row() {
        let data: &[u8] = b"uniq_id,product_name\n,First\n,Bad \xff\xfe\n,Third\n";

        let records = read_seed_records(data).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].position, 0);
        assert_eq!(records[1].product_name.as_deref(), Some("Third"));
        assert_eq!(records[1].position, 2);
        assert_eq!(clean_record(records[1].clone()).product_id, "000002");
    }

    #[test]
    fn test_missing_file() {
        let err = read_seed_file(Path::new("/nonexistent/products.csv")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }
}
