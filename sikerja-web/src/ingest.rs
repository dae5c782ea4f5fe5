//! CSV upload parsing for batch evaluation ("Clustering" menu)
//!
//! The upload contract is a fixed five-column header. Rows with blank or
//! unparseable values are dropped and counted, never fatal; a missing
//! required column rejects the whole file.

use thiserror::Error;

/// Columns the uploaded file must carry (order-insensitive)
pub const REQUIRED_COLUMNS: [&str; 5] =
    ["NIP", "Nama Pegawai", "Bagian/Fakultas", "Nilai P", "Nilai K"];

/// One usable row from the uploaded file
#[derive(Debug, Clone, PartialEq)]
pub struct UploadRow {
    pub nip: String,
    pub name: String,
    pub unit: String,
    pub nilai_p: f64,
    pub nilai_k: f64,
}

/// Parse result: surviving rows plus drop accounting
#[derive(Debug, Clone)]
pub struct ParsedUpload {
    pub rows: Vec<UploadRow>,
    /// Data rows seen in the file (excluding the header)
    pub total_rows: usize,
    /// Rows dropped for blank or unparseable values
    pub dropped_rows: usize,
}

/// Upload file rejection reasons
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("File kosong")]
    Empty,

    #[error("File harus memiliki kolom: {0}")]
    MissingColumns(String),
}

/// Parse an uploaded CSV file body.
///
/// Column order is taken from the header; surplus columns are ignored.
pub fn parse_csv(text: &str) -> Result<ParsedUpload, IngestError> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header = lines.next().ok_or(IngestError::Empty)?;
    let columns: Vec<String> = split_record(header)
        .into_iter()
        .map(|c| c.trim().to_string())
        .collect();

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|c| c == *required))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(IngestError::MissingColumns(missing.join(", ")));
    }

    let col = |name: &str| columns.iter().position(|c| c == name).unwrap_or(usize::MAX);
    let idx_nip = col("NIP");
    let idx_name = col("Nama Pegawai");
    let idx_unit = col("Bagian/Fakultas");
    let idx_p = col("Nilai P");
    let idx_k = col("Nilai K");

    let mut rows = Vec::new();
    let mut total_rows = 0usize;
    let mut dropped_rows = 0usize;

    for line in lines {
        total_rows += 1;
        let fields = split_record(line);
        let get = |i: usize| fields.get(i).map(|f| f.trim()).unwrap_or("");

        let nip = get(idx_nip);
        let name = get(idx_name);
        let unit = get(idx_unit);
        let nilai_p = get(idx_p).parse::<f64>();
        let nilai_k = get(idx_k).parse::<f64>();

        match (nip, name, unit, nilai_p, nilai_k) {
            (nip, name, unit, Ok(p), Ok(k))
                if !nip.is_empty() && !name.is_empty() && !unit.is_empty() =>
            {
                rows.push(UploadRow {
                    nip: nip.to_string(),
                    name: name.to_string(),
                    unit: unit.to_string(),
                    nilai_p: p,
                    nilai_k: k,
                });
            }
            _ => dropped_rows += 1,
        }
    }

    Ok(ParsedUpload {
        rows,
        total_rows,
        dropped_rows,
    })
}

/// Split one CSV record into fields, honoring double-quoted fields with
/// embedded commas and `""` escapes
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

/// Quote a value for CSV output when it needs it
pub fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "NIP,Nama Pegawai,Bagian/Fakultas,Nilai P,Nilai K";

    #[test]
    fn test_parse_clean_file() {
        let text = format!("{}\n101,Andi,Teknik,95,3.2\n102,Budi,SDM,68,2\n", HEADER);
        let parsed = parse_csv(&text).unwrap();
        assert_eq!(parsed.total_rows, 2);
        assert_eq!(parsed.dropped_rows, 0);
        assert_eq!(parsed.rows[0].name, "Andi");
        assert_eq!(parsed.rows[0].nilai_p, 95.0);
        assert_eq!(parsed.rows[1].nilai_k, 2.0);
    }

    #[test]
    fn test_rows_with_blanks_are_dropped_and_counted() {
        let text = format!(
            "{}\n101,Andi,Teknik,95,3\n,Budi,SDM,68,2\n103,Citra,Keuangan,,2\n",
            HEADER
        );
        let parsed = parse_csv(&text).unwrap();
        assert_eq!(parsed.total_rows, 3);
        assert_eq!(parsed.dropped_rows, 2);
        assert_eq!(parsed.rows.len(), 1);
    }

    #[test]
    fn test_unparseable_score_drops_row() {
        let text = format!("{}\n101,Andi,Teknik,tinggi,3\n", HEADER);
        let parsed = parse_csv(&text).unwrap();
        assert_eq!(parsed.dropped_rows, 1);
        assert!(parsed.rows.is_empty());
    }

    #[test]
    fn test_missing_column_rejected() {
        let text = "NIP,Nama Pegawai,Nilai P,Nilai K\n101,Andi,95,3\n";
        let err = parse_csv(text).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumns(_)));
        assert!(err.to_string().contains("Bagian/Fakultas"));
    }

    #[test]
    fn test_empty_file_rejected() {
        assert!(matches!(parse_csv("  \n \n"), Err(IngestError::Empty)));
    }

    #[test]
    fn test_column_order_taken_from_header() {
        let text = "Nilai K,Nilai P,NIP,Nama Pegawai,Bagian/Fakultas\n3,95,101,Andi,Teknik\n";
        let parsed = parse_csv(text).unwrap();
        assert_eq!(parsed.rows[0].nilai_p, 95.0);
        assert_eq!(parsed.rows[0].nilai_k, 3.0);
        assert_eq!(parsed.rows[0].nip, "101");
    }

    #[test]
    fn test_quoted_fields() {
        let text = format!("{}\n101,\"Putri, S.T.\",\"Fakultas \"\"Energi\"\"\",88,2\n", HEADER);
        let parsed = parse_csv(&text).unwrap();
        assert_eq!(parsed.rows[0].name, "Putri, S.T.");
        assert_eq!(parsed.rows[0].unit, "Fakultas \"Energi\"");
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
