//! CSV import and export of contacts.
//!
//! The file has a mandatory header row and the columns `name,phone,email`.
//! On import columns are located by exact header name, so extra or
//! reordered columns are tolerated and short rows read as missing values.

use crate::domain::{Field, RawValue, ValidationError};
use crate::error::{StoreError, TransferError, TransferResult};
use crate::models::ContactDraft;
use crate::repositories::ContactRepository;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Header row written on export, in column order.
pub const CSV_HEADERS: [&str; 3] = ["name", "phone", "email"];

/// A row that failed validation and was left out of the import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 0-based index of the data row (the header is not counted).
    pub row: usize,
    pub error: StoreError,
}

/// Outcome of an import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Number of contacts added to the store.
    pub imported: usize,
    /// Rows that were skipped, in file order.
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    /// Whether at least one row was skipped.
    pub fn any_row_error(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Maps CSV column indices to contact fields.
#[derive(Debug, Default)]
struct ColumnMap {
    name: Option<usize>,
    phone: Option<usize>,
    email: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &csv::ByteRecord) -> Self {
        let mut map = Self::default();

        for (i, header) in headers.iter().enumerate() {
            let slot = match header {
                b"name" => &mut map.name,
                b"phone" => &mut map.phone,
                b"email" => &mut map.email,
                _ => continue,
            };
            // First occurrence wins for duplicated headers
            slot.get_or_insert(i);
        }

        map
    }

    /// Build a draft from a row; a missing name or phone cell is reported
    /// as that field being empty.
    fn draft(&self, record: &csv::ByteRecord) -> Result<ContactDraft, ValidationError> {
        let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).map(RawValue::from_bytes);

        let name = cell(self.name).ok_or(ValidationError::EmptyField(Field::Name))?;
        let phone = cell(self.phone).ok_or(ValidationError::EmptyField(Field::Phone))?;

        Ok(ContactDraft {
            name,
            phone,
            email: cell(self.email),
        })
    }
}

/// Write every stored contact as CSV, header first.
///
/// Returns the number of contact rows written.
///
/// # Errors
///
/// Returns `TransferError::Csv` or `TransferError::Io` if writing fails.
pub fn export_contacts<R, W>(repository: &R, writer: W) -> TransferResult<usize>
where
    R: ContactRepository + ?Sized,
    W: Write,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADERS)?;

    let mut written = 0;
    for (_, contact) in repository.list_all() {
        csv_writer.serialize(contact)?;
        written += 1;
    }

    csv_writer.flush()?;
    Ok(written)
}

/// Read contacts from CSV and append the valid ones to the repository.
///
/// Each row is validated on its own; rows that fail are logged, recorded in
/// the report and skipped. Rows already imported stay in the repository
/// even if a later read fails.
///
/// # Errors
///
/// Returns `TransferError::Csv` if the stream itself cannot be parsed.
pub fn import_contacts<R, S>(repository: &mut S, reader: R) -> TransferResult<ImportReport>
where
    R: Read,
    S: ContactRepository + ?Sized,
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = ColumnMap::from_headers(csv_reader.byte_headers()?);
    debug!(?columns, "CSV columns mapped");

    let mut report = ImportReport::default();
    let mut record = csv::ByteRecord::new();
    let mut row = 0;

    while csv_reader.read_byte_record(&mut record)? {
        let created = columns
            .draft(&record)
            .map_err(StoreError::from)
            .and_then(|draft| repository.create(draft));

        match created {
            Ok(id) => {
                debug!(row, %id, "Row imported");
                report.imported += 1;
            }
            Err(error) => {
                warn!(row, %error, "Skipping invalid CSV row");
                report.skipped.push(SkippedRow { row, error });
            }
        }
        row += 1;
    }

    info!(
        imported = report.imported,
        skipped = report.skipped.len(),
        "CSV import finished"
    );
    Ok(report)
}

/// Export to a file, replacing it if it exists.
///
/// # Errors
///
/// Returns `TransferError::Io` if the file cannot be created.
pub fn export_to_path<R>(repository: &R, path: &Path) -> TransferResult<usize>
where
    R: ContactRepository + ?Sized,
{
    let file = File::create(path)?;
    let written = export_contacts(repository, file)?;
    info!(path = %path.display(), written, "Contacts exported");
    Ok(written)
}

/// Import from a file.
///
/// # Errors
///
/// Returns `TransferError::FileNotFound` if the file does not exist.
pub fn import_from_path<S>(repository: &mut S, path: &Path) -> TransferResult<ImportReport>
where
    S: ContactRepository + ?Sized,
{
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => TransferError::FileNotFound(path.to_path_buf()),
        _ => TransferError::Io(e),
    })?;
    import_contacts(repository, file)
}
