//! Bulk import and export of contacts.

pub mod csv_file;

pub use csv_file::{
    export_contacts, export_to_path, import_contacts, import_from_path, ImportReport, SkippedRow,
    CSV_HEADERS,
};
