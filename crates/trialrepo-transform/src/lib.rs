//! Record transformations for patient data.
//!
//! - [`dicom`]: rewrites names, dates and times into DICOM value formats.
//! - [`flatten`]: collapses nested objects into dot-path keys for tabular output.

pub mod dicom;
pub mod error;
pub mod flatten;

pub use dicom::{
    DICOM_FIELDS, NAME_COMPONENT_SEPARATOR, ValueRepresentation, convert_record_to_dicom,
    format_date, format_person_name, format_time,
};
pub use error::{Result, TransformError};
pub use flatten::{FLATTEN_SEPARATOR, flatten_record};
