//! Patient record aggregation.
//!
//! Turns a folder of `patient*.json` files into a single [`RecordFrame`]:
//! records are read in filename order, rewritten into DICOM formatting,
//! flattened, and assembled into one Polars DataFrame.

pub mod aggregate;
pub mod error;
pub mod frame;
pub mod frame_builder;

pub use aggregate::{aggregate, aggregate_files, load_row};
pub use error::{AggregateError, Result};
pub use frame::RecordFrame;
pub use frame_builder::{
    ColumnKind, MixedCells, build_record_dataframe, build_record_table, column_union,
    infer_column_kind, value_to_text,
};
