use thiserror::Error;

use orgrecon_model::DatasetId;

use crate::columns::SemanticField;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("dataset {dataset}: no column for {field}")]
    MissingColumn {
        dataset: DatasetId,
        field: SemanticField,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
