use thiserror::Error;

pub const MIN_AGE: u32 = 17;
pub const MAX_AGE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Mohon isi nama Anda terlebih dahulu!")]
    EmptyName,

    #[error("Total pemasukan tidak boleh nol!")]
    ZeroIncome,

    #[error(
        "Usia harus antara {min} dan {max} tahun (diterima: {age})",
        min = MIN_AGE,
        max = MAX_AGE
    )]
    AgeOutOfRange { age: u32 },

    #[error("{field} harus berupa angka >= 0")]
    InvalidAmount { field: &'static str },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF backend error: {0}")]
    Pdf(String),
}
