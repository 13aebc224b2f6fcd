pub mod cpf;
pub mod json;

pub use cpf::{Cpf, CPF_HEADER};
pub use json::ApiJson;
