use thiserror::Error;

#[derive(Error, Debug)]
pub enum CargoError {
    #[error("cannot coerce field `{field}` value `{value}` to {target}")]
    Coercion {
        field: &'static str,
        target: &'static str,
        value: serde_json::Value,
    },

    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),
}

pub type Result<T> = std::result::Result<T, CargoError>;
