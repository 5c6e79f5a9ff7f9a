use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ErrorDetail, Result, Chainable};

/// A serde data format that post metadata and configuration are read from.
pub trait Format: Sized {
    /// The name used in error messages.
    const NAME: &'static str;

    /// The data format's error type.
    type Error: serde::de::Error + ErrorDetail + 'static;

    /// Parses `string` as a `T` in this format.
    fn from_str<T: DeserializeOwned>(string: &str) -> Result<T, Self::Error>;

    /// Reads and parses the file at `path`.
    fn read<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let string = fs::read_to_string(path).chain_with(|| error! {
            "failed to open file for reading",
            "file path" => path.display(),
        })?;

        Self::from_str(&string).chain_with(|| error! {
            format!("{} deserialization failed", Self::NAME),
            "file path" => path.display(),
        })
    }
}

macro_rules! impl_format {
    ($name:ident : $func:expr, $E:ty) => (
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name;

        impl Format for $name {
            const NAME: &'static str = stringify!($name);

            type Error = $E;

            fn from_str<T: DeserializeOwned>(s: &str) -> Result<T, $E> {
                $func(s)
            }
        }
    );
}

impl_format!(Toml: toml::from_str, toml::de::Error);
impl_format!(Json: serde_json::from_str, serde_json::Error);
