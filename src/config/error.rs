use std::io::Error as IOError;
use std::string::String;
use toml::de::Error as TomlDeError;

/// Failures arising while decoding a container configuration.
///
/// Configurations are user input: everything a file or string can get
/// wrong, from broken toml syntax to out-of-range constructor
/// parameters, surfaces as one of these variants rather than a panic.
#[derive(Debug)]
pub enum ConfigError {
    /// The input is not well-formed toml.
    TomlFormatError(TomlDeError),
    /// The toml does not describe a valid configuration: wrong or
    /// missing `id`, missing or ill-typed field, or a parameter outside
    /// the range its container accepts.
    ConfigFormatError(String),
    /// The configuration file could not be read.
    IOError(IOError),
}
