use std::{
    fs,
    path::{Path, PathBuf},
};

use ini::{Ini, Properties};
use thiserror::Error;

use crate::pipeline::PipelineKind;

pub const DEEPL_SECTION: &str = "Deepl";
pub const ASC_SECTION: &str = "AppStoreConnect";

/// Why a config file was rejected. The `Display` text is what the operator sees.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file does not exist: {}", .0.display())]
    Missing(PathBuf),
    #[error("Config file is not readable: {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config file is not valid INI: {0}")]
    Parse(String),
    #[error("Config file does not contain section {0}")]
    MissingSection(&'static str),
    #[error("Config file does not contain key {key} in section {section}")]
    MissingKey {
        section: &'static str,
        key: &'static str,
    },
    #[error("{label} file does not exist: {}", .path.display())]
    TextFileMissing { label: &'static str, path: PathBuf },
    #[error("App Store Connect key file does not exist: {}", .0.display())]
    KeyFileMissing(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeeplSettings {
    pub auth_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AscSettings {
    pub key_id: String,
    pub key_file_path: PathBuf,
    pub issuer_id: String,
}

/// The text to translate and the language it is written in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSettings {
    pub path: PathBuf,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub deepl: DeeplSettings,
    pub app_store_connect: AscSettings,
    pub text: TextSettings,
}

impl Settings {
    /// Loads and validates the config for `kind`.
    ///
    /// Checks run in a fixed order and stop at the first failure: the file
    /// exists, is readable, parses, has every required section, has every
    /// required key, and the files it points at exist. Nothing here touches
    /// the network.
    pub fn load(path: impl AsRef<Path>, kind: PipelineKind) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        // Values are taken verbatim; a backslash in a Windows path is not an escape.
        let ini = Ini::load_from_str_noescape(&contents)
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        let required: [(&'static str, &[&'static str]); 3] = [
            (DEEPL_SECTION, &["auth_key"]),
            (ASC_SECTION, &["key_id", "key_file_path", "issuer_id"]),
            (kind.section(), &[kind.path_key(), kind.language_key()]),
        ];
        for &(section, _) in &required {
            if ini.section(Some(section)).is_none() {
                return Err(ConfigError::MissingSection(section));
            }
        }
        for &(section, keys) in &required {
            let props = section_of(&ini, section)?;
            for &key in keys {
                if !props.contains_key(key) {
                    return Err(ConfigError::MissingKey { section, key });
                }
            }
        }

        let deepl = section_of(&ini, DEEPL_SECTION)?;
        let asc = section_of(&ini, ASC_SECTION)?;
        let source = section_of(&ini, kind.section())?;

        let text = TextSettings {
            path: PathBuf::from(value(source, kind.section(), kind.path_key())?),
            language: value(source, kind.section(), kind.language_key())?.to_string(),
        };
        if !text.path.is_file() {
            return Err(ConfigError::TextFileMissing {
                label: kind.label(),
                path: text.path,
            });
        }

        let app_store_connect = AscSettings {
            key_id: value(asc, ASC_SECTION, "key_id")?.to_string(),
            key_file_path: PathBuf::from(value(asc, ASC_SECTION, "key_file_path")?),
            issuer_id: value(asc, ASC_SECTION, "issuer_id")?.to_string(),
        };
        if !app_store_connect.key_file_path.is_file() {
            return Err(ConfigError::KeyFileMissing(app_store_connect.key_file_path));
        }

        Ok(Self {
            deepl: DeeplSettings {
                auth_key: value(deepl, DEEPL_SECTION, "auth_key")?.to_string(),
            },
            app_store_connect,
            text,
        })
    }
}

fn section_of<'a>(ini: &'a Ini, section: &'static str) -> Result<&'a Properties, ConfigError> {
    ini.section(Some(section))
        .ok_or(ConfigError::MissingSection(section))
}

fn value<'a>(
    props: &'a Properties,
    section: &'static str,
    key: &'static str,
) -> Result<&'a str, ConfigError> {
    props
        .get(key)
        .map(str::trim)
        .ok_or(ConfigError::MissingKey { section, key })
}
