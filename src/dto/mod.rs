use std::{fs, path::Path};

use serde::Deserialize;
use serde_yaml::Deserializer;

use crate::error::MoneyError;
use crate::format::FormatOptions;
use crate::model::line::LineItem;

fn read(path: &Path) -> Result<String, MoneyError> {
    fs::read_to_string(path).map_err(|source| MoneyError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn yaml_error(path: &Path) -> impl Fn(serde_yaml::Error) -> MoneyError + '_ {
    move |source| MoneyError::Yaml {
        path: path.to_path_buf(),
        source,
    }
}

/// Loads formatting options; keys left out keep their defaults.
pub fn load_format_options(path: &Path) -> Result<FormatOptions, MoneyError> {
    let contents = read(path)?;
    if contents.trim().is_empty() {
        return Ok(FormatOptions::default());
    }

    let options = serde_yaml::from_str(&contents).map_err(yaml_error(path))?;
    tracing::info!(path = %path.display(), "Loaded format options");
    Ok(options)
}

/// Loads line items from a YAML file. Each document is a list of lines,
/// and lines from every document are returned in order.
pub fn load_line_items(path: &Path) -> Result<Vec<LineItem>, MoneyError> {
    let contents = read(path)?;
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut result: Vec<LineItem> = Vec::new();
    for doc in Deserializer::from_str(&contents) {
        let lines = Vec::<LineItem>::deserialize(doc).map_err(yaml_error(path))?;
        result.extend(lines);
    }

    tracing::info!(path = %path.display(), count = result.len(), "Loaded line items");
    Ok(result)
}
