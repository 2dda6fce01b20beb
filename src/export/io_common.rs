use crate::export::*;

pub fn prepare_output_dir(dir: &Path) -> ExportResult<()> {
    if !dir.exists() {
        info!("Creating output directory {:?}", dir);
    }
    fs::create_dir_all(dir).context(CreatingOutputDirSnafu {
        path: dir.display().to_string(),
    })
}

/// Writes a value as UTF-8 JSON. Non-ASCII characters are written as is.
pub fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> ExportResult<()> {
    let contents = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context(SerializingJsonSnafu {})?;
    debug!("write_json: {:?}: {} bytes", path, contents.len());
    fs::write(path, contents).context(WritingJsonSnafu {
        path: path.display().to_string(),
    })
}

pub fn read_json(path: &Path) -> ExportResult<JSValue> {
    let p = path.display().to_string();
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path: p.clone() })?;
    serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path: p })
}

pub fn display_path(path: &Path) -> String {
    path.display().to_string()
}
