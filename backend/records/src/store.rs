//! Single-file JSON persistence for Q&A records.
//!
//! Files are UTF-8, two-space indented, keys in the order
//! `question, answer, teacher, timestamp`, with non-ASCII text written as-is.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde_json::Value;
use tempfile::NamedTempFile;
use tracing::info;

use tutorforge_core::{QaRecord, TutorError};
use tutorforge_logging::{EventLogger, QaEvent};

const REQUIRED_FIELDS: [&str; 4] = ["question", "answer", "teacher", "timestamp"];

/// Write `record` to `path` atomically (temp file in the same directory, then rename).
pub fn save(record: &QaRecord, path: &Path) -> Result<(), TutorError> {
    let parent_dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(temp_file.as_file());
        serde_json::to_writer_pretty(&mut writer, record)
            .map_err(|e| TutorError::RecordFormat(format!("cannot serialize record: {}", e)))?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|e| e.error)?;

    info!(path = %path.display(), "Saved Q&A record");
    EventLogger::log_event(QaEvent::RecordSaved {
        path: path.display().to_string(),
    });
    Ok(())
}

/// Save the current record, or fail with [`TutorError::NoRecord`].
pub fn save_current(current: Option<&QaRecord>, path: &Path) -> Result<(), TutorError> {
    let record = current.ok_or(TutorError::NoRecord)?;
    save(record, path)
}

/// Read a record back. Unknown extra fields are ignored.
pub fn load(path: &Path) -> Result<QaRecord, TutorError> {
    let file = File::open(path)?;
    let value: Value = serde_json::from_reader(std::io::BufReader::new(file))
        .map_err(|e| TutorError::RecordFormat(format!("{}: invalid JSON: {}", path.display(), e)))?;
    parse_record(value)
        .map_err(|e| TutorError::RecordFormat(format!("{}: {}", path.display(), e)))
}

fn parse_record(value: Value) -> Result<QaRecord, String> {
    let Value::Object(map) = value else {
        return Err("expected a JSON object".to_string());
    };
    for field in REQUIRED_FIELDS {
        match map.get(field) {
            Some(Value::String(_)) => {}
            Some(_) => return Err(format!("field '{}' must be a string", field)),
            None => return Err(format!("missing required field '{}'", field)),
        }
    }
    serde_json::from_value(Value::Object(map)).map_err(|e| e.to_string())
}
