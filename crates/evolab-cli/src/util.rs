use std::{
    fmt,
    fs::File,
    io::{self, BufReader, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use evolab_engine::SimulationConfig;
use serde::{Serialize, de::DeserializeOwned};

use crate::model::record::SimulationRecord;

/// Destination of machine-readable output: stdout unless a path is given.
#[derive(Debug)]
pub enum Output {
    Stdout(StdoutLock<'static>),
    File(BufWriter<File>, PathBuf),
}

impl Output {
    pub fn save_json<T>(value: &T, path: Option<PathBuf>) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
    {
        let mut output = match path {
            Some(path) => Self::create(path)?,
            None => Self::Stdout(io::stdout().lock()),
        };
        output.write_json(value)
    }

    fn create(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("cannot create {}", path.display()))?;
        Ok(Self::File(BufWriter::new(file), path))
    }

    /// Writes `value` as pretty-printed JSON followed by a newline.
    fn write_json<T>(&mut self, value: &T) -> anyhow::Result<()>
    where
        T: Serialize + ?Sized,
    {
        let target = self.to_string();
        serde_json::to_writer_pretty(&mut *self, value)
            .with_context(|| format!("cannot serialize JSON to {target}"))?;
        self.write_all(b"\n")
            .and_then(|()| self.flush())
            .with_context(|| format!("cannot write to {target}"))
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout(_) => f.write_str("stdout"),
            Self::File(_, path) => write!(f, "{}", path.display()),
        }
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(writer) => writer.write(buf),
            Self::File(writer, _) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(writer) => writer.flush(),
            Self::File(writer, _) => writer.flush(),
        }
    }
}

/// Parses a JSON file; `kind` names the file in error messages.
pub fn read_json_file<T>(kind: &str, path: &Path) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let file =
        File::open(path).with_context(|| format!("cannot open {kind} {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("{} is not a valid {kind}", path.display()))
}

/// Reads a simulation config; fields missing from the file keep their defaults.
pub fn read_config_file(path: &Path) -> anyhow::Result<SimulationConfig> {
    let config: SimulationConfig = read_json_file("simulation config", path)?;
    config
        .validate()
        .with_context(|| format!("invalid simulation config: {}", path.display()))?;
    Ok(config)
}

pub fn read_record_file(path: &Path) -> anyhow::Result<SimulationRecord> {
    read_json_file("simulation record", path)
}
