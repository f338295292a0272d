use std::fs::{File, OpenOptions};
use std::io;
use std::sync::Arc;

use tracing::Span;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

use super::config::LogConfig;

type InitError = Box<dyn std::error::Error + Send + Sync>;

pub struct Logger {
    level: String,
    file: Option<Arc<File>>,
}

impl Logger {
    pub fn new(config: &LogConfig) -> io::Result<Self> {
        let file = config
            .file
            .as_ref()
            .map(|path| OpenOptions::new().create(true).append(true).open(path))
            .transpose()?
            .map(Arc::new);

        Ok(Self {
            level: config.level.clone(),
            file,
        })
    }

    /// `RUST_LOG` wins over the configured level when set.
    pub fn init(&self) -> Result<(), InitError> {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))?
            .add_directive("rustls=off".parse()?)
            .add_directive("hyper_util=info".parse()?);

        let (writer, ansi) = match &self.file {
            Some(file) => (
                BoxMakeWriter::new(io::stdout.and(Arc::clone(file))),
                false,
            ),
            None => (BoxMakeWriter::new(io::stdout), true),
        };

        tracing_subscriber::fmt()
            .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(ansi)
            .try_init()
    }

    /// Span handed to a long-lived component so its events carry its name.
    pub fn component(name: &'static str) -> Span {
        tracing::info_span!("component", name)
    }
}
