use clap::ValueEnum;

/// Output format argument shared by all commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for renumber_core::OutputFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}
