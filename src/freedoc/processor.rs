//! File processing API
//!
//! An extensible API for processing documents with different stages
//! (lines, elements) and formats (json, yaml, tag, summary). The stage
//! selects which pipeline output to serialize: `lines` exposes the
//! classifier's refined line array for threshold calibration, `elements`
//! the final element sequence.
//!
//! Format strings combine both, e.g. `elements-tag` or `lines-json`.

use crate::freedoc::formats;
use crate::freedoc::pipeline;
use std::fmt;
use std::fs;
use std::path::Path;

/// Which pipeline output to serialize.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStage {
    Lines,
    Elements,
}

/// How to serialize the selected stage.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Tag,
    Summary,
}

/// A complete processing specification.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "elements-tag" or "lines-json".
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage_str, format_part) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage_str {
            "lines" => ProcessingStage::Lines,
            "elements" => ProcessingStage::Elements,
            _ => return Err(ProcessingError::InvalidStage(stage_str.to_string())),
        };

        let format = match format_part {
            "json" => OutputFormat::Json,
            "yaml" => OutputFormat::Yaml,
            "tag" => OutputFormat::Tag,
            "summary" => OutputFormat::Summary,
            _ => return Err(ProcessingError::InvalidFormatType(format_part.to_string())),
        };

        // The tag and summary formats only exist for the element sequence
        if stage == ProcessingStage::Lines
            && matches!(format, OutputFormat::Tag | OutputFormat::Summary)
        {
            return Err(ProcessingError::InvalidFormatType(format!(
                "Format '{}' only works with the elements stage",
                format_part
            )));
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// All valid processing specifications.
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Lines,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Lines,
                format: OutputFormat::Yaml,
            },
            ProcessingSpec {
                stage: ProcessingStage::Elements,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Elements,
                format: OutputFormat::Yaml,
            },
            ProcessingSpec {
                stage: ProcessingStage::Elements,
                format: OutputFormat::Tag,
            },
            ProcessingSpec {
                stage: ProcessingStage::Elements,
                format: OutputFormat::Summary,
            },
        ]
    }
}

/// Errors that can occur during processing.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    IoError(String),
    SerializationError(String),
}

impl std::error::Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {}", format),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {}", stage),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {}", format_type)
            }
            ProcessingError::IoError(msg) => write!(f, "IO error: {}", msg),
            ProcessingError::SerializationError(msg) => {
                write!(f, "Serialization error: {}", msg)
            }
        }
    }
}

/// Process a document file according to the given specification.
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())
        .map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, spec)
}

/// Process in-memory document text according to the given specification.
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Lines => {
            let lines = pipeline::classify_lines(source);
            match spec.format {
                OutputFormat::Json => serde_json::to_string_pretty(&lines)
                    .map_err(|e| ProcessingError::SerializationError(e.to_string())),
                OutputFormat::Yaml => serde_yaml::to_string(&lines)
                    .map_err(|e| ProcessingError::SerializationError(e.to_string())),
                _ => Err(ProcessingError::InvalidFormatType(
                    "Only json and yaml work with the lines stage".to_string(),
                )),
            }
        }
        ProcessingStage::Elements => {
            let elements = pipeline::parse_document(source);
            match spec.format {
                OutputFormat::Json => serde_json::to_string_pretty(&elements)
                    .map_err(|e| ProcessingError::SerializationError(e.to_string())),
                OutputFormat::Yaml => serde_yaml::to_string(&elements)
                    .map_err(|e| ProcessingError::SerializationError(e.to_string())),
                OutputFormat::Tag => Ok(formats::to_tag_str(&elements)),
                OutputFormat::Summary => Ok(summarize(&elements)),
            }
        }
    }
}

/// Per-kind element counts, in order of first appearance.
fn summarize(elements: &[crate::freedoc::ast::elements::Element]) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for element in elements {
        let kind = element.kind();
        match counts.iter_mut().find(|(name, _)| *name == kind) {
            Some((_, count)) => *count += 1,
            None => counts.push((kind, 1)),
        }
    }

    let mut output = String::new();
    for (kind, count) in &counts {
        output.push_str(&format!("{}: {}\n", kind, count));
    }
    output.push_str(&format!("total: {}\n", elements.len()));
    output
}

/// Get all available format strings.
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| {
            format!(
                "{}-{}",
                match spec.stage {
                    ProcessingStage::Lines => "lines",
                    ProcessingStage::Elements => "elements",
                },
                match spec.format {
                    OutputFormat::Json => "json",
                    OutputFormat::Yaml => "yaml",
                    OutputFormat::Tag => "tag",
                    OutputFormat::Summary => "summary",
                }
            )
        })
        .collect()
}
