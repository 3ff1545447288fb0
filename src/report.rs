use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::error::ScanError;
use crate::scanner::AnalysisAggregate;

/// How many duplicate pairs the report prints before truncating.
const DUPLICATES_SHOWN: usize = 10;

/// Render the finalized aggregate into the report file.
///
/// The file is written to a temporary sibling and moved into place on
/// success, so a crash mid-write never leaves a truncated report at the
/// destination. The parent directory is created if needed.
pub fn write_report(
    output: &Path,
    aggregate: &AnalysisAggregate,
    config: &Config,
) -> Result<(), ScanError> {
    let report_io = |source: io::Error| ScanError::ReportWrite {
        path: output.to_path_buf(),
        source,
    };

    let parent = output.parent().filter(|p| !p.as_os_str().is_empty());
    if let Some(parent) = parent {
        fs::create_dir_all(parent).map_err(report_io)?;
    }

    let mut tmp = tempfile::NamedTempFile::new_in(parent.unwrap_or_else(|| Path::new(".")))
        .map_err(report_io)?;
    render(&mut tmp, aggregate, config).map_err(report_io)?;
    tmp.flush().map_err(report_io)?;
    tmp.persist(output).map_err(|e| report_io(e.error))?;
    Ok(())
}

/// Pure formatting; section headers are stable literal strings.
pub fn render<W: Write>(
    out: &mut W,
    aggregate: &AnalysisAggregate,
    config: &Config,
) -> io::Result<()> {
    write_header(out, aggregate)?;
    write_file_blocks(out, aggregate)?;
    write_summary(out, aggregate, config)?;
    write_conclusion(out, aggregate)?;
    Ok(())
}

fn write_header<W: Write>(out: &mut W, aggregate: &AnalysisAggregate) -> io::Result<()> {
    writeln!(out, "Project Name: {}", aggregate.project_name)?;
    writeln!(
        out,
        "Date of Analysis: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(out)?;
    writeln!(out, "Analysis Report:")?;
    writeln!(out)?;
    Ok(())
}

fn write_file_blocks<W: Write>(out: &mut W, aggregate: &AnalysisAggregate) -> io::Result<()> {
    for record in &aggregate.files {
        writeln!(out, "Filename: {}", record.relative_path)?;
        writeln!(out, "Language: {}", record.language)?;
        writeln!(out, "File Size: {} bytes", record.size)?;
        writeln!(out, "Content:")?;
        out.write_all(record.content.as_bytes())?;
        writeln!(out)?;
        writeln!(out)?;
    }
    Ok(())
}

fn write_summary<W: Write>(
    out: &mut W,
    aggregate: &AnalysisAggregate,
    config: &Config,
) -> io::Result<()> {
    writeln!(out, "Total number of code files: {}", aggregate.file_count)?;
    writeln!(out)?;

    writeln!(out, "Language Statistics:")?;
    if aggregate.file_count > 0 {
        for (language, count) in &aggregate.language_distribution {
            let percentage = (*count as f64 / aggregate.file_count as f64) * 100.0;
            writeln!(out, "{language}: {count} files ({percentage:.2}%)")?;
        }
    } else {
        writeln!(out, "No code files were analyzed.")?;
    }
    writeln!(out)?;

    if !aggregate.large_files.is_empty() {
        writeln!(out, "Large Files (>100KB):")?;
        let mut sorted = aggregate.large_files.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        for (path, size) in sorted {
            writeln!(out, "{path}: {:.2} KB", size as f64 / 1024.0)?;
        }
        writeln!(out)?;
    }

    if !aggregate.todos.is_empty() {
        writeln!(out, "All TODO/FIXME Comments:")?;
        for (path, todo) in &aggregate.todos {
            writeln!(out, "{path} (Line {}): {}", todo.line, todo.text)?;
        }
        writeln!(out)?;
    }

    if !aggregate.complexities.is_empty() {
        writeln!(out, "Top {} Most Complex Functions:", config.top_complex)?;
        let mut sorted: Vec<_> = aggregate.complexities.iter().collect();
        // Stable sort keeps walk order among equal scores
        sorted.sort_by(|a, b| b.1.score.cmp(&a.1.score));
        for (path, entry) in sorted.into_iter().take(config.top_complex) {
            writeln!(out, "{path} - {}: Complexity {}", entry.unit, entry.score)?;
        }
        writeln!(out)?;
    }

    if !aggregate.duplicates.is_empty() {
        writeln!(out, "Potential Code Duplications:")?;
        for pair in aggregate.duplicates.iter().take(DUPLICATES_SHOWN) {
            writeln!(out, "Similar code found in:")?;
            writeln!(out, "  1. {} (line {})", pair.first_file, pair.first_line)?;
            writeln!(out, "  2. {} (line {})", pair.second_file, pair.second_line)?;
            writeln!(out, "Duplicated code:")?;
            writeln!(out, "{}", pair.chunk)?;
            writeln!(out)?;
        }
        if aggregate.duplicates.len() > DUPLICATES_SHOWN {
            writeln!(
                out,
                "... and {} more duplications",
                aggregate.duplicates.len() - DUPLICATES_SHOWN
            )?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// Fixed-topic conclusion: language spread, TODO count, the single most
/// complex unit, duplication count, large-file count.
fn write_conclusion<W: Write>(out: &mut W, aggregate: &AnalysisAggregate) -> io::Result<()> {
    writeln!(out, "Conclusion and Recommendations:")?;

    match aggregate
        .language_distribution
        .iter()
        .max_by_key(|(_, count)| *count)
    {
        Some((language, count)) => writeln!(
            out,
            "1. The project is written mostly in {language} ({count} of {} code files).",
            aggregate.file_count
        )?,
        None => writeln!(out, "1. No code files were analyzed.")?,
    }

    writeln!(
        out,
        "2. Review and address {} TODO/FIXME comments.",
        aggregate.todos.len()
    )?;

    // First maximum wins so ties resolve to walk order
    let mut most_complex: Option<&(String, crate::analysis::ComplexityEntry)> = None;
    for item in &aggregate.complexities {
        if most_complex.map_or(true, |best| item.1.score > best.1.score) {
            most_complex = Some(item);
        }
    }
    match most_complex {
        Some((path, entry)) => writeln!(
            out,
            "3. Consider refactoring complex functions; the highest complexity is {} in {} ({path}).",
            entry.score, entry.unit
        )?,
        None => writeln!(out, "3. No functions were scored for complexity.")?,
    }

    writeln!(
        out,
        "4. Investigate and resolve {} potential code duplications.",
        aggregate.duplicates.len()
    )?;
    writeln!(
        out,
        "5. Optimize the {} files exceeding the large-file threshold if possible.",
        aggregate.large_files.len()
    )?;
    Ok(())
}
