use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use formfill_core::{apply_answer, scrub_stale, Document, FillError};

use crate::config::FillJob;
use crate::logging;

pub fn run(template: String, output: String, job: String) -> Result<()> {
    run_with(template, output, job, |doc, path| {
        doc.save_bin(path)
            .with_context(|| format!("failed to save {}", path.display()))
    })
}

fn run_with<F>(template: String, output: String, job_path: String, save_fn: F) -> Result<()>
where
    F: Fn(&Document, &Path) -> Result<()>,
{
    let template_path = PathBuf::from(&template);
    let output_path = PathBuf::from(&output);
    if template_path == output_path {
        return Err(FillError::OutputIsTemplate(output_path.display().to_string()).into());
    }
    let job = FillJob::load(&job_path)?;
    let mut doc = Document::load_bin(&template_path)
        .with_context(|| format!("failed to load template {}", template_path.display()))?;
    println!(
        "[formfill] found {} tables and {} body paragraphs in {}",
        doc.table_count(),
        doc.paragraph_count(),
        template_path.display()
    );

    let schema = job.schema();
    if let Err(err) = schema.validate(&doc) {
        logging::stage(
            "validate",
            format!("schema mismatch for {}: {err}", template_path.display()),
        );
        return Err(err).context("template does not match the field schema");
    }

    for answer in &job.answers {
        let located = apply_answer(&mut doc, &schema, answer)
            .with_context(|| format!("failed to fill field '{}'", answer.field))?;
        logging::verbose(format!("wrote field '{}' at {:?}", answer.field, located));
    }

    if !job.scrub.is_empty() {
        let cleared = scrub_stale(&mut doc, &job.scrub);
        println!("[formfill] cleared {cleared} stale paragraphs");
    }

    save_fn(&doc, &output_path)?;
    println!(
        "[formfill] saved filled document to {}",
        output_path.display()
    );
    Ok(())
}
