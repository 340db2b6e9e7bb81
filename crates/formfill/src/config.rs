use std::fs;

use anyhow::{anyhow, Context, Result};
use formfill_core::{AnswerRecord, FieldSpec, Schema};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FillJob {
    pub fields: Vec<FieldSpec>,
    pub answers: Vec<AnswerRecord>,
    #[serde(default)]
    pub scrub: Vec<String>,
}

impl FillJob {
    pub fn load(path: &str) -> Result<Self> {
        let raw =
            fs::read_to_string(path).with_context(|| format!("failed to read job file {path}"))?;
        let job: FillJob = serde_yaml::from_str(&raw).context("invalid fill job")?;
        if job.fields.is_empty() {
            return Err(anyhow!("fill job must declare at least one field"));
        }
        if job.answers.is_empty() {
            return Err(anyhow!("fill job must carry at least one answer"));
        }
        Ok(job)
    }

    pub fn schema(&self) -> Schema {
        Schema {
            fields: self.fields.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formfill_core::FieldTarget;
    use tempfile::tempdir;

    const JOB: &str = "
fields:
  - name: name
    tag: name
  - name: answer_a
    table: 0
    row: 0
    col: 0
  - name: answer_b
    paragraph: 6
answers:
  - field: name
    text: 'Name: A. Student'
  - field: answer_a
    text: first answer
scrub:
  - left-over answer text
";

    #[test]
    fn job_parses_fields_answers_and_scrub() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("job.yaml");
        std::fs::write(&path, JOB).unwrap();
        let job = FillJob::load(path.to_str().unwrap()).unwrap();
        assert_eq!(job.fields.len(), 3);
        assert_eq!(job.answers.len(), 2);
        assert_eq!(job.scrub, vec!["left-over answer text".to_string()]);
        assert_eq!(
            job.schema().field("answer_b").unwrap().target,
            FieldTarget::Paragraph { paragraph: 6 }
        );
        // answers keep their declared order
        assert_eq!(job.answers[0].field, "name");
        assert_eq!(job.answers[1].field, "answer_a");
    }

    #[test]
    fn job_without_answers_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("job.yaml");
        std::fs::write(&path, "fields:\n  - name: a\n    paragraph: 0\nanswers: []\n").unwrap();
        assert!(FillJob::load(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn missing_job_file_reports_path() {
        let err = FillJob::load("/no/such/job.yaml").unwrap_err();
        assert!(err.to_string().contains("/no/such/job.yaml"));
    }
}
