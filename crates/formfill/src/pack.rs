use anyhow::{Context, Result};
use formfill_core::Document;

pub fn pack(input: String, output: String) -> Result<()> {
    let doc = Document::load_json(&input)
        .with_context(|| format!("failed to load json template {input}"))?;
    doc.save_bin(&output)
        .with_context(|| format!("failed to save {output}"))?;
    println!("[formfill] packed {input} into {output}");
    Ok(())
}

pub fn unpack(template: String, output: String) -> Result<()> {
    let doc = Document::load_bin(&template)
        .with_context(|| format!("failed to load template {template}"))?;
    doc.save_json(&output)
        .with_context(|| format!("failed to save {output}"))?;
    println!("[formfill] unpacked {template} into {output}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use formfill_core::{Header, Paragraph};
    use tempfile::tempdir;

    #[test]
    fn pack_then_unpack_preserves_content() {
        let dir = tempdir().unwrap();
        let json_in = dir.path().join("template.json");
        let bin = dir.path().join("template.ffd");
        let json_out = dir.path().join("back.json");

        let mut doc = Document::new(Header {
            version: 1,
            title: "worksheet".to_string(),
        });
        doc.push_paragraph(Paragraph::tagged("Name:", "name"));
        doc.save_json(&json_in).unwrap();

        pack(
            json_in.to_string_lossy().into_owned(),
            bin.to_string_lossy().into_owned(),
        )
        .unwrap();
        unpack(
            bin.to_string_lossy().into_owned(),
            json_out.to_string_lossy().into_owned(),
        )
        .unwrap();

        let restored = Document::load_json(&json_out).unwrap();
        assert_eq!(restored, doc);
    }

    #[test]
    fn pack_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let json_in = dir.path().join("broken.json");
        std::fs::write(&json_in, "{ not json").unwrap();
        let result = pack(
            json_in.to_string_lossy().into_owned(),
            dir.path().join("out.ffd").to_string_lossy().into_owned(),
        );
        assert!(result.is_err());
    }
}
