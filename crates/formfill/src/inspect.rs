use anyhow::{Context, Result};
use formfill_core::{Block, Document};

pub fn run(template: String) -> Result<()> {
    let doc = Document::load_bin(&template)
        .with_context(|| format!("failed to load template {template}"))?;
    println!(
        "[formfill] {}: {} body paragraphs, {} tables",
        template,
        doc.paragraph_count(),
        doc.table_count()
    );
    for (idx, table) in doc.tables().enumerate() {
        println!(
            "[formfill] table {}: {} rows x {} cols",
            idx,
            table.row_count(),
            table.col_count()
        );
    }
    for tag in collect_tags(&doc) {
        println!("[formfill] tagged field: {tag}");
    }
    Ok(())
}

fn collect_tags(doc: &Document) -> Vec<String> {
    let mut tags = Vec::new();
    for block in &doc.blocks {
        match block {
            Block::Paragraph(paragraph) => {
                if let Some(tag) = &paragraph.tag {
                    tags.push(tag.clone());
                }
            }
            Block::Table(table) => {
                for cells in &table.rows {
                    for cell in cells {
                        for paragraph in &cell.paragraphs {
                            if let Some(tag) = &paragraph.tag {
                                tags.push(tag.clone());
                            }
                        }
                    }
                }
            }
        }
    }
    tags
}
