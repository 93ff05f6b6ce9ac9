use std::fs;
use std::path::Path;
use std::str::FromStr;

use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};

use crate::consts::{PDF_EXTENSION, TEXT_EXTENSIONS};
use crate::errors::MineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    PlainText,
    Pdf,
    Unsupported,
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ext = s.to_lowercase();
        if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            Ok(DocumentKind::PlainText)
        } else if ext == PDF_EXTENSION {
            Ok(DocumentKind::Pdf)
        } else {
            Ok(DocumentKind::Unsupported)
        }
    }
}

impl DocumentKind {
    /// Classify a document by its file extension, case-insensitively.
    pub fn from_path(path: &Path) -> DocumentKind {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| DocumentKind::from_str(ext).ok())
            .unwrap_or(DocumentKind::Unsupported)
    }
}

///
/// Read the text content of a plain-text or PDF document.
///
/// PDF pages are separated by a blank line. Text inside a page is split on the
/// positioning operators, so words are kept apart even when the PDF draws them one
/// line at a time.
///
pub fn extract_text(path: &Path) -> Result<String, MineError> {
    match DocumentKind::from_path(path) {
        DocumentKind::PlainText => Ok(fs::read_to_string(path)?),
        DocumentKind::Pdf => extract_pdf_text(path),
        DocumentKind::Unsupported => Err(MineError::UnsupportedInput(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or_default()
                .to_string(),
        )),
    }
}

fn extract_pdf_text(path: &Path) -> Result<String, MineError> {
    let doc = Document::load(path)?;

    let mut pages = Vec::new();
    for (_, &page_id) in doc.get_pages().iter() {
        pages.push(page_text(&doc, page_id)?);
    }

    Ok(pages.join("\n\n"))
}

fn page_text(doc: &Document, page_id: ObjectId) -> Result<String, MineError> {
    let content = Content::decode(&doc.get_page_content(page_id)?)?;

    let mut text = String::new();
    for operation in &content.operations {
        match operation.operator.as_str() {
            "Tj" | "TJ" | "'" | "\"" => {
                for operand in &operation.operands {
                    push_string(&mut text, operand);
                }
            }
            "Td" | "TD" | "T*" | "ET" => {
                if !text.is_empty() && !text.ends_with('\n') {
                    text.push('\n');
                }
            }
            _ => {}
        }
    }

    Ok(text.trim_end().to_string())
}

fn push_string(text: &mut String, obj: &Object) {
    match obj {
        Object::String(bytes, _) => {
            if bytes.starts_with(&[0xFE, 0xFF]) {
                let utf16: Vec<u16> = bytes[2..]
                    .chunks_exact(2)
                    .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
                    .collect();
                text.push_str(&String::from_utf16_lossy(&utf16));
            } else {
                // WinAnsi and PDFDocEncoding agree with Latin-1 on the printable range
                text.extend(bytes.iter().map(|&b| b as char));
            }
        }
        Object::Array(items) => {
            for item in items {
                push_string(text, item);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use lopdf::content::Operation;
    use lopdf::{Stream, dictionary};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn write_pdf(path: &Path, lines: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let mut operations = Vec::new();
        let mut y = 700;
        for line in lines {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
            operations.push(Operation::new("Td", vec![100.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
            y -= 15;
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
                "Resources" => resources_id,
                "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        doc.save(path)?;
        Ok(())
    }

    #[rstest]
    #[case("notes.txt", DocumentKind::PlainText)]
    #[case("NOTES.TXT", DocumentKind::PlainText)]
    #[case("summary.md", DocumentKind::PlainText)]
    #[case("letter.text", DocumentKind::PlainText)]
    #[case("report.pdf", DocumentKind::Pdf)]
    #[case("Report.PDF", DocumentKind::Pdf)]
    #[case("scan.png", DocumentKind::Unsupported)]
    #[case("README", DocumentKind::Unsupported)]
    fn test_kind_from_path(#[case] name: &str, #[case] expected: DocumentKind) {
        assert_eq!(DocumentKind::from_path(Path::new(name)), expected);
    }

    #[rstest]
    fn test_extract_plain_text() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("notes.md");
        fs::write(&path, "# Notes\nCFTR carrier screen.\n")?;

        assert_eq!(extract_text(&path)?, "# Notes\nCFTR carrier screen.\n");
        Ok(())
    }

    #[rstest]
    fn test_extract_pdf_text() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("letter.pdf");
        write_pdf(&path, &["Referral for BRCA2 testing", "Sibling carries MLH1"])?;

        let text = extract_text(&path)?;
        assert_eq!(text, "Referral for BRCA2 testing\nSibling carries MLH1");
        Ok(())
    }

    #[rstest]
    fn test_extract_unsupported() {
        let result = extract_text(Path::new("image.jpeg"));
        assert!(matches!(result, Err(MineError::UnsupportedInput(ext)) if ext == "jpeg"));
    }
}
