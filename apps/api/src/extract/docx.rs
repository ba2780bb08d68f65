use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

use super::ExtractError;

const DOCUMENT_XML: &str = "word/document.xml";

/// Reads every `w:p` of the main document part in order, one line per paragraph.
pub fn extract_docx_text(path: &Path) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(File::open(path)?)?;

    let mut xml = String::new();
    match archive.by_name(DOCUMENT_XML) {
        Ok(mut part) => {
            part.read_to_string(&mut xml)?;
        }
        Err(zip::result::ZipError::FileNotFound) => return Err(ExtractError::MissingDocumentXml),
        Err(e) => return Err(e.into()),
    }

    let paragraphs = paragraphs_from_xml(&xml)?;
    debug!("Extracted {} DOCX paragraph(s) from {}", paragraphs.len(), path.display());

    Ok(paragraphs
        .iter()
        .fold(String::new(), |mut text, paragraph| {
            text.push_str(paragraph);
            text.push('\n');
            text
        }))
}

/// Walks WordprocessingML and collects paragraph texts.
///
/// Nested paragraphs (text boxes) are folded into their enclosing paragraph.
/// Tabs and breaks only count inside runs; `w:tab` under `w:tabs` is a tab stop.
fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut paragraph_depth = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => {
                    if paragraph_depth == 0 {
                        current.clear();
                    }
                    paragraph_depth += 1;
                }
                b"w:r" => run_depth += 1,
                b"w:t" => in_text = paragraph_depth > 0,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                    if paragraph_depth == 0 {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                }
                b"w:r" => run_depth = run_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" if paragraph_depth == 0 => paragraphs.push(String::new()),
                b"w:tab" if run_depth > 0 => current.push('\t'),
                b"w:br" | b"w:cr" if run_depth > 0 => current.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_text => {
                current.push_str(&e.unescape()?);
            }
            Event::CData(e) if in_text => {
                current.push_str(&String::from_utf8_lossy(&e.into_inner()));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}
