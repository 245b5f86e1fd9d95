// Shared fixtures for integration tests: a plain-text extractor so most tests
// don't need real PDFs, and a minimal PDF writer for the ones that do.

#![allow(dead_code)]

use std::path::Path;

use anyhow::Result;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use shortlist::extract::TextExtractor;
use shortlist::pipeline::RankerContext;
use shortlist::text::Normalizer;

/// Treats upload bytes as UTF-8 text.
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Fails for any upload whose bytes start with "BROKEN", otherwise behaves
/// like `PlainTextExtractor`.
pub struct FlakyExtractor;

impl TextExtractor for FlakyExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        if bytes.starts_with(b"BROKEN") {
            anyhow::bail!("corrupt upload");
        }
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

pub fn plain_context(output_dir: &Path) -> RankerContext {
    RankerContext::new(
        Normalizer::new().unwrap(),
        Box::new(FlakyExtractor),
        output_dir,
    )
    .unwrap()
}

/// One page of a test PDF.
pub enum Page<'a> {
    /// Each line drawn in Courier
    Text(&'a [&'a str]),
    /// A page with no Contents entry
    Blank,
    /// A content stream that isn't valid PDF operators
    Garbled,
}

/// A one-page PDF with each line drawn in Courier.
pub fn pdf_bytes(lines: &[&str]) -> Vec<u8> {
    pdf_pages(&[Page::Text(lines)])
}

/// A PDF with the given pages, in order.
pub fn pdf_pages(pages: &[Page]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids = Vec::new();
    for page in pages {
        let mut page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Resources" => resources_id,
        };
        match page {
            Page::Text(lines) => {
                let content_id = doc.add_object(Stream::new(dictionary! {}, text_content(lines)));
                page_dict.set("Contents", content_id);
            }
            Page::Blank => {}
            Page::Garbled => {
                let content_id = doc.add_object(Stream::new(
                    dictionary! {},
                    b"BT /F1 12 Tf (never closed Tj ET <zz".to_vec(),
                ));
                page_dict.set("Contents", content_id);
            }
        }
        let page_id = doc.add_object(page_dict);
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

fn text_content(lines: &[&str]) -> Vec<u8> {
    let mut operations = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
        operations.push(Operation::new(
            "Td",
            vec![72.into(), (720 - 16 * i as i64).into()],
        ));
        operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        operations.push(Operation::new("ET", vec![]));
    }
    Content { operations }.encode().unwrap()
}
