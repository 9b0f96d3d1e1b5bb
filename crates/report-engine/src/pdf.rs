//! Single-page PDF output
//!
//! The page is built directly with lopdf: one Helvetica (WinAnsiEncoding)
//! font resource and one content stream. The content stream scales canvas
//! units down to PDF points with a `cm` operator, so draw instructions keep
//! their canvas coordinates (origin top-left, y downward) and only the
//! baseline is flipped.

use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, StringFormat};

use crate::error::ReportError;
use crate::layout::{Canvas, PageLayout};
use crate::metrics::HelveticaMetrics;

const POINTS_PER_INCH: f64 = 72.0;
const FONT_RESOURCE: &[u8] = b"F1";

/// Render a laid-out page to PDF bytes
///
/// `font_size` is in canvas units; `dpi` maps canvas units to inches.
pub fn render_pdf(
    layout: &PageLayout,
    canvas: &Canvas,
    font_size: f64,
    dpi: f64,
) -> Result<Vec<u8>, ReportError> {
    let scale = POINTS_PER_INCH / dpi;
    let ascent = HelveticaMetrics::new(font_size).ascent();

    let mut operations = vec![
        Operation::new("q", vec![]),
        Operation::new(
            "cm",
            vec![
                real(scale),
                real(0.0),
                real(0.0),
                real(scale),
                real(0.0),
                real(0.0),
            ],
        ),
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(FONT_RESOURCE.to_vec()), real(font_size)],
        ),
    ];

    for instruction in &layout.instructions {
        let baseline = canvas.height - instruction.y - ascent;
        operations.push(Operation::new(
            "Tm",
            vec![
                real(1.0),
                real(0.0),
                real(0.0),
                real(1.0),
                real(instruction.x),
                real(baseline),
            ],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(&instruction.text),
                StringFormat::Hexadecimal,
            )],
        ));
    }

    operations.push(Operation::new("ET", vec![]));
    operations.push(Operation::new("Q", vec![]));

    let content = Content { operations }
        .encode()
        .map_err(|e| ReportError::ContentError(e.to_string()))?;

    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
        ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
    ]));
    let resources = Dictionary::from_iter(vec![(
        "Font",
        Object::Dictionary(Dictionary::from_iter(vec![(
            "F1",
            Object::Reference(font_id),
        )])),
    )]);

    let content_id = doc.add_object(Stream::new(Dictionary::new(), content));
    let page_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Page".to_vec())),
        ("Parent", Object::Reference(pages_id)),
        (
            "MediaBox",
            Object::Array(vec![
                Object::Integer(0),
                Object::Integer(0),
                real(canvas.width * scale),
                real(canvas.height * scale),
            ]),
        ),
        ("Resources", Object::Dictionary(resources)),
        ("Contents", Object::Reference(content_id)),
    ]));

    let pages = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Count", Object::Integer(1)),
        ("Kids", Object::Array(vec![Object::Reference(page_id)])),
    ]);
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| ReportError::OperationError(format!("Save failed: {}", e)))?;

    tracing::debug!(
        "Rendered PDF page with {} draw instructions ({} bytes)",
        layout.instructions.len(),
        buffer.len()
    );
    Ok(buffer)
}

fn real(value: f64) -> Object {
    Object::Real(value as _)
}

/// Encode text for a WinAnsiEncoding font
///
/// Characters outside the code page become `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\u{A0}'..='\u{FF}' => c as u8,
            '€' => 0x80,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}
