//! Builds small statement PDFs for the integration tests
//!
//! Text is set in Courier at 10pt, so every character advances exactly 6pt.
//! Coordinates are given top-down to match how statements are read. The font
//! carries a ToUnicode map, so `₹` can be written into page text.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

const PAGE_WIDTH: i64 = 595;
const PAGE_HEIGHT: i64 = 842;

/// Character code the fixture font maps to U+20B9
const RUPEE_CODE: u8 = 0x80;

const TO_UNICODE: &str = "/CIDInit /ProcSet findresource begin
12 dict begin
begincmap
/CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def
/CMapName /Adobe-Identity-UCS def
/CMapType 2 def
1 begincodespacerange
<00> <FF>
endcodespacerange
1 beginbfrange
<20> <7E> <0020>
endbfrange
1 beginbfchar
<80> <20B9>
endbfchar
endcmap
CMapName currentdict /CMapResource defineresource pop
end
end
";

#[derive(Default)]
pub struct PageSpec {
    texts: Vec<(i64, i64, String)>,
    lines: Vec<(i64, i64, i64, i64)>,
}

impl PageSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `text` with its left edge at `x` and baseline at `y`
    pub fn text(mut self, x: i64, y: i64, text: &str) -> Self {
        self.texts.push((x, y, text.to_string()));
        self
    }

    /// Place a row of cells on one baseline
    pub fn row(mut self, y: i64, cells: &[(i64, &str)]) -> Self {
        for (x, text) in cells {
            self.texts.push((*x, y, text.to_string()));
        }
        self
    }

    /// Draw a vertical line at `x` from `top` to `bottom`
    pub fn ruling(mut self, x: i64, top: i64, bottom: i64) -> Self {
        self.lines.push((x, top, x, bottom));
        self
    }

    /// Draw a full grid: a vertical line at every x and a horizontal line at
    /// every y, each spanning the whole grid
    pub fn grid(mut self, xs: &[i64], ys: &[i64]) -> Self {
        let (Some(&left), Some(&right)) = (xs.first(), xs.last()) else {
            return self;
        };
        let (Some(&top), Some(&bottom)) = (ys.first(), ys.last()) else {
            return self;
        };
        for x in xs {
            self.lines.push((*x, top, *x, bottom));
        }
        for y in ys {
            self.lines.push((left, *y, right, *y));
        }
        self
    }

    fn operations(&self) -> Vec<Operation> {
        let mut ops = Vec::new();
        for (x0, y0, x1, y1) in &self.lines {
            ops.push(Operation::new("w", vec![1.into()]));
            ops.push(Operation::new("m", vec![(*x0).into(), (PAGE_HEIGHT - y0).into()]));
            ops.push(Operation::new("l", vec![(*x1).into(), (PAGE_HEIGHT - y1).into()]));
            ops.push(Operation::new("S", vec![]));
        }
        for (x, y, text) in &self.texts {
            ops.push(Operation::new("BT", vec![]));
            ops.push(Operation::new("Tf", vec!["F1".into(), 10.into()]));
            ops.push(Operation::new("Td", vec![(*x).into(), (PAGE_HEIGHT - y).into()]));
            ops.push(Operation::new("Tj", vec![encode(text)]));
            ops.push(Operation::new("ET", vec![]));
        }
        ops
    }
}

/// Single-byte codes for the fixture font: ASCII as is, `₹` as [`RUPEE_CODE`]
fn encode(text: &str) -> Object {
    let bytes = text
        .chars()
        .map(|c| match c {
            '₹' => RUPEE_CODE,
            c if c.is_ascii() => c as u8,
            c => panic!("fixture font cannot render {:?}", c),
        })
        .collect();
    Object::String(bytes, StringFormat::Literal)
}

/// Serialize `pages` into a PDF document
pub fn build_pdf(pages: &[PageSpec]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id: ObjectId = doc.new_object_id();
    let to_unicode_id = doc.add_object(Stream::new(dictionary! {}, TO_UNICODE.as_bytes().to_vec()));
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
        "Encoding" => "WinAnsiEncoding",
        "FirstChar" => 32,
        "LastChar" => i64::from(RUPEE_CODE),
        "Widths" => vec![Object::Integer(600); usize::from(RUPEE_CODE) - 31],
        "ToUnicode" => to_unicode_id,
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page in pages {
        let content = Content {
            operations: page.operations(),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}
